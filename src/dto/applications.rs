//! Query-string mirror of the list state and the view model for the
//! applications page.
//!
//! The filter selection lives in the URL so searches are shareable and
//! bookmarkable: multi-value fields are pipe-delimited, the sort column
//! carries a `+`/`-` direction marker, and absent fields mean "no
//! constraint". Encoding and decoding are lossless for values without
//! embedded pipes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::application::Application;
use crate::domain::codes::{self, CodeType};
use crate::domain::filter::{FilterSelection, Sorting};
use crate::services::applications::ApplicationList;

const MULTI_VALUE_DELIMITER: char = '|';

/// URL query parameters accepted (and emitted) by the applications page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(rename = "sortBy", skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Pipe-delimited public purpose codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// Pipe-delimited public status codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant: Option<String>,
}

impl ApplicationsQuery {
    /// Mirrors a filter selection (and page number) into query parameters.
    pub fn from_selection(filters: &FilterSelection, page: usize) -> Self {
        Self {
            page: Some(page),
            sort_by: filters.sorting.sort_by(),
            purpose: join_multi(&filters.purpose_codes),
            status: join_multi(&filters.status_codes),
            region: non_empty(&filters.region_code),
            applicant: non_empty(&filters.applicant),
        }
    }

    /// Decodes the query parameters back into a filter selection.
    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            purpose_codes: split_multi(self.purpose.as_deref()),
            status_codes: split_multi(self.status.as_deref()),
            region_code: self.region.clone().unwrap_or_default(),
            applicant: self.applicant.clone().unwrap_or_default(),
            sorting: self
                .sort_by
                .as_deref()
                .map(Sorting::from_sort_by)
                .unwrap_or_default(),
        }
    }

    pub fn page(&self) -> usize {
        self.page.unwrap_or(1)
    }

    /// Encoded query string for links to this exact state.
    pub fn query_string(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_default()
    }

    /// Encoded query string with the page parameter stripped, for pager
    /// links that append their own page number.
    pub fn query_string_without_page(&self) -> String {
        let mut query = self.clone();
        query.page = None;
        query.query_string()
    }
}

fn join_multi(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(&MULTI_VALUE_DELIMITER.to_string()))
    }
}

fn split_multi(value: Option<&str>) -> Vec<String> {
    value
        .map(|joined| {
            joined
                .split(MULTI_VALUE_DELIMITER)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// One row of the applications table, fully resolved for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApplicationRow {
    pub id: String,
    pub cl_file: String,
    pub disposition: String,
    pub applicant: String,
    pub purpose: String,
    pub status: String,
    pub region: String,
    pub comment_status: String,
    pub location: String,
    pub published: String,
}

impl ApplicationRow {
    pub fn from_application(application: &Application, now: DateTime<Utc>) -> Self {
        let purpose = application
            .purpose
            .as_deref()
            .map(|raw| {
                codes::text_short(CodeType::Purpose, raw)
                    .unwrap_or(raw)
                    .to_string()
            })
            .unwrap_or_default();
        let comment_status = codes::text_long(CodeType::Comment, application.comment_status(now))
            .unwrap_or_default()
            .to_string();

        Self {
            id: application.id.to_string(),
            cl_file: application
                .cl_file
                .map(|file| file.padded())
                .unwrap_or_default(),
            disposition: application
                .disposition
                .map(|id| id.to_string())
                .unwrap_or_default(),
            applicant: application.client.clone().unwrap_or_default(),
            purpose,
            status: application.public_status_short().to_string(),
            region: application.region_short().to_string(),
            comment_status,
            location: application.location.clone().unwrap_or_default(),
            published: application
                .publish_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Everything the applications page template needs.
#[derive(Clone, Debug, Serialize)]
pub struct ApplicationsPageData {
    pub rows: Vec<ApplicationRow>,
    pub total_items: usize,
    pub current_page: usize,
    pub page_count: usize,
    /// Human-readable range summary from the pagination state.
    pub message: String,
    /// Windowed pager entries; `None` marks an elided gap.
    pub page_links: Vec<Option<usize>>,
    pub query: ApplicationsQuery,
    pub query_string: String,
    pub link_query: String,
}

impl ApplicationsPageData {
    pub fn from_list(list: &ApplicationList, now: DateTime<Utc>) -> Self {
        let pagination = list.pagination();
        let query = ApplicationsQuery::from_selection(list.filters(), pagination.current_page());
        Self {
            rows: list
                .applications()
                .iter()
                .map(|application| ApplicationRow::from_application(application, now))
                .collect(),
            total_items: pagination.total_items(),
            current_page: pagination.current_page(),
            page_count: pagination.page_count(),
            message: pagination.message().to_string(),
            page_links: pagination.page_links(),
            query_string: query.query_string(),
            link_query: query.query_string_without_page(),
            query,
        }
    }
}
