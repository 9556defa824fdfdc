//! HTTP implementation of [`ApplicationReader`] over the registry's REST
//! search endpoint.
//!
//! Wire contract: `field[eq]=a|b|c` for multi-value equality, bare
//! `field=value` for scalar equality, `field[ne]=...` for exclusion,
//! `field[text]=...` for text search; `pageNum` is zero-based; counts come
//! back in the `x-total-count` header of a HEAD request. Requests for the
//! individual parameter sets of one search are issued concurrently and the
//! pages flattened in set order.

use futures::future::try_join_all;

use crate::domain::application::Application;
use crate::models::application::ApplicationDto;
use crate::repository::ApplicationReader;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::search::{QueryModifier, QueryParamSet};

const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Client for the registry search service.
#[derive(Clone)]
pub struct HttpApplicationRepository {
    client: reqwest::Client,
    api_url: String,
}

impl HttpApplicationRepository {
    /// * `api_url` - Base URL of the search service, e.g. `http://host:3000/api`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }

    /// Reuses an existing [`reqwest::Client`] for connection pooling.
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    async fn fetch_page(&self, set: &QueryParamSet) -> RepositoryResult<Vec<Application>> {
        let mut query = encode_query(set);
        // The list always displays the current comment period alongside each
        // application, so ask the upstream to attach it.
        query.push(("getCurrentPeriod".to_string(), "true".to_string()));

        let response = self
            .client
            .get(format!("{}/application", self.api_url))
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RepositoryError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let dtos: Vec<ApplicationDto> = response.json().await?;
        dtos.into_iter()
            .map(|dto| {
                Application::try_from(dto)
                    .map_err(|err| RepositoryError::InvalidPayload(err.to_string()))
            })
            .collect()
    }

    async fn fetch_count(&self, set: &QueryParamSet) -> RepositoryResult<usize> {
        let query = encode_query(set);

        let response = self
            .client
            .head(format!("{}/application", self.api_url))
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::UpstreamStatus {
                status: status.as_u16(),
                body: String::new(),
            });
        }

        let header = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .ok_or_else(|| {
                RepositoryError::InvalidPayload(format!("missing {TOTAL_COUNT_HEADER} header"))
            })?;
        header
            .to_str()
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .ok_or_else(|| {
                RepositoryError::InvalidPayload(format!("unreadable {TOTAL_COUNT_HEADER} header"))
            })
    }
}

impl ApplicationReader for HttpApplicationRepository {
    async fn search(&self, sets: &[QueryParamSet]) -> RepositoryResult<Vec<Application>> {
        let pages = try_join_all(sets.iter().map(|set| self.fetch_page(set))).await?;
        Ok(pages.into_iter().flatten().collect())
    }

    async fn count(&self, sets: &[QueryParamSet]) -> RepositoryResult<usize> {
        let counts = try_join_all(sets.iter().map(|set| self.fetch_count(set))).await?;
        Ok(counts.into_iter().sum())
    }
}

/// Encodes a parameter set into upstream query pairs. Filters with no values
/// are omitted; the upstream treats absence as match-any.
pub fn encode_query(set: &QueryParamSet) -> Vec<(String, String)> {
    let mut pairs = vec![("isDeleted".to_string(), set.is_deleted.to_string())];
    if let Some(page_num) = set.page_num {
        pairs.push(("pageNum".to_string(), page_num.to_string()));
    }
    if let Some(page_size) = set.page_size {
        pairs.push(("pageSize".to_string(), page_size.to_string()));
    }
    if let Some(sort_by) = &set.sort_by {
        pairs.push(("sortBy".to_string(), sort_by.clone()));
    }

    for (name, filter) in set.filters() {
        if filter.values.is_empty() {
            continue;
        }
        match filter.modifier {
            QueryModifier::Equal if filter.values.len() == 1 => {
                pairs.push((name.to_string(), filter.values[0].clone()));
            }
            QueryModifier::Equal => {
                pairs.push((format!("{name}[eq]"), filter.values.join("|")));
            }
            QueryModifier::NotEqual => {
                pairs.push((format!("{name}[ne]"), filter.values.join("|")));
            }
            QueryModifier::Text => {
                pairs.push((format!("{name}[text]"), filter.values.join("|")));
            }
        }
    }
    pairs
}
