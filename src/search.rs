//! Upstream search request construction.
//!
//! A [`QueryParamSet`] is one fully bound request against the registry search
//! endpoint: a conjunction of filter fields plus pagination and sorting. A
//! filter selection expands into one or more sets whose union is the desired
//! result, because some public statuses have no single upstream predicate —
//! amendment outcomes are encoded upstream as "abandoned" with a reason code
//! and need their own sets.

use crate::domain::codes::{self, CodeType, reason, status};
use crate::domain::filter::FilterSelection;
use crate::pagination::PaginationState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryModifier {
    Equal,
    NotEqual,
    Text,
}

/// One filter field of a query parameter set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryFilter {
    pub values: Vec<String>,
    pub modifier: QueryModifier,
}

impl QueryFilter {
    pub fn equal(values: Vec<String>) -> Self {
        Self {
            values,
            modifier: QueryModifier::Equal,
        }
    }

    pub fn equal_one(value: impl Into<String>) -> Self {
        Self::equal(vec![value.into()])
    }

    pub fn not_equal(values: Vec<String>) -> Self {
        Self {
            values,
            modifier: QueryModifier::NotEqual,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self {
            values: vec![value.into()],
            modifier: QueryModifier::Text,
        }
    }
}

/// One fully-specified request to the upstream search endpoint. Constructed
/// fresh for every search or export action and discarded afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParamSet {
    pub is_deleted: bool,
    /// Zero-based page index; stripped for unbounded (export) requests.
    pub page_num: Option<usize>,
    pub page_size: Option<usize>,
    /// Direction marker (`+`/`-`) concatenated with the column name.
    pub sort_by: Option<String>,
    pub purpose: Option<QueryFilter>,
    pub status: Option<QueryFilter>,
    pub reason: Option<QueryFilter>,
    pub business_unit: Option<QueryFilter>,
    pub client: Option<QueryFilter>,
    // Passthrough fields used by collaborating pages; not set by the list
    // builder but carried so one set type covers every caller.
    pub subtype: Option<QueryFilter>,
    pub agency: Option<QueryFilter>,
    pub tenure_stage: Option<QueryFilter>,
    pub area_hectares: Option<QueryFilter>,
    pub status_history_effective_date: Option<QueryFilter>,
    pub centroid: Option<QueryFilter>,
    pub publish_date: Option<QueryFilter>,
    pub cl_file: Option<QueryFilter>,
    pub tantalis_id: Option<QueryFilter>,
    pub cp_start: Option<QueryFilter>,
    pub cp_end: Option<QueryFilter>,
}

impl QueryParamSet {
    /// Removes the page bounds, turning this into an unbounded request that
    /// fetches the entire matching set.
    pub fn strip_pagination(&mut self) {
        self.page_num = None;
        self.page_size = None;
    }

    /// The populated filter fields paired with their upstream wire names.
    pub fn filters(&self) -> Vec<(&'static str, &QueryFilter)> {
        [
            ("purpose", self.purpose.as_ref()),
            ("status", self.status.as_ref()),
            ("reason", self.reason.as_ref()),
            ("businessUnit", self.business_unit.as_ref()),
            ("client", self.client.as_ref()),
            ("subtype", self.subtype.as_ref()),
            ("agency", self.agency.as_ref()),
            ("tenureStage", self.tenure_stage.as_ref()),
            ("areaHectares", self.area_hectares.as_ref()),
            (
                "statusHistoryEffectiveDate",
                self.status_history_effective_date.as_ref(),
            ),
            ("centroid", self.centroid.as_ref()),
            ("publishDate", self.publish_date.as_ref()),
            ("cl_file", self.cl_file.as_ref()),
            ("tantalisID", self.tantalis_id.as_ref()),
            ("cpStart", self.cp_start.as_ref()),
            ("cpEnd", self.cp_end.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, filter)| filter.map(|filter| (name, filter)))
        .collect()
    }
}

/// Expands the current filter selection into the query parameter sets whose
/// union satisfies it. Output order follows rule evaluation order and is
/// stable for a given input.
pub fn build_query_param_sets(
    filters: &FilterSelection,
    pagination: &PaginationState,
) -> Vec<QueryParamSet> {
    let basic = basic_query_params(filters, pagination);

    if filters.status_codes.is_empty() {
        return vec![basic];
    }

    let abandoned =
        codes::mapped_codes(CodeType::Status, status::ABANDONED).unwrap_or_default();

    let mut sets = Vec::new();
    for selected in &filters.status_codes {
        let Some(group) = codes::find_code_group(CodeType::Status, selected) else {
            // Unresolvable selections are dropped rather than failing the
            // whole search.
            continue;
        };
        match group.code {
            // Plain abandoned records only: amendment outcomes carry an
            // abandoned status upstream but are really decisions.
            status::ABANDONED => {
                let mut set = with_status(&basic, group.mapped_codes);
                set.reason = Some(QueryFilter::not_equal(vec![
                    reason::AMENDMENT_APPROVED.to_string(),
                    reason::AMENDMENT_NOT_APPROVED.to_string(),
                ]));
                sets.push(set);
            }
            status::DECISION_APPROVED => {
                sets.push(with_status(&basic, group.mapped_codes));
                let mut amended = with_status(&basic, abandoned);
                amended.reason =
                    Some(QueryFilter::equal_one(reason::AMENDMENT_APPROVED));
                sets.push(amended);
            }
            status::DECISION_NOT_APPROVED => {
                sets.push(with_status(&basic, group.mapped_codes));
                let mut amended = with_status(&basic, abandoned);
                amended.reason =
                    Some(QueryFilter::equal_one(reason::AMENDMENT_NOT_APPROVED));
                sets.push(amended);
            }
            _ => sets.push(with_status(&basic, group.mapped_codes)),
        }
    }
    sets
}

fn with_status(basic: &QueryParamSet, mapped: &[&str]) -> QueryParamSet {
    let mut set = basic.clone();
    set.status = Some(QueryFilter::equal(
        mapped.iter().map(|code| code.to_string()).collect(),
    ));
    set
}

fn basic_query_params(filters: &FilterSelection, pagination: &PaginationState) -> QueryParamSet {
    let purposes = filters
        .purpose_codes
        .iter()
        .filter_map(|code| codes::mapped_codes(CodeType::Purpose, code))
        .flat_map(|mapped| mapped.iter().map(|code| code.to_string()))
        .collect();

    let mut set = QueryParamSet {
        is_deleted: false,
        page_num: Some(pagination.current_page().saturating_sub(1)),
        page_size: Some(pagination.items_per_page()),
        sort_by: filters.sorting.sort_by(),
        // An empty value list means "no purpose constraint"; the upstream
        // service treats it as match-any.
        purpose: Some(QueryFilter::equal(purposes)),
        ..QueryParamSet::default()
    };
    if let Some(region) = codes::code(CodeType::Region, &filters.region_code) {
        set.business_unit = Some(QueryFilter::equal_one(region));
    }
    if !filters.applicant.is_empty() {
        set.client = Some(QueryFilter::text(filters.applicant.as_str()));
    }
    set
}
