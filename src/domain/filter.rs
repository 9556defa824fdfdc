use serde::{Deserialize, Serialize};

/// Column/direction pair for list sorting. A direction of zero (or an empty
/// column) means unsorted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorting {
    pub column: String,
    pub direction: i8,
}

impl Sorting {
    pub fn new(column: impl Into<String>, direction: i8) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    /// Wire form for the upstream `sortBy` parameter: direction marker
    /// followed by the column name, or `None` when no sort is selected.
    pub fn sort_by(&self) -> Option<String> {
        if self.column.is_empty() || self.direction == 0 {
            return None;
        }
        let marker = if self.direction > 0 { '+' } else { '-' };
        Some(format!("{marker}{}", self.column))
    }

    /// Parses a `sortBy` wire value back into a sorting selection. Values
    /// without a leading marker sort ascending; a bare marker is unsorted.
    pub fn from_sort_by(value: &str) -> Self {
        let (direction, column) = match value.strip_prefix('+') {
            Some(rest) => (1, rest),
            None => match value.strip_prefix('-') {
                Some(rest) => (-1, rest),
                None => (1, value),
            },
        };
        if column.is_empty() {
            return Self::default();
        }
        Self::new(column, direction)
    }
}

/// The filters a user has selected on the applications list. Held by the
/// orchestrator and mirrored into the shareable URL query string; never
/// persisted server-side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Selected public purpose codes.
    pub purpose_codes: Vec<String>,
    /// Selected public status codes.
    pub status_codes: Vec<String>,
    /// Selected region code, empty for no region constraint.
    pub region_code: String,
    /// Applicant name search text, empty for no constraint.
    pub applicant: String,
    pub sorting: Sorting,
}
