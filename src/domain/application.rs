use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::codes::{self, CodeType, comment};
use crate::domain::types::{ClFileNumber, DispositionId, RecordId};

/// Display value used whenever a taxonomy lookup fails to resolve.
pub const UNKNOWN_TEXT: &str = "Unknown";

/// A land-tenure application as served by the upstream registry search
/// service, decoded and validated at the repository boundary.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Application {
    pub id: RecordId,
    /// Tantalis disposition transaction identifier.
    pub disposition: Option<DispositionId>,
    /// Crown Lands file number.
    pub cl_file: Option<ClFileNumber>,
    /// Applicant (client) name.
    pub client: Option<String>,
    pub name: Option<String>,
    /// Raw upstream purpose and subpurpose.
    pub purpose: Option<String>,
    pub subpurpose: Option<String>,
    /// Raw upstream status value.
    pub status: Option<String>,
    /// Raw upstream status reason, when one was recorded.
    pub reason: Option<String>,
    /// Land management office the application is filed with.
    pub business_unit: Option<String>,
    pub location: Option<String>,
    pub area_hectares: Option<f64>,
    pub publish_date: Option<DateTime<Utc>>,
    /// The comment period currently attached to the application, if any.
    pub current_period: Option<CommentPeriod>,
}

impl Application {
    /// Short public-facing status. An amendment reason takes precedence over
    /// the raw status, so abandoned-as-amendment records read as decisions.
    pub fn public_status_short(&self) -> &'static str {
        self.public_status_group()
            .map(|group| group.text_short)
            .unwrap_or(UNKNOWN_TEXT)
    }

    /// Long public-facing status, same resolution rules as
    /// [`Application::public_status_short`].
    pub fn public_status_long(&self) -> &'static str {
        self.public_status_group()
            .map(|group| group.text_long)
            .unwrap_or(UNKNOWN_TEXT)
    }

    fn public_status_group(&self) -> Option<&'static codes::CodeGroup> {
        if let Some(reason) = self.reason.as_deref()
            && let Some(group) = codes::find_code_group(CodeType::Reason, reason)
        {
            return Some(group);
        }
        self.status.as_deref().and_then(codes::group_for_raw_status)
    }

    /// Short name of the land management region the application belongs to.
    pub fn region_short(&self) -> &'static str {
        self.business_unit
            .as_deref()
            .and_then(|unit| codes::text_short(CodeType::Region, unit))
            .unwrap_or(UNKNOWN_TEXT)
    }

    /// Comment period status at `now` (one of the COMMENT taxonomy codes).
    pub fn comment_status(&self, now: DateTime<Utc>) -> &'static str {
        match &self.current_period {
            Some(period) => period.status_at(now),
            None => comment::NOT_STARTED,
        }
    }
}

/// A window during which the public may comment on an application.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CommentPeriod {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl CommentPeriod {
    /// Status of this period at `now`: not started before `start`, closed
    /// after `end`, open in between. A period with no start date has not
    /// started; one with no end date stays open once started.
    pub fn status_at(&self, now: DateTime<Utc>) -> &'static str {
        match self.start {
            Some(start) if now < start => comment::NOT_STARTED,
            Some(_) => match self.end {
                Some(end) if now > end => comment::CLOSED,
                _ => comment::OPEN,
            },
            None => comment::NOT_STARTED,
        }
    }
}
