//! Wire shape of application records served by the registry search service.
//!
//! Responses are decoded into these DTOs exactly once, at the repository
//! boundary, then converted into validated domain records. The taxonomy
//! lookups and display code never see raw JSON.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::application::{Application, CommentPeriod};
use crate::domain::types::{ClFileNumber, DispositionId, RecordId, TypeConstraintError};

#[derive(Clone, Debug, Deserialize)]
pub struct ApplicationDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "tantalisID")]
    pub tantalis_id: Option<i64>,
    pub cl_file: Option<i64>,
    pub client: Option<String>,
    pub name: Option<String>,
    pub purpose: Option<String>,
    pub subpurpose: Option<String>,
    pub status: Option<String>,
    pub reason: Option<String>,
    #[serde(rename = "businessUnit")]
    pub business_unit: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "areaHectares")]
    pub area_hectares: Option<f64>,
    #[serde(rename = "publishDate")]
    pub publish_date: Option<DateTime<Utc>>,
    #[serde(rename = "currentPeriod")]
    pub current_period: Option<CommentPeriodDto>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CommentPeriodDto {
    #[serde(rename = "startDate")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(rename = "endDate")]
    pub end_date: Option<DateTime<Utc>>,
}

impl TryFrom<ApplicationDto> for Application {
    type Error = TypeConstraintError;

    fn try_from(dto: ApplicationDto) -> Result<Self, Self::Error> {
        Ok(Application {
            id: RecordId::new(dto.id)?,
            // Upstream occasionally carries zero placeholders for records
            // predating the registry; treat those as absent.
            disposition: dto.tantalis_id.and_then(|id| DispositionId::new(id).ok()),
            cl_file: dto.cl_file.and_then(|number| ClFileNumber::new(number).ok()),
            client: dto.client,
            name: dto.name,
            purpose: dto.purpose,
            subpurpose: dto.subpurpose,
            status: dto.status,
            reason: dto.reason,
            business_unit: dto.business_unit,
            location: dto.location,
            area_hectares: dto.area_hectares,
            publish_date: dto.publish_date,
            current_period: dto.current_period.map(Into::into),
        })
    }
}

impl From<CommentPeriodDto> for CommentPeriod {
    fn from(dto: CommentPeriodDto) -> Self {
        CommentPeriod {
            start: dto.start_date,
            end: dto.end_date,
        }
    }
}
