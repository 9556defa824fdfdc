#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use tenure_portal::domain::application::{Application, CommentPeriod};
use tenure_portal::domain::types::{ClFileNumber, DispositionId, RecordId};

/// A representative in-review application with every display field set.
pub fn application(id: &str) -> Application {
    Application {
        id: RecordId::new(id).unwrap(),
        disposition: DispositionId::new(9_340_125).ok(),
        cl_file: ClFileNumber::new(60_742).ok(),
        client: Some("ACME FORESTRY LTD".to_string()),
        name: Some("ACME FORESTRY LTD".to_string()),
        purpose: Some("AGRICULTURE".to_string()),
        subpurpose: Some("EXTENSIVE".to_string()),
        status: Some("ACCEPTED".to_string()),
        reason: None,
        business_unit: Some("SK - LAND MGMNT - SKEENA FIELD OFFICE".to_string()),
        location: Some("NEAR SMITHERS".to_string()),
        area_hectares: Some(12.5),
        publish_date: Utc.with_ymd_and_hms(2018, 3, 1, 0, 0, 0).single(),
        current_period: Some(CommentPeriod {
            start: Utc.with_ymd_and_hms(2018, 3, 1, 0, 0, 0).single(),
            end: Utc.with_ymd_and_hms(2018, 4, 1, 0, 0, 0).single(),
        }),
    }
}

pub fn applications(count: usize) -> Vec<Application> {
    (1..=count)
        .map(|index| application(&format!("app-{index}")))
        .collect()
}
