use serde_json::json;
use tenure_portal::domain::application::Application;
use tenure_portal::models::application::ApplicationDto;
use tenure_portal::repository::ApplicationReader;
use tenure_portal::repository::http::encode_query;
use tenure_portal::repository::test::TestApplicationRepository;
use tenure_portal::search::{QueryFilter, QueryParamSet};

mod common;

fn pair<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

#[test]
fn test_encode_query_scalar_and_page_fields() {
    let set = QueryParamSet {
        page_num: Some(6),
        page_size: Some(17),
        sort_by: Some("-cl_file".to_string()),
        ..QueryParamSet::default()
    };
    let pairs = encode_query(&set);

    assert_eq!(pair(&pairs, "isDeleted"), Some("false"));
    assert_eq!(pair(&pairs, "pageNum"), Some("6"));
    assert_eq!(pair(&pairs, "pageSize"), Some("17"));
    assert_eq!(pair(&pairs, "sortBy"), Some("-cl_file"));
}

#[test]
fn test_encode_query_modifiers() {
    let set = QueryParamSet {
        status: Some(QueryFilter::equal(vec![
            "OFFER ACCEPTED".to_string(),
            "OFFERED".to_string(),
        ])),
        business_unit: Some(QueryFilter::equal_one(
            "SK - LAND MGMNT - SKEENA FIELD OFFICE",
        )),
        reason: Some(QueryFilter::not_equal(vec![
            "AMENDMENT APPROVED - APPLICATION".to_string(),
            "AMENDMENT NOT APPROVED - APPLICATION".to_string(),
        ])),
        client: Some(QueryFilter::text("smith")),
        ..QueryParamSet::default()
    };
    let pairs = encode_query(&set);

    // Multi-value equality uses the bracketed form, scalar equality is bare.
    assert_eq!(pair(&pairs, "status[eq]"), Some("OFFER ACCEPTED|OFFERED"));
    assert_eq!(
        pair(&pairs, "businessUnit"),
        Some("SK - LAND MGMNT - SKEENA FIELD OFFICE")
    );
    assert_eq!(
        pair(&pairs, "reason[ne]"),
        Some("AMENDMENT APPROVED - APPLICATION|AMENDMENT NOT APPROVED - APPLICATION")
    );
    assert_eq!(pair(&pairs, "client[text]"), Some("smith"));
}

#[test]
fn test_encode_query_omits_empty_value_lists() {
    let set = QueryParamSet {
        purpose: Some(QueryFilter::equal(vec![])),
        ..QueryParamSet::default()
    };
    let pairs = encode_query(&set);
    assert!(!pairs.iter().any(|(key, _)| key.starts_with("purpose")));
}

#[test]
fn test_application_dto_decodes_upstream_payload() {
    let dto: ApplicationDto = serde_json::from_value(json!({
        "_id": "5c33e6a0e4b0bc7d0c123456",
        "tantalisID": 9340125,
        "cl_file": 60742,
        "client": "ACME FORESTRY LTD",
        "purpose": "AGRICULTURE",
        "subpurpose": "EXTENSIVE",
        "status": "ACCEPTED",
        "businessUnit": "SK - LAND MGMNT - SKEENA FIELD OFFICE",
        "areaHectares": 12.5,
        "publishDate": "2018-03-01T00:00:00Z",
        "currentPeriod": {
            "startDate": "2018-03-01T00:00:00Z",
            "endDate": "2018-04-01T00:00:00Z"
        }
    }))
    .unwrap();

    let application = Application::try_from(dto).unwrap();
    assert_eq!(application.id.as_str(), "5c33e6a0e4b0bc7d0c123456");
    assert_eq!(application.disposition.map(i64::from), Some(9_340_125));
    assert_eq!(application.cl_file.map(|file| file.padded()).as_deref(), Some("0060742"));
    assert_eq!(application.status.as_deref(), Some("ACCEPTED"));
    assert!(application.current_period.is_some());
    assert!(application.reason.is_none());
}

#[test]
fn test_application_dto_zero_ids_become_absent() {
    let dto: ApplicationDto = serde_json::from_value(json!({
        "_id": "abc",
        "tantalisID": 0,
        "cl_file": 0
    }))
    .unwrap();

    let application = Application::try_from(dto).unwrap();
    assert!(application.disposition.is_none());
    assert!(application.cl_file.is_none());
}

#[test]
fn test_application_dto_blank_id_is_rejected() {
    let dto: ApplicationDto = serde_json::from_value(json!({ "_id": "  " })).unwrap();
    assert!(Application::try_from(dto).is_err());
}

#[actix_web::test]
async fn test_in_memory_repository_honours_page_bounds() {
    let repo = TestApplicationRepository::new(common::applications(30));
    let sets = vec![QueryParamSet {
        page_num: Some(1),
        page_size: Some(10),
        ..QueryParamSet::default()
    }];

    let page = repo.search(&sets).await.unwrap();
    assert_eq!(page.len(), 10);
    assert_eq!(page[0].id.as_str(), "app-11");

    let total = repo.count(&sets).await.unwrap();
    assert_eq!(total, 30);
}
