use tenure_portal::dto::applications::ApplicationsQuery;
use tenure_portal::repository::test::TestApplicationRepository;
use tenure_portal::services::applications::{
    ApplicationList, export_applications_csv, load_applications_page,
};

mod common;

#[actix_web::test]
async fn test_get_applications_updates_rows_and_total_together() {
    let repo = TestApplicationRepository::new(common::applications(40));
    let mut list = ApplicationList::new();

    list.get_applications(&repo).await.unwrap();

    assert_eq!(list.applications().len(), 25);
    assert_eq!(list.pagination().total_items(), 40);
    assert_eq!(list.pagination().page_count(), 2);
    assert_eq!(
        list.pagination().message(),
        "Displaying 1 - 25 of 40 applications"
    );
    assert!(!list.is_searching());
}

#[actix_web::test]
async fn test_changed_filter_returns_to_page_one() {
    let repo = TestApplicationRepository::new(common::applications(40));
    let mut list = ApplicationList::new();

    list.get_applications(&repo).await.unwrap();
    list.set_page(2);
    assert_eq!(list.pagination().current_page(), 2);

    list.set_applicant_filter(Some("ACME".to_string()));
    assert!(list.filter_changed());

    list.get_applications(&repo).await.unwrap();
    assert_eq!(list.pagination().current_page(), 1);
    assert!(!list.filter_changed());
}

#[test]
fn test_reset_pagination_clears_filter_changed() {
    let mut list = ApplicationList::new();
    list.set_status_filters(Some(vec!["ABANDONED".to_string()]));
    assert!(list.filter_changed());

    list.reset_pagination();
    assert_eq!(list.pagination().current_page(), 1);
    assert!(!list.filter_changed());
}

#[test]
fn test_filter_setters_normalize_absent_input() {
    let mut list = ApplicationList::new();
    list.set_purpose_filters(None);
    list.set_status_filters(None);
    list.set_region_filter(None);
    list.set_applicant_filter(None);

    assert!(list.filters().purpose_codes.is_empty());
    assert!(list.filters().status_codes.is_empty());
    assert!(list.filters().region_code.is_empty());
    assert!(list.filters().applicant.is_empty());
    assert!(list.filter_changed());
}

#[actix_web::test]
async fn test_fetch_failure_clears_flags_and_keeps_state() {
    let repo = TestApplicationRepository::failing();
    let mut list = ApplicationList::new();

    let result = list.get_applications(&repo).await;
    assert!(result.is_err());
    assert!(!list.is_searching());
    assert!(list.applications().is_empty());
    assert_eq!(list.pagination().total_items(), 0);
}

#[actix_web::test]
async fn test_consecutive_searches_latest_state_wins() {
    let first = TestApplicationRepository::new(common::applications(10));
    let second = TestApplicationRepository::new(common::applications(3));
    let mut list = ApplicationList::new();

    list.get_applications(&first).await.unwrap();
    assert_eq!(list.pagination().total_items(), 10);

    list.get_applications(&second).await.unwrap();
    assert_eq!(list.pagination().total_items(), 3);
    assert_eq!(list.applications().len(), 3);
}

#[actix_web::test]
async fn test_export_strips_page_bounds_and_fetches_everything() {
    let repo = TestApplicationRepository::new(common::applications(60));
    let query = ApplicationsQuery {
        page: Some(2),
        ..ApplicationsQuery::default()
    };

    let (filename, bytes) = export_applications_csv(&repo, query).await.unwrap();

    for set in repo.last_sets() {
        assert!(set.page_num.is_none());
        assert!(set.page_size.is_none());
    }
    assert!(filename.starts_with("tenure-applications-"));
    assert!(filename.ends_with(".csv"));

    // Header plus one line per record.
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text.lines().count(), 61);
}

#[actix_web::test]
async fn test_stale_url_page_reports_unable_to_display() {
    let repo = TestApplicationRepository::new(common::applications(10));
    let query = ApplicationsQuery {
        page: Some(99),
        ..ApplicationsQuery::default()
    };

    let page = load_applications_page(&repo, query).await.unwrap();
    assert!(page.rows.is_empty());
    assert_eq!(
        page.message,
        "Unable to display results, please clear and re-try"
    );
}

#[actix_web::test]
async fn test_load_applications_page_echoes_query_state() {
    let repo = TestApplicationRepository::new(common::applications(5));
    let query = ApplicationsQuery {
        page: Some(1),
        applicant: Some("ACME".to_string()),
        region: Some("SK - LAND MGMNT - SKEENA FIELD OFFICE".to_string()),
        ..ApplicationsQuery::default()
    };

    let page = load_applications_page(&repo, query.clone()).await.unwrap();
    assert_eq!(page.query, query);
    assert_eq!(page.rows.len(), 5);
    assert_eq!(page.current_page, 1);
    assert!(!page.query_string.is_empty());
    assert!(!page.link_query.contains("page="));
}
