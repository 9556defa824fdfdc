//! Orchestration of the applications list: filter state, query expansion,
//! the concurrent fetch/count join, and CSV export.

use chrono::Utc;
use futures::try_join;

use crate::domain::application::Application;
use crate::domain::filter::{FilterSelection, Sorting};
use crate::dto::applications::{ApplicationsPageData, ApplicationsQuery};
use crate::export;
use crate::pagination::{PaginationState, PaginationUpdate};
use crate::repository::ApplicationReader;
use crate::search::build_query_param_sets;
use crate::services::{ServiceError, ServiceResult};

const EXPORT_FILE_BASE: &str = "tenure-applications";

/// The stateful shell around the pure filter/pagination core. Owns the
/// current selection and the fetched page, and guarantees the all-or-nothing
/// visible update: records and totals change together, only after both the
/// fetch and the count have resolved.
///
/// Mutation goes through `&mut self`, so a second search cannot interleave
/// with one already in flight and a slower response can never overwrite a
/// newer one.
#[derive(Debug, Default)]
pub struct ApplicationList {
    filters: FilterSelection,
    pagination: PaginationState,
    applications: Vec<Application>,
    filter_changed: bool,
    searching: bool,
}

impl ApplicationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds list state from a decoded URL query. The page number is
    /// applied as-is; if it turns out to lie beyond the fetched range the
    /// pagination message reports the stale state instead of guessing.
    pub fn from_query(query: &ApplicationsQuery) -> Self {
        let mut list = Self::new();
        list.filters = query.selection();
        list.pagination.update(PaginationUpdate {
            total_items: None,
            current_page: Some(query.page() as i64),
        });
        list
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn filter_changed(&self) -> bool {
        self.filter_changed
    }

    /// Replaces the purpose selection; `None` clears it.
    pub fn set_purpose_filters(&mut self, purposes: Option<Vec<String>>) {
        self.filters.purpose_codes = purposes.unwrap_or_default();
        self.filter_changed = true;
    }

    /// Replaces the status selection; `None` clears it.
    pub fn set_status_filters(&mut self, statuses: Option<Vec<String>>) {
        self.filters.status_codes = statuses.unwrap_or_default();
        self.filter_changed = true;
    }

    /// Replaces the region selection; `None` clears it.
    pub fn set_region_filter(&mut self, region: Option<String>) {
        self.filters.region_code = region.unwrap_or_default();
        self.filter_changed = true;
    }

    /// Replaces the applicant search text; `None` clears it.
    pub fn set_applicant_filter(&mut self, applicant: Option<String>) {
        self.filters.applicant = applicant.unwrap_or_default();
        self.filter_changed = true;
    }

    pub fn set_sorting(&mut self, sorting: Sorting) {
        self.filters.sorting = sorting;
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    pub fn page_delta(&mut self, delta: i64) {
        self.pagination.relative_move(delta);
    }

    /// Returns to page one and marks the filter state as fetched.
    pub fn reset_pagination(&mut self) {
        self.pagination.reset();
        self.filter_changed = false;
    }

    /// Runs the search use case: expand the selection into parameter sets,
    /// fetch the page and the total concurrently, and update the visible
    /// state only once both have resolved. A changed filter always returns
    /// to page one first.
    pub async fn get_applications<R>(&mut self, repo: &R) -> ServiceResult<()>
    where
        R: ApplicationReader + ?Sized,
    {
        self.searching = true;
        if self.filter_changed {
            self.reset_pagination();
        }
        let sets = build_query_param_sets(&self.filters, &self.pagination);

        match try_join!(repo.search(&sets), repo.count(&sets)) {
            Ok((applications, total)) => {
                self.pagination.update(PaginationUpdate {
                    total_items: Some(total as i64),
                    current_page: None,
                });
                self.applications = applications;
                self.searching = false;
                Ok(())
            }
            Err(err) => {
                self.searching = false;
                log::error!("Failed to fetch applications: {err}");
                Err(err.into())
            }
        }
    }

    /// Runs the export use case: the same parameter sets with the page
    /// bounds stripped, so the entire matching set is fetched and written
    /// as CSV. Pagination state is left untouched.
    pub async fn export<R>(&self, repo: &R) -> ServiceResult<(String, Vec<u8>)>
    where
        R: ApplicationReader + ?Sized,
    {
        let mut sets = build_query_param_sets(&self.filters, &self.pagination);
        for set in &mut sets {
            set.strip_pagination();
        }

        let applications = repo.search(&sets).await.map_err(|err| {
            log::error!("Failed to fetch applications for export: {err}");
            ServiceError::from(err)
        })?;

        let (filename, bytes) = export::write_csv(
            &applications,
            EXPORT_FILE_BASE,
            export::application_fields(),
            Utc::now().date_naive(),
        )?;
        Ok((filename, bytes))
    }
}

/// Loads the applications list page for the given URL query.
pub async fn load_applications_page<R>(
    repo: &R,
    query: ApplicationsQuery,
) -> ServiceResult<ApplicationsPageData>
where
    R: ApplicationReader + ?Sized,
{
    let mut list = ApplicationList::from_query(&query);
    list.get_applications(repo).await?;
    Ok(ApplicationsPageData::from_list(&list, Utc::now()))
}

/// Produces the CSV download for the given URL query.
pub async fn export_applications_csv<R>(
    repo: &R,
    query: ApplicationsQuery,
) -> ServiceResult<(String, Vec<u8>)>
where
    R: ApplicationReader + ?Sized,
{
    let list = ApplicationList::from_query(&query);
    list.export(repo).await
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    #[actix_web::test]
    async fn get_applications_issues_one_fetch_and_one_count() {
        let mut repo = MockRepository::new();
        repo.expect_search().times(1).returning(|_| Ok(vec![]));
        repo.expect_count().times(1).returning(|_| Ok(0));

        let mut list = ApplicationList::new();
        list.get_applications(&repo).await.unwrap();

        assert_eq!(list.pagination().message(), "No applications found");
        assert!(!list.is_searching());
    }

    #[actix_web::test]
    async fn export_does_not_request_a_count() {
        let mut repo = MockRepository::new();
        repo.expect_search().times(1).returning(|_| Ok(vec![]));
        repo.expect_count().never();

        let list = ApplicationList::new();
        let (filename, _) = list.export(&repo).await.unwrap();
        assert!(filename.ends_with(".csv"));
    }
}
