//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::application::Application;
use crate::repository::ApplicationReader;
use crate::repository::errors::RepositoryResult;
use crate::search::QueryParamSet;

mock! {
    pub Repository {}

    impl ApplicationReader for Repository {
        async fn search(&self, sets: &[QueryParamSet]) -> RepositoryResult<Vec<Application>>;
        async fn count(&self, sets: &[QueryParamSet]) -> RepositoryResult<usize>;
    }
}
