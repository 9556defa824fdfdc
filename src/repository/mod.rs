//! Boundary to the upstream land-registry search service.
//!
//! The portal holds no application data of its own; everything is fetched
//! from the registry's REST search endpoint. The traits here describe that
//! collaborator so services can be exercised against the HTTP client, the
//! in-memory test repository, or mockall mocks interchangeably.

use crate::domain::application::Application;
use crate::repository::errors::RepositoryResult;
use crate::search::QueryParamSet;

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[allow(async_fn_in_trait)]
pub trait ApplicationReader {
    /// Fetches the matching records for every query parameter set and
    /// flattens them in set order. The union of the sets is the result of
    /// the user's filter selection.
    async fn search(&self, sets: &[QueryParamSet]) -> RepositoryResult<Vec<Application>>;

    /// Total number of matching records, summed across the sets.
    async fn count(&self, sets: &[QueryParamSet]) -> RepositoryResult<usize>;
}
