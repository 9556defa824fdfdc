use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Request error: {0}")]
    Request(String),

    #[error("Upstream service returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Invalid upstream payload: {0}")]
    InvalidPayload(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::InvalidPayload(err.to_string())
        } else {
            RepositoryError::Request(err.to_string())
        }
    }
}
