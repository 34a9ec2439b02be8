use backend::ApiError;
use thiserror::Error;

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client-side error type.
///
/// Validation failures are caught before the backend is ever invoked and
/// keep the originating dialog open; API rejections come back from the
/// simulated endpoint itself. The two are deliberately distinct so the UI
/// can render them differently.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}
