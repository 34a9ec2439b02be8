use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures a simulated endpoint can report.
///
/// Reads never fail in the mock backend; writes can be rejected for bad
/// input or, on the wallet, for spending past the balance.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid credentials: {0}")]
    Unauthorized(String),

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: i64, available: i64 },

    #[error("Internal error: {0}")]
    Internal(String),
}
