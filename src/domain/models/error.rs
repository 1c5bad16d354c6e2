use thiserror::Error;

/// Failure taxonomy for one round trip to the prediction service. No
/// variant is fatal to the process; the active view reports and stays
/// interactive.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Local input that cannot form a request.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Transport failure or a non-2xx response.
    #[error("network failure: {0}")]
    Network(String),

    /// The backend rejected the session token. The backend is the source
    /// of truth for token validity, nothing is pre-validated client side.
    #[error("authentication rejected: {0}")]
    Auth(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> ClientError {
        return ClientError::Network(err.to_string());
    }
}
