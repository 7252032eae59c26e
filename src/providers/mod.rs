use thiserror::Error;

/// Transport failures for a single API call.
///
/// A reply that arrives with a non-success status is not an error at this
/// layer; it travels back as data so the caller can report status and body.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request timed out")]
    Timeout,
    #[error("connection error: {0}")]
    Connection(String),
    #[error("unexpected error: {0}")]
    Other(String),
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

pub mod pokemon_tcg;

pub use pokemon_tcg::{ApiReply, PokemonTcgProvider};

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        // A timed-out connect counts as a timeout, not a connection failure.
        if err.is_timeout() {
            ProviderError::Timeout
        } else if err.is_connect() {
            ProviderError::Connection(err.to_string())
        } else {
            ProviderError::Other(err.to_string())
        }
    }
}
