use thiserror::Error;

/// Errors that can occur while searching for recommendations
#[derive(Error, Debug)]
pub enum SearchError {
    /// The request never produced a response (DNS, connection, timeout)
    #[error("Failed to reach dataset host: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response arrived but its status indicates failure
    #[error("Network response was not ok: {status} {status_text}")]
    HttpStatus { status: u16, status_text: String },

    /// The response body is not a recommendation dataset
    #[error("Failed to decode dataset: {0}")]
    Decode(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Decode(err.to_string())
    }
}

/// Errors produced while resolving the local time of a destination
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimeError {
    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),
}

/// Contact form validation failures
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}
