//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
///
/// Separates "could not reach or parse upstream" ([`SdkError::Http`],
/// [`SdkError::MalformedResponse`]) from "invalid request"
/// ([`SdkError::InvalidArgument`], [`SdkError::NotFound`]). An empty result is
/// never an error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::MalformedResponse(e.to_string())
    }
}

/// HTTP-layer errors (transport failures and non-2xx statuses).
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl HttpError {
    /// Map a non-success status code and its body to an error.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => HttpError::Unauthorized,
            404 => HttpError::NotFound(body),
            429 => HttpError::RateLimited,
            400..=499 => HttpError::BadRequest(body),
            _ => HttpError::ServerError { status, body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(HttpError::from_status(401, String::new()), HttpError::Unauthorized));
        assert!(matches!(HttpError::from_status(429, String::new()), HttpError::RateLimited));
        assert!(matches!(
            HttpError::from_status(404, "gone".into()),
            HttpError::NotFound(body) if body == "gone"
        ));
        assert!(matches!(
            HttpError::from_status(422, "bad".into()),
            HttpError::BadRequest(_)
        ));
        assert!(matches!(
            HttpError::from_status(503, "down".into()),
            HttpError::ServerError { status: 503, .. }
        ));
    }

    #[test]
    fn test_serde_error_is_malformed_response() {
        let err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let sdk: SdkError = err.into();
        assert!(matches!(sdk, SdkError::MalformedResponse(_)));
    }
}
