//! HTTP plumbing for the backend queries.
//!
//! Internally the client distinguishes how a query failed; at the UI
//! boundary every kind collapses to the one generic message.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// The single user-facing message for any failed fetch cycle.
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch data. Please check the backend and data availability.";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl FetchError {
    /// What the user sees, regardless of variant.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

/// GET `url` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_kind_collapses_to_the_generic_message() {
        let errors = [
            FetchError::Network("connection refused".into()),
            FetchError::Status(500),
            FetchError::Decode("expected value at line 1".into()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
        }
    }

    #[test]
    fn display_keeps_the_internal_distinction() {
        assert_eq!(FetchError::Status(404).to_string(), "HTTP status 404");
        assert_eq!(
            FetchError::Network("timed out".into()).to_string(),
            "request failed: timed out"
        );
    }
}
