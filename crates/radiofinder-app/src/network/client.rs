//! Shared HTTP client wrapper
//!
//! Thin wrapper around `reqwest::blocking::Client` that centralizes
//! user agent, timeouts, and the "anything but 200 is an error" rule.

use radiofinder::error::RadioError;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::error::Result;

/// Shared HTTP client with standard configuration
pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    /// Create a client with the given user agent and timeouts
    pub fn new(user_agent: &str, connect_timeout: Duration, timeout: Duration) -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self { inner })
    }

    /// GET `url` with query `params` and a `Content-Type` header.
    ///
    /// Returns the response only on HTTP 200.
    pub fn get(
        &self,
        url: &str,
        params: &[(String, String)],
        content_type: &str,
    ) -> Result<reqwest::blocking::Response> {
        debug!(url, ?params, "GET");
        let response = self
            .inner
            .get(url)
            .header(CONTENT_TYPE, content_type)
            .query(params)
            .send()?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "response");
        if status != StatusCode::OK {
            return Err(RadioError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }
        Ok(response)
    }

    /// GET and deserialize the JSON response.
    ///
    /// A body that is not the expected JSON is `AppError::Decode`.
    pub fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(String, String)],
        content_type: &str,
    ) -> Result<T> {
        let body = self.get(url, params, content_type)?.text()?;
        let data = serde_json::from_str(&body)?;
        Ok(data)
    }

    /// GET and return the body as text
    pub fn get_text(
        &self,
        url: &str,
        params: &[(String, String)],
        content_type: &str,
    ) -> Result<String> {
        let response = self.get(url, params, content_type)?;
        Ok(response.text()?)
    }

    /// Access the underlying reqwest client
    pub fn inner(&self) -> &reqwest::blocking::Client {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn client() -> HttpClient {
        HttpClient::new(
            "test-agent/1.0",
            Duration::from_secs(5),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_client_creation() {
        let _inner = client().inner();
    }

    #[test]
    fn test_get_json_invalid_url() {
        let result: Result<serde_json::Value> =
            client().get_json("http://invalid.invalid.invalid", &[], "application/json");
        assert!(matches!(
            result,
            Err(AppError::Engine(RadioError::Network(_)))
        ));
    }

    #[test]
    fn test_get_text_malformed_url() {
        let result = client().get_text("not a url", &[], "application/xml");
        assert!(result.is_err());
    }
}
