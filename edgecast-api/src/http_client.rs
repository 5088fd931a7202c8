//! Generic HTTP request handling
//!
//! Shared by every API area: sending a prepared `RequestBuilder`, logging the
//! exchange, classifying transport failures and reading the response body.
//! Each area still builds its own paths, query strings and payloads.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// Transport failures map to `Timeout`/`NetworkError`; HTTP 429 maps to
    /// `RateLimited` with the `Retry-After` header when present. Every other
    /// status is returned to the caller for classification.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        service: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ApiError> {
        log::debug!("[{service}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    service: service.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    service: service.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{service}] Response Status: {status_code}");

        // Read Retry-After before the body consumes the response
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{service}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ApiError::RateLimited {
                service: service.to_string(),
                retry_after,
                raw_message: Some(body).filter(|b| !b.is_empty()),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::NetworkError {
                service: service.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{service}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body into `T`.
    pub fn parse_json<T>(response_text: &str, service: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{service}] JSON parse failed: {e}");
            log::error!(
                "[{service}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ApiError::ParseError {
                service: service.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Serialize a request payload, mapping failures to `ParseError`.
    pub fn to_json_value<B>(body: &B, service: &str) -> Result<serde_json::Value, ApiError>
    where
        B: serde::Serialize + ?Sized,
    {
        serde_json::to_value(body).map_err(|e| ApiError::ParseError {
            service: service.to_string(),
            detail: format!("Failed to serialize request body: {e}"),
        })
    }
}
