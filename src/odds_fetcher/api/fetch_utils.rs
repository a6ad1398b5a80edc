//! Single-attempt HTTP fetching with status and body classification

use reqwest::Client;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// A successfully parsed response together with its headers and raw body
pub(super) struct FetchResponse<T> {
    pub parsed: T,
    pub headers: HeaderMap,
    pub body: String,
}

/// Performs one GET request and parses the JSON body.
///
/// There are no retries: every request spends provider quota, so a failure is
/// reported to the caller as-is.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch, including credentials
/// * `display_url` - the same URL with credentials redacted, used in logs and errors
#[instrument(skip(client, url))]
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    display_url: &str,
) -> Result<FetchResponse<T>, AppError> {
    info!("Fetching data from URL: {display_url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            // The request URL carries the API key
            let e = e.without_url();
            error!("Request failed for URL {}: {}", display_url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(display_url)
            } else if e.is_connect() {
                AppError::network_connection(display_url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    let headers = response.headers().clone();

    debug!("Response status: {status}");

    let body = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", display_url, e);
        AppError::ApiFetch(e.without_url())
    })?;

    if !status.is_success() {
        error!("HTTP {} (URL: {})", status.as_u16(), display_url);
        return Err(AppError::api_status(status.as_u16(), body, display_url));
    }

    debug!("Response length: {} bytes", body.len());
    let preview: String = body.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    let parsed = parse_json_body(&body, display_url)?;
    Ok(FetchResponse {
        parsed,
        headers,
        body,
    })
}

/// Parses a JSON body, telling apart empty, non-JSON and wrongly shaped payloads.
///
/// `source` is a URL or file path used in error messages.
pub fn parse_json_body<T: DeserializeOwned>(body: &str, source: &str) -> Result<T, AppError> {
    match serde_json::from_str::<T>(body) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse odds response: {} (source: {})", e, source);
            error!(
                "Response text (first 200 chars): {}",
                &body.chars().take(200).collect::<String>()
            );

            let trimmed = body.trim_start();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", source))
            } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    source,
                ))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), source))
            }
        }
    }
}
