use crate::constants::odds_api;
use crate::error::AppError;
use crate::odds_fetcher::models::{FetchedOdds, OddsGame, QuotaUsage};
use reqwest::Client;
use reqwest::header::HeaderMap;
use tracing::{info, instrument};

use super::fetch_utils::fetch;
use super::urls::{build_odds_url, redact_api_key};

/// Fetches the current NFL spreads and totals from the odds provider.
///
/// Spends one unit of the provider's request quota. The remaining and used
/// counters from the response headers are returned alongside the games.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `api_domain` - Provider base URL, e.g. `https://api.the-odds-api.com`
/// * `api_key` - Provider API key
///
/// # Errors
/// * `AppError::ApiStatus` - Any non-success status, with the response body
/// * `AppError::NetworkTimeout` / `AppError::NetworkConnection` - Transport failures
/// * `AppError::ApiNoData` / `AppError::ApiMalformedJson` / `AppError::ApiUnexpectedStructure` - Bad payloads
#[instrument(skip(client, api_key))]
pub async fn fetch_odds(
    client: &Client,
    api_domain: &str,
    api_key: &str,
) -> Result<FetchedOdds, AppError> {
    let url = build_odds_url(api_domain, api_key);
    let display_url = redact_api_key(&url, api_key);

    let response = fetch::<Vec<OddsGame>>(client, &url, &display_url).await?;
    let quota = quota_from_headers(&response.headers);

    info!(
        "Fetched {} games (requests remaining: {}, used: {})",
        response.parsed.len(),
        quota.remaining.as_deref().unwrap_or("?"),
        quota.used.as_deref().unwrap_or("?"),
    );

    Ok(FetchedOdds {
        games: response.parsed,
        quota: Some(quota),
        raw_body: response.body,
    })
}

/// Reads the provider's quota counters from response headers
pub fn quota_from_headers(headers: &HeaderMap) -> QuotaUsage {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim().to_string())
    };

    QuotaUsage {
        remaining: header(odds_api::REQUESTS_REMAINING_HEADER),
        used: header(odds_api::REQUESTS_USED_HEADER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odds_fetcher::api::http_client::create_test_http_client;
    use reqwest::header::HeaderValue;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    fn mock_games() -> serde_json::Value {
        json!([
            {
                "id": "g1",
                "sport_key": "americanfootball_nfl",
                "commence_time": "2026-10-18T17:00:00Z",
                "home_team": "Dallas Cowboys",
                "away_team": "Arizona Cardinals",
                "bookmakers": []
            }
        ])
    }

    #[tokio::test]
    async fn test_fetch_odds_sends_fixed_parameters() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/v4/sports/americanfootball_nfl/odds"))
            .and(query_param("apiKey", "test-key"))
            .and(query_param("regions", "us"))
            .and(query_param("markets", "spreads,totals"))
            .and(query_param("oddsFormat", "decimal"))
            .and(query_param("dateFormat", "iso"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(mock_games())
                    .insert_header("x-requests-remaining", "481")
                    .insert_header("x-requests-used", "19"),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let fetched = fetch_odds(&client, &mock_server.uri(), "test-key")
            .await
            .unwrap();

        assert_eq!(fetched.games.len(), 1);
        assert_eq!(fetched.games[0].home_team, "Dallas Cowboys");
        assert_eq!(
            fetched.quota,
            Some(QuotaUsage {
                remaining: Some("481".to_string()),
                used: Some("19".to_string()),
            })
        );
        assert!(fetched.raw_body.contains("Arizona Cardinals"));
    }

    #[tokio::test]
    async fn test_fetch_odds_surfaces_status_and_body() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/v4/sports/americanfootball_nfl/odds"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_string(r#"{"message":"API key is not valid"}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = fetch_odds(&client, &mock_server.uri(), "secret-key").await;

        match result {
            Err(AppError::ApiStatus { status, body, url }) => {
                assert_eq!(status, 401);
                assert!(body.contains("API key is not valid"));
                assert!(!url.contains("secret-key"));
                assert!(url.contains("apiKey=REDACTED"));
            }
            other => panic!("expected ApiStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_odds_does_not_retry_server_errors() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = fetch_odds(&client, &mock_server.uri(), "k").await;
        assert!(matches!(result, Err(AppError::ApiStatus { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_fetch_odds_unexpected_structure() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"games": []})))
            .mount(&mock_server)
            .await;

        let result = fetch_odds(&client, &mock_server.uri(), "k").await;
        assert!(matches!(
            result,
            Err(AppError::ApiUnexpectedStructure { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_odds_connection_refused() {
        let client = create_test_http_client();
        // Port 9 (discard) is not listening on test machines
        let result = fetch_odds(&client, "http://127.0.0.1:9", "k").await;
        assert!(result.is_err());
    }

    #[test]
    fn test_quota_from_headers_missing_values() {
        let mut headers = HeaderMap::new();
        headers.insert("x-requests-used", HeaderValue::from_static(" 3 "));

        let quota = quota_from_headers(&headers);
        assert_eq!(quota.remaining, None);
        assert_eq!(quota.used, Some("3".to_string()));
    }
}
