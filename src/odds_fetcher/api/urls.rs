//! URL building utilities for the odds provider

use crate::constants::odds_api;

/// Builds the odds endpoint URL for the NFL with the fixed region, market and format parameters.
///
/// # Example
/// ```
/// use pickem_odds::odds_fetcher::api::build_odds_url;
///
/// let url = build_odds_url("https://api.example.com", "KEY");
/// assert_eq!(
///     url,
///     "https://api.example.com/v4/sports/americanfootball_nfl/odds?apiKey=KEY&regions=us&markets=spreads,totals&oddsFormat=decimal&dateFormat=iso"
/// );
/// ```
pub fn build_odds_url(api_domain: &str, api_key: &str) -> String {
    format!(
        "{}/v4/sports/{}/odds?apiKey={}&regions={}&markets={}&oddsFormat={}&dateFormat={}",
        api_domain.trim_end_matches('/'),
        odds_api::SPORT,
        api_key,
        odds_api::REGIONS,
        odds_api::MARKETS,
        odds_api::ODDS_FORMAT,
        odds_api::DATE_FORMAT,
    )
}

/// Replaces the API key in a URL so it can be logged or shown in errors.
///
/// # Example
/// ```
/// use pickem_odds::odds_fetcher::api::redact_api_key;
///
/// assert_eq!(
///     redact_api_key("https://x/odds?apiKey=SECRET&regions=us", "SECRET"),
///     "https://x/odds?apiKey=REDACTED&regions=us"
/// );
/// ```
pub fn redact_api_key(url: &str, api_key: &str) -> String {
    if api_key.is_empty() {
        return url.to_string();
    }
    url.replace(api_key, "REDACTED")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let url = build_odds_url("http://localhost:8080/", "k");
        assert!(url.starts_with("http://localhost:8080/v4/sports/americanfootball_nfl/odds?"));
    }

    #[test]
    fn test_empty_key_redaction_is_noop() {
        assert_eq!(redact_api_key("https://x/odds", ""), "https://x/odds");
    }
}
