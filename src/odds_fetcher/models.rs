use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One game as returned by the odds provider, with every bookmaker's quotes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OddsGame {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub sport_key: String,
    /// Kickoff as supplied by the provider, always UTC
    pub commence_time: DateTime<Utc>,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmaker {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub markets: Vec<Market>,
}

/// A bookmaker's market, keyed `spreads` or `totals` for the markets we request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Market {
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

/// A single priced outcome. Spread outcomes name a team; totals outcomes are `Over`/`Under`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub point: Option<f64>,
}

/// Request quota counters reported by the provider on every successful call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotaUsage {
    pub remaining: Option<String>,
    pub used: Option<String>,
}

/// Parsed games plus everything else the caller may want from one fetch
#[derive(Debug, Clone)]
pub struct FetchedOdds {
    pub games: Vec<OddsGame>,
    /// `None` when the games were read from a saved response file
    pub quota: Option<QuotaUsage>,
    /// Raw response body, kept so it can be saved for offline runs
    pub raw_body: String,
}
