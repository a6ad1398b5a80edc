pub mod api;
pub mod cache;
pub mod models;

pub use api::{create_http_client_with_timeout, fetch_odds};
pub use cache::{load_saved_odds, save_raw_response};
pub use models::{Bookmaker, FetchedOdds, Market, OddsGame, Outcome, QuotaUsage};
