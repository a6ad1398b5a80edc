//! Weekly NFL pick'em leaderboard built from consensus bookmaker odds.
//!
//! Fetches point spreads and totals from The Odds API, keeps the games that
//! kick off before next Tuesday midnight, averages every bookmaker's line and
//! ranks the games from biggest favorite to closest matchup.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use pickem_odds::config::RankOrder;
//! use pickem_odds::error::AppError;
//! use pickem_odds::leaderboard::{RenderOptions, TeamNames, render_report};
//! use pickem_odds::odds_fetcher::{create_http_client_with_timeout, fetch_odds};
//! use pickem_odds::processors::{WeekWindow, build_week_report, kickoff_offset};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = create_http_client_with_timeout(30)?;
//!     let fetched = fetch_odds(&client, "https://api.the-odds-api.com", "YOUR_KEY").await?;
//!
//!     let window = WeekWindow::starting_at(Utc::now(), kickoff_offset(-8)?)?;
//!     let report = build_week_report(&fetched.games, &window, RankOrder::Descending);
//!
//!     print!("{}", render_report(&report, &TeamNames::nfl(), RenderOptions::default())?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod leaderboard;
pub mod odds_fetcher;
pub mod processors;

// Re-export commonly used types for convenience
pub use config::{Config, RankOrder};
pub use error::AppError;
pub use leaderboard::{RenderOptions, TeamNames, render_report};
pub use odds_fetcher::{OddsGame, fetch_odds};
pub use processors::{WeekReport, WeekWindow, build_week_report};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
