pub mod aggregation;
pub mod ranking;
pub mod tiebreaker;
pub mod week_filter;

pub use aggregation::{QuoteSheet, RankingEntry, aggregate_game, determine_favorite};
pub use ranking::{RankedEntry, rank_games};
pub use tiebreaker::{Tiebreaker, select_tiebreaker};
pub use week_filter::{WeekWindow, WindowedGame, kickoff_offset, parse_reference_date};

use crate::config::RankOrder;
use crate::error::AppError;
use crate::odds_fetcher::models::OddsGame;
use chrono::{DateTime, FixedOffset};
use tracing::{info, warn};

/// Everything needed to print one week's leaderboard
#[derive(Debug)]
pub struct WeekReport {
    pub cutoff: DateTime<FixedOffset>,
    pub rankings: Vec<RankedEntry>,
    pub tiebreaker: Option<Tiebreaker>,
    /// Games inside the window dropped for missing quotes
    pub skipped: Vec<AppError>,
    /// Games on or after the cutoff
    pub excluded: usize,
}

/// Filters, aggregates, picks the tiebreaker and ranks one batch of provider games.
///
/// Games without spread or total quotes are skipped with a warning and take no
/// part in the ranking or the tiebreaker.
pub fn build_week_report(games: &[OddsGame], window: &WeekWindow, order: RankOrder) -> WeekReport {
    let windowed = window.filter_games(games);
    let excluded = games.len() - windowed.len();

    let mut entries = Vec::with_capacity(windowed.len());
    let mut skipped = Vec::new();
    for WindowedGame { game, kickoff } in windowed {
        match aggregate_game(game, kickoff) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                warn!("Skipping game: {e}");
                skipped.push(e);
            }
        }
    }

    // Provider order matters for the tiebreaker, so select before sorting
    let tiebreaker = select_tiebreaker(&entries);
    let rankings = rank_games(entries, order);

    info!(
        "Ranked {} games, skipped {}, excluded {} after cutoff",
        rankings.len(),
        skipped.len(),
        excluded
    );

    WeekReport {
        cutoff: window.cutoff,
        rankings,
        tiebreaker,
        skipped,
        excluded,
    }
}
