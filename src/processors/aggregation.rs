//! Consensus spreads and totals across bookmakers.

use crate::constants::odds_api::{SPREADS_MARKET, TOTALS_MARKET};
use crate::error::AppError;
use crate::odds_fetcher::models::OddsGame;
use chrono::{DateTime, FixedOffset};
use tracing::{debug, warn};

/// Largest gap between the home average and the negated away average that is not worth logging
const SIDE_DISAGREEMENT_EPSILON: f64 = 1e-9;

/// Every bookmaker's points for one game
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteSheet {
    pub home_spreads: Vec<f64>,
    pub away_spreads: Vec<f64>,
    pub totals: Vec<f64>,
}

/// One game's consensus line, ready to rank
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    pub away: String,
    pub home: String,
    pub favorite: String,
    /// Favorite's points given; never positive
    pub spread: f64,
    pub total: f64,
    pub kickoff: DateTime<FixedOffset>,
}

impl RankingEntry {
    pub fn is_home_favorite(&self) -> bool {
        self.favorite == self.home
    }
}

/// Collects spread and total points from every bookmaker quoting the game.
///
/// Spread outcomes are matched to teams by name; an outcome naming neither team
/// is ignored. Totals take the first outcome's point (the over and under share it).
pub fn collect_quotes(game: &OddsGame) -> QuoteSheet {
    let mut sheet = QuoteSheet::default();

    for bookmaker in &game.bookmakers {
        for market in &bookmaker.markets {
            match market.key.as_str() {
                SPREADS_MARKET => {
                    for outcome in &market.outcomes {
                        let Some(point) = outcome.point else {
                            warn!(
                                "{} spread for {} has no point, ignoring",
                                bookmaker.title, outcome.name
                            );
                            continue;
                        };
                        if outcome.name == game.home_team {
                            sheet.home_spreads.push(point);
                        } else if outcome.name == game.away_team {
                            sheet.away_spreads.push(point);
                        } else {
                            warn!(
                                "{} quoted a spread for '{}' in {} @ {}, ignoring",
                                bookmaker.title, outcome.name, game.away_team, game.home_team
                            );
                        }
                    }
                }
                TOTALS_MARKET => match market.outcomes.first().and_then(|o| o.point) {
                    Some(point) => sheet.totals.push(point),
                    None => warn!("{} total has no point, ignoring", bookmaker.title),
                },
                other => debug!("Ignoring market '{other}' from {}", bookmaker.title),
            }
        }
    }

    sheet
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Picks the favorite from the home team's average spread.
///
/// A negative home spread makes the home team the favorite. Otherwise the away
/// team is favored and the spread is negated, so the returned spread is always
/// the favorite's points given (`<= 0`).
///
/// ```
/// use pickem_odds::processors::aggregation::determine_favorite;
///
/// assert_eq!(determine_favorite("Dallas", "Arizona", -3.5), ("Dallas", -3.5));
/// assert_eq!(determine_favorite("Dallas", "Arizona", 6.0), ("Arizona", -6.0));
/// ```
pub fn determine_favorite<'a>(home: &'a str, away: &'a str, home_avg_spread: f64) -> (&'a str, f64) {
    if home_avg_spread < 0.0 {
        (home, home_avg_spread)
    } else {
        (away, -home_avg_spread)
    }
}

/// Builds the ranking entry for one in-window game.
///
/// The consensus spread is the mean of the home team's quotes only; the away
/// quotes are compared in a debug log and otherwise unused.
///
/// # Errors
/// * `AppError::EmptyMarket` - No bookmaker quoted a home spread or a total
pub fn aggregate_game(
    game: &OddsGame,
    kickoff: DateTime<FixedOffset>,
) -> Result<RankingEntry, AppError> {
    let sheet = collect_quotes(game);

    let home_avg = mean(&sheet.home_spreads).ok_or_else(|| {
        AppError::empty_market(&game.home_team, &game.away_team, SPREADS_MARKET)
    })?;
    let total = mean(&sheet.totals).ok_or_else(|| {
        AppError::empty_market(&game.home_team, &game.away_team, TOTALS_MARKET)
    })?;

    if let Some(away_avg) = mean(&sheet.away_spreads)
        && (away_avg + home_avg).abs() > SIDE_DISAGREEMENT_EPSILON
    {
        debug!(
            "{} @ {}: home average {home_avg} and away average {away_avg} disagree",
            game.away_team, game.home_team
        );
    }

    let (favorite, spread) = determine_favorite(&game.home_team, &game.away_team, home_avg);
    debug!(
        "{} @ {}: {} favored by {:.2}, total {:.2} from {} spread and {} total quotes",
        game.away_team,
        game.home_team,
        favorite,
        -spread,
        total,
        sheet.home_spreads.len(),
        sheet.totals.len()
    );

    Ok(RankingEntry {
        away: game.away_team.clone(),
        home: game.home_team.clone(),
        favorite: favorite.to_string(),
        spread,
        total,
        kickoff,
    })
}
