//! Week window: which games belong to the current pool week.
//!
//! A pool week ends at the next Tuesday midnight in the game-local fixed offset.

use crate::error::AppError;
use crate::odds_fetcher::models::OddsGame;
use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, TimeZone, Utc};
use tracing::{debug, info};

const SECONDS_PER_HOUR: i32 = 3600;

/// Builds the fixed offset kickoff times are shifted into, e.g. `-8` for UTC-8.
pub fn kickoff_offset(hours: i32) -> Result<FixedOffset, AppError> {
    FixedOffset::east_opt(hours * SECONDS_PER_HOUR).ok_or_else(|| {
        AppError::config_error(format!("Kickoff offset of {hours} hours is not a valid UTC offset"))
    })
}

/// Shifts a provider UTC kickoff into the game-local offset.
pub fn corrected_kickoff(commence_time: DateTime<Utc>, offset: &FixedOffset) -> DateTime<FixedOffset> {
    commence_time.with_timezone(offset)
}

/// Computes the cutoff for the week containing `today`: the next Tuesday at 00:00.
///
/// The cutoff is always 1 to 7 days after `today`; on a Tuesday it is the following Tuesday.
pub fn week_cutoff_for_date(
    today: NaiveDate,
    offset: &FixedOffset,
) -> Result<DateTime<FixedOffset>, AppError> {
    let weekday = u64::from(today.weekday().num_days_from_monday());
    let days_ahead = (7 - weekday) % 7 + 1;

    let cutoff_date = today
        .checked_add_days(Days::new(days_ahead))
        .ok_or_else(|| AppError::datetime_parse_error(format!("No Tuesday after {today}")))?;

    let naive_midnight = cutoff_date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::datetime_parse_error("Invalid midnight"))?;

    offset
        .from_local_datetime(&naive_midnight)
        .single()
        .ok_or_else(|| {
            AppError::datetime_parse_error(format!("Ambiguous cutoff {naive_midnight}"))
        })
}

/// Computes the cutoff from the current instant, taking "today" in the game-local offset.
pub fn week_cutoff(now: DateTime<Utc>, offset: &FixedOffset) -> Result<DateTime<FixedOffset>, AppError> {
    week_cutoff_for_date(now.with_timezone(offset).date_naive(), offset)
}

/// Parses a `YYYY-MM-DD` date used in place of today
pub fn parse_reference_date(date: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
        AppError::datetime_parse_error(format!("Invalid date '{date}', expected YYYY-MM-DD: {e}"))
    })
}

/// The set of kickoff instants belonging to one pool week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub offset: FixedOffset,
    pub cutoff: DateTime<FixedOffset>,
}

/// A game inside the week window with its corrected kickoff
#[derive(Debug, Clone, Copy)]
pub struct WindowedGame<'a> {
    pub game: &'a OddsGame,
    pub kickoff: DateTime<FixedOffset>,
}

impl WeekWindow {
    /// Window for the week containing `today`
    pub fn for_date(today: NaiveDate, offset: FixedOffset) -> Result<Self, AppError> {
        Ok(Self {
            offset,
            cutoff: week_cutoff_for_date(today, &offset)?,
        })
    }

    /// Window for the week containing the instant `now`
    pub fn starting_at(now: DateTime<Utc>, offset: FixedOffset) -> Result<Self, AppError> {
        Ok(Self {
            offset,
            cutoff: week_cutoff(now, &offset)?,
        })
    }

    /// A kickoff belongs to the week iff it is strictly before the cutoff
    pub fn contains(&self, kickoff: &DateTime<FixedOffset>) -> bool {
        *kickoff < self.cutoff
    }

    /// Keeps the games kicking off before the cutoff, in provider order.
    pub fn filter_games<'a>(&self, games: &'a [OddsGame]) -> Vec<WindowedGame<'a>> {
        let windowed: Vec<WindowedGame<'a>> = games
            .iter()
            .filter_map(|game| {
                let kickoff = corrected_kickoff(game.commence_time, &self.offset);
                if self.contains(&kickoff) {
                    Some(WindowedGame { game, kickoff })
                } else {
                    debug!(
                        "Excluding {} @ {} at {kickoff}: not before cutoff {}",
                        game.away_team, game.home_team, self.cutoff
                    );
                    None
                }
            })
            .collect();

        info!(
            "{} of {} games kick off before {}",
            windowed.len(),
            games.len(),
            self.cutoff
        );
        windowed
    }
}
