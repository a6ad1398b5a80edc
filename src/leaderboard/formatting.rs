// src/leaderboard/formatting.rs - Column formatting for the leaderboard table

use crate::constants::layout::{KICKOFF_FORMAT, NUMBER_WIDTH, RANK_WIDTH, RULE_WIDTH, TEAM_WIDTH};
use chrono::{DateTime, FixedOffset};
use crossterm::style::{Color, Stylize};

/// Which side of the matchup to highlight as the favorite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteSide {
    Away,
    Home,
}

/// Formats a kickoff as `Sun 10-18-2026 01:25 PM`
pub fn format_kickoff(kickoff: &DateTime<FixedOffset>) -> String {
    kickoff.format(KICKOFF_FORMAT).to_string()
}

/// Spread with one decimal, e.g. `-3.5`
pub fn format_spread(spread: f64) -> String {
    format!("{spread:.1}")
}

/// Total rounded to whole points
pub fn format_total(total: f64) -> String {
    format!("{total:.0}")
}

pub fn rule_line() -> String {
    "-".repeat(RULE_WIDTH)
}

pub fn header_line() -> String {
    format!(
        "{:<rank$} {:>team$} @ {:<team$}{:>num$}{:>num$}   GAME TIME",
        "RANK",
        "AWAY TEAM",
        "HOME TEAM",
        "SPREAD",
        "TOTAL",
        rank = RANK_WIDTH,
        team = TEAM_WIDTH,
        num = NUMBER_WIDTH,
    )
}

/// Applies the favorite highlight (white on blue, bold) to an already padded cell.
pub fn highlight(cell: &str) -> String {
    cell.with(Color::White)
        .on(Color::Blue)
        .bold()
        .to_string()
}

/// One leaderboard row.
///
/// Team names are padded before highlighting so escape codes never count
/// towards the column width.
#[allow(clippy::too_many_arguments)]
pub fn format_row(
    rank: usize,
    away: &str,
    home: &str,
    favorite: FavoriteSide,
    spread: f64,
    total: f64,
    kickoff: &DateTime<FixedOffset>,
    use_highlight: bool,
) -> String {
    let away_cell = format!("{away:>width$}", width = TEAM_WIDTH);
    let home_cell = format!("{home:<width$}", width = TEAM_WIDTH);

    let (away_cell, home_cell) = match (use_highlight, favorite) {
        (false, _) => (away_cell, home_cell),
        (true, FavoriteSide::Away) => (highlight(&away_cell), home_cell),
        (true, FavoriteSide::Home) => (away_cell, highlight(&home_cell)),
    };

    format!(
        "{rank:<rank_width$} {away_cell} @ {home_cell}{:>num$}{:>num$}   {}",
        format_spread(spread),
        format_total(total),
        format_kickoff(kickoff),
        rank_width = RANK_WIDTH,
        num = NUMBER_WIDTH,
    )
}

/// The closing tiebreaker summary line
pub fn format_tiebreaker_line(
    total: f64,
    away: &str,
    home: &str,
    kickoff: &DateTime<FixedOffset>,
) -> String {
    format!(
        "MNF TIEBREAKER:  {}    {away}  @  {home}    {}",
        format_total(total),
        format_kickoff(kickoff)
    )
}
