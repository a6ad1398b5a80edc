use super::formatting::{
    FavoriteSide, format_kickoff, format_row, format_tiebreaker_line, header_line, rule_line,
};
use super::teams::TeamNames;
use crate::error::AppError;
use crate::odds_fetcher::models::QuotaUsage;
use crate::processors::WeekReport;
use std::fmt::Write as _;

/// Output switches for the leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Highlight the favorite's name with terminal colors
    pub highlight: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { highlight: true }
    }
}

/// Renders the provider's quota counters, preceded by a blank line.
pub fn render_quota(quota: &QuotaUsage) -> String {
    format!(
        "\nRemaining requests {}\nUsed requests {}\n",
        quota.remaining.as_deref().unwrap_or("unknown"),
        quota.used.as_deref().unwrap_or("unknown"),
    )
}

/// Renders the whole leaderboard and tiebreaker line into a string.
///
/// Every team name is resolved before anything is returned, so an unmapped
/// team produces an error and no partial table.
///
/// # Errors
/// * `AppError::UnmappedTeam` - A team has no display name
pub fn render_report(
    report: &WeekReport,
    teams: &TeamNames,
    options: RenderOptions,
) -> Result<String, AppError> {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule_line());
    let _ = writeln!(out, "{}", header_line());
    let _ = writeln!(out, "{}", rule_line());

    for ranked in &report.rankings {
        let entry = &ranked.entry;
        let side = if entry.is_home_favorite() {
            FavoriteSide::Home
        } else {
            FavoriteSide::Away
        };
        let row = format_row(
            ranked.rank,
            teams.display_name(&entry.away)?,
            teams.display_name(&entry.home)?,
            side,
            entry.spread,
            entry.total,
            &entry.kickoff,
            options.highlight,
        );
        let _ = writeln!(out, "{row}");
    }

    let _ = writeln!(out, "{}", rule_line());

    for skipped in &report.skipped {
        let _ = writeln!(out, "Skipped: {skipped}");
    }

    let _ = writeln!(out);
    match &report.tiebreaker {
        Some(tiebreaker) => {
            let line = format_tiebreaker_line(
                tiebreaker.total,
                teams.display_name(&tiebreaker.away)?,
                teams.display_name(&tiebreaker.home)?,
                &tiebreaker.kickoff,
            );
            let _ = writeln!(out, "{line}");
        }
        None => {
            let _ = writeln!(
                out,
                "No games kick off before {}",
                format_kickoff(&report.cutoff)
            );
        }
    }
    let _ = writeln!(out);

    Ok(out)
}
