//! Tiebreaker game selection: the last game to kick off in the week window.

use super::aggregation::RankingEntry;
use chrono::{DateTime, FixedOffset};

/// The game whose combined score settles ties in the pool
#[derive(Debug, Clone, PartialEq)]
pub struct Tiebreaker {
    pub away: String,
    pub home: String,
    pub total: f64,
    pub kickoff: DateTime<FixedOffset>,
}

impl From<&RankingEntry> for Tiebreaker {
    fn from(entry: &RankingEntry) -> Self {
        Self {
            away: entry.away.clone(),
            home: entry.home.clone(),
            total: entry.total,
            kickoff: entry.kickoff,
        }
    }
}

/// Returns the entry with the latest kickoff.
///
/// Entries must be given in provider order. When several share the latest
/// kickoff, the first of them wins. `None` if there are no entries.
pub fn select_tiebreaker<'a, I>(entries: I) -> Option<Tiebreaker>
where
    I: IntoIterator<Item = &'a RankingEntry>,
{
    entries
        .into_iter()
        .fold(None::<&RankingEntry>, |latest, entry| match latest {
            Some(best) if entry.kickoff <= best.kickoff => Some(best),
            _ => Some(entry),
        })
        .map(Tiebreaker::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(away: &str, home: &str, day: u32, hour: u32, total: f64) -> RankingEntry {
        RankingEntry {
            away: away.to_string(),
            home: home.to_string(),
            favorite: home.to_string(),
            spread: -3.0,
            total,
            kickoff: FixedOffset::west_opt(8 * 3600)
                .unwrap()
                .with_ymd_and_hms(2026, 10, day, hour, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_latest_kickoff_wins() {
        let entries = vec![
            entry("Arizona Cardinals", "Dallas Cowboys", 18, 10, 46.0),
            entry("Chicago Bears", "Detroit Lions", 19, 17, 44.5),
            entry("Denver Broncos", "Houston Texans", 18, 13, 41.0),
        ];

        let tiebreaker = select_tiebreaker(&entries).unwrap();

        assert_eq!(tiebreaker.away, "Chicago Bears");
        assert_eq!(tiebreaker.home, "Detroit Lions");
        assert_eq!(tiebreaker.total, 44.5);
        assert_eq!(tiebreaker.kickoff, entries[1].kickoff);
    }

    #[test]
    fn test_equal_kickoffs_keep_first_in_provider_order() {
        let entries = vec![
            entry("Arizona Cardinals", "Dallas Cowboys", 19, 17, 46.0),
            entry("Chicago Bears", "Detroit Lions", 19, 17, 44.5),
            entry("Denver Broncos", "Houston Texans", 18, 13, 41.0),
        ];

        let tiebreaker = select_tiebreaker(&entries).unwrap();
        assert_eq!(tiebreaker.away, "Arizona Cardinals");
    }

    #[test]
    fn test_matches_max_by_kickoff() {
        let entries = vec![
            entry("A", "B", 18, 10, 40.0),
            entry("C", "D", 20, 1, 41.0),
            entry("E", "F", 19, 23, 42.0),
        ];
        let expected = entries.iter().map(|e| e.kickoff).max().unwrap();

        assert_eq!(select_tiebreaker(&entries).unwrap().kickoff, expected);
    }

    #[test]
    fn test_no_entries() {
        let entries: Vec<RankingEntry> = Vec::new();
        assert_eq!(select_tiebreaker(&entries), None);
    }
}
