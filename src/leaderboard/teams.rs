//! Display names for NFL franchises.
//!
//! Names follow the short labels used by CBS Sports pick'em pools so the
//! leaderboard can be read side by side with the pool's pick sheet.

use crate::error::AppError;
use std::collections::HashMap;

const NFL_DISPLAY_NAMES: [(&str, &str); 32] = [
    ("Arizona Cardinals", "Arizona"),
    ("Atlanta Falcons", "Atlanta"),
    ("Baltimore Ravens", "Baltimore"),
    ("Buffalo Bills", "Buffalo"),
    ("Carolina Panthers", "Carolina"),
    ("Chicago Bears", "Chicago"),
    ("Cincinnati Bengals", "Cincinnati"),
    ("Cleveland Browns", "Cleveland"),
    ("Dallas Cowboys", "Dallas"),
    ("Denver Broncos", "Denver"),
    ("Detroit Lions", "Detroit"),
    ("Green Bay Packers", "Green Bay"),
    ("Houston Texans", "Houston"),
    ("Indianapolis Colts", "Indianapolis"),
    ("Jacksonville Jaguars", "Jacksonville"),
    ("Kansas City Chiefs", "Kansas City"),
    ("Las Vegas Raiders", "Las Vegas"),
    ("Los Angeles Chargers", "LA Chargers"),
    ("Los Angeles Rams", "LA Rams"),
    ("Miami Dolphins", "Miami"),
    ("Minnesota Vikings", "Minnesota"),
    ("New England Patriots", "New England"),
    ("New Orleans Saints", "New Orleans"),
    ("New York Giants", "New York (NYG)"),
    ("New York Jets", "New York (NYJ)"),
    ("Philadelphia Eagles", "Philadelphia"),
    ("Pittsburgh Steelers", "Pittsburgh"),
    ("San Francisco 49ers", "San Francisco"),
    ("Seattle Seahawks", "Seattle"),
    ("Tampa Bay Buccaneers", "Tampa Bay"),
    ("Tennessee Titans", "Tennessee"),
    ("Washington Commanders", "Washington"),
];

/// Read-only mapping from official franchise name to display label.
///
/// Built once at startup and passed by reference; there is no fallback for
/// unknown names.
#[derive(Debug, Clone)]
pub struct TeamNames {
    names: HashMap<String, String>,
}

impl TeamNames {
    /// The 32 current NFL franchises
    pub fn nfl() -> Self {
        Self::from_pairs(NFL_DISPLAY_NAMES)
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            names: pairs
                .into_iter()
                .map(|(official, display)| (official.into(), display.into()))
                .collect(),
        }
    }

    /// Looks up the display label for an official team name.
    ///
    /// # Errors
    /// * `AppError::UnmappedTeam` - The team is not in the table
    pub fn display_name(&self, team: &str) -> Result<&str, AppError> {
        self.names
            .get(team)
            .map(String::as_str)
            .ok_or_else(|| AppError::unmapped_team(team))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for TeamNames {
    fn default() -> Self {
        Self::nfl()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_franchises_present() {
        let teams = TeamNames::nfl();
        assert_eq!(teams.len(), 32);
        assert_eq!(teams.display_name("New York Giants").unwrap(), "New York (NYG)");
        assert_eq!(teams.display_name("Los Angeles Rams").unwrap(), "LA Rams");
        assert_eq!(teams.display_name("Green Bay Packers").unwrap(), "Green Bay");
    }

    #[test]
    fn test_display_names_fit_team_column() {
        for (_, display) in NFL_DISPLAY_NAMES {
            assert!(display.chars().count() <= crate::constants::layout::TEAM_WIDTH);
        }
    }

    #[test]
    fn test_unknown_team_is_named_error() {
        let teams = TeamNames::nfl();
        match teams.display_name("Washington Redskins") {
            Err(AppError::UnmappedTeam { team }) => assert_eq!(team, "Washington Redskins"),
            other => panic!("expected UnmappedTeam, got {other:?}"),
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        let teams = TeamNames::from_pairs([("Dallas Cowboys", "Dallas")]);
        assert!(teams.display_name("dallas cowboys").is_err());
        assert!(teams.display_name("Dallas Cowboys ").is_err());
    }
}
