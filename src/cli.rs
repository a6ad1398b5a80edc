use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Configuration commands print or change settings and exit without fetching odds
pub fn is_config_command(args: &Args) -> bool {
    args.new_api_key.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// NFL pick'em odds leaderboard
///
/// Fetches this week's point spreads and totals from The Odds API, averages
/// every bookmaker's line per game and prints the games from biggest favorite
/// to closest matchup, followed by the Monday night tiebreaker.
///
/// The week runs until next Tuesday midnight. Each run spends one request of
/// the API quota unless --from-file is used.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// API key for this run only. Overrides the config file and PICKEM_API_KEY.
    #[arg(long = "api-key", value_name = "KEY")]
    pub api_key: Option<String>,

    /// Compute the week from this date (YYYY-MM-DD) instead of today.
    #[arg(long = "date", short = 'd', help_heading = "Display Options")]
    pub date: Option<String>,

    /// Number ranks from 1 (biggest favorite) instead of counting down to 1.
    #[arg(long = "ascending-ranks", short = 'a', help_heading = "Display Options")]
    pub ascending_ranks: bool,

    /// Disable the colored favorite highlight.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Read the raw odds JSON from a file instead of calling the API. Spends no quota.
    #[arg(
        long = "from-file",
        value_name = "PATH",
        help_heading = "Offline",
        conflicts_with = "save_response"
    )]
    pub from_file: Option<String>,

    /// Save the raw odds JSON to a file after fetching, for later --from-file runs.
    #[arg(long = "save-response", value_name = "PATH", help_heading = "Offline")]
    pub save_response: Option<String>,

    /// Store the odds API key in the config file.
    #[arg(long = "set-api-key", value_name = "KEY", help_heading = "Configuration")]
    pub new_api_key: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["pickem_odds"]).unwrap();
        assert!(!args.ascending_ranks);
        assert!(!args.plain);
        assert!(args.from_file.is_none());
        assert!(!is_config_command(&args));
    }

    #[test]
    fn test_offline_flags_conflict() {
        let result = Args::try_parse_from([
            "pickem_odds",
            "--from-file",
            "odds.json",
            "--save-response",
            "odds.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_commands() {
        let args = Args::try_parse_from(["pickem_odds", "--set-api-key", "abc"]).unwrap();
        assert_eq!(args.new_api_key.as_deref(), Some("abc"));
        assert!(is_config_command(&args));

        let args = Args::try_parse_from(["pickem_odds", "-l"]).unwrap();
        assert!(is_config_command(&args));
    }

    #[test]
    fn test_display_flags() {
        let args =
            Args::try_parse_from(["pickem_odds", "-a", "-p", "-d", "2026-10-16"]).unwrap();
        assert!(args.ascending_ranks);
        assert!(args.plain);
        assert_eq!(args.date.as_deref(), Some("2026-10-16"));
    }
}
