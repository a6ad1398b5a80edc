//! Application-wide constants and configuration values
//!
//! This module centralizes the fixed odds-provider parameters, layout widths and
//! configuration defaults so the rest of the crate has no magic numbers.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Default odds provider base URL
pub const DEFAULT_API_DOMAIN: &str = "https://api.the-odds-api.com";

/// Kickoff times are shifted from UTC into this fixed offset before filtering and display
pub const DEFAULT_KICKOFF_OFFSET_HOURS: i32 = -8;

/// Name used for the config directory, the log file and the default tracing directive
pub const APP_NAME: &str = "pickem_odds";

/// Fixed query parameters sent to the odds provider
pub mod odds_api {
    /// Sport key for the NFL on the odds provider
    pub const SPORT: &str = "americanfootball_nfl";

    /// Bookmaker region set
    pub const REGIONS: &str = "us";

    /// Markets requested in a single call
    pub const MARKETS: &str = "spreads,totals";

    pub const ODDS_FORMAT: &str = "decimal";

    pub const DATE_FORMAT: &str = "iso";

    /// Market key for point spreads
    pub const SPREADS_MARKET: &str = "spreads";

    /// Market key for over/under totals
    pub const TOTALS_MARKET: &str = "totals";

    /// Response header carrying the remaining request quota
    pub const REQUESTS_REMAINING_HEADER: &str = "x-requests-remaining";

    /// Response header carrying the used request quota
    pub const REQUESTS_USED_HEADER: &str = "x-requests-used";
}

/// Leaderboard layout constants
pub mod layout {
    /// Width of the dashed rule lines around the table
    pub const RULE_WIDTH: usize = 100;

    /// Width of the rank column (left aligned)
    pub const RANK_WIDTH: usize = 4;

    /// Width of each team name column
    pub const TEAM_WIDTH: usize = 25;

    /// Width of the spread and total columns (right aligned)
    pub const NUMBER_WIDTH: usize = 7;

    /// strftime pattern for kickoff times, e.g. `Sun 10-18-2026 01:25 PM`
    pub const KICKOFF_FORMAT: &str = "%a %m-%d-%Y %I:%M %p";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API key override
    pub const API_KEY: &str = "PICKEM_API_KEY";

    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "PICKEM_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "PICKEM_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "PICKEM_HTTP_TIMEOUT";
}

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: u8 = 0;

    /// Fetch, parse or I/O failure
    pub const FAILURE: u8 = 1;

    /// Configuration gap: missing key, unmapped team, invalid settings
    pub const CONFIG_GAP: u8 = 2;
}
