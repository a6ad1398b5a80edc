use crate::constants::exit_codes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Any non-success HTTP status; the provider explains quota and key problems in the body
    #[error("Failed to get odds: status_code {status}, response body {body}")]
    ApiStatus {
        status: u16,
        body: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing and validation errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    // Per-game data quality
    #[error("No {market} quotes for {away} @ {home}")]
    EmptyMarket {
        home: String,
        away: String,
        market: String,
    },

    #[error("No display name configured for team '{team}'; add it to the team name table")]
    UnmappedTeam { team: String },

    #[error(
        "No odds API key configured. Set one with --set-api-key <KEY>, pass --api-key or export PICKEM_API_KEY"
    )]
    MissingApiKey,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an error for a non-success HTTP status
    pub fn api_status(status: u16, body: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiStatus {
            status,
            body: body.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an error for a game missing every quote of one market
    pub fn empty_market(
        home: impl Into<String>,
        away: impl Into<String>,
        market: impl Into<String>,
    ) -> Self {
        Self::EmptyMarket {
            home: home.into(),
            away: away.into(),
            market: market.into(),
        }
    }

    /// Create an error for a team missing from the display-name table
    pub fn unmapped_team(team: impl Into<String>) -> Self {
        Self::UnmappedTeam { team: team.into() }
    }

    /// Per-game data problems that drop one game instead of the whole run
    pub fn is_skippable(&self) -> bool {
        matches!(self, AppError::EmptyMarket { .. })
    }

    /// Errors the operator fixes by editing configuration rather than retrying
    pub fn is_fatal_config_gap(&self) -> bool {
        matches!(
            self,
            AppError::UnmappedTeam { .. }
                | AppError::MissingApiKey
                | AppError::Config(_)
                | AppError::TomlDeserialize(_)
        )
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        if self.is_fatal_config_gap() {
            exit_codes::CONFIG_GAP
        } else {
            exit_codes::FAILURE
        }
    }
}
