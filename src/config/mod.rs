use crate::constants::{
    APP_NAME, DEFAULT_API_DOMAIN, DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_KICKOFF_OFFSET_HOURS,
    env_vars,
};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::{validate_api_key, validate_config};

/// Direction of the rank numbers printed in the leaderboard.
///
/// Rows are always ordered biggest favorite first; only the numbering changes.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RankOrder {
    /// First row is numbered N, last row 1
    #[default]
    Descending,
    /// First row is numbered 1, last row N
    Ascending,
}

impl fmt::Display for RankOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankOrder::Descending => write!(f, "descending"),
            RankOrder::Ascending => write!(f, "ascending"),
        }
    }
}

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Odds provider API key. Empty until the user stores one.
    #[serde(default)]
    pub api_key: String,
    /// Odds provider base URL. Should include https:// prefix.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for the odds request. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Fixed hour offset applied to provider UTC kickoff times
    #[serde(default = "default_kickoff_offset")]
    pub kickoff_offset_hours: i32,
    #[serde(default)]
    pub rank_order: RankOrder,
}

fn default_api_domain() -> String {
    DEFAULT_API_DOMAIN.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_kickoff_offset() -> i32 {
    DEFAULT_KICKOFF_OFFSET_HOURS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            api_domain: default_api_domain(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            kickoff_offset_hours: default_kickoff_offset(),
            rank_order: RankOrder::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file yields the defaults; nothing is written.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `PICKEM_API_KEY` - Override API key
    /// - `PICKEM_API_DOMAIN` - Override API domain
    /// - `PICKEM_LOG_FILE` - Override log file path
    /// - `PICKEM_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        Self::load_with_overrides(&get_config_path()).await
    }

    /// Loads the file at `path` (if any), applies environment overrides and validates.
    pub async fn load_with_overrides(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            self.api_key = api_key;
        }

        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings, excluding the API key
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_domain,
            self.http_timeout_seconds,
            self.kickoff_offset_hours,
            &self.log_file_path,
        )
    }

    /// Returns the API key, failing with [`AppError::MissingApiKey`] when none is set
    pub fn require_api_key(&self) -> Result<&str, AppError> {
        validate_api_key(&self.api_key)?;
        Ok(&self.api_key)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// The API key is masked down to its last four characters.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            return Ok(());
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("API Key:");
        println!("{}", mask_api_key(&config.api_key));
        println!("────────────────────────────────────");
        println!("API Domain:");
        println!("{}", config.api_domain);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Kickoff Offset:");
        println!("UTC{:+} hours", config.kickoff_offset_hours);
        println!("────────────────────────────────────");
        println!("Rank Order:");
        println!("{}", config.rank_order);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{APP_NAME}.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and ensures the API
    /// domain has a scheme.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        // Plain http is kept for local mock servers
        let api_domain = if self.api_domain.starts_with("https://")
            || self.api_domain.starts_with("http://")
        {
            self.api_domain.clone()
        } else {
            format!("https://{}", self.api_domain)
        };
        let content = toml::to_string_pretty(&Config {
            api_domain,
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without overrides or validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Masks all but the last four characters of an API key
pub fn mask_api_key(api_key: &str) -> String {
    if api_key.is_empty() {
        return "(not set)".to_string();
    }
    let chars: Vec<char> = api_key.chars().collect();
    let visible = chars.len().min(4);
    let hidden = chars.len() - visible;
    let tail: String = chars[hidden..].iter().collect();
    format!("{}{tail}", "*".repeat(hidden))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        // SAFETY: env-mutating tests are serialized with #[serial]
        unsafe {
            std::env::remove_var(env_vars::API_KEY);
            std::env::remove_var(env_vars::API_DOMAIN);
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
api_key = "abc123"
api_domain = "https://api.example.com"
log_file_path = "/custom/log/path"
kickoff_offset_hours = -5
rank_order = "ascending"
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.api_domain, "https://api.example.com");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.kickoff_offset_hours, -5);
        assert_eq!(config.rank_order, RankOrder::Ascending);
        assert_eq!(config.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);
    }

    #[tokio::test]
    async fn test_config_defaults_for_minimal_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "api_key = \"abc123\"\n")
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.api_domain, DEFAULT_API_DOMAIN);
        assert_eq!(config.kickoff_offset_hours, DEFAULT_KICKOFF_OFFSET_HOURS);
        assert_eq!(config.rank_order, RankOrder::Descending);
        assert_eq!(config.log_file_path, None);
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original_config = Config {
            api_key: "abc123".to_string(),
            api_domain: "api.example.com".to_string(),
            log_file_path: Some("/custom/log/path".to_string()),
            rank_order: RankOrder::Ascending,
            ..Config::default()
        };
        original_config
            .save_to_path(&config_path_str)
            .await
            .unwrap();
        assert!(config_path.exists());

        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded_config.api_key, "abc123");
        assert_eq!(loaded_config.api_domain, "https://api.example.com");
        assert_eq!(loaded_config.log_file_path, original_config.log_file_path);
        assert_eq!(loaded_config.rank_order, RankOrder::Ascending);
    }

    #[test]
    fn test_config_without_log_file_path_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();
        assert!(toml_string.contains("rank_order = \"descending\""));
        assert!(!toml_string.contains("log_file_path"));
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let invalid_content = r#"
api_key = "abc
"#;
        let result: Result<Config, _> = toml::from_str(invalid_content);
        assert!(result.is_err());
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_file_yields_defaults_without_key() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config = Config::load_with_overrides(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert!(!config_path.exists(), "loading must not create a config file");
        assert!(matches!(
            config.require_api_key(),
            Err(AppError::MissingApiKey)
        ));
    }

    #[tokio::test]
    #[serial]
    async fn test_env_overrides_file_values() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "api_key = \"from-file\"\n")
            .await
            .unwrap();

        // SAFETY: serialized test
        unsafe {
            std::env::set_var(env_vars::API_KEY, "from-env");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "7");
        }
        let config = Config::load_with_overrides(&config_path.to_string_lossy())
            .await
            .unwrap();
        clear_env();

        assert_eq!(config.require_api_key().unwrap(), "from-env");
        assert_eq!(config.http_timeout_seconds, 7);
    }

    #[tokio::test]
    #[serial]
    async fn test_invalid_offset_fails_validation() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "kickoff_offset_hours = 40\n")
            .await
            .unwrap();

        let result = Config::load_with_overrides(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key(""), "(not set)");
        assert_eq!(mask_api_key("abc"), "abc");
        assert_eq!(mask_api_key("760acb50"), "****cb50");
    }
}
