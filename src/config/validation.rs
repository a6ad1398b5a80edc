use crate::error::AppError;
use std::path::Path;

/// Widest fixed offsets in use anywhere (UTC-12 to UTC+14)
const MIN_OFFSET_HOURS: i32 = -12;
const MAX_OFFSET_HOURS: i32 = 14;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain cannot be empty
/// - API domain must be a valid URL or domain name
/// - HTTP timeout must be at least one second
/// - Kickoff offset must be a real UTC offset
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
///
/// The API key is checked separately by [`validate_api_key`] because
/// configuration commands must work before a key has been stored.
pub fn validate_config(
    api_domain: &str,
    http_timeout_seconds: u64,
    kickoff_offset_hours: i32,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        // Without a scheme it should at least look like a domain
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(
                "API domain must be a valid URL or domain name",
            ));
        }
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if !(MIN_OFFSET_HOURS..=MAX_OFFSET_HOURS).contains(&kickoff_offset_hours) {
        return Err(AppError::config_error(format!(
            "Kickoff offset {kickoff_offset_hours} is outside {MIN_OFFSET_HOURS}..={MAX_OFFSET_HOURS} hours"
        )));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// Validates an odds API key.
///
/// An empty key means none was configured; keys never contain whitespace.
pub fn validate_api_key(api_key: &str) -> Result<(), AppError> {
    if api_key.is_empty() {
        return Err(AppError::MissingApiKey);
    }
    if api_key.chars().any(char::is_whitespace) {
        return Err(AppError::config_error("API key cannot contain whitespace"));
    }
    Ok(())
}
