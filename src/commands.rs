use crate::cli::Args;
use chrono::Utc;
use pickem_odds::config::{Config, RankOrder};
use pickem_odds::error::AppError;
use pickem_odds::leaderboard::{RenderOptions, TeamNames, render_quota, render_report};
use pickem_odds::odds_fetcher::{
    FetchedOdds, create_http_client_with_timeout, fetch_odds, load_saved_odds, save_raw_response,
};
use pickem_odds::processors::{
    WeekWindow, build_week_report, kickoff_offset, parse_reference_date,
};
use tracing::info;

/// Validates command line argument combinations clap cannot express.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if let Some(date) = &args.date {
        parse_reference_date(date)?;
    }
    if let Some(key) = &args.api_key
        && key.trim().is_empty()
    {
        return Err(AppError::config_error("--api-key cannot be empty"));
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-api-key, --set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = match Config::load_from_path(&Config::get_config_path()).await {
        Ok(config) => config,
        Err(AppError::Io(_)) => Config::default(),
        Err(e) => return Err(e),
    };

    if let Some(new_key) = &args.new_api_key {
        let new_key = new_key.trim().to_string();
        pickem_odds::config::validation::validate_api_key(&new_key)?;
        config.api_key = new_key;
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Fetches (or loads) odds, ranks the week's games and prints the leaderboard.
///
/// Quota counters are printed as soon as a live fetch succeeds. The table is
/// rendered in full before printing so a fatal lookup error leaves no partial output.
pub async fn handle_rankings_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let fetched = load_odds(args, config).await?;

    if let Some(quota) = &fetched.quota {
        print!("{}", render_quota(quota));
    }

    if let Some(path) = &args.save_response {
        save_raw_response(path, &fetched.raw_body).await?;
        println!("Saved raw response to {path}");
    }

    let offset = kickoff_offset(config.kickoff_offset_hours)?;
    let window = match &args.date {
        Some(date) => WeekWindow::for_date(parse_reference_date(date)?, offset)?,
        None => WeekWindow::starting_at(Utc::now(), offset)?,
    };
    info!("Week cutoff: {}", window.cutoff);

    let order = if args.ascending_ranks {
        RankOrder::Ascending
    } else {
        config.rank_order
    };

    let report = build_week_report(&fetched.games, &window, order);
    let teams = TeamNames::nfl();
    let output = render_report(
        &report,
        &teams,
        RenderOptions {
            highlight: !args.plain,
        },
    )?;

    print!("{output}");
    Ok(())
}

async fn load_odds(args: &Args, config: &Config) -> Result<FetchedOdds, AppError> {
    if let Some(path) = &args.from_file {
        return load_saved_odds(path).await;
    }

    let api_key = match &args.api_key {
        Some(key) => key.trim(),
        None => config.require_api_key()?,
    };
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    fetch_odds(&client, &config.api_domain, api_key).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_validate_args_accepts_defaults() {
        let args = Args::try_parse_from(["pickem_odds"]).unwrap();
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_rejects_bad_date() {
        let args = Args::try_parse_from(["pickem_odds", "--date", "16.10.2026"]).unwrap();
        assert!(matches!(
            validate_args(&args),
            Err(AppError::DateTimeParse(_))
        ));
    }

    #[test]
    fn test_validate_args_rejects_blank_key() {
        let args = Args::try_parse_from(["pickem_odds", "--api-key", "  "]).unwrap();
        assert!(matches!(validate_args(&args), Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn test_rankings_from_saved_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("odds.json");
        tokio::fs::write(
            &path,
            r#"[{"commence_time":"2026-10-18T20:25:00Z","home_team":"Dallas Cowboys","away_team":"Arizona Cardinals","bookmakers":[{"key":"dk","title":"DraftKings","markets":[{"key":"spreads","outcomes":[{"name":"Dallas Cowboys","price":1.9,"point":-3.0},{"name":"Arizona Cardinals","price":1.9,"point":3.0}]},{"key":"totals","outcomes":[{"name":"Over","price":1.9,"point":46.0}]}]}]}]"#,
        )
        .await
        .unwrap();
        let path = path.to_string_lossy().to_string();

        let args = Args::try_parse_from([
            "pickem_odds",
            "--from-file",
            path.as_str(),
            "--date",
            "2026-10-16",
            "--plain",
        ])
        .unwrap();

        // No API key needed offline
        let result = handle_rankings_command(&args, &Config::default()).await;
        assert!(result.is_ok(), "{result:?}");
    }

    #[tokio::test]
    async fn test_rankings_without_key_is_config_gap() {
        let args = Args::try_parse_from(["pickem_odds"]).unwrap();
        let result = handle_rankings_command(&args, &Config::default()).await;
        assert!(matches!(result, Err(AppError::MissingApiKey)));
    }
}
