// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_command};
use commands::{
    handle_config_update_command, handle_list_config_command, handle_rankings_command,
    validate_args,
};
use pickem_odds::config::Config;
use pickem_odds::constants::exit_codes;
use pickem_odds::error::AppError;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // The guard must outlive every command so buffered logs are flushed
    let _guard = match logging::setup_logging(&args).await {
        Ok((log_file_path, guard)) => {
            tracing::info!("Logs are being written to: {log_file_path}");
            Some(guard)
        }
        Err(e) => {
            eprintln!("{e}");
            None
        }
    };

    match run(&args).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS),
        Err(e) => {
            tracing::error!("Run failed: {e}");
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(args: &Args) -> Result<(), AppError> {
    validate_args(args)?;

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_command(args) {
        return handle_config_update_command(args).await;
    }

    let config = Config::load().await?;
    handle_rankings_command(args, &config).await
}
