//! Saved raw odds responses.
//!
//! Every live request spends provider quota, so a response can be written to
//! disk once and replayed while tuning the week window or the output.

use crate::error::AppError;
use crate::odds_fetcher::api::parse_json_body;
use crate::odds_fetcher::models::{FetchedOdds, OddsGame};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Writes a raw odds response body to `path`, creating parent directories as needed.
pub async fn save_raw_response(path: &str, body: &str) -> Result<(), AppError> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).await?;
    }

    let mut file = fs::File::create(path).await?;
    file.write_all(body.as_bytes()).await?;
    file.flush().await?;

    info!("Saved raw odds response ({} bytes) to {path}", body.len());
    Ok(())
}

/// Loads games from a previously saved raw odds response.
///
/// No quota information is available for saved responses.
pub async fn load_saved_odds(path: &str) -> Result<FetchedOdds, AppError> {
    let body = fs::read_to_string(path).await?;
    let games: Vec<OddsGame> = parse_json_body(&body, path)?;

    info!("Loaded {} games from saved response {path}", games.len());
    Ok(FetchedOdds {
        games,
        quota: None,
        raw_body: body,
    })
}
