use crate::config::Settings;
use std::str::FromStr;
use tracing::Level;

/// Install the global subscriber at the level named by `settings.log_level`.
pub fn init_from_settings(
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging(&settings.log_level)
}

/// Install a global fmt subscriber at `level` (`"info"`, `"debug"`, ...).
///
/// Unknown levels fall back to INFO. Fails if a subscriber is already set.
pub fn init_logging(level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_max_level(parse_level(level))
        .try_init()?;
    tracing::info!("Logging initialized at level: {}", level);
    Ok(())
}

fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}
