//! Streakfit: workout streaks, a yearly consistency grid and progress stats
//!
//! The analytics (`streaks`, `consistency`, `progress`) are pure functions
//! over a borrowed slice of workout records. `store` persists the collection
//! and `commands` is the surface a UI calls into.

pub mod commands;
pub mod config;
pub mod consistency;
pub mod dates;
pub mod db;
pub mod models;
pub mod progress;
pub mod store;
pub mod streaks;

#[cfg(test)]
mod test_utils;

use config::Config;
use db::AppState;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use consistency::generate_consistency_grid;
pub use progress::calculate_progress_stats;
pub use streaks::calculate_streaks;

/// Install the global tracing subscriber, logging to stderr
pub fn init_logging(filter: &str) {
  let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

  let installed = tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
    .try_init();

  // A subscriber from an earlier call stays in place
  if let Err(e) = installed {
    tracing::debug!(error = %e, "Tracing subscriber already installed");
  }
}

/// Open the store described by `config` and return shared app state
pub async fn open(config: &Config) -> Result<Arc<AppState>, Box<dyn std::error::Error>> {
  let pool = db::initialize_db(config).await?;
  Ok(Arc::new(AppState::new(pool, config.storage_key.clone())))
}

/// Load configuration, open the store and print the dashboard as JSON
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
  let config = Config::from_env()?;
  init_logging(&config.log_filter);

  let state = open(&config).await?;
  tracing::info!(key = %state.store.key(), "Workout store ready");

  let dashboard = commands::analytics::get_dashboard(&state).await?;
  println!("{}", serde_json::to_string_pretty(&dashboard)?);

  Ok(())
}
