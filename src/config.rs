//! Runtime configuration loaded from environment variables (and `.env`)

use std::env;
use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "streakfit.db";
pub const DEFAULT_STORAGE_KEY: &str = "streakfit_workout_data";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// SQLite database file
  pub db_path: PathBuf,
  /// Key the workout document is stored under
  pub storage_key: String,
  /// `tracing_subscriber::EnvFilter` directive
  pub log_filter: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      db_path: PathBuf::from(DEFAULT_DB_PATH),
      storage_key: DEFAULT_STORAGE_KEY.to_string(),
      log_filter: DEFAULT_LOG_FILTER.to_string(),
    }
  }
}

impl Config {
  /// Load configuration, falling back to defaults for unset variables.
  ///
  /// - `STREAKFIT_DB_PATH`
  /// - `STREAKFIT_STORAGE_KEY`
  /// - `STREAKFIT_LOG`
  pub fn from_env() -> Result<Self, ConfigError> {
    dotenvy::dotenv().ok();

    let storage_key = env::var("STREAKFIT_STORAGE_KEY")
      .map(|v| v.trim().to_string())
      .unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string());
    if storage_key.is_empty() {
      return Err(ConfigError::Invalid("STREAKFIT_STORAGE_KEY", "must not be empty".into()));
    }

    Ok(Self {
      db_path: env::var("STREAKFIT_DB_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH)),
      storage_key,
      log_filter: env::var("STREAKFIT_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
    })
  }

  pub fn database_url(&self) -> String {
    format!("sqlite://{}?mode=rwc", self.db_path.display())
  }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Invalid value for {0}: {1}")]
  Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn test_defaults_when_unset() {
    temp_env::with_vars_unset(
      ["STREAKFIT_DB_PATH", "STREAKFIT_STORAGE_KEY", "STREAKFIT_LOG"],
      || {
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config, Config::default());
      },
    );
  }

  #[test]
  #[serial]
  fn test_reads_overrides() {
    temp_env::with_vars(
      [
        ("STREAKFIT_DB_PATH", Some("/tmp/streaks.db")),
        ("STREAKFIT_STORAGE_KEY", Some("  alt_key ")),
        ("STREAKFIT_LOG", Some("streakfit=debug")),
      ],
      || {
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.db_path, PathBuf::from("/tmp/streaks.db"));
        assert_eq!(config.storage_key, "alt_key");
        assert_eq!(config.log_filter, "streakfit=debug");
        assert_eq!(config.database_url(), "sqlite:///tmp/streaks.db?mode=rwc");
      },
    );
  }

  #[test]
  #[serial]
  fn test_rejects_blank_storage_key() {
    temp_env::with_var("STREAKFIT_STORAGE_KEY", Some("   "), || {
      let err = Config::from_env().unwrap_err();
      assert!(err.to_string().contains("STREAKFIT_STORAGE_KEY"));
    });
  }
}
