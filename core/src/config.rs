//! Session Configuration
//!
//! Every simulated delay in the session lives here, so hosts and tests can
//! shorten them without patching dispatch logic. Values load with the
//! following priority (highest first):
//!
//! 1. Environment variables (`BREWSHOP_*`)
//! 2. TOML configuration file
//! 3. Default values
//!
//! The configuration file follows the XDG Base Directory layout:
//! `$XDG_CONFIG_HOME/brewshop/brewshop.toml` (typically
//! `~/.config/brewshop/brewshop.toml`).
//!
//! # Example Configuration
//!
//! ```toml
//! welcome_ms = 2000
//! added_notice_ms = 2000
//! login_processing_ms = 1000
//! checkout_processing_ms = 2000
//! checkout_complete_ms = 3000
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Delays for every timed behavior in the session, in milliseconds.
///
/// Defaults match the shipped experience; tests and demos shrink them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Welcome screen auto-dismiss delay
    pub welcome_ms: u64,
    /// How long the shop's "added to cart" notice stays visible
    pub added_notice_ms: u64,
    /// Simulated login latency
    pub login_processing_ms: u64,
    /// Simulated payment processing latency
    pub checkout_processing_ms: u64,
    /// How long the checkout completion screen stays visible
    pub checkout_complete_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            welcome_ms: 2000,
            added_notice_ms: 2000,
            login_processing_ms: 1000,
            checkout_processing_ms: 2000,
            checkout_complete_ms: 3000,
        }
    }
}

impl SessionConfig {
    /// Load configuration: defaults, then the XDG config file if present,
    /// then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match default_config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path)?,
            _ => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded session config");
        Ok(config)
    }

    /// Apply `BREWSHOP_*` environment variable overrides
    fn apply_env(&mut self) {
        apply_env_ms("BREWSHOP_WELCOME_MS", &mut self.welcome_ms);
        apply_env_ms("BREWSHOP_ADDED_NOTICE_MS", &mut self.added_notice_ms);
        apply_env_ms("BREWSHOP_LOGIN_PROCESSING_MS", &mut self.login_processing_ms);
        apply_env_ms(
            "BREWSHOP_CHECKOUT_PROCESSING_MS",
            &mut self.checkout_processing_ms,
        );
        apply_env_ms(
            "BREWSHOP_CHECKOUT_COMPLETE_MS",
            &mut self.checkout_complete_ms,
        );
    }

    /// Reject degenerate delays
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("welcome_ms", self.welcome_ms),
            ("added_notice_ms", self.added_notice_ms),
            ("login_processing_ms", self.login_processing_ms),
            ("checkout_processing_ms", self.checkout_processing_ms),
            ("checkout_complete_ms", self.checkout_complete_ms),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be greater than zero"
                )));
            }
        }
        Ok(())
    }

    /// Welcome auto-dismiss delay
    pub fn welcome_delay(&self) -> Duration {
        Duration::from_millis(self.welcome_ms)
    }

    /// "Added to cart" notice lifetime
    pub fn added_notice_delay(&self) -> Duration {
        Duration::from_millis(self.added_notice_ms)
    }

    /// Simulated login latency
    pub fn login_processing_delay(&self) -> Duration {
        Duration::from_millis(self.login_processing_ms)
    }

    /// Simulated payment latency
    pub fn checkout_processing_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_processing_ms)
    }

    /// Checkout completion display time
    pub fn checkout_complete_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_complete_ms)
    }
}

/// Default XDG path for the config file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("brewshop").join("brewshop.toml"))
}

fn apply_env_ms(var: &str, target: &mut u64) {
    if let Ok(raw) = std::env::var(var) {
        match raw.parse::<u64>() {
            Ok(value) => *target = value,
            Err(_) => tracing::warn!(var, raw, "ignoring unparseable delay override"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_observed_timings() {
        let config = SessionConfig::default();
        assert_eq!(config.welcome_ms, 2000);
        assert_eq!(config.added_notice_ms, 2000);
        assert_eq!(config.login_processing_ms, 1000);
        assert_eq!(config.checkout_processing_ms, 2000);
        assert_eq!(config.checkout_complete_ms, 3000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: SessionConfig = toml::from_str("welcome_ms = 50").unwrap();
        assert_eq!(config.welcome_ms, 50);
        assert_eq!(config.checkout_complete_ms, 3000);
    }

    #[test]
    fn test_zero_delay_rejected() {
        let config: SessionConfig = toml::from_str("login_processing_ms = 0").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("login_processing_ms"));
    }

    #[test]
    fn test_duration_accessors() {
        let config = SessionConfig::default();
        assert_eq!(config.welcome_delay(), Duration::from_millis(2000));
        assert_eq!(config.checkout_complete_delay(), Duration::from_millis(3000));
    }
}
