//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `FAUXGRAM_CURRENT_USER` - Act as this seeded user ID (default: the
//!   seed's designated current user, `user1`)
//! - `FAUXGRAM_INSTANT` - `true`/`1` to skip the simulated latency

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Seeded user ID to act as, if overridden.
    pub current_user: Option<String>,
    /// Skip the simulated latency.
    pub instant: bool,
}

impl Config {
    /// Load configuration from the environment (and `.env`, if present).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `FAUXGRAM_INSTANT` is set to
    /// something other than a boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let current_user = std::env::var("FAUXGRAM_CURRENT_USER").ok();

        let instant = match std::env::var("FAUXGRAM_INSTANT") {
            Ok(value) => match value.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => {
                    return Err(ConfigError::InvalidEnvVar(
                        "FAUXGRAM_INSTANT",
                        format!("expected a boolean, got {other:?}"),
                    ));
                }
            },
            Err(_) => false,
        };

        Ok(Self {
            current_user,
            instant,
        })
    }
}
