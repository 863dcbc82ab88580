//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AHP_COMPARE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ahp_compare::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//!
//! println!("Server running on {}", config.server.socket_addr()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod analysis;
mod error;
mod server;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid
/// development configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// AHP engine settings and session retention
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AHP_COMPARE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_COMPARE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `AHP_COMPARE__ANALYSIS__CONSISTENCY_POLICY=warn` -> `analysis.consistency_policy = warn`
    /// - `AHP_COMPARE__ANALYSIS__SESSION_IDLE_TTL_SECS=3600` -> `analysis.session_idle_ttl_secs = 3600`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AHP_COMPARE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.analysis.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::ConsistencyPolicy;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "AHP_COMPARE__SERVER__PORT",
        "AHP_COMPARE__SERVER__ENVIRONMENT",
        "AHP_COMPARE__ANALYSIS__CONSISTENCY_POLICY",
        "AHP_COMPARE__ANALYSIS__CONSISTENCY_THRESHOLD",
        "AHP_COMPARE__ANALYSIS__SESSION_IDLE_TTL_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.analysis.consistency_policy, ConsistencyPolicy::Ignore);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_COMPARE__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_COMPARE__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }

    #[test]
    fn test_analysis_section() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_COMPARE__ANALYSIS__CONSISTENCY_POLICY", "reject");
        env::set_var("AHP_COMPARE__ANALYSIS__CONSISTENCY_THRESHOLD", "0.2");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.analysis.consistency_policy, ConsistencyPolicy::Reject);
        assert_eq!(config.analysis.consistency_threshold, 0.2);
    }

    #[test]
    fn test_session_retention_from_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_COMPARE__ANALYSIS__SESSION_IDLE_TTL_SECS", "900");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.analysis.session_idle_ttl_secs, 900);
        assert_eq!(config.analysis.session_sweep_interval_secs, 300);
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let config = AppConfig {
            analysis: AnalysisConfig {
                consistency_threshold: 2.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidConsistencyThreshold(2.0))
        );
    }
}
