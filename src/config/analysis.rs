//! Analysis engine configuration

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::SessionSweeperConfig;
use crate::domain::ahp::{AhpEngine, ConsistencyPolicy, DEFAULT_CONSISTENCY_THRESHOLD};

/// Longest accepted idle TTL (30 days)
const MAX_SESSION_IDLE_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Engine consistency handling and wizard session retention
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// `ignore`, `warn` or `reject`
    #[serde(default)]
    pub consistency_policy: ConsistencyPolicy,

    /// Consistency ratio above which judgments count as inconsistent
    #[serde(default = "default_threshold")]
    pub consistency_threshold: f64,

    /// Sessions not updated for this many seconds are evicted
    #[serde(default = "default_session_idle_ttl")]
    pub session_idle_ttl_secs: u64,

    /// Seconds between eviction sweeps
    #[serde(default = "default_session_sweep_interval")]
    pub session_sweep_interval_secs: u64,
}

impl AnalysisConfig {
    /// Engine configured from these settings
    pub fn engine(&self) -> AhpEngine {
        AhpEngine::new(self.consistency_policy, self.consistency_threshold)
    }

    /// Sweeper timing from these settings
    pub fn sweeper(&self) -> SessionSweeperConfig {
        SessionSweeperConfig {
            idle_ttl: Duration::from_secs(self.session_idle_ttl_secs),
            sweep_interval: Duration::from_secs(self.session_sweep_interval_secs),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let t = self.consistency_threshold;
        if !t.is_finite() || t <= 0.0 || t > 1.0 {
            return Err(ValidationError::InvalidConsistencyThreshold(t));
        }
        if self.session_idle_ttl_secs == 0 || self.session_idle_ttl_secs > MAX_SESSION_IDLE_TTL_SECS
        {
            return Err(ValidationError::InvalidSessionTtl);
        }
        if self.session_sweep_interval_secs == 0 {
            return Err(ValidationError::InvalidSweepInterval);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            consistency_policy: ConsistencyPolicy::default(),
            consistency_threshold: default_threshold(),
            session_idle_ttl_secs: default_session_idle_ttl(),
            session_sweep_interval_secs: default_session_sweep_interval(),
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_CONSISTENCY_THRESHOLD
}

fn default_session_idle_ttl() -> u64 {
    24 * 60 * 60
}

fn default_session_sweep_interval() -> u64 {
    5 * 60
}
