//! # Metrics Configuration
//!
//! Construction-time parameters for every metric, bundled so a pipeline can
//! load them once from JSON.
//!
//! ## Usage
//! ```rust
//! use pitch_core::config::MetricsConfig;
//!
//! let config = MetricsConfig::default();
//! let soccer = MetricsConfig::association_football();
//! assert!(soccer.field.area() < config.field.area());
//! ```

mod awareness_config;
mod influence_config;

pub use awareness_config::AwarenessConfig;
pub use influence_config::InfluenceConfig;

use crate::error::{MetricsError, Result};
use crate::geometry::FieldBounds;
use serde::{Deserialize, Serialize};

/// All metric parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MetricsConfig {
    #[serde(default)]
    pub awareness: AwarenessConfig,
    #[serde(default)]
    pub influence: InfluenceConfig,
    #[serde(default)]
    pub field: FieldBounds,
}

impl MetricsConfig {
    /// 120 x 53.3 yard field (default)
    pub fn american_football() -> Self {
        Self::default()
    }

    /// 105 x 68 m pitch
    pub fn association_football() -> Self {
        Self {
            field: FieldBounds::association_football(),
            ..Self::default()
        }
    }

    /// Parse from JSON and validate. Missing sections fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: MetricsConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.awareness.validate()?;
        self.influence.validate()?;
        self.field.validate()?;
        Ok(())
    }
}

fn check_rate(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(MetricsError::InvalidParameter(format!(
            "{} must be finite and non-negative, got {}",
            name, value
        )));
    }
    Ok(())
}

// ========== Tests ==========
