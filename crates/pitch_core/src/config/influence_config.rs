//! Influence Configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Heading/orientation influence parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfluenceConfig {
    /// Distance decay rate (default: 0.075)
    pub beta: f64,
    /// Speed boost coefficient (default: 0.1)
    pub alpha: f64,
}

impl Default for InfluenceConfig {
    fn default() -> Self {
        Self {
            beta: 0.075,
            alpha: 0.1,
        }
    }
}

impl InfluenceConfig {
    pub fn validate(&self) -> Result<()> {
        super::check_rate("influence beta", self.beta)?;
        super::check_rate("influence alpha", self.alpha)?;
        Ok(())
    }
}
