//! Awareness Configuration

use crate::error::{MetricsError, Result};
use serde::{Deserialize, Serialize};

/// Field-of-view awareness parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwarenessConfig {
    /// Distance decay rate (default: 0.04)
    pub beta: f64,
    /// Speed boost coefficient (default: 0.1)
    pub alpha: f64,
    /// Total cone width in degrees, centred on orientation (default: 180)
    pub field_of_view_deg: f64,
}

impl Default for AwarenessConfig {
    fn default() -> Self {
        Self {
            beta: 0.04,
            alpha: 0.1,
            field_of_view_deg: 180.0,
        }
    }
}

impl AwarenessConfig {
    /// Half cone width in radians.
    #[inline]
    pub fn half_fov_rad(&self) -> f64 {
        (self.field_of_view_deg / 2.0).to_radians()
    }

    pub fn validate(&self) -> Result<()> {
        super::check_rate("awareness beta", self.beta)?;
        super::check_rate("awareness alpha", self.alpha)?;
        let fov = self.field_of_view_deg;
        if !fov.is_finite() || fov <= 0.0 || fov > 360.0 {
            return Err(MetricsError::InvalidParameter(format!(
                "field_of_view_deg must be in (0, 360], got {}",
                fov
            )));
        }
        Ok(())
    }
}
