//! Field boundary rectangle

use crate::error::{MetricsError, Result};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Field dimensions used by the presets.
pub mod dims {
    /// American football field length including end zones (yards)
    pub const AMERICAN_LENGTH_YD: f64 = 120.0;
    /// American football field width (yards)
    pub const AMERICAN_WIDTH_YD: f64 = 53.3;
    /// Association football pitch length (meters)
    pub const ASSOCIATION_LENGTH_M: f64 = 105.0;
    /// Association football pitch width (meters)
    pub const ASSOCIATION_WIDTH_M: f64 = 68.0;
}

/// Axis-aligned field rectangle `(x_min, x_max, y_min, y_max)`.
///
/// Containment is inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for FieldBounds {
    fn default() -> Self {
        Self::american_football()
    }
}

impl FieldBounds {
    /// Build a validated rectangle.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        let bounds = Self { x_min, x_max, y_min, y_max };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn american_football() -> Self {
        Self {
            x_min: 0.0,
            x_max: dims::AMERICAN_LENGTH_YD,
            y_min: 0.0,
            y_max: dims::AMERICAN_WIDTH_YD,
        }
    }

    pub fn association_football() -> Self {
        Self {
            x_min: 0.0,
            x_max: dims::ASSOCIATION_LENGTH_M,
            y_min: 0.0,
            y_max: dims::ASSOCIATION_WIDTH_M,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let all_finite = [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(MetricsError::InvalidParameter(format!(
                "field bounds must be finite, got {:?}",
                self
            )));
        }
        if self.x_min >= self.x_max || self.y_min >= self.y_max {
            return Err(MetricsError::InvalidParameter(format!(
                "field bounds must satisfy x_min < x_max and y_min < y_max, got {:?}",
                self
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    #[inline]
    pub fn contains(&self, p: &Point2<f64>) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    /// Reflections of `p` across the left, right, bottom and top edges, in that order.
    pub fn mirrors(&self, p: &Point2<f64>) -> [Point2<f64>; 4] {
        [
            Point2::new(2.0 * self.x_min - p.x, p.y),
            Point2::new(2.0 * self.x_max - p.x, p.y),
            Point2::new(p.x, 2.0 * self.y_min - p.y),
            Point2::new(p.x, 2.0 * self.y_max - p.y),
        ]
    }

    /// Corners in counter-clockwise order starting at `(x_min, y_min)`.
    pub fn corners(&self) -> [Point2<f64>; 4] {
        [
            Point2::new(self.x_min, self.y_min),
            Point2::new(self.x_max, self.y_min),
            Point2::new(self.x_max, self.y_max),
            Point2::new(self.x_min, self.y_max),
        ]
    }
}
