//! Influence Field
//!
//! Directional influence of an agent over a target. Movement heading and body
//! orientation are blended through raw cosines; there is no field-of-view
//! gate, so the score is strictly positive and decays smoothly with distance.

use super::{decayed_magnitude, AgentState, DirectionalField, PairGeometry};
use crate::config::InfluenceConfig;
use crate::error::Result;
use nalgebra::{DMatrix, Point2};

/// Base term of the angular bracket
const BASE_WEIGHT: f64 = 2.0;
/// Weight of the heading cosine
const HEADING_WEIGHT: f64 = 0.7;
/// Weight of the orientation cosine
const ORIENTATION_WEIGHT: f64 = 0.3;

/// Attribute columns: `[dir_deg, orientation_deg, speed]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InfluenceField {
    config: InfluenceConfig,
}

impl InfluenceField {
    pub fn new(config: InfluenceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &InfluenceConfig {
        &self.config
    }

    /// Single-pair form in tracking layout: player `(x, y)`, heading `dir`,
    /// orientation `o` (degrees), speed `s`, target `(p_x, p_y)`.
    pub fn influence(
        &self,
        x: f64,
        y: f64,
        dir: f64,
        o: f64,
        s: f64,
        p_x: f64,
        p_y: f64,
    ) -> f64 {
        let agent = AgentState::new(x, y, o, s).with_direction(dir);
        self.score(&agent, &Point2::new(p_x, p_y))
    }

    /// Batched form: positions `N x 2`, attributes `N x 3` `[dir, o, s]`, targets `M x 2`.
    pub fn influence_batch(
        &self,
        positions: &DMatrix<f64>,
        attributes: &DMatrix<f64>,
        targets: &DMatrix<f64>,
    ) -> Result<DMatrix<f64>> {
        self.score_matrix(positions, attributes, targets)
    }

    /// Angular bracket, always within `[1, 3]`.
    #[inline]
    pub fn angular_weight(agent: &AgentState, geometry: &PairGeometry) -> f64 {
        let angle_dir = agent.direction_deg.to_radians() - geometry.bearing;
        let angle_o = agent.orientation_deg.to_radians() - geometry.bearing;
        BASE_WEIGHT + HEADING_WEIGHT * angle_dir.cos() + ORIENTATION_WEIGHT * angle_o.cos()
    }
}

impl DirectionalField for InfluenceField {
    const NAME: &'static str = "influence";
    const ATTRIBUTE_COLS: usize = 3;

    fn agent_from_row(position: Point2<f64>, attr: impl Fn(usize) -> f64) -> AgentState {
        AgentState::new(position.x, position.y, attr(1), attr(2)).with_direction(attr(0))
    }

    fn score(&self, agent: &AgentState, target: &Point2<f64>) -> f64 {
        let geometry = PairGeometry::between(&agent.position, target);
        Self::angular_weight(agent, &geometry)
            * decayed_magnitude(self.config.alpha, self.config.beta, agent.speed, geometry.distance)
    }
}
