//! Directional scoring of targets by agents
//!
//! Both scorers reduce to a per-pair kernel over distance and bearing. The
//! batched N x M form is a default method on [`DirectionalField`] that calls the
//! same kernel for every pair, so the single and batched paths cannot diverge.
//!
//! Batched layout (rows are agents / targets):
//! - positions: `N x 2` `[x, y]`
//! - attributes: `N x ATTRIBUTE_COLS` (scorer specific)
//! - targets: `M x 2` `[p_x, p_y]`

mod awareness;
mod influence;

pub use awareness::AwarenessField;
pub use influence::InfluenceField;

use crate::error::{MetricsError, Result};
use crate::geometry::angle;
use nalgebra::{DMatrix, Point2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Pair count above which batched scoring fans rows out over rayon.
pub const PARALLEL_MIN_PAIRS: usize = 4096;

/// Tracking state of one agent. Angles are degrees in field convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    pub position: Point2<f64>,
    /// Body orientation (degrees, clockwise from north)
    pub orientation_deg: f64,
    /// Movement heading (degrees, clockwise from north)
    pub direction_deg: f64,
    pub speed: f64,
}

impl AgentState {
    /// Agent whose heading equals its orientation.
    pub fn new(x: f64, y: f64, orientation_deg: f64, speed: f64) -> Self {
        Self {
            position: Point2::new(x, y),
            orientation_deg,
            direction_deg: orientation_deg,
            speed,
        }
    }

    pub fn with_direction(mut self, direction_deg: f64) -> Self {
        self.direction_deg = direction_deg;
        self
    }
}

/// Distance and field-convention bearing from an agent to a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairGeometry {
    pub distance: f64,
    /// Radians in `[0, 2π)`
    pub bearing: f64,
}

impl PairGeometry {
    #[inline]
    pub fn between(agent: &Point2<f64>, target: &Point2<f64>) -> Self {
        Self {
            distance: nalgebra::distance(agent, target),
            bearing: angle::bearing(agent, target),
        }
    }
}

/// `(1 + alpha * s) * exp(-beta * d)`, the magnitude shared by both scorers.
///
/// Negative speeds are treated as standing still.
#[inline]
pub(crate) fn decayed_magnitude(alpha: f64, beta: f64, speed: f64, distance: f64) -> f64 {
    (1.0 + alpha * speed.max(0.0)) * (-beta * distance).exp()
}

/// A score of every target by every agent, built from one pair kernel.
pub trait DirectionalField: Sync {
    /// Name used in logs and shape errors
    const NAME: &'static str;
    /// Columns expected in the per-agent attribute matrix
    const ATTRIBUTE_COLS: usize;

    /// Build an agent from its position and attribute row (`attr(c)` reads column `c`).
    fn agent_from_row(position: Point2<f64>, attr: impl Fn(usize) -> f64) -> AgentState;

    /// Score of `target` for `agent`. Always `>= 0`.
    fn score(&self, agent: &AgentState, target: &Point2<f64>) -> f64;

    /// N x M score matrix.
    ///
    /// # Errors
    /// `ShapeMismatch` when a matrix has the wrong column count,
    /// `LengthMismatch` when positions and attributes disagree on N.
    fn score_matrix(
        &self,
        positions: &DMatrix<f64>,
        attributes: &DMatrix<f64>,
        targets: &DMatrix<f64>,
    ) -> Result<DMatrix<f64>> {
        check_cols("positions", positions, 2)?;
        check_cols("attributes", attributes, Self::ATTRIBUTE_COLS)?;
        check_cols("targets", targets, 2)?;
        if attributes.nrows() != positions.nrows() {
            return Err(MetricsError::LengthMismatch {
                expected: positions.nrows(),
                found: attributes.nrows(),
            });
        }

        let n = positions.nrows();
        let m = targets.nrows();
        let agents: Vec<AgentState> = (0..n)
            .map(|i| {
                let position = Point2::new(positions[(i, 0)], positions[(i, 1)]);
                Self::agent_from_row(position, |c| attributes[(i, c)])
            })
            .collect();
        let target_points: Vec<Point2<f64>> =
            (0..m).map(|j| Point2::new(targets[(j, 0)], targets[(j, 1)])).collect();

        let parallel = n * m >= PARALLEL_MIN_PAIRS;
        debug!("{} matrix {}x{} (parallel: {})", Self::NAME, n, m, parallel);

        let scores: Vec<f64> = if parallel {
            agents
                .par_iter()
                .flat_map_iter(|agent| target_points.iter().map(move |t| self.score(agent, t)))
                .collect()
        } else {
            agents
                .iter()
                .flat_map(|agent| target_points.iter().map(move |t| self.score(agent, t)))
                .collect()
        };

        Ok(DMatrix::from_row_slice(n, m, &scores))
    }
}

fn check_cols(input: &'static str, matrix: &DMatrix<f64>, expected: usize) -> Result<()> {
    if matrix.ncols() != expected {
        return Err(MetricsError::ShapeMismatch {
            input,
            expected_cols: expected,
            found_cols: matrix.ncols(),
        });
    }
    Ok(())
}
