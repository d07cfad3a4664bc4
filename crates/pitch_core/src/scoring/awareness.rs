//! Awareness Field
//!
//! How visible a target is to an agent's field of view. Targets outside the
//! cone score zero (hard cutoff); inside it the score falls off with the
//! cosine of the angular offset and exponentially with distance, boosted by
//! speed.

use super::{decayed_magnitude, AgentState, DirectionalField, PairGeometry};
use crate::config::AwarenessConfig;
use crate::error::Result;
use crate::geometry::angle::{normalize_radians, shorter_arc};
use nalgebra::{DMatrix, Point2};

/// Attribute columns: `[orientation_deg, speed]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AwarenessField {
    config: AwarenessConfig,
    half_fov: f64,
}

impl Default for AwarenessField {
    fn default() -> Self {
        let config = AwarenessConfig::default();
        Self { config, half_fov: config.half_fov_rad() }
    }
}

impl AwarenessField {
    pub fn new(config: AwarenessConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, half_fov: config.half_fov_rad() })
    }

    pub fn config(&self) -> &AwarenessConfig {
        &self.config
    }

    /// Half the field of view, in radians.
    pub fn half_fov(&self) -> f64 {
        self.half_fov
    }

    /// Single-pair form in tracking layout: player `(x, y)`, orientation `o`
    /// (degrees), speed `s`, target `(p_x, p_y)`.
    pub fn awareness(&self, x: f64, y: f64, o: f64, s: f64, p_x: f64, p_y: f64) -> f64 {
        self.score(&AgentState::new(x, y, o, s), &Point2::new(p_x, p_y))
    }

    /// Batched form: positions `N x 2`, attributes `N x 2` `[o, s]`, targets `M x 2`.
    pub fn awareness_batch(
        &self,
        positions: &DMatrix<f64>,
        attributes: &DMatrix<f64>,
        targets: &DMatrix<f64>,
    ) -> Result<DMatrix<f64>> {
        self.score_matrix(positions, attributes, targets)
    }

    /// Angular offset between the agent's facing and the target, in `[0, π]`.
    #[inline]
    pub fn angle_offset(agent: &AgentState, geometry: &PairGeometry) -> f64 {
        let orientation = normalize_radians(agent.orientation_deg.to_radians());
        shorter_arc(orientation - geometry.bearing)
    }
}

impl DirectionalField for AwarenessField {
    const NAME: &'static str = "awareness";
    const ATTRIBUTE_COLS: usize = 2;

    fn agent_from_row(position: Point2<f64>, attr: impl Fn(usize) -> f64) -> AgentState {
        AgentState::new(position.x, position.y, attr(0), attr(1))
    }

    fn score(&self, agent: &AgentState, target: &Point2<f64>) -> f64 {
        let geometry = PairGeometry::between(&agent.position, target);
        let offset = Self::angle_offset(agent, &geometry);
        if offset > self.half_fov {
            return 0.0;
        }
        let magnitude =
            decayed_magnitude(self.config.alpha, self.config.beta, agent.speed, geometry.distance);
        (magnitude * offset.cos()).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MetricsError;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_reference_scenario() {
        // Facing north, target due east: offset is exactly half the 180° cone
        let field = AwarenessField::default();
        let score = field.awareness(0.0, 0.0, 0.0, 0.0, 10.0, 0.0);
        let expected = (-0.4f64).exp() * FRAC_PI_2.cos();
        assert!((score - expected.max(0.0)).abs() < 1e-12);
    }

    #[test]
    fn test_target_ahead_is_unclamped_maximum() {
        let field = AwarenessField::default();
        // 90° in field convention faces +x
        let score = field.awareness(0.0, 0.0, 90.0, 5.0, 10.0, 0.0);
        let expected = (1.0 + 0.1 * 5.0) * (-0.04f64 * 10.0).exp();
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_target_behind_is_zero() {
        let field = AwarenessField::default();
        assert_eq!(field.awareness(0.0, 0.0, 90.0, 5.0, -10.0, 0.0), 0.0);
        assert_eq!(field.awareness(0.0, 0.0, 0.0, 0.0, 0.0, -3.0), 0.0);
    }

    #[test]
    fn test_narrow_cone_cuts_off_side_targets() {
        let narrow = AwarenessField::new(AwarenessConfig {
            field_of_view_deg: 60.0,
            ..Default::default()
        })
        .unwrap();
        // 45° off the facing direction, outside a ±30° cone
        assert_eq!(narrow.awareness(0.0, 0.0, 0.0, 0.0, 5.0, 5.0), 0.0);
        // 20° off, inside the cone
        let (dx, dy) = (20f64.to_radians().sin(), 20f64.to_radians().cos());
        assert!(narrow.awareness(0.0, 0.0, 0.0, 0.0, dx * 5.0, dy * 5.0) > 0.0);
    }

    #[test]
    fn test_orientation_outside_one_turn_is_wrapped() {
        let field = AwarenessField::default();
        let base = field.awareness(0.0, 0.0, 90.0, 1.0, 8.0, 2.0);
        assert!((field.awareness(0.0, 0.0, 450.0, 1.0, 8.0, 2.0) - base).abs() < 1e-12);
        assert!((field.awareness(0.0, 0.0, -270.0, 1.0, 8.0, 2.0) - base).abs() < 1e-12);
    }

    #[test]
    fn test_decreases_with_distance() {
        let field = AwarenessField::default();
        let mut prev = f64::INFINITY;
        for d in [1.0, 2.0, 5.0, 10.0, 40.0] {
            let s = field.awareness(0.0, 0.0, 45.0, 2.0, d, d);
            assert!(s < prev);
            prev = s;
        }
    }

    #[test]
    fn test_batch_matches_single() {
        let field = AwarenessField::default();
        let positions = DMatrix::from_row_slice(3, 2, &[0.0, 0.0, 10.0, 5.0, 50.0, 20.0]);
        let attributes = DMatrix::from_row_slice(3, 2, &[0.0, 0.0, 135.0, 4.0, 300.0, 7.5]);
        let targets = DMatrix::from_row_slice(4, 2, &[10.0, 0.0, 0.0, 10.0, 12.0, 3.0, 60.0, 30.0]);

        let batch = field.awareness_batch(&positions, &attributes, &targets).unwrap();
        assert_eq!(batch.shape(), (3, 4));
        for i in 0..3 {
            for j in 0..4 {
                let single = field.awareness(
                    positions[(i, 0)],
                    positions[(i, 1)],
                    attributes[(i, 0)],
                    attributes[(i, 1)],
                    targets[(j, 0)],
                    targets[(j, 1)],
                );
                assert_eq!(batch[(i, j)], single);
                assert!(batch[(i, j)] >= 0.0);
            }
        }
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let field = AwarenessField::default();
        let n = 80;
        let m = 90;
        let positions = DMatrix::from_fn(n, 2, |i, c| (i * 7 + c * 3) as f64 % 120.0);
        let attributes = DMatrix::from_fn(n, 2, |i, c| {
            if c == 0 {
                (i * 37) as f64 % 360.0
            } else {
                (i % 9) as f64
            }
        });
        let targets = DMatrix::from_fn(m, 2, |j, c| (j * 11 + c * 5) as f64 % 53.0);
        assert!(n * m >= crate::scoring::PARALLEL_MIN_PAIRS);

        let batch = field.awareness_batch(&positions, &attributes, &targets).unwrap();
        for i in (0..n).step_by(13) {
            for j in (0..m).step_by(7) {
                let agent = AwarenessField::agent_from_row(
                    Point2::new(positions[(i, 0)], positions[(i, 1)]),
                    |c| attributes[(i, c)],
                );
                let t = Point2::new(targets[(j, 0)], targets[(j, 1)]);
                assert_eq!(batch[(i, j)], field.score(&agent, &t));
            }
        }
    }

    #[test]
    fn test_shape_errors() {
        let field = AwarenessField::default();
        let positions = DMatrix::zeros(2, 2);
        let targets = DMatrix::zeros(3, 2);

        let bad_attrs = DMatrix::zeros(2, 3);
        let err = field.awareness_batch(&positions, &bad_attrs, &targets).unwrap_err();
        assert_eq!(
            err,
            MetricsError::ShapeMismatch {
                input: "attributes",
                expected_cols: 2,
                found_cols: 3
            }
        );

        let short_attrs = DMatrix::zeros(1, 2);
        let err = field.awareness_batch(&positions, &short_attrs, &targets).unwrap_err();
        assert_eq!(
            err,
            MetricsError::LengthMismatch {
                expected: 2,
                found: 1
            }
        );

        let bad_targets = DMatrix::zeros(3, 1);
        let err = field
            .awareness_batch(&positions, &DMatrix::zeros(2, 2), &bad_targets)
            .unwrap_err();
        assert!(matches!(err, MetricsError::ShapeMismatch { input: "targets", .. }));
    }

    #[test]
    fn test_empty_targets_give_empty_columns() {
        let field = AwarenessField::default();
        let out = field
            .awareness_batch(&DMatrix::zeros(2, 2), &DMatrix::zeros(2, 2), &DMatrix::zeros(0, 2))
            .unwrap();
        assert_eq!(out.shape(), (2, 0));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let cfg = AwarenessConfig {
            field_of_view_deg: 400.0,
            ..Default::default()
        };
        assert!(AwarenessField::new(cfg).is_err());
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: awareness is never negative
            #[test]
            fn prop_awareness_non_negative(
                x in -50.0f64..150.0, y in -50.0f64..100.0,
                o in -720.0f64..720.0, s in 0.0f64..12.0,
                px in -50.0f64..150.0, py in -50.0f64..100.0,
                fov in 1.0f64..360.0,
            ) {
                let cfg = AwarenessConfig {
                    field_of_view_deg: fov,
                    ..Default::default()
                };
                let field = AwarenessField::new(cfg).unwrap();
                prop_assert!(field.awareness(x, y, o, s, px, py) >= 0.0);
            }

            /// Property: the offset is always on the shorter arc
            #[test]
            fn prop_offset_in_half_turn(
                o in -1000.0f64..1000.0,
                px in -20.0f64..20.0,
                py in -20.0f64..20.0,
            ) {
                let agent = AgentState::new(0.0, 0.0, o, 0.0);
                let g = PairGeometry::between(&agent.position, &Point2::new(px, py));
                let off = AwarenessField::angle_offset(&agent, &g);
                prop_assert!((0.0..=std::f64::consts::PI).contains(&off));
            }
        }
    }
}
