//! Bounded Voronoi areas

use super::tessellation::Tessellation;
use crate::error::{MetricsError, Result};
use crate::geometry::FieldBounds;
use nalgebra::{DMatrix, Point2};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// In-field points needed before a tessellation is attempted.
pub const MIN_IN_FIELD_POINTS: usize = 1;

/// Output of one area computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoronoiAreas {
    /// Clipped cell area per input point, in input order
    pub areas: Vec<f64>,
    /// Whether each input point was inside the field (and tessellated)
    pub in_bounds: Vec<bool>,
    pub tessellation: Tessellation,
}

impl VoronoiAreas {
    /// Sum of all cell areas; close to the field area when every cell is bounded.
    pub fn total_area(&self) -> f64 {
        self.areas.iter().sum()
    }

    /// Share of the field controlled by each point.
    pub fn shares(&self) -> Vec<f64> {
        let field_area = self.tessellation.field().area();
        self.areas.iter().map(|a| a / field_area).collect()
    }

    /// In-field points whose cell was open or empty.
    pub fn degenerate_count(&self) -> usize {
        self.tessellation.cells().iter().filter(|c| !c.is_bounded()).count()
    }
}

/// Area of each point's Voronoi cell clipped to `field`.
///
/// Points outside the field (or non-finite) get area 0 and are not
/// tessellated. Open or empty cells of in-field points also get 0.
///
/// # Errors
/// `InsufficientPoints` when no point lies inside the field.
pub fn bounded_voronoi_areas(points: &[Point2<f64>], field: &FieldBounds) -> Result<VoronoiAreas> {
    field.validate()?;

    let in_bounds: Vec<bool> = points.iter().map(|p| field.contains(p)).collect();
    let (inside, source_index): (Vec<Point2<f64>>, Vec<usize>) = points
        .iter()
        .enumerate()
        .filter(|(i, _)| in_bounds[*i])
        .map(|(i, p)| (*p, i))
        .unzip();

    if inside.len() < MIN_IN_FIELD_POINTS {
        return Err(MetricsError::InsufficientPoints {
            required: MIN_IN_FIELD_POINTS,
            found: inside.len(),
        });
    }

    let tessellation = Tessellation::build(inside, source_index, *field);
    debug!(
        "voronoi: {} of {} points in field, {} sites, {} triangles",
        tessellation.n_original(),
        points.len(),
        tessellation.sites().len(),
        tessellation.n_triangles()
    );
    if tessellation.n_triangles() == 0 {
        warn!("voronoi: triangulation is empty, all areas are zero");
    }

    let mut areas = vec![0.0; points.len()];
    for i in 0..tessellation.n_original() {
        if !tessellation.cells()[i].is_bounded() {
            debug!("voronoi: degenerate cell for point {}", tessellation.source_index(i));
            continue;
        }
        areas[tessellation.source_index(i)] = tessellation.cell_area(i);
    }

    Ok(VoronoiAreas {
        areas,
        in_bounds,
        tessellation,
    })
}

/// [`bounded_voronoi_areas`] over an `N x 2` matrix of `[x, y]` rows.
pub fn bounded_voronoi_areas_matrix(
    points: &DMatrix<f64>,
    field: &FieldBounds,
) -> Result<VoronoiAreas> {
    if points.ncols() != 2 {
        return Err(MetricsError::ShapeMismatch {
            input: "points",
            expected_cols: 2,
            found_cols: points.ncols(),
        });
    }
    let points: Vec<Point2<f64>> = (0..points.nrows())
        .map(|i| Point2::new(points[(i, 0)], points[(i, 1)]))
        .collect();
    bounded_voronoi_areas(&points, field)
}
