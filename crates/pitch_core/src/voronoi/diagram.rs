//! Stateful wrapper keeping the last tessellation for rendering

use super::areas::{bounded_voronoi_areas_matrix, VoronoiAreas};
use super::render::{render_svg, SvgStyle};
use super::tessellation::Tessellation;
use crate::error::{MetricsError, Result};
use crate::geometry::FieldBounds;
use nalgebra::DMatrix;

/// Voronoi area calculator for a fixed field.
///
/// Starts uncomputed; a successful [`VoronoiDiagram::compute_voronoi_areas`]
/// stores the tessellation so it can be rendered afterwards. A failed call
/// leaves the previous result untouched. Confine each instance to one
/// computation at a time.
#[derive(Debug, Clone, Default)]
pub struct VoronoiDiagram {
    field: FieldBounds,
    last: Option<Tessellation>,
}

impl VoronoiDiagram {
    pub fn new(field: FieldBounds) -> Result<Self> {
        field.validate()?;
        Ok(Self { field, last: None })
    }

    pub fn field(&self) -> &FieldBounds {
        &self.field
    }

    pub fn is_computed(&self) -> bool {
        self.last.is_some()
    }

    /// Areas for an `N x 2` point matrix, aligned to its rows.
    pub fn compute_voronoi_areas(&mut self, points: &DMatrix<f64>) -> Result<Vec<f64>> {
        let VoronoiAreas {
            areas,
            tessellation,
            ..
        } = bounded_voronoi_areas_matrix(points, &self.field)?;
        self.last = Some(tessellation);
        Ok(areas)
    }

    pub fn last(&self) -> Option<&Tessellation> {
        self.last.as_ref()
    }

    /// Hand the stored tessellation to the caller, returning to the uncomputed state.
    pub fn take_last(&mut self) -> Option<Tessellation> {
        self.last.take()
    }

    /// # Errors
    /// `NotComputed` before the first successful area computation.
    pub fn render_svg(&self, style: &SvgStyle) -> Result<String> {
        let tessellation = self.last.as_ref().ok_or(MetricsError::NotComputed)?;
        Ok(render_svg(tessellation, style))
    }
}
