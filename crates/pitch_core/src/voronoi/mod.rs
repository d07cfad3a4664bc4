//! Bounded Voronoi areas as a proxy for spatial control
//!
//! 1. Keep the points inside the field (inclusive) and remember which they were.
//! 2. Reflect them across all four field edges and tessellate originals + mirrors.
//! 3. Clip each original cell to the field and take its area; open or empty
//!    cells (duplicates, points exactly on an edge) count as zero.
//! 4. Scatter areas back to the caller's order; outside points get zero.
//!
//! [`bounded_voronoi_areas`] returns the tessellation by value alongside the
//! areas, for [`render_svg`]. [`VoronoiDiagram`] keeps the last one instead.

mod areas;
mod diagram;
mod render;
mod tessellation;

pub use areas::{
    bounded_voronoi_areas, bounded_voronoi_areas_matrix, VoronoiAreas, MIN_IN_FIELD_POINTS,
};
pub use diagram::VoronoiDiagram;
pub use render::{render_svg, SvgStyle};
pub use tessellation::{Cell, Tessellation};
