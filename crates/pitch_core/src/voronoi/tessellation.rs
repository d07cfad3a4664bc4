//! Mirrored Voronoi tessellation
//!
//! The in-field sites are reflected across all four field edges and the
//! Voronoi diagram of the combined set is taken as the dual of its Delaunay
//! triangulation. Every original site is then surrounded by mirrored
//! neighbours, so its cell is closed and its edges facing the boundary lie
//! on the boundary itself.

use crate::geometry::{clip_to_field, polygon_area, FieldBounds};
use delaunator::{next_halfedge, triangulate, Triangulation, EMPTY};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Voronoi region of one original site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// Closed region, indices into [`Tessellation::vertices`] in rotational order
    Bounded(Vec<usize>),
    /// Region reaches infinity (site on the hull of the mirrored set)
    Open,
    /// Site dropped by the triangulation (duplicate or collinear input)
    Empty,
}

impl Cell {
    pub fn is_bounded(&self) -> bool {
        matches!(self, Cell::Bounded(_))
    }
}

/// Result of one tessellation, kept for area queries and rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tessellation {
    field: FieldBounds,
    /// Originals first, then the left, right, bottom and top mirror blocks
    sites: Vec<Point2<f64>>,
    n_original: usize,
    /// Index in the caller's point array of each original site
    source_index: Vec<usize>,
    /// Circumcentre of every Delaunay triangle
    vertices: Vec<Point2<f64>>,
    /// One entry per original site
    cells: Vec<Cell>,
    n_triangles: usize,
}

impl Tessellation {
    /// Tessellate `originals` (all inside `field`) together with their mirrors.
    pub(crate) fn build(
        originals: Vec<Point2<f64>>,
        source_index: Vec<usize>,
        field: FieldBounds,
    ) -> Self {
        let n_original = originals.len();

        let mirrors: Vec<[Point2<f64>; 4]> = originals.iter().map(|p| field.mirrors(p)).collect();
        let mut sites = originals;
        sites.reserve(4 * n_original);
        for edge in 0..4 {
            sites.extend(mirrors.iter().map(|m| m[edge]));
        }

        let points: Vec<delaunator::Point> =
            sites.iter().map(|p| delaunator::Point { x: p.x, y: p.y }).collect();
        let triangulation = triangulate(&points);

        let vertices: Vec<Point2<f64>> = triangulation
            .triangles
            .chunks_exact(3)
            .map(|t| circumcenter(&sites[t[0]], &sites[t[1]], &sites[t[2]]))
            .collect();

        let inedges = incoming_edges(&triangulation, sites.len());
        let cells = (0..n_original)
            .map(|site| trace_cell(&triangulation, &inedges, &vertices, site))
            .collect();

        Self {
            field,
            sites,
            n_original,
            source_index,
            vertices,
            cells,
            n_triangles: triangulation.triangles.len() / 3,
        }
    }

    pub fn field(&self) -> &FieldBounds {
        &self.field
    }

    /// All tessellated sites, mirrors included.
    pub fn sites(&self) -> &[Point2<f64>] {
        &self.sites
    }

    pub fn original_sites(&self) -> &[Point2<f64>] {
        &self.sites[..self.n_original]
    }

    pub fn n_original(&self) -> usize {
        self.n_original
    }

    pub fn n_triangles(&self) -> usize {
        self.n_triangles
    }

    /// Caller-side index of original site `i`.
    pub fn source_index(&self, i: usize) -> usize {
        self.source_index[i]
    }

    pub fn vertices(&self) -> &[Point2<f64>] {
        &self.vertices
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Unclipped polygon of original site `i`, `None` for open or empty cells.
    pub fn cell_polygon(&self, i: usize) -> Option<Vec<Point2<f64>>> {
        match &self.cells[i] {
            Cell::Bounded(region) => Some(region.iter().map(|&v| self.vertices[v]).collect()),
            Cell::Open | Cell::Empty => None,
        }
    }

    /// Cell of original site `i` clipped to the field; empty when degenerate.
    pub fn clipped_polygon(&self, i: usize) -> Vec<Point2<f64>> {
        self.cell_polygon(i)
            .map(|poly| clip_to_field(&poly, &self.field))
            .unwrap_or_default()
    }

    /// Clipped cell area of original site `i`. Degenerate cells are zero.
    pub fn cell_area(&self, i: usize) -> f64 {
        polygon_area(&self.clipped_polygon(i))
    }
}

/// For each site, one halfedge ending at it. Hull edges win so open fans are
/// walked from their boundary.
fn incoming_edges(triangulation: &Triangulation, n_sites: usize) -> Vec<usize> {
    let mut inedges = vec![EMPTY; n_sites];
    for e in 0..triangulation.triangles.len() {
        let endpoint = triangulation.triangles[next_halfedge(e)];
        if inedges[endpoint] == EMPTY || triangulation.halfedges[e] == EMPTY {
            inedges[endpoint] = e;
        }
    }
    inedges
}

/// Walk the triangle fan around `site`; each triangle contributes its circumcentre.
fn trace_cell(
    triangulation: &Triangulation,
    inedges: &[usize],
    vertices: &[Point2<f64>],
    site: usize,
) -> Cell {
    let start = inedges[site];
    if start == EMPTY {
        return Cell::Empty;
    }

    let mut region = Vec::new();
    let mut incoming = start;
    loop {
        region.push(incoming / 3);
        if region.len() > triangulation.triangles.len() {
            return Cell::Empty;
        }
        let outgoing = next_halfedge(incoming);
        incoming = triangulation.halfedges[outgoing];
        if incoming == EMPTY {
            return Cell::Open;
        }
        if incoming == start {
            break;
        }
    }

    if region.len() < 3 {
        return Cell::Empty;
    }
    if region.iter().any(|&v| !(vertices[v].x.is_finite() && vertices[v].y.is_finite())) {
        return Cell::Open;
    }
    Cell::Bounded(region)
}

fn circumcenter(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> Point2<f64> {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let (ex, ey) = (c.x - a.x, c.y - a.y);
    let bl = dx * dx + dy * dy;
    let cl = ex * ex + ey * ey;
    let d = 0.5 / (dx * ey - dy * ex);
    Point2::new(a.x + (ey * bl - dy * cl) * d, a.y + (dx * cl - ex * bl) * d)
}
