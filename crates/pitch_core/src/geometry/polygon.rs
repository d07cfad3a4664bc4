//! Polygon area and clipping against the field rectangle

use super::field::FieldBounds;
use nalgebra::Point2;

/// Absolute polygon area (shoelace). Fewer than three vertices is zero.
pub fn polygon_area(polygon: &[Point2<f64>]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let n = polygon.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let a = polygon[i];
            let b = polygon[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    (twice * 0.5).abs()
}

#[derive(Debug, Clone, Copy)]
enum Edge {
    Left(f64),
    Right(f64),
    Bottom(f64),
    Top(f64),
}

impl Edge {
    #[inline]
    fn inside(&self, p: &Point2<f64>) -> bool {
        match *self {
            Edge::Left(x) => p.x >= x,
            Edge::Right(x) => p.x <= x,
            Edge::Bottom(y) => p.y >= y,
            Edge::Top(y) => p.y <= y,
        }
    }

    /// Crossing point of segment `a -> b` with this edge's line.
    /// Only called when `a` and `b` are on opposite sides, so the denominator is non-zero.
    #[inline]
    fn intersect(&self, a: &Point2<f64>, b: &Point2<f64>) -> Point2<f64> {
        match *self {
            Edge::Left(x) | Edge::Right(x) => {
                let t = (x - a.x) / (b.x - a.x);
                Point2::new(x, a.y + t * (b.y - a.y))
            }
            Edge::Bottom(y) | Edge::Top(y) => {
                let t = (y - a.y) / (b.y - a.y);
                Point2::new(a.x + t * (b.x - a.x), y)
            }
        }
    }
}

/// Clip a polygon (vertices in cyclic order, either winding) to the field rectangle.
///
/// Sutherland-Hodgman against the four edges. Exact for convex input, which is
/// all a Voronoi cell can be. An empty result means no overlap.
pub fn clip_to_field(polygon: &[Point2<f64>], field: &FieldBounds) -> Vec<Point2<f64>> {
    let edges = [
        Edge::Left(field.x_min),
        Edge::Right(field.x_max),
        Edge::Bottom(field.y_min),
        Edge::Top(field.y_max),
    ];

    let mut output = polygon.to_vec();
    for edge in edges {
        if output.is_empty() {
            break;
        }
        let input = std::mem::take(&mut output);
        let mut prev = input[input.len() - 1];
        let mut prev_inside = edge.inside(&prev);
        for current in input {
            let curr_inside = edge.inside(&current);
            if curr_inside {
                if !prev_inside {
                    output.push(edge.intersect(&prev, &current));
                }
                output.push(current);
            } else if prev_inside {
                output.push(edge.intersect(&prev, &current));
            }
            prev = current;
            prev_inside = curr_inside;
        }
    }

    if output.len() < 3 {
        output.clear();
    }
    output
}
