//! SVG rendering of a tessellation for visual inspection

use super::tessellation::Tessellation;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Drawing options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgStyle {
    /// Pixels per field unit (default: 8.0)
    pub scale: f64,
    /// Site marker radius in field units (default: 0.6)
    pub site_radius: f64,
    pub field_stroke: String,
    pub cell_stroke: String,
    pub site_fill: String,
    /// Also draw the mirrored ghost sites outside the field
    pub show_mirrors: bool,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            scale: 8.0,
            site_radius: 0.6,
            field_stroke: "#000000".to_string(),
            cell_stroke: "#1f77b4".to_string(),
            site_fill: "#d62728".to_string(),
            show_mirrors: false,
        }
    }
}

/// Render the clipped cells, original sites and field outline.
///
/// The view is the field rectangle (plus one field of margin when mirrors are
/// shown), with y pointing up as in tracking coordinates.
pub fn render_svg(tessellation: &Tessellation, style: &SvgStyle) -> String {
    let field = tessellation.field();
    let (margin_x, margin_y) = if style.show_mirrors {
        (field.width(), field.height())
    } else {
        (0.0, 0.0)
    };
    let x0 = field.x_min - margin_x;
    let y_top = field.y_max + margin_y;
    let width = (field.width() + 2.0 * margin_x) * style.scale;
    let height = (field.height() + 2.0 * margin_y) * style.scale;

    let to_px = |p: &Point2<f64>| ((p.x - x0) * style.scale, (y_top - p.y) * style.scale);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.1}\" height=\"{:.1}\" \
         viewBox=\"0 0 {:.1} {:.1}\">\n",
        width, height, width, height
    ));

    for i in 0..tessellation.n_original() {
        let polygon = tessellation.clipped_polygon(i);
        if polygon.is_empty() {
            continue;
        }
        let points: Vec<String> = polygon
            .iter()
            .map(|p| {
                let (x, y) = to_px(p);
                format!("{:.2},{:.2}", x, y)
            })
            .collect();
        svg.push_str(&format!(
            "  <polygon points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            points.join(" "),
            style.cell_stroke
        ));
    }

    let (fx, fy) = to_px(&Point2::new(field.x_min, field.y_max));
    svg.push_str(&format!(
        "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" \
         fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>\n",
        fx,
        fy,
        field.width() * style.scale,
        field.height() * style.scale,
        style.field_stroke
    ));

    let sites = if style.show_mirrors {
        tessellation.sites()
    } else {
        tessellation.original_sites()
    };
    let radius = style.site_radius * style.scale;
    for (i, site) in sites.iter().enumerate() {
        let (cx, cy) = to_px(site);
        let opacity = if i < tessellation.n_original() { 1.0 } else { 0.35 };
        svg.push_str(&format!(
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" fill-opacity=\"{}\"/>\n",
            cx, cy, radius, style.site_fill, opacity
        ));
    }

    svg.push_str("</svg>\n");
    svg
}
