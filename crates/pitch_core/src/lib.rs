//! # pitch_core - Spatial awareness metrics from tracking data
//!
//! Per-frame spatial features for players on a rectangular field:
//! - **Awareness**: how visible each target is inside a player's field of view
//! - **Influence**: directional influence blending heading and body orientation
//! - **Voronoi control**: each player's Voronoi cell area clipped to the field
//!
//! Positions are field units, angles are degrees clockwise from north, as
//! delivered by player tracking feeds. Every computation is synchronous and
//! recomputed from scratch per call.
//!
//! ```rust
//! use nalgebra::DMatrix;
//! use pitch_core::{AwarenessField, FieldBounds, bounded_voronoi_areas_matrix};
//!
//! let positions = DMatrix::from_row_slice(2, 2, &[30.0, 20.0, 60.0, 25.0]);
//! let attributes = DMatrix::from_row_slice(2, 2, &[90.0, 4.0, 270.0, 1.5]);
//! let awareness = AwarenessField::default()
//!     .awareness_batch(&positions, &attributes, &positions)
//!     .unwrap();
//! assert_eq!(awareness.shape(), (2, 2));
//!
//! let areas = bounded_voronoi_areas_matrix(&positions, &FieldBounds::default()).unwrap();
//! assert!((areas.total_area() - FieldBounds::default().area()).abs() < 1.0);
//! ```

#![allow(clippy::too_many_arguments)]
#![allow(clippy::needless_range_loop)]

pub mod config;
pub mod error;
pub mod geometry;
pub mod scoring;
pub mod voronoi;

pub use config::{AwarenessConfig, InfluenceConfig, MetricsConfig};
pub use error::{MetricsError, Result};
pub use geometry::{to_field_angle, FieldBounds};
pub use scoring::{AgentState, AwarenessField, DirectionalField, InfluenceField};
pub use voronoi::{
    bounded_voronoi_areas, bounded_voronoi_areas_matrix, render_svg, SvgStyle, Tessellation,
    VoronoiAreas, VoronoiDiagram,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
