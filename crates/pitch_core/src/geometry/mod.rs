//! Shared geometric primitives: angle conventions, the field rectangle and
//! polygon clipping.

pub mod angle;
pub mod field;
pub mod polygon;

pub use angle::{bearing, normalize_radians, shorter_arc, to_field_angle, to_field_angles};
pub use field::FieldBounds;
pub use polygon::{clip_to_field, polygon_area};
