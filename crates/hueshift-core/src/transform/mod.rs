//! Structural transforms: inversion, quarter-turn rotation and flips.
//!
//! All geometric operations go through [`remap`], which builds a new buffer
//! by pulling one source pixel per output position and optionally swaps the
//! dimensions afterward.
//!
//! # Geometry
//!
//! [`Geometry::Legacy`] treats the buffer as `width` consecutive runs of
//! `height` pixels and either reverses the order of the runs or reverses
//! each run. Clockwise rotation and vertical flip share the first formula,
//! counter-clockwise rotation and horizontal flip the second; the rotations
//! additionally swap width and height. For non-square images these are not
//! true rotations, and rotating clockwise then counter-clockwise does not
//! restore the original.
//!
//! [`Geometry::Conventional`] addresses pixels as rows of `width` and
//! performs real quarter turns and mirrors, so opposite rotations cancel.

mod invert;
mod remap;

pub use invert::invert_pixels;
pub use remap::{plan, remap, GeometricOp, IndexFormula};

pub use crate::config::Geometry;
