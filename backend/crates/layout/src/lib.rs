//! Spatial layout of recognized plates.
//!
//! Detections arrive in whatever order the recognizer emits them; this crate
//! turns their bounding boxes into a reading-order grid (top-to-bottom, then
//! left-to-right) with 1-based row and column indices.

pub mod grid;

pub use grid::{assign_grid_positions, GridConfig};
