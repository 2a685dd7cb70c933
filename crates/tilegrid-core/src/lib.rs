#![forbid(unsafe_code)]

//! Geometry primitives and grid metric configuration for tilegrid.
//!
//! This crate holds the pixel-space vocabulary (`PxPoint`, `PxRect`) and the
//! [`GridMetrics`] configuration that maps logical grid cells to base pixel
//! origins. It has no layout logic of its own; the solvers live in
//! `tilegrid-layout`.

pub mod geometry;
pub mod metrics;

pub use geometry::{PxPoint, PxRect};
pub use metrics::{Cell, GridMetrics, MetricsError};
