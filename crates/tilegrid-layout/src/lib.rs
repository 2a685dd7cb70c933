#![forbid(unsafe_code)]

//! Deterministic layout resolution for an expandable tile grid.
//!
//! A [`TileGrid`] holds a two-dimensional grid of containers. Expanding a
//! container grows it vertically and pushes same-column neighbors out of the
//! way; an expanded container can additionally open a full-height side panel
//! that pushes every column to its right. The engine is a pure, synchronous
//! function from state to geometry: every toggle re-derives the complete
//! [`LayoutSnapshot`] from the authoritative container set, so displacement
//! effects compose correctly no matter how many expansions and panels are
//! active at once.
//!
//! # Example
//!
//! ```
//! use tilegrid_layout::{
//!     Cell, ExpansionKind, GridMetrics, Heading, Rotation, TileGrid,
//! };
//!
//! let metrics = GridMetrics::standard(8, 8);
//! let kinds = vec![ExpansionKind::GrowDownFull; 64];
//! let (mut grid, report) = TileGrid::with_spiral_placement(
//!     metrics,
//!     &kinds,
//!     Cell::new(4, 4),
//!     Rotation::Clockwise,
//!     Heading::Right,
//! );
//! assert!(report.is_complete());
//!
//! let id = grid.containers()[0].id;
//! grid.toggle_expansion(id);
//! grid.toggle_panel(id);
//!
//! let snapshot = grid.snapshot();
//! assert_eq!(snapshot.panels.len(), 1);
//! assert_eq!(snapshot.rect(id).unwrap().height, 260);
//! ```

pub mod compose;
pub mod grid;
pub mod panel;
pub mod profile;
pub mod spiral;
pub mod vertical;

pub use compose::PanelLayout;
pub use grid::{
    Container, ContainerId, GridInvariantCode, GridInvariantIssue, GridInvariantReport,
    LayoutSnapshot, PlacementReport, TileGrid, ToggleEffect,
};
pub use profile::{ExpansionKind, ExpansionProfile, FULL_GROWTH, HALF_GROWTH};
pub use spiral::{Heading, Rotation, SpiralPlacement, SpiralWalk, place_spiral};
pub use tilegrid_core::{Cell, GridMetrics, MetricsError, PxPoint, PxRect};
