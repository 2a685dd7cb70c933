//! The grid engine: authoritative container/panel state and full
//! recomputation.
//!
//! [`TileGrid`] owns every [`Container`] record. Each mutation (an expansion
//! or panel toggle) applies atomically and then re-derives the complete
//! [`LayoutSnapshot`] from scratch — vertical shifts, column offsets, and all
//! resolved rectangles. There is no incremental patching: consistency comes
//! from always recomputing from the single authoritative state, and the
//! resolvers only ever read that state and return fresh maps.
//!
//! Invalid requests (unknown id, panel toggle on a collapsed container) are
//! not errors: they resolve to reported no-op effects, logged at debug level,
//! and skip recomputation entirely.

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tilegrid_core::{Cell, GridMetrics, PxRect};
use tracing::{debug, warn};

use crate::compose::{self, PanelLayout};
use crate::panel;
use crate::profile::ExpansionKind;
use crate::spiral::{self, Heading, Rotation};
use crate::vertical;

/// Stable identifier for containers, assigned sequentially from 0 in entity
/// order at grid construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ContainerId(u32);

impl ContainerId {
    /// Create a container ID from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw numeric value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fixed-position grid entity that can expand and optionally carry a panel.
///
/// `cell` and `kind` are immutable after placement; `is_expanded` and
/// `has_open_panel` are the two mutable interaction axes. A panel can only be
/// open while its owner is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: ContainerId,
    pub cell: Cell,
    pub kind: ExpansionKind,
    #[serde(default)]
    pub is_expanded: bool,
    #[serde(default)]
    pub has_open_panel: bool,
}

impl Container {
    /// Create a collapsed container.
    #[must_use]
    pub const fn new(id: ContainerId, cell: Cell, kind: ExpansionKind) -> Self {
        Self {
            id,
            cell,
            kind,
            is_expanded: false,
            has_open_panel: false,
        }
    }
}

/// What a toggle operation did.
///
/// Ignored variants mean state was untouched and no recomputation ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleEffect {
    /// The container expanded.
    Expanded { id: ContainerId },
    /// The container collapsed; `panel_closed` reports whether its open
    /// panel was force-closed along with it.
    Collapsed { id: ContainerId, panel_closed: bool },
    /// The panel opened; `displaced` names the panel that was force-closed
    /// to keep the column at one open panel.
    PanelOpened {
        id: ContainerId,
        displaced: Option<ContainerId>,
    },
    /// The panel closed.
    PanelClosed { id: ContainerId },
    /// No such container; nothing happened.
    IgnoredUnknownId { id: ContainerId },
    /// Panel toggle on a collapsed container; nothing happened.
    IgnoredCollapsed { id: ContainerId },
}

impl ToggleEffect {
    /// Whether the toggle mutated state (and therefore recomputed layout).
    #[must_use]
    pub const fn applied(&self) -> bool {
        !matches!(
            self,
            Self::IgnoredUnknownId { .. } | Self::IgnoredCollapsed { .. }
        )
    }
}

/// How many entities received a cell at construction.
///
/// A shortfall means the request exceeded grid capacity and was truncated;
/// the surplus entities were dropped, never wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementReport {
    pub requested: usize,
    pub placed: usize,
}

impl PlacementReport {
    /// Whether every requested entity was placed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.placed == self.requested
    }

    /// Number of entities that did not fit.
    #[must_use]
    pub const fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.placed)
    }
}

/// Derived geometry for the whole grid. Recomputed in full on every
/// mutation; serializable for diagnostics and replay diffing, never treated
/// as persistent state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    /// Monotonic recomputation counter.
    pub version: u64,
    /// Resolved rectangle per container.
    pub rects: FxHashMap<ContainerId, PxRect>,
    /// Resolved geometry of every open panel, sorted by column.
    pub panels: Vec<PanelLayout>,
    /// Cumulative vertical displacement per container.
    pub vertical_shift: FxHashMap<ContainerId, i32>,
    /// Cumulative horizontal displacement per column.
    pub column_offsets: Vec<i32>,
}

impl LayoutSnapshot {
    /// Resolved rectangle of a container.
    #[must_use]
    pub fn rect(&self, id: ContainerId) -> Option<PxRect> {
        self.rects.get(&id).copied()
    }

    /// Vertical shift of a container.
    #[must_use]
    pub fn vertical_shift(&self, id: ContainerId) -> i32 {
        self.vertical_shift.get(&id).copied().unwrap_or(0)
    }

    /// The open panel owned by `id`, if any.
    #[must_use]
    pub fn panel(&self, id: ContainerId) -> Option<&PanelLayout> {
        self.panels.iter().find(|p| p.owner == id)
    }

    /// Deterministic hash of the resolved geometry, independent of map
    /// iteration order and of `version`. Two snapshots with identical
    /// geometry hash identically.
    #[must_use]
    pub fn state_hash(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        let mut ids: Vec<ContainerId> = self.rects.keys().copied().collect();
        ids.sort_unstable();
        for id in ids {
            id.hash(&mut hasher);
            if let Some(rect) = self.rects.get(&id) {
                (rect.x, rect.y, rect.width, rect.height).hash(&mut hasher);
            }
            self.vertical_shift(id).hash(&mut hasher);
        }
        for p in &self.panels {
            p.owner.hash(&mut hasher);
            p.column.hash(&mut hasher);
            (p.rect.x, p.rect.y, p.rect.width, p.rect.height).hash(&mut hasher);
            p.content_offset.hash(&mut hasher);
        }
        self.column_offsets.hash(&mut hasher);
        hasher.finish()
    }
}

/// The grid: owns all container state, applies toggles, re-derives layout.
#[derive(Debug, Clone)]
pub struct TileGrid {
    metrics: GridMetrics,
    containers: Vec<Container>,
    index: FxHashMap<ContainerId, usize>,
    snapshot: LayoutSnapshot,
}

impl TileGrid {
    /// Build a grid by filling cells row-major with the given expansion
    /// kinds, truncating at capacity.
    #[must_use]
    pub fn filled(metrics: GridMetrics, kinds: &[ExpansionKind]) -> (Self, PlacementReport) {
        let placed = kinds.len().min(metrics.capacity());
        let containers = kinds[..placed]
            .iter()
            .enumerate()
            .map(|(i, &kind)| {
                let col = (i % metrics.cols as usize) as u16;
                let row = (i / metrics.cols as usize) as u16;
                Container::new(ContainerId::new(i as u32), Cell::new(col, row), kind)
            })
            .collect();
        let report = PlacementReport {
            requested: kinds.len(),
            placed,
        };
        if !report.is_complete() {
            warn!(
                requested = report.requested,
                placed = report.placed,
                "grid fill truncated: entity count exceeds grid capacity"
            );
        }
        (Self::from_containers(metrics, containers), report)
    }

    /// Build a grid by assigning cells to the given expansion kinds in
    /// spiral order from `center`: the first entity lands on the center, each
    /// subsequent one on the next in-bounds cell of the walk.
    #[must_use]
    pub fn with_spiral_placement(
        metrics: GridMetrics,
        kinds: &[ExpansionKind],
        center: Cell,
        rotation: Rotation,
        heading: Heading,
    ) -> (Self, PlacementReport) {
        let placement = spiral::place_spiral(&metrics, center, rotation, heading, kinds.len());
        let report = PlacementReport {
            requested: placement.requested,
            placed: placement.cells.len(),
        };
        let containers = placement
            .cells
            .into_iter()
            .zip(kinds)
            .enumerate()
            .map(|(i, (cell, &kind))| Container::new(ContainerId::new(i as u32), cell, kind))
            .collect();
        (Self::from_containers(metrics, containers), report)
    }

    /// Build a grid from pre-placed containers.
    ///
    /// Structural problems (duplicate ids or cells, out-of-bounds cells,
    /// panels on collapsed owners) are not rejected here; they surface
    /// through [`TileGrid::invariant_report`].
    #[must_use]
    pub fn from_containers(metrics: GridMetrics, containers: Vec<Container>) -> Self {
        let index = containers
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id, i))
            .collect();
        let mut grid = Self {
            metrics,
            containers,
            index,
            snapshot: LayoutSnapshot::default(),
        };
        grid.recompute();
        grid
    }

    /// The grid's metric configuration.
    #[must_use]
    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    /// All containers, in entity order.
    #[must_use]
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Look up one container.
    #[must_use]
    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.index.get(&id).map(|&i| &self.containers[i])
    }

    /// The current derived layout.
    #[must_use]
    pub fn snapshot(&self) -> &LayoutSnapshot {
        &self.snapshot
    }

    /// The container whose panel is open in `col`, if any.
    #[must_use]
    pub fn open_panel_in(&self, col: u16) -> Option<ContainerId> {
        self.containers
            .iter()
            .find(|c| c.has_open_panel && c.cell.col == col)
            .map(|c| c.id)
    }

    /// Flip a container's expansion state.
    ///
    /// Collapsing force-closes the container's open panel. Unknown ids are
    /// reported no-ops without recomputation.
    pub fn toggle_expansion(&mut self, id: ContainerId) -> ToggleEffect {
        let Some(&i) = self.index.get(&id) else {
            debug!(container = id.get(), "expansion toggle ignored: unknown container");
            return ToggleEffect::IgnoredUnknownId { id };
        };
        let container = &mut self.containers[i];
        let effect = if container.is_expanded {
            container.is_expanded = false;
            let panel_closed = std::mem::take(&mut container.has_open_panel);
            ToggleEffect::Collapsed { id, panel_closed }
        } else {
            container.is_expanded = true;
            ToggleEffect::Expanded { id }
        };
        self.recompute();
        effect
    }

    /// Flip a container's panel state.
    ///
    /// A panel can only open while its owner is expanded; toggling the panel
    /// of a collapsed container is a reported no-op. Opening a panel in a
    /// column that already has one force-closes the incumbent first, so each
    /// column holds at most one open panel.
    pub fn toggle_panel(&mut self, id: ContainerId) -> ToggleEffect {
        let Some(&i) = self.index.get(&id) else {
            debug!(container = id.get(), "panel toggle ignored: unknown container");
            return ToggleEffect::IgnoredUnknownId { id };
        };
        let container = self.containers[i];
        if !container.is_expanded {
            debug!(
                container = id.get(),
                "panel toggle ignored: container not expanded"
            );
            return ToggleEffect::IgnoredCollapsed { id };
        }

        let effect = if container.has_open_panel {
            self.containers[i].has_open_panel = false;
            ToggleEffect::PanelClosed { id }
        } else {
            let displaced = self
                .containers
                .iter_mut()
                .find(|c| c.has_open_panel && c.cell.col == container.cell.col)
                .map(|incumbent| {
                    incumbent.has_open_panel = false;
                    incumbent.id
                });
            self.containers[i].has_open_panel = true;
            ToggleEffect::PanelOpened { id, displaced }
        };
        self.recompute();
        effect
    }

    /// Check the structural invariants of the current state.
    ///
    /// Intended for tests and diagnostics; the toggle operations keep these
    /// invariants by construction.
    #[must_use]
    pub fn invariant_report(&self) -> GridInvariantReport {
        let mut issues = Vec::new();

        let mut seen_ids = FxHashMap::default();
        let mut seen_cells = FxHashMap::default();
        let mut open_in_col: FxHashMap<u16, ContainerId> = FxHashMap::default();

        for c in &self.containers {
            if seen_ids.insert(c.id, c.id).is_some() {
                issues.push(GridInvariantIssue {
                    code: GridInvariantCode::DuplicateContainerId,
                    container: Some(c.id),
                });
            }
            if !self.metrics.contains(c.cell) {
                issues.push(GridInvariantIssue {
                    code: GridInvariantCode::CellOutOfBounds,
                    container: Some(c.id),
                });
            }
            if seen_cells.insert(c.cell, c.id).is_some() {
                issues.push(GridInvariantIssue {
                    code: GridInvariantCode::DuplicateCell,
                    container: Some(c.id),
                });
            }
            if c.has_open_panel {
                if !c.is_expanded {
                    issues.push(GridInvariantIssue {
                        code: GridInvariantCode::PanelOnCollapsedOwner,
                        container: Some(c.id),
                    });
                }
                if open_in_col.insert(c.cell.col, c.id).is_some() {
                    issues.push(GridInvariantIssue {
                        code: GridInvariantCode::MultipleOpenPanelsInColumn,
                        container: Some(c.id),
                    });
                }
            }
        }

        GridInvariantReport { issues }
    }

    /// Full re-derivation of the layout snapshot from current state.
    fn recompute(&mut self) {
        let vertical_shift = vertical::resolve_vertical_shifts(&self.containers, &self.metrics);
        let open_columns: Vec<u16> = self
            .containers
            .iter()
            .filter(|c| c.has_open_panel)
            .map(|c| c.cell.col)
            .collect();
        let column_offsets = panel::column_offsets(&open_columns, &self.metrics);
        let (rects, panels) =
            compose::compose(&self.metrics, &self.containers, &vertical_shift, &column_offsets);
        self.snapshot = LayoutSnapshot {
            version: self.snapshot.version.saturating_add(1),
            rects,
            panels,
            vertical_shift,
            column_offsets,
        };
    }
}

/// Structural invariant violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridInvariantCode {
    /// Two containers share an id.
    DuplicateContainerId,
    /// A container's cell lies outside the grid.
    CellOutOfBounds,
    /// Two containers occupy the same cell.
    DuplicateCell,
    /// A panel is open while its owner is collapsed.
    PanelOnCollapsedOwner,
    /// A column has more than one open panel.
    MultipleOpenPanelsInColumn,
}

/// One invariant violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridInvariantIssue {
    pub code: GridInvariantCode,
    /// The container the issue was detected on, where applicable.
    pub container: Option<ContainerId>,
}

/// Outcome of an invariant check.
#[derive(Debug, Clone, Default)]
pub struct GridInvariantReport {
    pub issues: Vec<GridInvariantIssue>,
}

impl GridInvariantReport {
    /// Whether any invariant is violated.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_grid() -> TileGrid {
        let metrics = GridMetrics::standard(8, 8);
        let kinds = vec![ExpansionKind::GrowDownFull; 64];
        let (grid, report) = TileGrid::filled(metrics, &kinds);
        assert!(report.is_complete());
        grid
    }

    fn id_at(grid: &TileGrid, col: u16, row: u16) -> ContainerId {
        grid.containers()
            .iter()
            .find(|c| c.cell == Cell::new(col, row))
            .map(|c| c.id)
            .unwrap()
    }

    // ---- Construction ----

    #[test]
    fn filled_assigns_row_major_cells() {
        let grid = standard_grid();
        assert_eq!(grid.containers().len(), 64);
        assert_eq!(grid.containers()[0].cell, Cell::new(0, 0));
        assert_eq!(grid.containers()[9].cell, Cell::new(1, 1));
        assert!(!grid.invariant_report().has_errors());
    }

    #[test]
    fn filled_truncates_over_capacity() {
        let metrics = GridMetrics::standard(2, 2);
        let kinds = vec![ExpansionKind::None; 7];
        let (grid, report) = TileGrid::filled(metrics, &kinds);
        assert_eq!(grid.containers().len(), 4);
        assert_eq!(report.shortfall(), 3);
        assert!(!report.is_complete());
    }

    #[test]
    fn spiral_construction_places_first_entity_at_center() {
        let metrics = GridMetrics::standard(8, 8);
        let kinds = vec![ExpansionKind::None; 10];
        let (grid, report) = TileGrid::with_spiral_placement(
            metrics,
            &kinds,
            Cell::new(4, 4),
            Rotation::Clockwise,
            Heading::Right,
        );
        assert!(report.is_complete());
        assert_eq!(grid.containers()[0].cell, Cell::new(4, 4));
        assert_eq!(grid.containers()[1].cell, Cell::new(5, 4));
        assert!(!grid.invariant_report().has_errors());
    }

    #[test]
    fn construction_computes_initial_snapshot() {
        let grid = standard_grid();
        let snap = grid.snapshot();
        assert_eq!(snap.version, 1);
        assert_eq!(snap.rects.len(), 64);
        assert!(snap.panels.is_empty());
        assert_eq!(snap.column_offsets, vec![0; 8]);
    }

    // ---- Expansion toggling ----

    #[test]
    fn toggle_expansion_flips_and_recomputes() {
        let mut grid = standard_grid();
        let id = id_at(&grid, 3, 3);
        let effect = grid.toggle_expansion(id);
        assert_eq!(effect, ToggleEffect::Expanded { id });
        assert!(grid.container(id).unwrap().is_expanded);
        assert_eq!(grid.snapshot().version, 2);

        let effect = grid.toggle_expansion(id);
        assert_eq!(
            effect,
            ToggleEffect::Collapsed {
                id,
                panel_closed: false
            }
        );
        assert_eq!(grid.snapshot().version, 3);
    }

    #[test]
    fn unknown_id_is_ignored_without_recompute() {
        let mut grid = standard_grid();
        let bogus = ContainerId::new(9999);
        let before = grid.snapshot().version;
        assert_eq!(
            grid.toggle_expansion(bogus),
            ToggleEffect::IgnoredUnknownId { id: bogus }
        );
        assert_eq!(
            grid.toggle_panel(bogus),
            ToggleEffect::IgnoredUnknownId { id: bogus }
        );
        assert_eq!(grid.snapshot().version, before);
    }

    // ---- Panel state machine ----

    #[test]
    fn panel_on_collapsed_container_is_noop() {
        let mut grid = standard_grid();
        let id = id_at(&grid, 3, 3);
        let before = grid.snapshot().version;
        assert_eq!(
            grid.toggle_panel(id),
            ToggleEffect::IgnoredCollapsed { id }
        );
        assert!(!grid.container(id).unwrap().has_open_panel);
        assert_eq!(grid.snapshot().version, before, "no-op must not recompute");
    }

    #[test]
    fn panel_opens_only_from_expanded() {
        let mut grid = standard_grid();
        let id = id_at(&grid, 3, 3);
        grid.toggle_expansion(id);
        let effect = grid.toggle_panel(id);
        assert_eq!(
            effect,
            ToggleEffect::PanelOpened {
                id,
                displaced: None
            }
        );
        assert!(grid.container(id).unwrap().has_open_panel);
        assert!(!grid.invariant_report().has_errors());
    }

    #[test]
    fn second_panel_in_column_displaces_first() {
        let mut grid = standard_grid();
        let first = id_at(&grid, 3, 3);
        let second = id_at(&grid, 3, 5);
        grid.toggle_expansion(first);
        grid.toggle_expansion(second);
        grid.toggle_panel(first);
        let effect = grid.toggle_panel(second);
        assert_eq!(
            effect,
            ToggleEffect::PanelOpened {
                id: second,
                displaced: Some(first)
            }
        );
        assert!(!grid.container(first).unwrap().has_open_panel);
        assert!(grid.container(second).unwrap().has_open_panel);
        assert_eq!(grid.open_panel_in(3), Some(second));
    }

    #[test]
    fn panels_in_different_columns_coexist() {
        let mut grid = standard_grid();
        let a = id_at(&grid, 2, 0);
        let b = id_at(&grid, 5, 0);
        grid.toggle_expansion(a);
        grid.toggle_expansion(b);
        grid.toggle_panel(a);
        let effect = grid.toggle_panel(b);
        assert_eq!(effect, ToggleEffect::PanelOpened { id: b, displaced: None });
        assert_eq!(grid.snapshot().panels.len(), 2);
    }

    #[test]
    fn collapse_force_closes_panel() {
        let mut grid = standard_grid();
        let id = id_at(&grid, 3, 3);
        grid.toggle_expansion(id);
        grid.toggle_panel(id);
        let effect = grid.toggle_expansion(id);
        assert_eq!(
            effect,
            ToggleEffect::Collapsed {
                id,
                panel_closed: true
            }
        );
        assert!(!grid.container(id).unwrap().has_open_panel);
        assert!(grid.snapshot().panels.is_empty());
        assert!(!grid.invariant_report().has_errors());
    }

    #[test]
    fn toggle_panel_closes_open_panel() {
        let mut grid = standard_grid();
        let id = id_at(&grid, 3, 3);
        grid.toggle_expansion(id);
        grid.toggle_panel(id);
        assert_eq!(grid.toggle_panel(id), ToggleEffect::PanelClosed { id });
        assert!(grid.container(id).unwrap().is_expanded);
        assert!(grid.snapshot().panels.is_empty());
    }

    #[test]
    fn effect_applied_classification() {
        let id = ContainerId::new(0);
        assert!(ToggleEffect::Expanded { id }.applied());
        assert!(ToggleEffect::PanelClosed { id }.applied());
        assert!(!ToggleEffect::IgnoredUnknownId { id }.applied());
        assert!(!ToggleEffect::IgnoredCollapsed { id }.applied());
    }

    // ---- Snapshot ----

    #[test]
    fn snapshot_version_is_monotonic() {
        let mut grid = standard_grid();
        let id = id_at(&grid, 0, 0);
        let v0 = grid.snapshot().version;
        grid.toggle_expansion(id);
        let v1 = grid.snapshot().version;
        grid.toggle_expansion(id);
        let v2 = grid.snapshot().version;
        assert!(v0 < v1 && v1 < v2);
    }

    #[test]
    fn state_hash_ignores_version_and_detects_geometry() {
        let mut grid = standard_grid();
        let id = id_at(&grid, 3, 3);
        let initial = grid.snapshot().state_hash();
        grid.toggle_expansion(id);
        let expanded = grid.snapshot().state_hash();
        assert_ne!(initial, expanded);
        grid.toggle_expansion(id);
        // Same geometry as the start, different version.
        assert_eq!(grid.snapshot().state_hash(), initial);
    }

    #[test]
    fn snapshot_json_round_trip() {
        let mut grid = standard_grid();
        let id = id_at(&grid, 3, 3);
        grid.toggle_expansion(id);
        grid.toggle_panel(id);

        let snap = grid.snapshot();
        let json = serde_json::to_string(snap).unwrap();
        let back: LayoutSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, snap);
        assert_eq!(back.state_hash(), snap.state_hash());
        assert_eq!(back.panel(id).unwrap().rect, snap.panel(id).unwrap().rect);
    }

    // ---- Invariant report ----

    #[test]
    fn invariant_report_flags_manual_corruption() {
        let metrics = GridMetrics::standard(2, 2);
        let containers = vec![
            Container::new(ContainerId::new(0), Cell::new(0, 0), ExpansionKind::None),
            Container::new(ContainerId::new(0), Cell::new(0, 0), ExpansionKind::None),
            Container::new(ContainerId::new(1), Cell::new(5, 0), ExpansionKind::None),
            Container {
                has_open_panel: true,
                ..Container::new(ContainerId::new(2), Cell::new(1, 1), ExpansionKind::GrowUp)
            },
        ];
        let grid = TileGrid::from_containers(metrics, containers);
        let report = grid.invariant_report();
        assert!(report.has_errors());
        let codes: Vec<_> = report.issues.iter().map(|i| i.code).collect();
        assert!(codes.contains(&GridInvariantCode::DuplicateContainerId));
        assert!(codes.contains(&GridInvariantCode::DuplicateCell));
        assert!(codes.contains(&GridInvariantCode::CellOutOfBounds));
        assert!(codes.contains(&GridInvariantCode::PanelOnCollapsedOwner));
    }
}
