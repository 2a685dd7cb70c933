//! Final geometry composition.
//!
//! Combines base cell origins, vertical shifts, column offsets, and
//! expansion anchor offsets into the resolved rectangle of every container
//! and every open panel. Pure: reads snapshots of resolver output, writes new
//! maps.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tilegrid_core::{GridMetrics, PxRect};

use crate::grid::{Container, ContainerId};

/// Resolved geometry of one open panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelLayout {
    /// The container this panel belongs to.
    pub owner: ContainerId,
    /// Column of the owning container.
    pub column: u16,
    /// Outer rectangle: always spans the full visible grid height.
    pub rect: PxRect,
    /// Vertical offset of the panel's content so it lines up with the
    /// owning container's resolved top edge.
    pub content_offset: i32,
}

/// Resolved rectangle for one container.
#[must_use]
pub fn container_rect(
    metrics: &GridMetrics,
    container: &Container,
    vertical_shift: i32,
    column_offset: i32,
) -> PxRect {
    let origin = metrics.cell_origin(container.cell);
    let (anchor, height) = if container.is_expanded {
        let profile = container.kind.profile(metrics.base_height);
        (profile.anchor_offset_top, profile.expanded_height)
    } else {
        (0, metrics.base_height)
    };
    PxRect::new(
        origin.x + column_offset,
        origin.y + vertical_shift + anchor,
        metrics.cell_size,
        height,
    )
}

/// Resolved geometry for one open panel.
///
/// The panel sits immediately right of its owner's column and spans the full
/// grid height regardless of the owner's row; `owner_top` (the owner's
/// resolved top edge) becomes the content alignment offset.
#[must_use]
pub fn panel_layout(
    metrics: &GridMetrics,
    owner: &Container,
    column_offset: i32,
    owner_top: i32,
) -> PanelLayout {
    let origin = metrics.cell_origin(owner.cell);
    PanelLayout {
        owner: owner.id,
        column: owner.cell.col,
        rect: PxRect::new(
            origin.x + column_offset + metrics.cell_size + metrics.gap,
            0,
            metrics.panel_width,
            metrics.grid_height(),
        ),
        content_offset: owner_top,
    }
}

/// Compose final rectangles for all containers and all open panels.
///
/// Panels are returned sorted by column for deterministic iteration.
#[must_use]
pub fn compose(
    metrics: &GridMetrics,
    containers: &[Container],
    vertical_shift: &FxHashMap<ContainerId, i32>,
    column_offsets: &[i32],
) -> (FxHashMap<ContainerId, PxRect>, Vec<PanelLayout>) {
    let mut rects =
        FxHashMap::with_capacity_and_hasher(containers.len(), Default::default());
    let mut panels = Vec::new();

    for container in containers {
        let shift = vertical_shift.get(&container.id).copied().unwrap_or(0);
        let offset = column_offsets
            .get(container.cell.col as usize)
            .copied()
            .unwrap_or(0);
        let rect = container_rect(metrics, container, shift, offset);
        if container.has_open_panel {
            panels.push(panel_layout(metrics, container, offset, rect.y));
        }
        rects.insert(container.id, rect);
    }

    panels.sort_by_key(|p| (p.column, p.owner));
    (rects, panels)
}
