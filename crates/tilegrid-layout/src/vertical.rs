//! Vertical push resolution.
//!
//! For each column, computes the cumulative vertical displacement every
//! container receives from *other* expanded containers in the same column.
//! Downward growth pushes containers strictly below; upward growth pushes
//! containers strictly above. A container is never shifted by its own
//! expansion (its anchor offset handles that in composition).
//!
//! Push direction is strictly monotonic in row index, so displacement can
//! never cycle; both passes are a single accumulation sweep per column.

use rustc_hash::FxHashMap;
use tilegrid_core::GridMetrics;

use crate::grid::{Container, ContainerId};

/// Compute `vertical_shift` for every container.
///
/// Containers in columns outside the grid bounds receive a zero shift and
/// contribute nothing (the invariant report flags them separately).
#[must_use]
pub fn resolve_vertical_shifts(
    containers: &[Container],
    metrics: &GridMetrics,
) -> FxHashMap<ContainerId, i32> {
    let mut shifts =
        FxHashMap::with_capacity_and_hasher(containers.len(), Default::default());
    for c in containers {
        shifts.insert(c.id, 0);
    }

    let mut by_col: Vec<Vec<usize>> = vec![Vec::new(); metrics.cols as usize];
    for (i, c) in containers.iter().enumerate() {
        if let Some(column) = by_col.get_mut(c.cell.col as usize) {
            column.push(i);
        }
    }

    for column in &mut by_col {
        column.sort_by_key(|&i| containers[i].cell.row);

        // Top to bottom: downward growers displace everything below them.
        let mut pushed_down = 0;
        for &i in column.iter() {
            let c = &containers[i];
            *shifts.entry(c.id).or_insert(0) += pushed_down;
            if c.is_expanded && c.kind.grows_down() {
                pushed_down += c.kind.profile(metrics.base_height).push_amount;
            }
        }

        // Bottom to top: upward growers displace everything above them.
        let mut pushed_up = 0;
        for &i in column.iter().rev() {
            let c = &containers[i];
            *shifts.entry(c.id).or_insert(0) -= pushed_up;
            if c.is_expanded && c.kind.grows_up() {
                pushed_up += c.kind.profile(metrics.base_height).push_amount;
            }
        }
    }

    shifts
}
