//! Panel column offset resolution.
//!
//! Every open panel widens its column by `panel_width + gap`, displacing all
//! columns strictly to its right. Offsets accumulate left to right, so the
//! offset of column `c` is the total width of every open panel in columns
//! `0..c`. The one-panel-per-column invariant is enforced at toggle time (see
//! [`crate::grid::TileGrid::toggle_panel`]), never here.

use tilegrid_core::GridMetrics;

/// Compute the horizontal offset of each column given the set of columns that
/// currently have an open panel.
///
/// Returns one offset per column, indexed by column. Columns at or left of
/// every open panel get zero. Out-of-bounds entries in `open_columns` are
/// ignored.
#[must_use]
pub fn column_offsets(open_columns: &[u16], metrics: &GridMetrics) -> Vec<i32> {
    let step = metrics.panel_width + metrics.gap;
    let cols = metrics.cols as usize;

    let mut panels_in = vec![0i32; cols];
    for &col in open_columns {
        if let Some(count) = panels_in.get_mut(col as usize) {
            *count += 1;
        }
    }

    let mut offsets = vec![0i32; cols];
    for c in 1..cols {
        offsets[c] = offsets[c - 1] + panels_in[c - 1] * step;
    }
    offsets
}
