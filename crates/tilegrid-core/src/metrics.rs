//! Grid metric configuration and cell-to-pixel mapping.
//!
//! [`GridMetrics`] is the single source of truth for the grid's coordinate
//! system: how many cells it has, how large a cell is, the gap between cells,
//! and how wide a side panel opens. All derived dimensions (cell pitch, total
//! grid height) come from here; nothing downstream hardcodes pixel totals.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::PxPoint;

/// Default cell edge length in pixels.
pub const DEFAULT_CELL_SIZE: i32 = 128;

/// Default gap between adjacent cells in pixels.
pub const DEFAULT_GAP: i32 = 4;

/// Default width of an open side panel in pixels.
pub const DEFAULT_PANEL_WIDTH: i32 = 304;

/// A logical grid coordinate (column, row), 0-indexed from the top-left.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Cell {
    pub col: u16,
    pub row: u16,
}

impl Cell {
    /// Create a new cell coordinate.
    #[inline]
    pub const fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Fixed grid geometry configuration.
///
/// Validated at construction: dimensions must be nonzero and pixel sizes
/// positive (`gap` may be zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMetrics {
    /// Number of columns.
    pub cols: u16,
    /// Number of rows.
    pub rows: u16,
    /// Cell edge length in pixels (cells are square).
    pub cell_size: i32,
    /// Gap between adjacent cells in pixels.
    pub gap: i32,
    /// Width of an open side panel in pixels.
    pub panel_width: i32,
    /// Collapsed container height in pixels (normally equal to `cell_size`).
    pub base_height: i32,
}

impl GridMetrics {
    /// Create metrics with explicit values.
    pub fn new(
        cols: u16,
        rows: u16,
        cell_size: i32,
        gap: i32,
        panel_width: i32,
    ) -> Result<Self, MetricsError> {
        if cols == 0 || rows == 0 {
            return Err(MetricsError::ZeroDimension { cols, rows });
        }
        if cell_size <= 0 || panel_width <= 0 || gap < 0 {
            return Err(MetricsError::InvalidPixelSize {
                cell_size,
                gap,
                panel_width,
            });
        }
        Ok(Self {
            cols,
            rows,
            cell_size,
            gap,
            panel_width,
            base_height: cell_size,
        })
    }

    /// Create metrics with the standard observed values
    /// (128px cells, 4px gap, 304px panels).
    ///
    /// Infallible convenience constructor: zero dimensions are clamped to 1.
    /// Use [`GridMetrics::new`] when dimensions should be validated instead.
    #[must_use]
    pub fn standard(cols: u16, rows: u16) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            cell_size: DEFAULT_CELL_SIZE,
            gap: DEFAULT_GAP,
            panel_width: DEFAULT_PANEL_WIDTH,
            base_height: DEFAULT_CELL_SIZE,
        }
    }

    /// Override the panel width (some grid variants use wider panels).
    #[must_use]
    pub fn with_panel_width(mut self, panel_width: i32) -> Self {
        self.panel_width = panel_width.max(1);
        self
    }

    /// Distance between the origins of two adjacent cells.
    #[inline]
    pub const fn cell_pitch(&self) -> i32 {
        self.cell_size + self.gap
    }

    /// Base pixel origin of a cell, before any displacement.
    #[inline]
    pub const fn cell_origin(&self, cell: Cell) -> PxPoint {
        PxPoint::new(
            cell.col as i32 * self.cell_pitch(),
            cell.row as i32 * self.cell_pitch(),
        )
    }

    /// Full visible grid height: the vertical extent panels span.
    ///
    /// Derived from the row count, never a hardcoded total.
    #[inline]
    pub const fn grid_height(&self) -> i32 {
        self.rows as i32 * self.cell_pitch()
    }

    /// Full grid width before any panel displacement.
    #[inline]
    pub const fn grid_width(&self) -> i32 {
        self.cols as i32 * self.cell_pitch()
    }

    /// Check whether a cell lies within the grid bounds.
    #[inline]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.col < self.cols && cell.row < self.rows
    }

    /// Total number of cells in the grid.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cols as usize * self.rows as usize
    }
}

/// Errors from metric validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsError {
    /// Grid has zero columns or rows.
    ZeroDimension { cols: u16, rows: u16 },
    /// A pixel dimension is non-positive (or the gap is negative).
    InvalidPixelSize {
        cell_size: i32,
        gap: i32,
        panel_width: i32,
    },
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { cols, rows } => {
                write!(f, "grid dimensions must be nonzero (got {cols}x{rows})")
            }
            Self::InvalidPixelSize {
                cell_size,
                gap,
                panel_width,
            } => write!(
                f,
                "invalid pixel sizes: cell_size={cell_size}, gap={gap}, panel_width={panel_width}"
            ),
        }
    }
}

impl std::error::Error for MetricsError {}
