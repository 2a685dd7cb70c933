//! Square-spiral placement of entities onto grid cells.
//!
//! [`SpiralWalk`] is the raw traversal: an infinite iterator over signed cell
//! coordinates radiating outward from a center in a 90°-turning square
//! spiral. [`place_spiral`] consumes it against a bounded grid, skipping
//! out-of-bounds cells and truncating (with a reported shortfall) when the
//! request exceeds grid capacity.

use tilegrid_core::{Cell, GridMetrics};
use tracing::warn;

/// Turn direction of the spiral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Clockwise,
    CounterClockwise,
}

/// Initial walk direction out of the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heading {
    #[default]
    Right,
    Down,
    Left,
    Up,
}

impl Heading {
    /// Unit step for this heading (x grows right, y grows down).
    #[inline]
    const fn step(self) -> (i32, i32) {
        match self {
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Up => (0, -1),
        }
    }

    /// The heading after one 90° turn in the given rotation.
    #[inline]
    const fn turned(self, rotation: Rotation) -> Self {
        match rotation {
            Rotation::Clockwise => match self {
                Self::Right => Self::Down,
                Self::Down => Self::Left,
                Self::Left => Self::Up,
                Self::Up => Self::Right,
            },
            Rotation::CounterClockwise => match self {
                Self::Right => Self::Up,
                Self::Up => Self::Left,
                Self::Left => Self::Down,
                Self::Down => Self::Right,
            },
        }
    }
}

/// Infinite square-spiral traversal over signed cell coordinates.
///
/// Emits the center first, then walks runs of length 1, 1, 2, 2, 3, 3, ...
/// turning 90° in the configured rotation after each run. Every coordinate is
/// visited exactly once; the walk never revisits or skips a cell within the
/// covered radius.
#[derive(Debug, Clone)]
pub struct SpiralWalk {
    x: i32,
    y: i32,
    heading: Heading,
    rotation: Rotation,
    run_length: u32,
    steps_left: u32,
    runs_at_length: u8,
    emitted_center: bool,
}

impl SpiralWalk {
    /// Start a walk at the given center.
    #[must_use]
    pub fn new(center_x: i32, center_y: i32, rotation: Rotation, heading: Heading) -> Self {
        Self {
            x: center_x,
            y: center_y,
            heading,
            rotation,
            run_length: 1,
            steps_left: 1,
            runs_at_length: 0,
            emitted_center: false,
        }
    }
}

impl Iterator for SpiralWalk {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.emitted_center {
            self.emitted_center = true;
            return Some((self.x, self.y));
        }
        let (dx, dy) = self.heading.step();
        self.x += dx;
        self.y += dy;
        self.steps_left -= 1;
        if self.steps_left == 0 {
            self.runs_at_length += 1;
            if self.runs_at_length == 2 {
                self.run_length += 1;
                self.runs_at_length = 0;
            }
            self.heading = self.heading.turned(self.rotation);
            self.steps_left = self.run_length;
        }
        Some((self.x, self.y))
    }
}

/// Outcome of placing `requested` entities spiral-order onto a bounded grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpiralPlacement {
    /// Distinct in-bounds cells, in placement order. The first cell is the
    /// center (when the center is in bounds).
    pub cells: Vec<Cell>,
    /// How many placements were asked for.
    pub requested: usize,
}

impl SpiralPlacement {
    /// Whether every requested entity received a cell.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.len() == self.requested
    }

    /// Number of entities that could not be placed.
    #[must_use]
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.cells.len())
    }
}

/// Walk a square spiral from `center`, collecting the first `requested`
/// in-bounds cells.
///
/// Cells outside the grid are skipped without breaking the traversal order of
/// the remaining in-bounds cells; the walk is bounded by the farthest grid
/// corner, so every in-bounds cell is reachable even from a center outside
/// the grid. A shortfall therefore occurs only when `requested` exceeds the
/// grid capacity: the result is truncated at capacity and the shortfall is
/// reported (and logged); entities are never wrapped onto already-assigned
/// cells.
#[must_use]
pub fn place_spiral(
    metrics: &GridMetrics,
    center: Cell,
    rotation: Rotation,
    heading: Heading,
    requested: usize,
) -> SpiralPlacement {
    let target = requested.min(metrics.capacity());
    let mut cells = Vec::with_capacity(target);

    // Bound the walk by the farthest grid corner: a square spiral covers
    // Chebyshev radius r within (2r + 1)^2 steps, so every in-bounds cell is
    // reachable from any center, including centers outside the grid.
    let dx = i64::from(center.col).max(i64::from(metrics.cols) - 1 - i64::from(center.col));
    let dy = i64::from(center.row).max(i64::from(metrics.rows) - 1 - i64::from(center.row));
    let radius = dx.max(dy).max(1) as u64;
    let max_steps = (2 * radius + 1).pow(2);

    let walk = SpiralWalk::new(i32::from(center.col), i32::from(center.row), rotation, heading);
    for (x, y) in walk.take(max_steps as usize) {
        if cells.len() == target {
            break;
        }
        let (Ok(col), Ok(row)) = (u16::try_from(x), u16::try_from(y)) else {
            continue;
        };
        let cell = Cell::new(col, row);
        if metrics.contains(cell) {
            cells.push(cell);
        }
    }

    let placement = SpiralPlacement { cells, requested };
    if !placement.is_complete() {
        warn!(
            requested,
            placed = placement.cells.len(),
            "spiral placement truncated: requested count exceeds grid capacity"
        );
    }
    placement
}
