//! Expansion kinds and their static growth profiles.

use serde::{Deserialize, Serialize};

/// Extra height gained by a full expansion, in pixels.
pub const FULL_GROWTH: i32 = 132;

/// Extra height gained by a half expansion, in pixels.
pub const HALF_GROWTH: i32 = 64;

/// How a container grows when expanded. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionKind {
    /// Never grows; never displaces neighbors.
    #[default]
    None,
    /// Grows upward by the full amount; containers above are pushed up.
    GrowUp,
    /// Grows downward by the full amount; containers below are pushed down.
    GrowDownFull,
    /// Grows downward by the half amount; containers below are pushed down.
    GrowDownHalf,
}

/// Static growth profile for an expansion kind at a given base height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionProfile {
    /// Container height while expanded.
    pub expanded_height: i32,
    /// Offset added to the container's own top while expanded.
    /// Negative for upward growth, zero otherwise.
    pub anchor_offset_top: i32,
    /// Pixels of displacement exerted on same-column neighbors.
    pub push_amount: i32,
}

impl ExpansionKind {
    /// Look up the growth profile for this kind.
    ///
    /// The table is exhaustive; adding a kind without a profile is a compile
    /// error.
    #[must_use]
    pub const fn profile(self, base_height: i32) -> ExpansionProfile {
        match self {
            Self::None => ExpansionProfile {
                expanded_height: base_height,
                anchor_offset_top: 0,
                push_amount: 0,
            },
            Self::GrowUp => ExpansionProfile {
                expanded_height: base_height + FULL_GROWTH,
                anchor_offset_top: -FULL_GROWTH,
                push_amount: FULL_GROWTH,
            },
            Self::GrowDownFull => ExpansionProfile {
                expanded_height: base_height + FULL_GROWTH,
                anchor_offset_top: 0,
                push_amount: FULL_GROWTH,
            },
            Self::GrowDownHalf => ExpansionProfile {
                expanded_height: base_height + HALF_GROWTH,
                anchor_offset_top: 0,
                push_amount: HALF_GROWTH,
            },
        }
    }

    /// Whether this kind pushes containers below it when expanded.
    #[inline]
    #[must_use]
    pub const fn grows_down(self) -> bool {
        matches!(self, Self::GrowDownFull | Self::GrowDownHalf)
    }

    /// Whether this kind pushes containers above it when expanded.
    #[inline]
    #[must_use]
    pub const fn grows_up(self) -> bool {
        matches!(self, Self::GrowUp)
    }
}
