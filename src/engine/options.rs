//! Engine configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::DEFAULT_DEPTH;

/// Smallest depth accepted through [`EngineOptions::set_depth`].
pub const MIN_DEPTH: u32 = 1;
/// Largest depth accepted through [`EngineOptions::set_depth`].
pub const MAX_DEPTH: u32 = 64;

/// Tunable engine settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineOptions {
    /// Search depth in plies
    pub depth: u32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl EngineOptions {
    /// Set the search depth, clamped to `MIN_DEPTH..=MAX_DEPTH`.
    /// Returns the depth actually stored.
    pub fn set_depth(&mut self, depth: u32) -> u32 {
        self.depth = depth.clamp(MIN_DEPTH, MAX_DEPTH);
        self.depth
    }
}
