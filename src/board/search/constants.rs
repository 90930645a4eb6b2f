//! Search constants.

/// Bound larger than any evaluation. `-SCORE_INFINITY` does not overflow.
pub const SCORE_INFINITY: i32 = i32::MAX;

/// Search depth in plies when none is configured.
pub const DEFAULT_DEPTH: u32 = 4;
