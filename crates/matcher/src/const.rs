//! Scoring constants shared by every match algorithm.

pub const MATCH_SCORE: i16 = 16;
pub const GAP_START_PENALTY: i16 = -3;
pub const GAP_EXTENSION_PENALTY: i16 = -1;

/// Awarded when a match starts a word, i.e. follows a non-word byte or the start of the text.
pub const BOUNDARY_BONUS: i16 = MATCH_SCORE / 2;
/// Awarded for matching a non-word byte itself (`/`, `-`, space, ...).
pub const NON_WORD_BONUS: i16 = MATCH_SCORE / 2;
/// Awarded on a lower-to-upper or letter-to-digit transition.
pub const CAMEL_123_BONUS: i16 = BOUNDARY_BONUS + GAP_EXTENSION_PENALTY;
/// Floor for the bonus of a byte continuing a consecutive run of matches.
pub const CONSECUTIVE_BONUS: i16 = -(GAP_START_PENALTY + GAP_EXTENSION_PENALTY);
pub const FIRST_CHAR_MULTIPLIER: i16 = 2;

/// Longest pattern the DP matcher scores in `i16` cells. No matched byte earns
/// more than `MATCH_SCORE + FIRST_CHAR_MULTIPLIER * BOUNDARY_BONUS`.
pub const V2_MAX_PATTERN_LEN: usize =
	i16::MAX as usize / (MATCH_SCORE + FIRST_CHAR_MULTIPLIER * BOUNDARY_BONUS) as usize;

/// Default slab sizes, in cells.
pub const DEFAULT_SLAB_16: usize = 10 * 1024;
pub const DEFAULT_SLAB_32: usize = 2048;

/// Default byte budget of a [`ScratchArena`](crate::ScratchArena).
pub const DEFAULT_SCRATCH_BYTES: usize = 1024 * 1024;
