//! The six match algorithms and their single dispatch point.
//!
//! Every algorithm takes the same arguments: whether the comparison is case
//! sensitive, the candidate text, the pattern (already lowercased when the
//! comparison is not), an optional [`Positions`] sink, an optional [`Slab`]
//! and the [`ScratchArena`] backing any overflow. Only the DP matcher uses the
//! slab.

mod anchored;
mod fuzzy;
mod score;

pub use anchored::{equal_match, exact_match_naive, prefix_match, suffix_match};
pub use fuzzy::{fuzzy_match_v1, fuzzy_match_v2};
pub(crate) use score::calculate_score;

use crate::{Positions, ScratchArena, Slab};

/// A matched span of the text, in byte offsets, and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
	pub start: usize,
	pub end: usize,
	pub score: i32,
}

impl Match {
	/// What every algorithm but [`equal_match`] reports for an empty pattern.
	pub const EMPTY: Match = Match { start: 0, end: 0, score: 0 };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
	/// Greedy leftmost subsequence, trimmed to the shortest window.
	FuzzyV1,
	/// Highest-scoring subsequence via dynamic programming.
	FuzzyV2,
	/// Contiguous occurrence, preferring one that starts on a word boundary.
	Exact,
	/// Anchored at the first non-whitespace byte.
	Prefix,
	/// Anchored at the last non-whitespace byte.
	Suffix,
	/// Whole trimmed text equals the pattern.
	Equal,
}

impl Algorithm {
	pub fn run(
		self,
		case_sensitive: bool,
		text: &[u8],
		pattern: &[u8],
		pos: Option<&mut Positions<'_>>,
		slab: Option<&mut Slab>,
		arena: &ScratchArena,
	) -> Option<Match> {
		match self {
			Algorithm::FuzzyV1 => fuzzy_match_v1(case_sensitive, text, pattern, pos, slab, arena),
			Algorithm::FuzzyV2 => fuzzy_match_v2(case_sensitive, text, pattern, pos, slab, arena),
			Algorithm::Exact => exact_match_naive(case_sensitive, text, pattern, pos, slab, arena),
			Algorithm::Prefix => prefix_match(case_sensitive, text, pattern, pos, slab, arena),
			Algorithm::Suffix => suffix_match(case_sensitive, text, pattern, pos, slab, arena),
			Algorithm::Equal => equal_match(case_sensitive, text, pattern, pos, slab, arena),
		}
	}
}

#[inline]
pub(crate) fn fold(byte: u8, case_sensitive: bool) -> u8 {
	if case_sensitive { byte } else { byte.to_ascii_lowercase() }
}

/// C `isspace`: unlike [`u8::is_ascii_whitespace`] this includes vertical tab.
#[inline]
pub(crate) fn is_space(byte: u8) -> bool {
	matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

pub(crate) fn leading_whitespace(text: &[u8]) -> usize {
	text.iter().take_while(|&&b| is_space(b)).count()
}

pub(crate) fn trailing_whitespace(text: &[u8]) -> usize {
	text.iter().rev().take_while(|&&b| is_space(b)).count()
}

/// Finds `byte` in `text[from..]`. For a lowercase byte in a case-insensitive
/// search, an earlier uppercase occurrence wins.
fn try_skip(text: &[u8], case_sensitive: bool, byte: u8, from: usize) -> Option<usize> {
	let rest = &text[from..];
	let mut idx = memchr::memchr(byte, rest);
	if idx == Some(0) {
		return Some(from);
	}

	if !case_sensitive && byte.is_ascii_lowercase() {
		let window = match idx {
			Some(idx) => &rest[..idx],
			None => rest,
		};
		if let Some(upper) = memchr::memchr(byte.to_ascii_uppercase(), window) {
			idx = Some(upper);
		}
	}

	idx.map(|idx| from + idx)
}

/// Cheap prefilter: does `pattern` occur in `text` as a subsequence?
///
/// Returns the offset one before the first pattern byte (clamped to 0), so the
/// DP pass can seed its character class from the preceding byte.
pub(crate) fn ascii_fuzzy_index(text: &[u8], pattern: &[u8], case_sensitive: bool) -> Option<usize> {
	let mut first_idx = 0;
	let mut idx = 0;
	for (pidx, &byte) in pattern.iter().enumerate() {
		idx = try_skip(text, case_sensitive, byte, idx)?;
		if pidx == 0 && idx > 0 {
			first_idx = idx - 1;
		}
		idx += 1;
	}
	Some(first_idx)
}
