use super::{Match, ascii_fuzzy_index, calculate_score, fold, is_space, leading_whitespace, trailing_whitespace};
use crate::class::bonus_at;
use crate::r#const::*;
use crate::{Positions, ScratchArena, Slab};

/// Contiguous occurrence of `pattern` in `text`.
///
/// Among all occurrences, the one whose first byte carries the highest
/// positional bonus wins, the earliest on ties. The scan stops at the first
/// occurrence starting on a word boundary.
pub fn exact_match_naive(
	case_sensitive: bool,
	text: &[u8],
	pattern: &[u8],
	pos: Option<&mut Positions<'_>>,
	_slab: Option<&mut Slab>,
	_arena: &ScratchArena,
) -> Option<Match> {
	let m = pattern.len();
	let n = text.len();
	if m == 0 {
		return Some(Match::EMPTY);
	}
	if n < m {
		return None;
	}
	ascii_fuzzy_index(text, pattern, case_sensitive)?;

	let mut pidx = 0;
	let mut best_pos = None;
	let mut bonus: i16 = 0;
	let mut best_bonus: i16 = -1;
	let mut idx = 0;
	while idx < n {
		if fold(text[idx], case_sensitive) == pattern[pidx] {
			if pidx == 0 {
				bonus = bonus_at(text, idx);
			}
			pidx += 1;
			if pidx == m {
				if bonus > best_bonus {
					best_pos = Some(idx);
					best_bonus = bonus;
				}
				if bonus == BOUNDARY_BONUS {
					break;
				}
				// Resume right after the start of this occurrence.
				idx -= pidx - 1;
				pidx = 0;
				bonus = 0;
			}
		} else {
			idx -= pidx;
			pidx = 0;
			bonus = 0;
		}
		idx += 1;
	}

	let best = best_pos?;
	let start = best + 1 - m;
	let end = best + 1;
	let score = calculate_score(case_sensitive, text, pattern, start, end, None);
	if let Some(pos) = pos {
		pos.extend_range(start, end);
	}
	Some(Match { start, end, score })
}

/// `pattern` at the start of `text`, ignoring leading whitespace unless the
/// pattern itself starts with whitespace.
pub fn prefix_match(
	case_sensitive: bool,
	text: &[u8],
	pattern: &[u8],
	pos: Option<&mut Positions<'_>>,
	_slab: Option<&mut Slab>,
	_arena: &ScratchArena,
) -> Option<Match> {
	let m = pattern.len();
	if m == 0 {
		return Some(Match::EMPTY);
	}

	let start = if is_space(pattern[0]) { 0 } else { leading_whitespace(text) };
	if text.len() - start < m {
		return None;
	}
	let end = start + m;
	let matches = text[start..end]
		.iter()
		.zip(pattern)
		.all(|(&byte, &p)| fold(byte, case_sensitive) == p);
	if !matches {
		return None;
	}

	let score = calculate_score(case_sensitive, text, pattern, start, end, None);
	if let Some(pos) = pos {
		pos.extend_range(start, end);
	}
	Some(Match { start, end, score })
}

/// `pattern` at the end of `text`, ignoring trailing whitespace unless the
/// pattern itself ends with whitespace.
pub fn suffix_match(
	case_sensitive: bool,
	text: &[u8],
	pattern: &[u8],
	pos: Option<&mut Positions<'_>>,
	_slab: Option<&mut Slab>,
	_arena: &ScratchArena,
) -> Option<Match> {
	let m = pattern.len();
	let mut end = text.len();
	if m == 0 || !is_space(pattern[m - 1]) {
		end -= trailing_whitespace(text);
	}
	if m == 0 {
		return Some(Match { start: end, end, score: 0 });
	}
	if end < m {
		return None;
	}

	let start = end - m;
	let matches = text[start..end]
		.iter()
		.zip(pattern)
		.all(|(&byte, &p)| fold(byte, case_sensitive) == p);
	if !matches {
		return None;
	}

	let score = calculate_score(case_sensitive, text, pattern, start, end, None);
	if let Some(pos) = pos {
		pos.extend_range(start, end);
	}
	Some(Match { start, end, score })
}

/// The whole text, minus surrounding whitespace, equals `pattern`.
///
/// Scored in closed form: every byte is treated as a boundary match, and the
/// first byte's bonus is doubled.
pub fn equal_match(
	case_sensitive: bool,
	text: &[u8],
	pattern: &[u8],
	pos: Option<&mut Positions<'_>>,
	_slab: Option<&mut Slab>,
	_arena: &ScratchArena,
) -> Option<Match> {
	let m = pattern.len();
	if m == 0 {
		return None;
	}

	let start = leading_whitespace(text);
	let trimmed = if start == text.len() {
		&[][..]
	} else {
		&text[start..text.len() - trailing_whitespace(text)]
	};
	if trimmed.len() != m {
		return None;
	}
	if !trimmed.iter().zip(pattern).all(|(&byte, &p)| fold(byte, case_sensitive) == p) {
		return None;
	}

	if let Some(pos) = pos {
		pos.extend_range(start, start + m);
	}
	let m = m as i32;
	let score = i32::from(MATCH_SCORE + BOUNDARY_BONUS) * m + i32::from((FIRST_CHAR_MULTIPLIER - 1) * BOUNDARY_BONUS);
	Some(Match {
		start,
		end: start + trimmed.len(),
		score,
	})
}
