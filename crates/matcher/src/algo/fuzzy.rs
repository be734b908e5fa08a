use super::{Match, ascii_fuzzy_index, calculate_score, fold};
use crate::class::{CharClass, bonus_for};
use crate::r#const::*;
use crate::slab::Carver;
use crate::{Positions, ScratchArena, Slab};

/// Greedy O(n) fuzzy match.
///
/// Finds the leftmost completion of `pattern` as a subsequence, walks back from
/// its end to the shortest window that still contains it, and scores that
/// window. Not score-optimal; see [`fuzzy_match_v2`].
pub fn fuzzy_match_v1(
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
	ascii_fuzzy_index(text, pattern, case_sensitive)?;

	let mut pidx = 0;
	let mut sidx = None;
	let mut eidx = None;
	for (idx, &byte) in text.iter().enumerate() {
		if fold(byte, case_sensitive) == pattern[pidx] {
			sidx.get_or_insert(idx);
			pidx += 1;
			if pidx == m {
				eidx = Some(idx + 1);
				break;
			}
		}
	}
	let (Some(mut start), Some(end)) = (sidx, eidx) else {
		return None;
	};

	let mut pidx = m - 1;
	for idx in (start..end).rev() {
		if fold(text[idx], case_sensitive) == pattern[pidx] {
			if pidx == 0 {
				start = idx;
				break;
			}
			pidx -= 1;
		}
	}

	let score = calculate_score(case_sensitive, text, pattern, start, end, pos);
	Some(Match { start, end, score })
}

/// Score-optimal fuzzy match.
///
/// A first pass over the text computes per-byte bonuses, the best score of a
/// match of `pattern[0]` ending at each byte, and the first occurrence of every
/// pattern byte in order. The remaining rows are filled only over the band
/// between the first occurrence of `pattern[0]` and the last occurrence of the
/// final pattern byte. Positions come from backtracking the best cell of the
/// last row.
///
/// When a slab is given and `text.len() * pattern.len()` exceeds its
/// [`v2_cell_limit`](Slab::v2_cell_limit), this defers to [`fuzzy_match_v1`].
/// So does a pattern longer than [`V2_MAX_PATTERN_LEN`], whose score could
/// overflow the `i16` DP cells.
pub fn fuzzy_match_v2(
	case_sensitive: bool,
	text: &[u8],
	pattern: &[u8],
	mut pos: Option<&mut Positions<'_>>,
	slab: Option<&mut Slab>,
	arena: &ScratchArena,
) -> Option<Match> {
	let m = pattern.len();
	let n = text.len();
	if m == 0 {
		return Some(Match::EMPTY);
	}
	let over_limit = slab.as_deref().is_some_and(|slab| n.saturating_mul(m) > slab.v2_cell_limit());
	if over_limit || m > V2_MAX_PATTERN_LEN {
		return fuzzy_match_v1(case_sensitive, text, pattern, pos, None, arena);
	}

	let idx = ascii_fuzzy_index(text, pattern, case_sensitive)?;

	let (mut c16, mut c32) = match slab {
		Some(slab) => slab.carvers(arena),
		None => (Carver::arena_only(arena), Carver::arena_only(arena)),
	};

	let h0 = c16.take(n);
	let c0 = c16.take(n);
	let bonus = c16.take(n);
	let first = c32.take(m);
	let t = c32.take(n);
	for (dst, &byte) in t.iter_mut().zip(text) {
		*dst = i32::from(byte);
	}

	// Row 0: matches of the first pattern byte, plus bonuses and first occurrences.
	let mut max_score: i16 = 0;
	let mut max_score_pos = 0;
	let mut pidx = 0;
	let mut last_idx = 0;
	let pchar0 = pattern[0];
	let mut pchar = pattern[0];
	let mut prev_h0: i16 = 0;
	let mut prev_class = CharClass::NonWord;
	let mut in_gap = false;

	for col in idx..n {
		let mut byte = text[col];
		let class = CharClass::of(byte);
		if !case_sensitive && class == CharClass::Upper {
			byte = byte.to_ascii_lowercase();
		}
		t[col] = i32::from(byte);
		let b = bonus_for(prev_class, class);
		bonus[col] = b;
		prev_class = class;

		if byte == pchar {
			if pidx < m {
				first[pidx] = col as i32;
				pidx += 1;
				pchar = pattern[pidx.min(m - 1)];
			}
			last_idx = col;
		}

		if byte == pchar0 {
			let score = MATCH_SCORE + b * FIRST_CHAR_MULTIPLIER;
			h0[col] = score;
			c0[col] = 1;
			if m == 1 && score > max_score {
				max_score = score;
				max_score_pos = col;
				if b == BOUNDARY_BONUS {
					break;
				}
			}
			in_gap = false;
		} else {
			let gap = if in_gap { GAP_EXTENSION_PENALTY } else { GAP_START_PENALTY };
			h0[col] = (prev_h0 + gap).max(0);
			c0[col] = 0;
			in_gap = true;
		}
		prev_h0 = h0[col];
	}

	if pidx != m {
		return None;
	}
	if m == 1 {
		if let Some(pos) = pos {
			pos.push(max_score_pos);
		}
		return Some(Match {
			start: max_score_pos,
			end: max_score_pos + 1,
			score: i32::from(max_score),
		});
	}

	// Rows 1..m over the band [f0, last_idx].
	let f0 = first[0] as usize;
	let width = last_idx - f0 + 1;
	let h = c16.take(width * m);
	h[..width].copy_from_slice(&h0[f0..=last_idx]);
	let c = c16.take(width * m);
	c[..width].copy_from_slice(&c0[f0..=last_idx]);

	for pidx in 1..m {
		let foff = first[pidx] as usize;
		let pchar = i32::from(pattern[pidx]);
		let base = pidx * width + foff - f0;
		let mut in_gap = false;
		h[base - 1] = 0;

		for (j, col) in (foff..=last_idx).enumerate() {
			let here = base + j;
			let diag = here - 1 - width;
			let gap = if in_gap { GAP_EXTENSION_PENALTY } else { GAP_START_PENALTY };
			let s2 = h[here - 1] + gap;
			let mut s1 = 0;
			let mut consecutive = 0;

			if t[col] == pchar {
				s1 = h[diag] + MATCH_SCORE;
				let mut b = bonus[col];
				consecutive = c[diag] + 1;
				if b == BOUNDARY_BONUS {
					consecutive = 1;
				} else if consecutive > 1 {
					b = b.max(CONSECUTIVE_BONUS.max(bonus[col + 1 - consecutive as usize]));
				}
				if s1 + b < s2 {
					s1 += bonus[col];
					consecutive = 0;
				} else {
					s1 += b;
				}
			}
			c[here] = consecutive;
			in_gap = s1 < s2;
			let score = s1.max(s2).max(0);
			if pidx == m - 1 && score > max_score {
				max_score = score;
				max_score_pos = col;
			}
			h[here] = score;
		}
	}

	// Backtrack from the best cell of the last row.
	if let Some(pos) = pos.as_deref_mut() {
		pos.reserve(m, m);
	}
	let mut i = m - 1;
	let mut j = max_score_pos;
	let mut prefer_match = true;
	loop {
		let row = i * width;
		let j0 = j - f0;
		let s = h[row + j0];
		let fi = first[i] as usize;

		let s1 = if i > 0 && j >= fi { h[row - width + j0 - 1] } else { 0 };
		let s2 = if j > fi { h[row + j0 - 1] } else { 0 };

		if s > s1 && (s > s2 || (s == s2 && prefer_match)) {
			if let Some(pos) = pos.as_deref_mut() {
				pos.push(j);
			}
			if i == 0 {
				break;
			}
			i -= 1;
		}
		let next_diag = row + width + j0 + 1;
		prefer_match = c[row + j0] > 1 || (next_diag < c.len() && c[next_diag] > 0);
		j -= 1;
	}

	Some(Match {
		start: j,
		end: max_score_pos + 1,
		score: i32::from(max_score),
	})
}
