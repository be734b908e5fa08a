use super::fold;
use crate::Positions;
use crate::class::{CharClass, bonus_for};
use crate::r#const::*;

/// Scores a confirmed match window `text[sidx..eidx]`.
///
/// Walks the window left to right, consuming pattern bytes in order. A matched
/// byte earns [`MATCH_SCORE`] plus a bonus (doubled on the first pattern byte);
/// inside a consecutive run the bonus is at least [`CONSECUTIVE_BONUS`] and at
/// least the bonus the run started with. Unmatched bytes cost a gap penalty.
pub(crate) fn calculate_score(
	case_sensitive: bool,
	text: &[u8],
	pattern: &[u8],
	sidx: usize,
	eidx: usize,
	mut pos: Option<&mut Positions<'_>>,
) -> i32 {
	let m = pattern.len();
	let mut pidx = 0;
	let mut score: i32 = 0;
	let mut consecutive = 0;
	let mut in_gap = false;
	let mut first_bonus: i16 = 0;

	if let Some(pos) = pos.as_deref_mut() {
		pos.reserve(m, m);
	}

	let mut prev_class = if sidx > 0 { CharClass::of(text[sidx - 1]) } else { CharClass::NonWord };

	for (idx, &byte) in text.iter().enumerate().take(eidx).skip(sidx) {
		let class = CharClass::of(byte);

		if pidx < m && fold(byte, case_sensitive) == pattern[pidx] {
			if let Some(pos) = pos.as_deref_mut() {
				pos.push(idx);
			}
			score += i32::from(MATCH_SCORE);
			let mut bonus = bonus_for(prev_class, class);
			if consecutive == 0 {
				first_bonus = bonus;
			} else {
				// A boundary inside a run restarts the run's bonus.
				if bonus == BOUNDARY_BONUS {
					first_bonus = bonus;
				}
				bonus = bonus.max(first_bonus).max(CONSECUTIVE_BONUS);
			}
			if pidx == 0 {
				score += i32::from(bonus * FIRST_CHAR_MULTIPLIER);
			} else {
				score += i32::from(bonus);
			}
			in_gap = false;
			consecutive += 1;
			pidx += 1;
		} else {
			score += i32::from(if in_gap { GAP_EXTENSION_PENALTY } else { GAP_START_PENALTY });
			in_gap = true;
			consecutive = 0;
			first_bonus = 0;
		}
		prev_class = class;
	}

	score
}
