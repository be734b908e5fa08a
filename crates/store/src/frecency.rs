//! Blends match quality with visit frequency and recency.

use hop_matcher::{Pattern, ScratchArena, Slab, SlabConfig};

use crate::{Directory, DirectoryStore};

const HOUR: i64 = 60 * 60;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// Slab sizes used while ranking the store; paths are short.
pub const JUMP_SLAB: SlabConfig = SlabConfig::new(64, 64);

/// How much a directory's rank counts, by time since its last visit.
pub fn recency_multiplier(age: i64) -> f64 {
	if age < HOUR {
		4.0
	} else if age < DAY {
		2.0
	} else if age < WEEK {
		0.5
	} else {
		0.25
	}
}

/// `rank * recency_multiplier(now - last_accessed) + match_score`.
pub fn combined_score(directory: &Directory, match_score: i32, now: i64) -> f64 {
	let age = now.saturating_sub(directory.last_accessed());
	directory.rank() * recency_multiplier(age) + f64::from(match_score)
}

/// Working memory for ranking: one slab and one arena, reused across calls.
#[derive(Debug)]
pub struct MatchScratch {
	pub slab: Slab,
	pub arena: ScratchArena,
}

impl MatchScratch {
	pub fn new(slab: SlabConfig, arena_bytes: usize) -> Self {
		Self {
			slab: Slab::new(slab),
			arena: ScratchArena::new(arena_bytes),
		}
	}
}

impl Default for MatchScratch {
	fn default() -> Self {
		Self {
			slab: Slab::new(JUMP_SLAB),
			arena: ScratchArena::default(),
		}
	}
}

/// The winning record of [`DirectoryStore::best_match`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked {
	pub index: usize,
	pub score: f64,
}

impl DirectoryStore {
	/// Highest-ranking record for `target`, never the one at `cwd`.
	///
	/// `target` is parsed as a pattern. Records it does not match, or matches
	/// with a score of 0 or less, are not candidates; a greedy match across a
	/// long gap can score below zero. Ties keep the earlier record.
	pub fn best_match(&self, target: &[u8], cwd: &[u8], now: i64, scratch: &mut MatchScratch) -> Option<Ranked> {
		if self.is_empty() || cwd.is_empty() {
			return None;
		}

		let pattern = Pattern::parse(target);
		let mut best: Option<Ranked> = None;
		for (index, dir) in self.iter().enumerate() {
			if dir.path() == cwd {
				continue;
			}
			let match_score = pattern.score(dir.path(), Some(&mut scratch.slab), &scratch.arena);
			if match_score <= 0 {
				continue;
			}

			let score = combined_score(dir, match_score, now);
			tracing::debug!(path = %dir.to_path().display(), match_score, score, "ranked candidate");
			if best.is_none_or(|b| score > b.score) {
				best = Some(Ranked { index, score });
			}
		}

		scratch.arena.reset();
		best
	}
}
