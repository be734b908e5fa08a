use super::Pattern;
use crate::{Positions, ScratchArena, Slab};

impl Pattern {
	/// Total score of `text`, or 0 when it does not match.
	///
	/// An empty pattern scores 1 for everything. A pattern of only exclusions
	/// scores 1 when none of them hit and 0 otherwise.
	pub fn score(&self, text: &[u8], mut slab: Option<&mut Slab>, arena: &ScratchArena) -> i32 {
		if self.is_empty() {
			return 1;
		}

		if self.only_inverted {
			let hits: i32 = self
				.groups
				.iter()
				.map(|group| group[0].run(text, None, slab.as_deref_mut(), arena).map_or(0, |m| m.score))
				.sum();
			return if hits > 0 { 0 } else { 1 };
		}

		let mut total = 0;
		for group in &self.groups {
			let mut matched = false;
			let mut current = 0;
			for term in group {
				match term.run(text, None, slab.as_deref_mut(), arena) {
					Some(_) if term.inverted => continue,
					Some(m) => {
						current = m.score;
						matched = true;
						break;
					}
					None if term.inverted => {
						current = 0;
						matched = true;
					}
					None => {}
				}
			}
			if !matched {
				return 0;
			}
			total += current;
		}
		total
	}

	/// Offsets of every byte the matching terms hit, for highlighting.
	///
	/// `None` for an empty pattern and for a text the pattern rejects. Offsets
	/// are appended group by group in each algorithm's own order.
	pub fn positions<'a>(
		&self,
		text: &[u8],
		mut slab: Option<&mut Slab>,
		arena: &'a ScratchArena,
	) -> Option<Positions<'a>> {
		if self.is_empty() {
			return None;
		}

		let mut all = Positions::new(arena);
		for group in &self.groups {
			let mut matched = false;
			for term in group {
				if term.inverted {
					if term.run(text, None, slab.as_deref_mut(), arena).is_none() {
						matched = true;
					}
					continue;
				}
				if term.run(text, Some(&mut all), slab.as_deref_mut(), arena).is_some() {
					matched = true;
					break;
				}
			}
			if !matched {
				return None;
			}
		}
		Some(all)
	}
}
