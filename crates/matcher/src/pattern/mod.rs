//! The query mini-language.
//!
//! A query is a list of space-separated terms. Every term must match (AND),
//! except that `a | b` folds neighbouring terms into one group where any may
//! match (OR). Per-term modifiers:
//!
//! | syntax   | meaning                                   |
//! |----------|-------------------------------------------|
//! | `foo`    | fuzzy                                     |
//! | `'foo`   | exact substring                           |
//! | `^foo`   | prefix                                    |
//! | `foo$`   | suffix                                    |
//! | `^foo$`  | whole text equals                         |
//! | `!foo`   | must not contain (exact)                  |
//! | `!'foo`  | must not fuzzy-match                      |
//! | `foo\ b` | literal space inside a term               |
//!
//! A term containing an uppercase byte is case sensitive; otherwise it is
//! compared against the lowercased text.

mod eval;

use crate::{Algorithm, Match, Positions, ScratchArena, Slab};

/// Placeholder for an escaped space while the query is split on spaces.
const ESCAPED_SPACE: u8 = b'\t';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
	algorithm: Algorithm,
	inverted: bool,
	case_sensitive: bool,
	text: Box<[u8]>,
}

impl Term {
	pub fn algorithm(&self) -> Algorithm {
		self.algorithm
	}

	pub fn is_inverted(&self) -> bool {
		self.inverted
	}

	pub fn is_case_sensitive(&self) -> bool {
		self.case_sensitive
	}

	/// The literal, lowercased unless the term is case sensitive. Never empty.
	pub fn text(&self) -> &[u8] {
		&self.text
	}

	/// Runs this term's algorithm against `text`, ignoring inversion.
	pub fn run(
		&self,
		text: &[u8],
		pos: Option<&mut Positions<'_>>,
		slab: Option<&mut Slab>,
		arena: &ScratchArena,
	) -> Option<Match> {
		self.algorithm.run(self.case_sensitive, text, &self.text, pos, slab, arena)
	}
}

/// Parsed query: AND-groups of OR-sets of terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
	groups: Vec<Vec<Term>>,
	only_inverted: bool,
}

impl Pattern {
	pub fn parse(query: &[u8]) -> Self {
		let normalized = escape_spaces(query);

		let mut groups = Vec::new();
		let mut set: Vec<Term> = Vec::new();
		let mut switch_set = false;
		let mut after_bar = false;

		for token in normalized.split(|&b| b == b' ').filter(|t| !t.is_empty()) {
			let raw: Vec<u8> = token
				.iter()
				.map(|&b| if b == ESCAPED_SPACE { b' ' } else { b })
				.collect();
			let lowered = raw.to_ascii_lowercase();
			let case_sensitive = raw != lowered;
			let owned = if case_sensitive { raw } else { lowered };
			let mut text = owned.as_slice();

			// A bar only joins terms; anywhere else it is dropped.
			if text == b"|" {
				if !set.is_empty() && !after_bar {
					switch_set = false;
					after_bar = true;
				}
				continue;
			}
			after_bar = false;

			let mut algorithm = Algorithm::FuzzyV2;
			let mut inverted = false;
			if let Some(rest) = text.strip_prefix(b"!") {
				inverted = true;
				algorithm = Algorithm::Exact;
				text = rest;
			}
			if text != b"$"
				&& let Some(rest) = text.strip_suffix(b"$")
			{
				algorithm = Algorithm::Suffix;
				text = rest;
			}
			if let Some(rest) = text.strip_prefix(b"'") {
				algorithm = if inverted { Algorithm::FuzzyV2 } else { Algorithm::Exact };
				text = rest;
			} else if let Some(rest) = text.strip_prefix(b"^") {
				algorithm = if algorithm == Algorithm::Suffix {
					Algorithm::Equal
				} else {
					Algorithm::Prefix
				};
				text = rest;
			}

			if text.is_empty() {
				continue;
			}
			if switch_set {
				groups.push(std::mem::take(&mut set));
			}
			set.push(Term {
				algorithm,
				inverted,
				case_sensitive,
				text: text.into(),
			});
			switch_set = true;
		}

		if !set.is_empty() {
			groups.push(set);
		}

		let only_inverted = !groups.is_empty() && groups.iter().all(|g| g.len() == 1 && g[0].inverted);
		tracing::trace!(groups = groups.len(), only_inverted, "parsed pattern");
		Self { groups, only_inverted }
	}

	pub fn groups(&self) -> &[Vec<Term>] {
		&self.groups
	}

	/// No terms at all; such a pattern matches everything.
	pub fn is_empty(&self) -> bool {
		self.groups.is_empty()
	}

	/// Every group is a single inverted term.
	pub fn only_inverted(&self) -> bool {
		self.only_inverted
	}
}

/// Replaces every `\ ` with [`ESCAPED_SPACE`] so the space survives splitting.
fn escape_spaces(query: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(query.len());
	let mut bytes = query.iter().copied().peekable();
	while let Some(byte) = bytes.next() {
		if byte == b'\\' && bytes.peek() == Some(&b' ') {
			bytes.next();
			out.push(ESCAPED_SPACE);
		} else {
			out.push(byte);
		}
	}
	out
}

#[cfg(test)]
mod tests;
