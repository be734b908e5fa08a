//! ASCII character classes and the positional bonus model.
//!
//! Bytes outside `[a-zA-Z0-9]` are all [`CharClass::NonWord`], including every
//! non-ASCII byte.

use crate::r#const::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
	NonWord,
	Lower,
	Upper,
	Number,
}

impl CharClass {
	#[inline]
	pub fn of(byte: u8) -> Self {
		match byte {
			b'a'..=b'z' => CharClass::Lower,
			b'A'..=b'Z' => CharClass::Upper,
			b'0'..=b'9' => CharClass::Number,
			_ => CharClass::NonWord,
		}
	}
}

/// Bonus for matching a byte of class `class` that follows one of class `prev`.
#[inline]
pub fn bonus_for(prev: CharClass, class: CharClass) -> i16 {
	use CharClass::*;

	match (prev, class) {
		(NonWord, Lower | Upper | Number) => BOUNDARY_BONUS,
		(Lower, Upper) => CAMEL_123_BONUS,
		(prev, Number) if prev != Number => CAMEL_123_BONUS,
		(_, NonWord) => NON_WORD_BONUS,
		_ => 0,
	}
}

/// Bonus for a match starting at `idx`; the first byte always counts as a boundary.
#[inline]
pub fn bonus_at(text: &[u8], idx: usize) -> i16 {
	if idx == 0 {
		return BOUNDARY_BONUS;
	}
	bonus_for(CharClass::of(text[idx - 1]), CharClass::of(text[idx]))
}
