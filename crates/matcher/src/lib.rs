//! Byte-oriented fuzzy matching in the style of FZF.
//!
//! The engine works on raw bytes with ASCII character classes. A query is
//! parsed once into a [`Pattern`] and then scored against any number of
//! candidates:
//!
//! ```
//! use hop_matcher::{Pattern, ScratchArena, Slab};
//!
//! let arena = ScratchArena::default();
//! let mut slab = Slab::default();
//! let pattern = Pattern::parse(b"'src | ^Lua");
//! assert_eq!(pattern.score(b"Lua/fzf_lib.lua", Some(&mut slab), &arena), 80);
//! assert_eq!(pattern.score(b"README.md", Some(&mut slab), &arena), 0);
//! ```
//!
//! Working memory comes from two places. A [`Slab`] holds reusable integer
//! buffers for the DP matcher, and a [`ScratchArena`] backs everything else
//! (position lists, rows that do not fit the slab). Neither frees anything
//! individually.

pub mod algo;
mod arena;
mod class;
pub mod r#const;
mod pattern;
mod positions;
mod slab;

pub use algo::{
	Algorithm, Match, equal_match, exact_match_naive, fuzzy_match_v1, fuzzy_match_v2, prefix_match, suffix_match,
};
pub use arena::{AbortOnExhaustion, ExhaustionPolicy, PanicOnExhaustion, ScratchArena};
pub use class::{CharClass, bonus_at, bonus_for};
pub use pattern::{Pattern, Term};
pub use positions::Positions;
pub use slab::{Slab, SlabConfig};
