//! Bump-allocated scratch space for a single matching session.
//!
//! Every buffer the engine cannot take from a [`Slab`](crate::Slab) comes from a
//! [`ScratchArena`]: position lists, DP rows that overflow the slab, grown copies.
//! Nothing is freed individually; [`ScratchArena::reset`] drops everything at once.
//!
//! The arena has a fixed byte budget. Running past it is not a recoverable
//! condition for the engine, so the arena hands control to an
//! [`ExhaustionPolicy`] which must diverge. The default policy aborts the
//! process; tests install [`PanicOnExhaustion`] instead.

use std::cell::Cell;
use std::fmt;
use std::mem::size_of;

use bumpalo::Bump;

use crate::r#const::DEFAULT_SCRATCH_BYTES;

/// What happens when a [`ScratchArena`] runs out of budget.
pub trait ExhaustionPolicy {
	/// Called with the size of the failed request and the bytes still available.
	fn exhausted(&self, requested: usize, remaining: usize) -> !;
}

/// Logs the failed request and aborts the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct AbortOnExhaustion;

impl ExhaustionPolicy for AbortOnExhaustion {
	fn exhausted(&self, requested: usize, remaining: usize) -> ! {
		tracing::error!(requested, remaining, "scratch arena exhausted, aborting");
		std::process::abort()
	}
}

/// Panics instead of aborting, so exhaustion can be observed with `#[should_panic]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicOnExhaustion;

impl ExhaustionPolicy for PanicOnExhaustion {
	fn exhausted(&self, requested: usize, remaining: usize) -> ! {
		panic!("scratch arena exhausted: requested {requested} bytes with {remaining} remaining")
	}
}

/// A budgeted bump allocator handing out zeroed slices.
pub struct ScratchArena {
	bump: Bump,
	budget: usize,
	used: Cell<usize>,
	policy: Box<dyn ExhaustionPolicy>,
}

impl ScratchArena {
	/// Creates an arena that aborts the process once `budget` bytes are handed out.
	pub fn new(budget: usize) -> Self {
		Self::with_policy(budget, AbortOnExhaustion)
	}

	pub fn with_policy(budget: usize, policy: impl ExhaustionPolicy + 'static) -> Self {
		Self {
			bump: Bump::new(),
			budget,
			used: Cell::new(0),
			policy: Box::new(policy),
		}
	}

	pub fn budget(&self) -> usize {
		self.budget
	}

	/// Bytes handed out since creation or the last [`reset`](Self::reset).
	pub fn used(&self) -> usize {
		self.used.get()
	}

	pub fn remaining(&self) -> usize {
		self.budget.saturating_sub(self.used.get())
	}

	/// Allocates `count` zeroed elements.
	#[allow(clippy::mut_from_ref, reason = "bump allocation hands out disjoint slices from a shared arena")]
	pub fn alloc_zeroed<T: Copy + Default>(&self, count: usize) -> &mut [T] {
		self.charge(count.saturating_mul(size_of::<T>()));
		self.bump.alloc_slice_fill_copy(count, T::default())
	}

	/// Allocates `new_count` zeroed elements and copies `old` into the front.
	///
	/// The old block is not reclaimed.
	#[allow(clippy::mut_from_ref, reason = "bump allocation hands out disjoint slices from a shared arena")]
	pub fn grow<T: Copy + Default>(&self, old: &[T], new_count: usize) -> &mut [T] {
		let grown = self.alloc_zeroed(new_count.max(old.len()));
		grown[..old.len()].copy_from_slice(old);
		grown
	}

	/// Discards every allocation made from this arena.
	pub fn reset(&mut self) {
		self.bump.reset();
		self.used.set(0);
	}

	fn charge(&self, bytes: usize) {
		let used = self.used.get();
		if bytes > self.budget.saturating_sub(used) {
			self.policy.exhausted(bytes, self.remaining());
		}
		self.used.set(used + bytes);
	}
}

impl Default for ScratchArena {
	fn default() -> Self {
		Self::new(DEFAULT_SCRATCH_BYTES)
	}
}

impl fmt::Debug for ScratchArena {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ScratchArena")
			.field("budget", &self.budget)
			.field("used", &self.used.get())
			.finish_non_exhaustive()
	}
}
