//! Pre-sized integer buffers reused across matches.
//!
//! A [`Slab`] owns one `i16` and one `i32` buffer. The DP matcher carves its
//! working rows out of them front to back; a row that does not fit is taken
//! from the [`ScratchArena`] instead, so a small slab degrades to allocation
//! rather than failure.

use crate::ScratchArena;
use crate::r#const::{DEFAULT_SLAB_16, DEFAULT_SLAB_32};

/// Sizes of the two slab buffers, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlabConfig {
	pub size_16: usize,
	pub size_32: usize,
	/// Largest `text.len() * pattern.len()` the DP matcher will attempt before
	/// falling back to the greedy matcher.
	pub v2_cell_limit: usize,
}

impl SlabConfig {
	/// Config whose fallback threshold equals the `i16` capacity.
	pub const fn new(size_16: usize, size_32: usize) -> Self {
		Self {
			size_16,
			size_32,
			v2_cell_limit: size_16,
		}
	}

	pub const fn with_v2_cell_limit(mut self, cells: usize) -> Self {
		self.v2_cell_limit = cells;
		self
	}
}

impl Default for SlabConfig {
	fn default() -> Self {
		Self::new(DEFAULT_SLAB_16, DEFAULT_SLAB_32)
	}
}

#[derive(Debug, Clone)]
pub struct Slab {
	i16: Box<[i16]>,
	i32: Box<[i32]>,
	v2_cell_limit: usize,
}

impl Slab {
	pub fn new(config: SlabConfig) -> Self {
		Self {
			i16: vec![0; config.size_16].into_boxed_slice(),
			i32: vec![0; config.size_32].into_boxed_slice(),
			v2_cell_limit: config.v2_cell_limit,
		}
	}

	pub fn i16_capacity(&self) -> usize {
		self.i16.len()
	}

	pub fn i32_capacity(&self) -> usize {
		self.i32.len()
	}

	pub fn v2_cell_limit(&self) -> usize {
		self.v2_cell_limit
	}

	/// Splits the slab into carvers for one match call.
	pub(crate) fn carvers<'a>(&'a mut self, arena: &'a ScratchArena) -> (Carver<'a, i16>, Carver<'a, i32>) {
		(Carver::new(&mut self.i16, arena), Carver::new(&mut self.i32, arena))
	}
}

impl Default for Slab {
	fn default() -> Self {
		Self::new(SlabConfig::default())
	}
}

/// Hands out consecutive zeroed regions of a slab buffer, spilling to the arena.
pub(crate) struct Carver<'a, T> {
	free: &'a mut [T],
	arena: &'a ScratchArena,
}

impl<'a, T: Copy + Default> Carver<'a, T> {
	pub fn new(free: &'a mut [T], arena: &'a ScratchArena) -> Self {
		Self { free, arena }
	}

	/// A carver with no slab behind it; every request goes to the arena.
	pub fn arena_only(arena: &'a ScratchArena) -> Self {
		Self { free: &mut [], arena }
	}

	pub fn take(&mut self, size: usize) -> &'a mut [T] {
		// Strictly greater: the last cell of a slab is never handed out.
		if self.free.len() > size {
			let (head, tail) = std::mem::take(&mut self.free).split_at_mut(size);
			self.free = tail;
			head.fill(T::default());
			return head;
		}
		self.arena.alloc_zeroed(size)
	}
}
