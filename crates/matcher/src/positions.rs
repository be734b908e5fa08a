use std::fmt;

use crate::ScratchArena;

/// Matched byte offsets collected for highlighting.
///
/// Offsets are stored in the order the matcher produced them. The DP matcher
/// walks its backtrace right to left, so its offsets come out descending.
pub struct Positions<'a> {
	arena: &'a ScratchArena,
	buf: &'a mut [u32],
	len: usize,
}

impl<'a> Positions<'a> {
	pub fn new(arena: &'a ScratchArena) -> Self {
		Self::with_capacity(arena, 0)
	}

	pub fn with_capacity(arena: &'a ScratchArena, capacity: usize) -> Self {
		Self {
			arena,
			buf: arena.alloc_zeroed(capacity),
			len: 0,
		}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn capacity(&self) -> usize {
		self.buf.len()
	}

	pub fn as_slice(&self) -> &[u32] {
		&self.buf[..self.len]
	}

	pub fn to_vec(&self) -> Vec<u32> {
		self.as_slice().to_vec()
	}

	/// Makes room for `needed` more offsets, growing by `step` (at least one) when short.
	pub fn reserve(&mut self, step: usize, needed: usize) {
		if self.len + needed <= self.buf.len() {
			return;
		}
		let new_capacity = self.buf.len() + step.max(1).max(self.len + needed - self.buf.len());
		let old = std::mem::take(&mut self.buf);
		self.buf = self.arena.grow(old, new_capacity);
	}

	pub fn push(&mut self, offset: usize) {
		self.reserve(self.buf.len(), 1);
		self.buf[self.len] = offset_u32(offset);
		self.len += 1;
	}

	/// Appends every offset in `start..end`.
	pub fn extend_range(&mut self, start: usize, end: usize) {
		if end <= start {
			return;
		}
		self.reserve(end - start, end - start);
		for offset in start..end {
			self.buf[self.len] = offset_u32(offset);
			self.len += 1;
		}
	}
}

fn offset_u32(offset: usize) -> u32 {
	u32::try_from(offset).unwrap_or(u32::MAX)
}

impl fmt::Debug for Positions<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.as_slice()).finish()
	}
}

impl PartialEq<[u32]> for Positions<'_> {
	fn eq(&self, other: &[u32]) -> bool {
		self.as_slice() == other
	}
}

impl<const N: usize> PartialEq<[u32; N]> for Positions<'_> {
	fn eq(&self, other: &[u32; N]) -> bool {
		self.as_slice() == other
	}
}
