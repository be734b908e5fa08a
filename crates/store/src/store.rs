use crate::directory::validate_path;
use crate::{Directory, Result, StoreError};

/// Default maximum number of remembered directories.
pub const DEFAULT_CAPACITY: usize = 200;

/// Outcome of [`DirectoryStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Added {
	/// A new record was appended at this index.
	New(usize),
	/// The path was already known; its record at this index was visited.
	Existing(usize),
}

impl Added {
	pub fn index(self) -> usize {
		match self {
			Added::New(idx) | Added::Existing(idx) => idx,
		}
	}
}

/// Ordered, fixed-capacity collection of [`Directory`] records.
///
/// Paths are unique. Records keep insertion order; removal shifts later
/// records down rather than swapping. There is no eviction: once full, adding a
/// new path fails with [`StoreError::CapacityExceeded`].
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryStore {
	dirs: Vec<Directory>,
	capacity: usize,
}

impl Default for DirectoryStore {
	fn default() -> Self {
		Self::with_capacity(DEFAULT_CAPACITY)
	}
}

impl DirectoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			dirs: Vec::with_capacity(capacity),
			capacity,
		}
	}

	/// Builds a store from decoded records, dropping duplicates and anything past `capacity`.
	pub(crate) fn from_records(records: Vec<Directory>, capacity: usize) -> Self {
		let mut store = Self::with_capacity(capacity);
		for record in records {
			if store.dirs.len() == capacity {
				break;
			}
			if store.find(record.path()).is_some() {
				tracing::debug!(path = %record.to_path().display(), "skipping duplicate record");
				continue;
			}
			store.dirs.push(record);
		}
		store
	}

	pub fn len(&self) -> usize {
		self.dirs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.dirs.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Directory> {
		self.dirs.iter()
	}

	pub fn get(&self, index: usize) -> Option<&Directory> {
		self.dirs.get(index)
	}

	/// Index of the record whose path is exactly `path`.
	pub fn find(&self, path: &[u8]) -> Option<usize> {
		self.dirs.iter().position(|dir| dir.path() == path)
	}

	/// Records a visit to `path`, creating the record if needed.
	pub fn add(&mut self, path: &[u8], now: i64) -> Result<Added> {
		validate_path(path)?;

		if let Some(idx) = self.find(path) {
			self.dirs[idx].touch(now);
			return Ok(Added::Existing(idx));
		}
		if self.dirs.len() == self.capacity {
			return Err(StoreError::CapacityExceeded { capacity: self.capacity });
		}

		self.dirs.push(Directory::first_visit(path, now));
		Ok(Added::New(self.dirs.len() - 1))
	}

	/// Records a visit to `name` resolved against `cwd`.
	pub fn add_relative(&mut self, name: &[u8], cwd: &[u8], now: i64) -> Result<Added> {
		if cwd.is_empty() {
			return Err(StoreError::InvalidArgument("cwd"));
		}
		validate_path(name)?;

		let base = cwd.strip_suffix(b"/").unwrap_or(cwd);
		let mut joined = Vec::with_capacity(base.len() + 1 + name.len());
		joined.extend_from_slice(base);
		joined.push(b'/');
		joined.extend_from_slice(name);
		self.add(&joined, now)
	}

	/// Removes the record for `path`, keeping the order of the rest.
	pub fn remove(&mut self, path: &[u8]) -> Result<Directory> {
		validate_path(path)?;

		let idx = self
			.find(path)
			.ok_or_else(|| StoreError::NotFound(String::from_utf8_lossy(path).into_owned()))?;
		Ok(self.dirs.remove(idx))
	}

	/// Bumps the rank and timestamp of the record at `index`.
	pub fn visit(&mut self, index: usize, now: i64) -> Option<&Directory> {
		let dir = self.dirs.get_mut(index)?;
		dir.touch(now);
		Some(&*dir)
	}
}

impl<'a> IntoIterator for &'a DirectoryStore {
	type Item = &'a Directory;
	type IntoIter = std::slice::Iter<'a, Directory>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
