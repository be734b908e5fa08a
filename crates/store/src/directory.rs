use std::borrow::Cow;
use std::path::Path;

use crate::{Result, StoreError};

/// One remembered directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
	path: Box<[u8]>,
	rank: f64,
	last_accessed: i64,
}

impl Directory {
	/// A record with an already validated path.
	pub(crate) fn new(path: Box<[u8]>, rank: f64, last_accessed: i64) -> Self {
		Self {
			path,
			rank,
			last_accessed,
		}
	}

	/// First visit: rank 1.
	pub(crate) fn first_visit(path: &[u8], now: i64) -> Self {
		Self::new(path.into(), 1.0, now)
	}

	pub fn path(&self) -> &[u8] {
		&self.path
	}

	pub fn to_path(&self) -> Cow<'_, Path> {
		path_from_bytes(&self.path)
	}

	/// Length of the path as persisted, counting the terminating NUL.
	pub fn path_length(&self) -> usize {
		self.path.len() + 1
	}

	/// Number of visits, as a float so frecency can scale it.
	pub fn rank(&self) -> f64 {
		self.rank
	}

	/// Unix timestamp of the last visit, in seconds.
	pub fn last_accessed(&self) -> i64 {
		self.last_accessed
	}

	pub(crate) fn touch(&mut self, now: i64) {
		self.rank += 1.0;
		self.last_accessed = now;
	}
}

pub(crate) fn validate_path(path: &[u8]) -> Result<()> {
	if path.is_empty() {
		return Err(StoreError::BadString("path is empty"));
	}
	if path.contains(&0) {
		return Err(StoreError::BadString("path contains a NUL byte"));
	}
	Ok(())
}

#[cfg(unix)]
pub fn path_from_bytes(bytes: &[u8]) -> Cow<'_, Path> {
	use std::ffi::OsStr;
	use std::os::unix::ffi::OsStrExt;

	Cow::Borrowed(Path::new(OsStr::from_bytes(bytes)))
}

#[cfg(not(unix))]
pub fn path_from_bytes(bytes: &[u8]) -> Cow<'_, Path> {
	Cow::Owned(std::path::PathBuf::from(String::from_utf8_lossy(bytes).into_owned()))
}

#[cfg(unix)]
pub fn bytes_from_path(path: &Path) -> Cow<'_, [u8]> {
	use std::os::unix::ffi::OsStrExt;

	Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
pub fn bytes_from_path(path: &Path) -> Cow<'_, [u8]> {
	match path.to_string_lossy() {
		Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
		Cow::Owned(s) => Cow::Owned(s.into_bytes()),
	}
}
