//! Error types for the directory store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by store mutations and database I/O.
///
/// Matching never produces one of these; a directory that does not match is
/// simply not ranked.
#[derive(Debug, Error)]
pub enum StoreError {
	/// A required argument was empty.
	#[error("invalid argument: {0} must not be empty")]
	InvalidArgument(&'static str),

	/// A path is empty or contains a NUL byte.
	#[error("bad path string: {0}")]
	BadString(&'static str),

	/// The store already holds its maximum number of entries.
	#[error("directory store is full ({capacity} entries)")]
	CapacityExceeded {
		/// The store's fixed capacity.
		capacity: usize,
	},

	/// No entry has the given path.
	#[error("no entry for {0}")]
	NotFound(String),

	/// Reading or writing the database file failed.
	#[error("I/O error on {path}: {source}")]
	Io {
		/// The database file or its temporary sibling.
		path: PathBuf,
		/// The underlying I/O error.
		#[source]
		source: std::io::Error,
	},

	/// The database ended in the middle of a field.
	#[error("database truncated while reading {0}")]
	ShortRead(&'static str),

	/// The database file could not be written in full.
	#[error("short write to {0}")]
	ShortWrite(PathBuf),

	/// The database is structurally invalid.
	#[error("corrupt database: {0}")]
	Corrupt(&'static str),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		let path = path.into();
		if source.kind() == std::io::ErrorKind::WriteZero {
			return StoreError::ShortWrite(path);
		}
		StoreError::Io { path, source }
	}
}
