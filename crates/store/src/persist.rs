use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{DirectoryStore, Result, StoreError, codec};

impl DirectoryStore {
	/// Loads the database at `path`, keeping at most `capacity` records.
	///
	/// A missing file is created empty. A file that cannot be decoded is
	/// logged and treated as empty; only failing to read or create the file is
	/// an error.
	pub fn load(path: &Path, capacity: usize) -> Result<Self> {
		let bytes = match fs::read(path) {
			Ok(bytes) => bytes,
			Err(e) if e.kind() == ErrorKind::NotFound => {
				if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
					fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
				}
				fs::write(path, b"").map_err(|e| StoreError::io(path, e))?;
				tracing::info!(path = %path.display(), "created directory database");
				return Ok(Self::with_capacity(capacity));
			}
			Err(e) => return Err(StoreError::io(path, e)),
		};

		if bytes.is_empty() {
			return Ok(Self::with_capacity(capacity));
		}

		match codec::decode(&bytes, capacity) {
			Ok(records) => {
				let store = Self::from_records(records, capacity);
				tracing::debug!(path = %path.display(), entries = store.len(), "loaded directory database");
				Ok(store)
			}
			Err(error) => {
				tracing::warn!(path = %path.display(), %error, "directory database unreadable, starting empty");
				Ok(Self::with_capacity(capacity))
			}
		}
	}

	/// Writes the whole store to `path` through a sibling temporary file.
	pub fn save(&self, path: &Path) -> Result<()> {
		let tmp = temp_sibling(path);
		fs::write(&tmp, codec::encode(self)).map_err(|e| StoreError::io(&tmp, e))?;
		if let Err(e) = fs::rename(&tmp, path) {
			let _ = fs::remove_file(&tmp);
			return Err(StoreError::io(path, e));
		}
		tracing::debug!(path = %path.display(), entries = self.len(), "saved directory database");
		Ok(())
	}
}

fn temp_sibling(path: &Path) -> PathBuf {
	let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
	name.push(format!(".{}.tmp", std::process::id()));
	path.with_file_name(name)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_file_is_created_empty() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let path = dir.path().join("nested/z_database.bin");

		let store = DirectoryStore::load(&path, 200).unwrap();
		assert!(store.is_empty());
		assert_eq!(store.capacity(), 200);
		assert!(path.exists());
		assert_eq!(fs::read(&path).unwrap().len(), 0);
	}

	#[test]
	fn save_then_load() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let path = dir.path().join("z_database.bin");

		let mut store = DirectoryStore::new();
		store.add(b"/srv/www", 100).unwrap();
		store.add(b"/etc", 200).unwrap();
		store.save(&path).unwrap();

		let loaded = DirectoryStore::load(&path, 200).unwrap();
		assert_eq!(loaded, store);
		assert!(!temp_sibling(&path).exists());
	}

	#[test]
	fn removing_the_last_record_is_persisted() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let path = dir.path().join("z_database.bin");

		let mut store = DirectoryStore::new();
		store.add(b"/only", 1).unwrap();
		store.save(&path).unwrap();
		store.remove(b"/only").unwrap();
		store.save(&path).unwrap();

		assert!(DirectoryStore::load(&path, 200).unwrap().is_empty());
	}

	#[test]
	fn corrupt_file_loads_empty() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let path = dir.path().join("z_database.bin");
		fs::write(&path, [3u8, 0, 0, 0, 1, 2]).unwrap();

		assert!(DirectoryStore::load(&path, 200).unwrap().is_empty());
	}

	#[test]
	fn load_respects_capacity() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let path = dir.path().join("z_database.bin");

		let mut store = DirectoryStore::new();
		for name in ["/a", "/b", "/c"] {
			store.add(name.as_bytes(), 0).unwrap();
		}
		store.save(&path).unwrap();

		let loaded = DirectoryStore::load(&path, 2).unwrap();
		assert_eq!(loaded.len(), 2);
		assert_eq!(loaded.capacity(), 2);
	}
}
