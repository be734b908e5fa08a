//! On-disk layout of the directory database.
//!
//! ```text
//! u32 count
//! count * { f64 rank, i64 last_accessed, u32 path_length, [u8; path_length] path }
//! ```
//!
//! All integers are little-endian. `path_length` counts a trailing NUL, which
//! is written on encode and stripped on decode; a length of zero marks a corrupt
//! file.

use crate::{Directory, DirectoryStore, Result, StoreError};

pub fn encode(store: &DirectoryStore) -> Vec<u8> {
	let body: usize = store.iter().map(|dir| 8 + 8 + 4 + dir.path_length()).sum();
	let mut out = Vec::with_capacity(4 + body);

	out.extend_from_slice(&len_u32(store.len()).to_le_bytes());
	for dir in store {
		out.extend_from_slice(&dir.rank().to_le_bytes());
		out.extend_from_slice(&dir.last_accessed().to_le_bytes());
		out.extend_from_slice(&len_u32(dir.path_length()).to_le_bytes());
		out.extend_from_slice(dir.path());
		out.push(0);
	}
	out
}

/// Decodes at most `limit` records; any beyond that are left unread.
pub fn decode(bytes: &[u8], limit: usize) -> Result<Vec<Directory>> {
	let mut reader = Reader { bytes, offset: 0 };
	let count = reader.u32("entry count")? as usize;

	let mut records = Vec::with_capacity(count.min(limit));
	for _ in 0..count.min(limit) {
		let rank = reader.f64("rank")?;
		let last_accessed = reader.i64("last access time")?;
		let path_length = reader.u32("path length")? as usize;
		if path_length == 0 {
			return Err(StoreError::Corrupt("zero path length"));
		}

		let raw = reader.take(path_length, "path")?;
		let path = raw.strip_suffix(&[0]).unwrap_or(raw);
		if path.is_empty() {
			return Err(StoreError::Corrupt("empty path"));
		}
		if path.contains(&0) {
			return Err(StoreError::Corrupt("path contains a NUL byte"));
		}
		records.push(Directory::new(path.into(), rank, last_accessed));
	}
	Ok(records)
}

fn len_u32(len: usize) -> u32 {
	u32::try_from(len).unwrap_or(u32::MAX)
}

struct Reader<'a> {
	bytes: &'a [u8],
	offset: usize,
}

impl<'a> Reader<'a> {
	fn take(&mut self, len: usize, what: &'static str) -> Result<&'a [u8]> {
		let end = self.offset.checked_add(len).ok_or(StoreError::ShortRead(what))?;
		let chunk = self.bytes.get(self.offset..end).ok_or(StoreError::ShortRead(what))?;
		self.offset = end;
		Ok(chunk)
	}

	fn array<const N: usize>(&mut self, what: &'static str) -> Result<[u8; N]> {
		let mut buf = [0; N];
		buf.copy_from_slice(self.take(N, what)?);
		Ok(buf)
	}

	fn u32(&mut self, what: &'static str) -> Result<u32> {
		self.array(what).map(u32::from_le_bytes)
	}

	fn i64(&mut self, what: &'static str) -> Result<i64> {
		self.array(what).map(i64::from_le_bytes)
	}

	fn f64(&mut self, what: &'static str) -> Result<f64> {
		self.array(what).map(f64::from_le_bytes)
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;
	use crate::DEFAULT_CAPACITY;

	fn sample() -> DirectoryStore {
		let mut store = DirectoryStore::new();
		store.add(b"/home/user", 1_700_000_000).unwrap();
		store.add(b"/tmp", 42).unwrap();
		store.add(b"/tmp", 43).unwrap();
		store
	}

	#[test]
	fn layout() {
		let bytes = encode(&sample());
		assert_eq!(&bytes[..4], &2u32.to_le_bytes());
		assert_eq!(&bytes[4..12], &1.0f64.to_le_bytes());
		assert_eq!(&bytes[12..20], &1_700_000_000i64.to_le_bytes());
		assert_eq!(&bytes[20..24], &11u32.to_le_bytes());
		assert_eq!(&bytes[24..35], b"/home/user\0");
		assert_eq!(bytes.len(), 4 + (20 + 11) + (20 + 5));
	}

	#[test]
	fn decode_restores_records() {
		let store = sample();
		let records = decode(&encode(&store), 200).unwrap();
		assert_eq!(records, store.iter().cloned().collect::<Vec<_>>());
		assert_eq!(records[1].rank(), 2.0);
		assert_eq!(records[1].last_accessed(), 43);
	}

	#[test]
	fn decode_stops_at_limit() {
		let records = decode(&encode(&sample()), 1).unwrap();
		assert_eq!(records.len(), 1);
		assert_eq!(records[0].path(), b"/home/user");
	}

	#[test]
	fn zero_count_is_empty() {
		assert!(decode(&0u32.to_le_bytes(), 200).unwrap().is_empty());
	}

	#[test]
	fn truncation_is_a_short_read() {
		let bytes = encode(&sample());
		assert!(matches!(decode(&bytes[..2], 200), Err(StoreError::ShortRead("entry count"))));
		assert!(matches!(decode(&bytes[..10], 200), Err(StoreError::ShortRead("rank"))));
		assert!(matches!(decode(&bytes[..30], 200), Err(StoreError::ShortRead("path"))));
	}

	#[test]
	fn zero_path_length_is_corrupt() {
		let mut bytes = 1u32.to_le_bytes().to_vec();
		bytes.extend_from_slice(&1.0f64.to_le_bytes());
		bytes.extend_from_slice(&0i64.to_le_bytes());
		bytes.extend_from_slice(&0u32.to_le_bytes());
		assert!(matches!(decode(&bytes, 200), Err(StoreError::Corrupt(_))));
	}

	proptest! {
		#[test]
		fn decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..256), limit in 0usize..8) {
			if let Ok(records) = decode(&bytes, limit) {
				prop_assert!(records.len() <= limit);
				prop_assert!(records.iter().all(|r| !r.path().is_empty() && !r.path().contains(&0)));
			}
		}

		#[test]
		fn saved_paths_come_back(names in proptest::collection::btree_set("/[a-z]{1,12}", 0..20)) {
			let mut store = DirectoryStore::new();
			for (i, name) in names.iter().enumerate() {
				store.add(name.as_bytes(), i as i64).unwrap();
			}
			let records = decode(&encode(&store), DEFAULT_CAPACITY).unwrap();
			prop_assert_eq!(records.len(), names.len());
			for (record, name) in records.iter().zip(&names) {
				prop_assert_eq!(record.path(), name.as_bytes());
			}
		}
	}
}
