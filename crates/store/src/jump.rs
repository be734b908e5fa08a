//! Deciding where `z <target>` goes.
//!
//! A process cannot change its parent shell's directory, so resolution only
//! picks a destination and records the visit; the shell wrapper does the `cd`.

use std::path::{Path, PathBuf};

use crate::directory::{bytes_from_path, path_from_bytes};
use crate::{DirectoryStore, MatchScratch};

/// Inputs to [`resolve`].
#[derive(Debug, Clone, Copy)]
pub struct JumpRequest<'a> {
	/// What the user typed, or `None` for a bare `z`.
	pub target: Option<&'a [u8]>,
	pub cwd: &'a Path,
	pub home: Option<&'a Path>,
	/// Unix time in seconds.
	pub now: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
	/// The home directory.
	Home(PathBuf),
	/// `.` or `..`, passed through and not recorded.
	Relative(PathBuf),
	/// A stored directory won the ranking; its record was visited.
	Ranked { path: PathBuf, index: usize },
	/// The target itself is a directory; it was recorded.
	Literal(PathBuf),
}

impl Resolution {
	pub fn destination(&self) -> &Path {
		match self {
			Resolution::Home(path) | Resolution::Relative(path) | Resolution::Literal(path) => path,
			Resolution::Ranked { path, .. } => path,
		}
	}
}

/// Picks the destination for `request`, updating `store` with the visit.
///
/// Order of preference:
/// 1. no target, or the home directory itself: home
/// 2. `.` and `..`: unchanged
/// 3. with no ranked match, a subdirectory of cwd named exactly `target`
/// 4. the best ranked record, if it still is a directory
/// 5. `target` as a path, if it is a directory
///
/// Returns `None` when none of these apply. Failing to record a visit is logged
/// and does not change the destination.
pub fn resolve(store: &mut DirectoryStore, request: &JumpRequest<'_>, scratch: &mut MatchScratch) -> Option<Resolution> {
	let Some(target) = request.target else {
		return request.home.map(|home| Resolution::Home(home.to_path_buf()));
	};
	if target.is_empty() {
		return None;
	}
	if let Some(home) = request.home
		&& *bytes_from_path(home) == *target
	{
		return Some(Resolution::Home(home.to_path_buf()));
	}
	if target == b"." || target == b".." {
		return Some(Resolution::Relative(path_from_bytes(target).into_owned()));
	}

	let cwd = bytes_from_path(request.cwd);
	let ranked = store.best_match(target, &cwd, request.now, scratch);
	let target_path = request.cwd.join(path_from_bytes(target));

	if ranked.is_none() && !target.contains(&b'/') && target_path.is_dir() {
		record(store, target, &cwd, request.now);
		return Some(Resolution::Literal(target_path));
	}

	if let Some(ranked) = ranked
		&& let Some(dir) = store.get(ranked.index)
	{
		let path = dir.to_path().into_owned();
		if path.is_dir() {
			store.visit(ranked.index, request.now);
			tracing::debug!(path = %path.display(), score = ranked.score, "jumping to ranked match");
			return Some(Resolution::Ranked {
				path,
				index: ranked.index,
			});
		}
		tracing::debug!(path = %path.display(), "ranked match is no longer a directory");
	}

	if target_path.is_dir() {
		record(store, target, &cwd, request.now);
		return Some(Resolution::Literal(target_path));
	}
	None
}

fn record(store: &mut DirectoryStore, target: &[u8], cwd: &[u8], now: i64) {
	let trimmed = match target.iter().rposition(|&b| b != b'/') {
		Some(last) => &target[..=last],
		None => b"/",
	};
	let result = if trimmed.starts_with(b"/") {
		store.add(trimmed, now)
	} else {
		store.add_relative(trimmed, cwd, now)
	};
	if let Err(error) = result {
		tracing::warn!(%error, "could not record directory visit");
	}
}
