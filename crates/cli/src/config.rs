//! `config.toml` loading.
//!
//! ```toml
//! database = "/home/me/.local/share/hop/z_database.bin"
//! capacity = 200
//! scratch_bytes = 1048576
//!
//! [slab]
//! size_16 = 64
//! size_32 = 64
//! v2_cell_limit = 64
//! ```
//!
//! Every key is optional. `capacity` defaults to the classic 200 entries; the
//! store never evicts, so a full database rejects new directories until some
//! are removed. Any other value changes that fixed limit, and a database
//! written with a larger capacity loses its excess entries when read back
//! with a smaller one.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail, ensure};
use hop_matcher::SlabConfig;
use hop_matcher::r#const::DEFAULT_SCRATCH_BYTES;
use hop_store::{DEFAULT_CAPACITY, JUMP_SLAB};
use serde::Deserialize;

const APP_DIR: &str = "hop";
const CONFIG_FILE: &str = "config.toml";
const DATABASE_FILE: &str = "z_database.bin";

/// Environment variable overriding the database location.
pub const DATABASE_ENV: &str = "HOP_DATABASE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub database: Option<PathBuf>,
	/// Maximum number of remembered directories, 200 unless overridden.
	pub capacity: usize,
	/// Budget of the matcher's scratch arena, in bytes.
	pub scratch_bytes: usize,
	pub slab: SlabSection,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			database: None,
			capacity: DEFAULT_CAPACITY,
			scratch_bytes: DEFAULT_SCRATCH_BYTES,
			slab: SlabSection::default(),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlabSection {
	pub size_16: usize,
	pub size_32: usize,
	/// Defaults to `size_16`.
	pub v2_cell_limit: Option<usize>,
}

impl Default for SlabSection {
	fn default() -> Self {
		Self {
			size_16: JUMP_SLAB.size_16,
			size_32: JUMP_SLAB.size_32,
			v2_cell_limit: None,
		}
	}
}

impl SlabSection {
	pub fn to_slab_config(self) -> SlabConfig {
		let config = SlabConfig::new(self.size_16, self.size_32);
		match self.v2_cell_limit {
			Some(cells) => config.with_v2_cell_limit(cells),
			None => config,
		}
	}
}

impl Config {
	/// Reads `explicit`, or the default config file if it exists.
	///
	/// An explicitly named file must exist; a missing default file just means
	/// defaults.
	pub fn load(explicit: Option<&Path>) -> Result<Self> {
		let path = match explicit {
			Some(path) => path.to_path_buf(),
			None => match default_config_path() {
				Some(path) if path.is_file() => path,
				_ => return Ok(Self::default()),
			},
		};

		let text = fs::read_to_string(&path).with_context(|| format!("reading config {}", path.display()))?;
		let config = Self::parse(&text).with_context(|| format!("invalid config {}", path.display()))?;
		tracing::debug!(path = %path.display(), "loaded config");
		Ok(config)
	}

	pub fn parse(text: &str) -> Result<Self> {
		let config: Self = toml::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<()> {
		ensure!(self.capacity > 0, "capacity must be at least 1");
		ensure!(self.scratch_bytes > 0, "scratch_bytes must be at least 1");
		Ok(())
	}

	/// Picks the database file: `cli`, then `env`, then the config's
	/// `database`, then `<data dir>/hop/z_database.bin`.
	pub fn database_path(&self, cli: Option<&Path>, env: Option<OsString>) -> Result<PathBuf> {
		if let Some(path) = cli {
			return Ok(path.to_path_buf());
		}
		if let Some(path) = env.filter(|v| !v.is_empty()) {
			return Ok(PathBuf::from(path));
		}
		if let Some(path) = &self.database {
			return Ok(path.clone());
		}
		match dirs::data_dir() {
			Some(dir) => Ok(dir.join(APP_DIR).join(DATABASE_FILE)),
			None => bail!("no data directory for this user; pass --database or set {DATABASE_ENV}"),
		}
	}
}

fn default_config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
