//! hop binary.
//!
//! Remembers visited directories and prints the best one for a fuzzy target.
//! The shell function from `hop init` does the actual `cd`.

mod cli;
mod config;
mod shell;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, TimeZone, Utc};
use clap::Parser;
use hop_store::{Added, DirectoryStore, JumpRequest, MatchScratch, bytes_from_path, resolve};

use crate::cli::{Cli, Command};
use crate::config::{Config, DATABASE_ENV};

fn main() -> Result<ExitCode> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);
	run(cli, &mut io::stdout().lock())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;
	use tracing_subscriber::prelude::*;

	let filter = EnvFilter::try_from_env("HOP_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("hop=debug,hop_store=debug,hop_matcher=debug")
		} else {
			EnvFilter::new("hop=info,hop_store=info,warn")
		}
	});

	let stderr_layer = tracing_subscriber::fmt::layer()
		.with_writer(io::stderr)
		.with_target(verbose)
		.without_time();

	tracing_subscriber::registry().with(filter).with(stderr_layer).init();
}

fn run(cli: Cli, stdout: &mut impl Write) -> Result<ExitCode> {
	let open = || Session::open(cli.config.as_deref(), cli.database.as_deref());

	match cli.command {
		Command::Init { shell } => stdout.write_all(shell::init_script(shell).as_bytes())?,
		Command::Jump { target } => {
			let mut session = open()?;
			let cwd = std::env::current_dir().context("reading current directory")?;
			let home = dirs::home_dir();
			let target = target.as_deref().map(|t| bytes_from_path(Path::new(t)));
			let request = JumpRequest {
				target: target.as_deref(),
				cwd: &cwd,
				home: home.as_deref(),
				now: session.now,
			};

			let mut scratch = MatchScratch::new(session.config.slab.to_slab_config(), session.config.scratch_bytes);
			let resolution = resolve(&mut session.store, &request, &mut scratch);
			session.save()?;

			let Some(resolution) = resolution else {
				tracing::info!("no matching directory");
				return Ok(ExitCode::FAILURE);
			};
			tracing::debug!(?resolution, "resolved");
			stdout.write_all(&bytes_from_path(resolution.destination()))?;
			stdout.write_all(b"\n")?;
		}
		Command::Add { dir } => {
			let mut session = open()?;
			let dir = normalize(&dir)?;
			let added = session.store.add(&bytes_from_path(&dir), session.now)?;
			session.save()?;
			match added {
				Added::New(_) => writeln!(stdout, "Added {}", dir.display())?,
				Added::Existing(_) => writeln!(stdout, "Already known, visited {}", dir.display())?,
			}
		}
		Command::Rm { dir } => {
			let mut session = open()?;
			let dir = normalize(&dir)?;
			session.store.remove(&bytes_from_path(&dir))?;
			session.save()?;
			writeln!(stdout, "Removed {}", dir.display())?;
		}
		Command::Print => print_store(&open()?.store, stdout)?,
		Command::Count => writeln!(stdout, "{}", open()?.store.len())?,
	}

	Ok(ExitCode::SUCCESS)
}

/// The loaded directory database and the settings it was opened with.
struct Session {
	config: Config,
	database: PathBuf,
	store: DirectoryStore,
	now: i64,
}

impl Session {
	fn open(config: Option<&Path>, database: Option<&Path>) -> Result<Self> {
		let config = Config::load(config)?;
		let database = config.database_path(database, std::env::var_os(DATABASE_ENV))?;
		let store = DirectoryStore::load(&database, config.capacity)
			.with_context(|| format!("loading directory database {}", database.display()))?;
		Ok(Self {
			config,
			database,
			store,
			now: Utc::now().timestamp(),
		})
	}

	fn save(&self) -> Result<()> {
		self.store
			.save(&self.database)
			.with_context(|| format!("saving directory database {}", self.database.display()))
	}
}

/// Absolute form of `dir` with `.` components and trailing slashes dropped.
fn normalize(dir: &Path) -> Result<PathBuf> {
	let absolute = std::path::absolute(dir).with_context(|| format!("resolving {}", dir.display()))?;
	Ok(absolute.components().collect())
}

fn print_store(store: &DirectoryStore, out: &mut impl Write) -> io::Result<()> {
	writeln!(out, "{} of {} entries", store.len(), store.capacity())?;
	for (index, dir) in store.iter().enumerate() {
		writeln!(out)?;
		writeln!(out, "[{index}] {}", dir.to_path().display())?;
		writeln!(out, "  path_length: {}", dir.path_length())?;
		writeln!(out, "  last_accessed: {}", format_time(dir.last_accessed()))?;
		writeln!(out, "  rank: {:.6}", dir.rank())?;
	}
	Ok(())
}

fn format_time(secs: i64) -> String {
	match Local.timestamp_opt(secs, 0).single() {
		Some(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
		None => secs.to_string(),
	}
}
