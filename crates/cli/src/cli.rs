use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "hop")]
#[command(about = "Jump to frequently used directories by typing part of their name")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Log ranking decisions to stderr
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Configuration file (defaults to the user config directory)
	#[arg(long, value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,

	/// Directory database, overriding the config file and HOP_DATABASE
	#[arg(long, value_name = "PATH", global = true)]
	pub database: Option<PathBuf>,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
	/// Print the best directory for TARGET, or home without one
	Jump {
		/// Pattern matched against remembered directories
		target: Option<OsString>,
	},
	/// Remember a directory
	Add {
		/// Directory to record, relative to the current directory if not absolute
		dir: PathBuf,
	},
	/// Forget a directory
	#[command(alias = "remove")]
	Rm {
		/// Directory to forget
		dir: PathBuf,
	},
	/// List remembered directories
	Print,
	/// Print the number of remembered directories
	Count,
	/// Print the `z` shell function for SHELL
	Init {
		/// Shell to generate the function for
		shell: Shell,
	},
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
	Bash,
	Zsh,
	Fish,
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	fn parse(args: &[&str]) -> Cli {
		Cli::try_parse_from(args).unwrap()
	}

	#[test]
	fn definition_is_consistent() {
		Cli::command().debug_assert();
	}

	#[test]
	fn remove_is_an_alias_for_rm() {
		let expected = Command::Rm { dir: "/srv".into() };
		assert_eq!(parse(&["hop", "rm", "/srv"]).command, expected);
		assert_eq!(parse(&["hop", "remove", "/srv"]).command, expected);
	}

	#[test]
	fn jump_target_is_optional() {
		assert_eq!(parse(&["hop", "jump"]).command, Command::Jump { target: None });
		assert_eq!(
			parse(&["hop", "jump", "--", "-weird dir"]).command,
			Command::Jump {
				target: Some("-weird dir".into())
			}
		);
	}

	#[test]
	fn global_flags_after_subcommand() {
		let cli = parse(&["hop", "count", "-v", "--database", "/tmp/db.bin"]);
		assert!(cli.verbose);
		assert_eq!(cli.database, Some(PathBuf::from("/tmp/db.bin")));
	}

	#[test]
	fn init_requires_known_shell() {
		assert_eq!(parse(&["hop", "init", "fish"]).command, Command::Init { shell: Shell::Fish });
		assert!(Cli::try_parse_from(["hop", "init", "tcsh"]).is_err());
	}
}
