//! The `z` shell function printed by `hop init`.
//!
//! `hop` cannot change its parent shell's directory, so `z` forwards the
//! management subcommands and otherwise `cd`s into whatever `hop jump` prints.

use crate::cli::Shell;

const POSIX: &str = r#"z() {
	case "$1" in
		add|rm|remove|print|count)
			command hop "$@"
			;;
		*)
			local dest
			if [ "$#" -eq 0 ]; then
				dest="$(command hop jump)"
			else
				dest="$(command hop jump -- "$*")"
			fi && builtin cd -- "$dest"
			;;
	esac
}
"#;

const FISH: &str = r#"function z
	switch "$argv[1]"
		case add rm remove print count
			command hop $argv
		case '*'
			set -l dest
			if test (count $argv) -eq 0
				set dest (command hop jump)
			else
				set dest (command hop jump -- "$argv")
			end
			and cd $dest
	end
end
"#;

pub fn init_script(shell: Shell) -> &'static str {
	match shell {
		Shell::Bash | Shell::Zsh => POSIX,
		Shell::Fish => FISH,
	}
}
