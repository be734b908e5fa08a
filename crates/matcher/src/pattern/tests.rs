use proptest::prelude::*;

use super::*;

fn term(pattern: &Pattern, group: usize, idx: usize) -> &Term {
	&pattern.groups()[group][idx]
}

fn scores(query: &str, inputs: &[&str]) -> Vec<i32> {
	let arena = ScratchArena::default();
	let mut slab = Slab::default();
	let pattern = Pattern::parse(query.as_bytes());
	inputs
		.iter()
		.map(|input| pattern.score(input.as_bytes(), Some(&mut slab), &arena))
		.collect()
}

fn positions(query: &str, input: &str) -> Option<Vec<u32>> {
	let arena = ScratchArena::default();
	let mut slab = Slab::default();
	let pattern = Pattern::parse(query.as_bytes());
	pattern
		.positions(input.as_bytes(), Some(&mut slab), &arena)
		.map(|pos| pos.to_vec())
}

#[test]
fn parse_empty() {
	let pattern = Pattern::parse(b"");
	assert!(pattern.is_empty());
	assert!(!pattern.only_inverted());
	assert!(Pattern::parse(b"   ").is_empty());
}

#[test]
fn parse_simple() {
	let pattern = Pattern::parse(b"lua");
	assert_eq!(pattern.groups().len(), 1);
	assert!(!pattern.only_inverted());
	let t = term(&pattern, 0, 0);
	assert_eq!(t.algorithm(), Algorithm::FuzzyV2);
	assert_eq!(t.text(), b"lua");
	assert!(!t.is_case_sensitive());
}

#[test]
fn parse_escaped_space() {
	let pattern = Pattern::parse(br"file\ ");
	assert_eq!(pattern.groups().len(), 1);
	assert_eq!(term(&pattern, 0, 0).text(), b"file ");

	let pattern = Pattern::parse(br"file\ with\ space");
	assert_eq!(pattern.groups().len(), 1);
	assert_eq!(term(&pattern, 0, 0).text(), b"file with space");

	let pattern = Pattern::parse(br"file\  new");
	assert_eq!(pattern.groups().len(), 2);
	assert_eq!(term(&pattern, 0, 0).text(), b"file ");
	assert_eq!(term(&pattern, 1, 0).text(), b"new");
}

#[test]
fn parse_invert() {
	let pattern = Pattern::parse(b"!Lua");
	assert!(pattern.only_inverted());
	let t = term(&pattern, 0, 0);
	assert_eq!(t.algorithm(), Algorithm::Exact);
	assert_eq!(t.text(), b"Lua");
	assert!(t.is_case_sensitive());
	assert!(t.is_inverted());

	let pattern = Pattern::parse(b"!fzf !test");
	assert_eq!(pattern.groups().len(), 2);
	assert!(pattern.only_inverted());
	for (idx, text) in [b"fzf".as_slice(), b"test"].into_iter().enumerate() {
		let t = term(&pattern, idx, 0);
		assert_eq!(t.algorithm(), Algorithm::Exact);
		assert_eq!(t.text(), text);
		assert!(!t.is_case_sensitive());
		assert!(t.is_inverted());
	}
}

#[test]
fn parse_smart_case() {
	let pattern = Pattern::parse(b"Lua");
	let t = term(&pattern, 0, 0);
	assert_eq!(t.text(), b"Lua");
	assert!(t.is_case_sensitive());
}

#[test]
fn parse_or() {
	let pattern = Pattern::parse(b"'src | ^Lua");
	assert_eq!(pattern.groups().len(), 1);
	assert!(!pattern.only_inverted());
	assert_eq!(pattern.groups()[0].len(), 2);

	let src = term(&pattern, 0, 0);
	assert_eq!(src.algorithm(), Algorithm::Exact);
	assert_eq!(src.text(), b"src");
	assert!(!src.is_case_sensitive());

	let lua = term(&pattern, 0, 1);
	assert_eq!(lua.algorithm(), Algorithm::Prefix);
	assert_eq!(lua.text(), b"Lua");
	assert!(lua.is_case_sensitive());
}

#[test]
fn parse_complex_and() {
	let pattern = Pattern::parse(b".lua$ 'previewer !'term !asdf");
	assert_eq!(pattern.groups().len(), 4);
	assert!(!pattern.only_inverted());
	assert!(pattern.groups().iter().all(|g| g.len() == 1));

	let expected = [
		(Algorithm::Suffix, b".lua".as_slice(), false),
		(Algorithm::Exact, b"previewer", false),
		(Algorithm::FuzzyV2, b"term", true),
		(Algorithm::Exact, b"asdf", true),
	];
	for (idx, (algorithm, text, inverted)) in expected.into_iter().enumerate() {
		let t = term(&pattern, idx, 0);
		assert_eq!(t.algorithm(), algorithm);
		assert_eq!(t.text(), text);
		assert!(!t.is_case_sensitive());
		assert_eq!(t.is_inverted(), inverted);
	}
}

#[test]
fn parse_anchors() {
	let pattern = Pattern::parse(b"^src$ $ ^ !");
	assert_eq!(pattern.groups().len(), 2);
	assert_eq!(term(&pattern, 0, 0).algorithm(), Algorithm::Equal);
	assert_eq!(term(&pattern, 0, 0).text(), b"src");
	// A lone `$` is a literal; lone modifiers are dropped.
	assert_eq!(term(&pattern, 1, 0).algorithm(), Algorithm::FuzzyV2);
	assert_eq!(term(&pattern, 1, 0).text(), b"$");
}

#[test]
fn stray_bars_are_dropped() {
	let pattern = Pattern::parse(b"| foo");
	assert_eq!(pattern.groups().len(), 1);
	assert_eq!(term(&pattern, 0, 0).text(), b"foo");

	let pattern = Pattern::parse(b"foo | | bar");
	assert_eq!(pattern.groups().len(), 1);
	assert_eq!(pattern.groups()[0].len(), 2);
	assert_eq!(term(&pattern, 0, 1).text(), b"bar");
}

#[test]
fn score_inverted() {
	assert_eq!(scores("!fzf", &["fzf", "main.c", "src/fzf", "fz/noooo"]), [0, 1, 0, 1]);
	assert_eq!(
		scores("!fzf !test", &["src/fzf.c", "README.md", "lua/asdf", "test/test.c"]),
		[0, 1, 1, 0]
	);
}

#[test]
fn score_escaped_space() {
	assert_eq!(scores(r"file\ lua", &["file ", "file lua", "lua"]), [0, 200, 0]);
	assert_eq!(
		scores(r"\ ", &["file with space", "file lua", "lua", "src", "test"]),
		[32, 32, 0, 0, 0]
	);
}

#[test]
fn score_or() {
	assert_eq!(
		scores(
			"'src | ^Lua",
			&["src/fzf.h", "README.md", "build/fzf", "lua/fzf_lib.lua", "Lua/fzf_lib.lua"]
		),
		[80, 0, 0, 0, 80]
	);
}

#[test]
fn score_complex_term() {
	assert_eq!(
		scores(
			".lua$ 'previewer !'term",
			&[
				"lua/random_previewer",
				"README.md",
				"previewers/utils.lua",
				"previewers/buffer.lua",
				"previewers/term.lua",
			]
		),
		[0, 0, 328, 328, 0]
	);
}

#[test]
fn positions_simple() {
	for input in ["src/fzf.c", "src/fzf.h", "lua/fzf_lib.lua"] {
		assert_eq!(positions("fzf", input), Some(vec![6, 5, 4]), "{input}");
	}
	assert_eq!(positions("fzf", "lua/telescope/_extensions/fzf.lua"), Some(vec![28, 27, 26]));
	assert_eq!(positions("fzf", "README.md"), None);
}

#[test]
fn positions_with_exclusion() {
	assert_eq!(positions("fzf !lib", "src/fzf.c"), Some(vec![6, 5, 4]));
	assert_eq!(positions("fzf !lib", "lua/fzf_lib.lua"), None);
	assert_eq!(positions("fzf !lib", "build/libfzf"), None);
}

#[test]
fn positions_escaped_space() {
	assert_eq!(positions(r"file\ lua", "file lua"), Some(vec![7, 6, 5, 4, 3, 2, 1, 0]));
	assert_eq!(positions(r"\ ", "file with space"), Some(vec![4]));
	assert_eq!(positions(r"\ ", "lul lua"), Some(vec![3]));
	assert_eq!(positions(r"\ ", "src"), None);
}

#[test]
fn positions_or() {
	assert_eq!(positions("'src | ^Lua", "Lua/fzf_lib.lua"), Some(vec![0, 1, 2]));
	assert_eq!(positions("'src | ^Lua", "src/fzf.h"), Some(vec![0, 1, 2]));
	assert_eq!(positions("src | src", "src/fzf.h"), Some(vec![2, 1, 0]));
	assert_eq!(positions("'src | ^Lua", "README.md"), None);
}

#[test]
fn positions_complex_term() {
	let query = ".lua$ 'previewer !'term";
	let mut utils = vec![16, 17, 18, 19];
	utils.extend(0..=8);
	assert_eq!(positions(query, "previewers/utils.lua"), Some(utils));
	let mut buffer = vec![17, 18, 19, 20];
	buffer.extend(0..=8);
	assert_eq!(positions(query, "previewers/buffer.lua"), Some(buffer));
	assert_eq!(positions(query, "previewers/term.lua"), None);
}

proptest! {
	#[test]
	fn empty_pattern_passes_everything(text in "[ -~]{0,32}") {
		let arena = ScratchArena::default();
		let pattern = Pattern::parse(b"");
		prop_assert_eq!(pattern.score(text.as_bytes(), None, &arena), 1);
		prop_assert!(pattern.positions(text.as_bytes(), None, &arena).is_none());
	}

	#[test]
	fn parsing_is_deterministic(query in r"[a-zA-Z!'^$| \\]{0,24}") {
		prop_assert_eq!(Pattern::parse(query.as_bytes()), Pattern::parse(query.as_bytes()));
	}

	#[test]
	fn case_sensitive_iff_uppercase(word in "[a-zA-Z]{1,12}") {
		let pattern = Pattern::parse(word.as_bytes());
		let t = term(&pattern, 0, 0);
		prop_assert_eq!(t.is_case_sensitive(), word.bytes().any(|b| b.is_ascii_uppercase()));
		let expected = if t.is_case_sensitive() { word.clone() } else { word.to_ascii_lowercase() };
		prop_assert_eq!(t.text(), expected.as_bytes());
	}
}
