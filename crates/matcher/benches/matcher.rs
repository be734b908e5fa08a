use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hop_matcher::{Algorithm, Pattern, ScratchArena, Slab, SlabConfig};

const PATHS: &[&str] = &[
	"/home/user/src/hop/crates/matcher/src/algo",
	"/home/user/src/hop/crates/store/src",
	"/usr/share/man/man1/zshcompctl.1",
	"/home/user/.oh-my-zsh/cache/completions",
	"/home/user/Documents/AutomatorDocument.icns",
	"/var/lib/postgresql/16/main/pg_wal",
	"/home/user/src/telescope-fzf-native.nvim/lua/telescope/_extensions",
	"/opt/homebrew/Cellar/fzf/0.54.0/share/fzf/shell",
];

fn algorithms(c: &mut Criterion) {
	let mut group = c.benchmark_group("algorithm");
	for (name, algo) in [
		("fuzzy_v1", Algorithm::FuzzyV1),
		("fuzzy_v2", Algorithm::FuzzyV2),
		("exact", Algorithm::Exact),
	] {
		group.bench_with_input(BenchmarkId::from_parameter(name), &algo, |b, &algo| {
			let mut arena = ScratchArena::default();
			let mut slab = Slab::default();
			b.iter(|| {
				for path in PATHS {
					black_box(algo.run(false, path.as_bytes(), b"zsh", None, Some(&mut slab), &arena));
				}
				arena.reset();
			});
		});
	}
	group.finish();
}

fn patterns(c: &mut Criterion) {
	let mut group = c.benchmark_group("pattern");
	for query in ["src", "fzf !zsh", "'src | ^Lua", ".lua$ 'telescope !'term"] {
		let pattern = Pattern::parse(query.as_bytes());
		group.bench_with_input(BenchmarkId::new("score", query), &pattern, |b, pattern| {
			let mut arena = ScratchArena::default();
			let mut slab = Slab::new(SlabConfig::new(64, 64));
			b.iter(|| {
				let total: i32 = PATHS
					.iter()
					.map(|path| pattern.score(path.as_bytes(), Some(&mut slab), &arena))
					.sum();
				arena.reset();
				black_box(total)
			});
		});
	}
	group.finish();
}

criterion_group!(benches, algorithms, patterns);
criterion_main!(benches);
