use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use std::hint::black_box;

use genuswalk_core::{count_by_genus, GeneratorIter, GenusCounts, Monoid};

// --- Setup Helpers ---

/// A mid-tree monoid with several children, reached by always removing the
/// smallest child generator.
fn setup_mid_tree() -> (Monoid, usize) {
    let mut m = Monoid::full().remove_generator(1);
    while m.genus() < 20 {
        let gen = GeneratorIter::children(&m)
            .next()
            .expect("chain must continue");
        m = m.remove_generator(gen);
    }
    let gen = GeneratorIter::children(&m).next().unwrap();
    (m, gen)
}

// --- Benchmarks ---

#[library_benchmark]
#[bench::mid(setup_mid_tree())]
fn bench_remove_generator((m, gen): (Monoid, usize)) -> Monoid {
    black_box(black_box(&m).remove_generator(gen))
}

#[library_benchmark]
#[bench::mid(setup_mid_tree().0)]
fn bench_children_count(m: Monoid) -> usize {
    black_box(GeneratorIter::children(black_box(&m)).count())
}

#[library_benchmark]
fn bench_walk_genus_18() -> GenusCounts {
    black_box(count_by_genus(black_box(18)))
}

library_benchmark_group!(
    name = walk_ops;
    benchmarks = bench_remove_generator, bench_children_count, bench_walk_genus_18
);

main!(library_benchmark_groups = walk_ops);
