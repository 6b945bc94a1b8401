//! Work-stealing parallel walker.
//!
//! Subtree walks are logically independent, so the tree is cut into tasks:
//! above a remaining-depth threshold every child spawns its own rayon task,
//! below it the subtree runs on the sequential explicit-stack walker. Each
//! task returns its own [`GenusCounts`]; element-wise addition is
//! associative and commutative, so the joins can merge them in any order and
//! the result is identical to a sequential run.
//!
//! The threshold matters because the tree is severely unbalanced near the
//! leaves: spawning at every node would drown the pool in micro-tasks, while
//! cutting over too early starves the workers of parallel slack.

use rayon::prelude::*;

use genuswalk_core::{walk_children_stack, GeneratorIter, GenusCounts, Monoid, MAX_GENUS};

/// Default remaining-depth threshold below which subtrees go sequential.
pub const DEFAULT_STACK_BOUND: usize = 11;

/// Walk the subtree below `m`, counting every descendant of genus less than
/// `target_genus` at its own genus. `m` itself is not counted.
fn walk_children(m: &Monoid, target_genus: usize, stack_bound: usize) -> GenusCounts {
    if m.genus() + 1 >= target_genus {
        return GenusCounts::new();
    }
    if target_genus - m.genus() > stack_bound {
        // Materializing the child generators here is fine: the spawn path
        // only runs in the shallow part of the tree.
        let gens: Vec<usize> = GeneratorIter::children(m).collect();
        let mut counts = gens
            .par_iter()
            .map(|&gen| walk_children(&m.remove_generator(gen), target_genus, stack_bound))
            .reduce(GenusCounts::new, |a, b| a + b);
        counts.add(m.genus() + 1, gens.len() as u64);
        counts
    } else {
        let mut counts = GenusCounts::new();
        walk_children_stack(m, target_genus, &mut counts);
        counts
    }
}

/// Count numerical monoids of every genus below `target_genus` on the
/// current rayon thread pool.
///
/// With `stack_bound >= target_genus` no task is ever spawned and the run is
/// purely sequential; the output is identical either way.
///
/// # Panics
///
/// Panics if `target_genus` is 0 or exceeds [`MAX_GENUS`].
#[must_use]
pub fn count_by_genus(target_genus: usize, stack_bound: usize) -> GenusCounts {
    assert!(
        (1..=MAX_GENUS).contains(&target_genus),
        "target genus must be in 1..={MAX_GENUS}"
    );

    let mut counts = GenusCounts::new();
    counts.add(0, 1);
    if target_genus >= 2 {
        let n1 = Monoid::full().remove_generator(1);
        counts.add(1, 1);
        counts += &walk_children(&n1, target_genus, stack_bound);
    }
    counts
}
