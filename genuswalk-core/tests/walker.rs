//! Integration tests for the depth-first walker.
//!
//! The counts by genus are pinned against the known sequence (OEIS A007323)
//! and cross-checked against an independent recursive walker that
//! materializes every child.

mod common;

use genuswalk_core::{
    count_by_genus, walk_children_stack, GeneratorIter, GenusCounts, Monoid, MAX_GENUS,
};

/// Counts of numerical monoids by genus 0..16.
const KNOWN_COUNTS: [u64; 16] = [
    1, 1, 2, 4, 7, 12, 23, 39, 67, 118, 204, 343, 592, 1001, 1693, 2857,
];

/// Naive recursive walker: materializes every child, tallies each monoid at
/// its own genus. Deliberately shares nothing with the explicit-stack
/// implementation beyond the monoid primitives.
fn reference_walk(m: &Monoid, target_genus: usize, counts: &mut [u64]) {
    if m.genus() + 1 >= target_genus {
        return;
    }
    let gens: Vec<usize> = GeneratorIter::children(m).collect();
    counts[m.genus() + 1] += gens.len() as u64;
    for gen in gens {
        reference_walk(&m.remove_generator(gen), target_genus, counts);
    }
}

fn reference_count(target_genus: usize) -> Vec<u64> {
    let mut counts = vec![0u64; target_genus];
    counts[0] = 1;
    if target_genus >= 2 {
        let n1 = Monoid::full().remove_generator(1);
        counts[1] = 1;
        reference_walk(&n1, target_genus, &mut counts);
    }
    counts
}

// =========================================================================
// Known sequence
// =========================================================================

#[test]
fn trivial_bounds() {
    assert_eq!(&count_by_genus(1).as_slice()[..1], &[1]);
    assert_eq!(&count_by_genus(2).as_slice()[..2], &[1, 1]);
}

#[test]
fn genus_three() {
    assert_eq!(&count_by_genus(3).as_slice()[..3], &[1, 1, 2]);
}

#[test]
fn genus_five() {
    assert_eq!(&count_by_genus(5).as_slice()[..5], &[1, 1, 2, 4, 7]);
}

#[test]
fn genus_ten() {
    assert_eq!(&count_by_genus(10).as_slice()[..10], &KNOWN_COUNTS[..10]);
}

#[test]
fn genus_sixteen_matches_the_published_sequence() {
    assert_eq!(&count_by_genus(16).as_slice()[..16], &KNOWN_COUNTS[..16]);
}

#[test]
fn counts_above_the_target_stay_zero() {
    let counts = count_by_genus(6);
    assert!(counts.as_slice()[6..].iter().all(|&c| c == 0));
}

// =========================================================================
// Cross-checks
// =========================================================================

#[test]
fn stack_walker_agrees_with_the_recursive_reference() {
    for target in 1..=12 {
        assert_eq!(
            &count_by_genus(target).as_slice()[..target],
            &reference_count(target)[..],
            "target genus {target}"
        );
    }
}

#[test]
fn tree_count_identity() {
    // The tally is one count per monoid: the total equals the number of
    // monoids of genus below the target.
    let counts = count_by_genus(10);
    let total: u64 = counts.as_slice().iter().sum();
    assert_eq!(total, KNOWN_COUNTS[..10].iter().sum::<u64>());
    assert_eq!(counts[0], 1);
}

#[test]
fn walking_from_a_deeper_node_counts_only_its_subtree() {
    // Subtree of N2 = {0, 3, 4, 5, ...}: its descendants of genus 3 are the
    // children obtained by removing one of its generators 3, 4, 5.
    let n2 = common::chain_to_genus(2);
    let mut counts = GenusCounts::new();
    walk_children_stack(&n2, 4, &mut counts);
    assert_eq!(counts[0], 0);
    assert_eq!(counts[1], 0);
    assert_eq!(counts[2], 0);
    assert_eq!(counts[3], 3);
}

#[test]
fn walker_is_a_no_op_when_nothing_below_is_countable() {
    let n1 = Monoid::full().remove_generator(1);
    let mut counts = GenusCounts::new();
    walk_children_stack(&n1, 2, &mut counts);
    assert_eq!(counts.as_slice(), GenusCounts::new().as_slice());
}

// =========================================================================
// GenusCounts reduction
// =========================================================================

#[test]
fn counts_merge_element_wise() {
    let mut a = GenusCounts::new();
    let mut b = GenusCounts::new();
    a.add(0, 1);
    a.add(3, 7);
    b.add(3, 5);
    b.add(MAX_GENUS - 1, 2);

    let merged = a + b;
    assert_eq!(merged[0], 1);
    assert_eq!(merged[3], 12);
    assert_eq!(merged[MAX_GENUS - 1], 2);
}

#[test]
fn merge_is_commutative_and_associative() {
    let mut a = GenusCounts::new();
    let mut b = GenusCounts::new();
    let mut c = GenusCounts::new();
    a.add(1, 3);
    b.add(1, 4);
    b.add(2, 9);
    c.add(5, 11);

    assert_eq!(a + b, b + a);
    assert_eq!((a + b) + c, a + (b + c));
}
