//! Shared test helpers: a slow, independent reference implementation of the
//! decomposition counts, and invariant checks for every monoid the tests
//! observe.

#![allow(dead_code)]

use genuswalk_core::{GeneratorIter, Monoid, SIZE};

/// Element-set view of a monoid: membership derived from the counts.
pub fn elements_of(m: &Monoid) -> [bool; SIZE] {
    let mut elements = [false; SIZE];
    for (i, e) in elements.iter_mut().enumerate() {
        *e = m.dec(i) > 0;
    }
    elements
}

/// Recompute the decomposition counts from scratch: decs[i] is the number of
/// unordered pairs (a, b) with a <= b, a + b = i, both elements.
pub fn reference_decs(elements: &[bool; SIZE]) -> [u8; SIZE] {
    let mut decs = [0u8; SIZE];
    for i in 0..SIZE {
        let mut pairs = 0u8;
        for a in 0..=(i / 2) {
            if elements[a] && elements[i - a] {
                pairs += 1;
            }
        }
        decs[i] = pairs;
    }
    decs
}

/// Assert every structural invariant of a monoid's state.
pub fn check_invariants(m: &Monoid) {
    // decs[0] = 1: zero decomposes only as 0 + 0.
    assert_eq!(m.dec(0), 1, "decs[0] must be 1");

    // Conductor is sharp and everything from it on is an element.
    assert_eq!(m.dec(m.conductor() - 1), 0, "conductor must be sharp");
    for i in m.conductor()..SIZE {
        assert!(m.dec(i) >= 1, "index {i} >= conductor must be an element");
    }

    // Genus counts the gaps below the conductor.
    let gaps = (1..m.conductor()).filter(|&i| m.dec(i) == 0).count();
    assert_eq!(m.genus(), gaps, "genus must equal the number of gaps");

    // Multiplicity is the smallest positive element.
    let min = (1..SIZE).find(|&i| m.dec(i) >= 1).unwrap();
    assert_eq!(m.min(), min, "min must be the smallest positive element");

    // The counts themselves agree with a from-scratch recomputation.
    let reference = reference_decs(&elements_of(m));
    assert_eq!(
        m.decs()[..],
        reference[..],
        "decomposition counts must match the slow reference"
    );
}

/// Walk a chain from N1 downward, always removing the smallest child
/// generator, and return the monoid reached at the given genus.
pub fn chain_to_genus(genus: usize) -> Monoid {
    assert!(genus >= 1);
    let mut m = Monoid::full().remove_generator(1);
    while m.genus() < genus {
        let gen = GeneratorIter::children(&m).next().expect("chain must continue");
        m = m.remove_generator(gen);
    }
    m
}
