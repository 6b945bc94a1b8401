//! Depth-first tree walker and per-genus counters.
//!
//! The enumeration tree is walked with an explicit fixed-capacity stack of
//! monoid slots. Pushing a child never copies the current monoid: the stack
//! stores slot indices into a pre-owned pool, and a swap moves the scratch
//! slot into writing position while the current monoid's slot bubbles up
//! behind it.
//!
//! Tally convention: every monoid is counted exactly once, at its own genus.
//! The driver seeds N (genus 0) and N1 (genus 1); after that a monoid is
//! tallied by its parent, either when its slot is pushed or, at the deepest
//! counted level, through the iterator's popcount shortcut, without ever
//! being materialized.

use crate::generators::GeneratorIter;
use crate::monoid::{Monoid, MAX_GENUS};

/// Capacity of the walker's slot pool.
///
/// Holds the scratch slot plus every pending sibling along the current
/// root-to-leaf path. Exceeding it is a fatal error, checked on every push.
pub const STACK_SIZE: usize = 50;

/// Per-genus monoid counts, the value type of the parallel reduction.
///
/// Element-wise `u64` addition is associative and commutative, so partial
/// counts from independent subtree walks can be merged in any order.
/// Counters must be 64-bit: totals pass 10^12 before genus 40.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenusCounts {
    values: [u64; MAX_GENUS],
}

impl GenusCounts {
    /// All-zero counts.
    #[must_use]
    pub const fn new() -> GenusCounts {
        GenusCounts {
            values: [0; MAX_GENUS],
        }
    }

    /// Add `n` monoids of the given genus.
    #[inline(always)]
    pub fn add(&mut self, genus: usize, n: u64) {
        self.values[genus] += n;
    }

    /// The counts, indexed by genus.
    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.values
    }
}

impl Default for GenusCounts {
    fn default() -> GenusCounts {
        GenusCounts::new()
    }
}

impl core::ops::Add for GenusCounts {
    type Output = GenusCounts;

    fn add(mut self, other: GenusCounts) -> GenusCounts {
        self += &other;
        self
    }
}

impl core::ops::AddAssign<&GenusCounts> for GenusCounts {
    fn add_assign(&mut self, other: &GenusCounts) {
        for (dst, src) in self.values.iter_mut().zip(other.values.iter()) {
            *dst += src;
        }
    }
}

impl core::ops::Index<usize> for GenusCounts {
    type Output = u64;

    fn index(&self, genus: usize) -> &u64 {
        &self.values[genus]
    }
}

/// Depth-first walk below `m`, counting every descendant of genus less than
/// `target_genus` at its own genus.
///
/// Nodes whose children would reach `target_genus` are not expanded; nodes
/// one level above that take the popcount shortcut, so monoids of the
/// deepest counted genus are tallied without being materialized.
///
/// `m` itself is not counted: by the tally convention its parent already
/// did. Calls with `m.genus() + 2 > target_genus` are no-ops.
///
/// # Panics
///
/// Panics if the walk needs more than [`STACK_SIZE`] pending slots.
pub fn walk_children_stack(m: &Monoid, target_genus: usize, counts: &mut GenusCounts) {
    if m.genus() + 2 > target_genus {
        return;
    }

    let mut pool = [*m; STACK_SIZE];
    let mut slots: [u8; STACK_SIZE] = core::array::from_fn(|i| i as u8);
    let base = pool.as_mut_ptr();
    let mut sp = 1usize;

    while sp > 0 {
        sp -= 1;
        let cur = slots[sp] as usize;
        // SAFETY: `slots` is a permutation of 0..STACK_SIZE at all times, and
        // while children are produced the swap below keeps `cur` strictly
        // above the write position, so the borrow never aliases a child
        // being written.
        let current = unsafe { &*base.add(cur).cast_const() };

        if current.genus() + 2 < target_genus {
            let mut nbr = 0u64;
            for gen in GeneratorIter::children(current) {
                assert!(sp + 1 < STACK_SIZE, "walker slot pool overflow");
                slots.swap(sp, sp + 1);
                // SAFETY: after the swap, slots[sp] is a slot distinct from
                // `cur` (permutation invariant), so the pool entries are
                // disjoint.
                let child = unsafe { &mut *base.add(slots[sp] as usize) };
                child.remove_generator_from(current, gen);
                sp += 1;
                nbr += 1;
            }
            // Each swap moved `cur` one position up, so it already sits at
            // slots[sp] as the new scratch top.
            counts.add(current.genus() + 1, nbr);
        } else {
            debug_assert_eq!(current.genus() + 2, target_genus);
            counts.add(
                current.genus() + 1,
                GeneratorIter::children(current).count() as u64,
            );
        }
    }
}

/// Count numerical monoids of every genus below `target_genus`, single
/// threaded.
///
/// Seeds the two trivial levels (N itself, and N1 = N minus its generator
/// 1, the unique monoid of genus 1) and walks the rest of the tree from
/// N1.
///
/// # Panics
///
/// Panics if `target_genus` is 0 or exceeds [`MAX_GENUS`].
#[must_use]
pub fn count_by_genus(target_genus: usize) -> GenusCounts {
    assert!(
        (1..=MAX_GENUS).contains(&target_genus),
        "target genus must be in 1..={MAX_GENUS}"
    );

    let mut counts = GenusCounts::new();
    counts.add(0, 1);
    if target_genus >= 2 {
        let n1 = Monoid::full().remove_generator(1);
        counts.add(1, 1);
        walk_children_stack(&n1, target_genus, &mut counts);
    }
    counts
}
