//! Monoid state and child derivation.
//!
//! A numerical monoid is stored as its decomposition-count array: entry `i`
//! holds the number of unordered pairs `(a, b)` of monoid elements with
//! `a + b = i`. This single array encodes everything the walker needs:
//!
//! - `decs[i] == 0`: `i` is a gap;
//! - `decs[i] >= 1`: `i` is an element;
//! - `decs[i] == 1`: `i` is a generator (only `0 + i` reaches it).
//!
//! Three scalars ride along: the conductor (first index from which every
//! integer is an element), the multiplicity `min` (smallest positive
//! element), and the genus (number of gaps).
//!
//! Removing a generator `g` maps the array to a child monoid in one pass:
//! for every `i >= g`, subtract 1 iff `i - g` is an element. That inner loop
//! is the hot path of the whole enumeration and runs block-wise through the
//! [`intrinsics`](crate::intrinsics) kernel.

use crate::intrinsics::blocks::{
    self, Block, LANES,
};

/// Capacity bound on the genus: arrays are sized for walks up to this genus.
pub const MAX_GENUS: usize = 40;

/// Largest index the walk can ever need to examine.
///
/// A monoid of genus g has conductor at most 2g and multiplicity at most
/// g + 1, and no generator index reaches conductor + min.
pub const SIZE_BOUND: usize = 3 * (MAX_GENUS - 1);

/// Number of 16-lane blocks covering [`SIZE_BOUND`].
pub const NBLOCKS: usize = (SIZE_BOUND + LANES - 1) / LANES;

/// Padded length of the decomposition-count array.
pub const SIZE: usize = NBLOCKS * LANES;

/// A numerical monoid in decomposition-count form.
///
/// The state is value-like and `Copy`: 128 bytes of counts plus three
/// scalars. Monoids are never shared or aliased; the walker derives children
/// from parents and drops them on scope exit.
///
/// The count array is 16-byte aligned so block 0 (and every block after it)
/// can be processed with aligned SIMD loads.
#[repr(C, align(16))]
#[derive(Clone, Copy, Debug)]
pub struct Monoid {
    /// decs[i] = number of unordered pairs of elements summing to i,
    /// for i < SIZE. Values never exceed SIZE/2 + 1.
    decs: [u8; SIZE],
    /// First index c such that every i >= c is an element. decs[c - 1] == 0.
    conductor: usize,
    /// Smallest positive element (multiplicity).
    min: usize,
    /// Number of gaps.
    genus: usize,
}

impl Monoid {
    /// The full monoid N = {0, 1, 2, ...}.
    ///
    /// Its decomposition counts follow the pattern 1, 1, 2, 2, 3, 3, ...
    /// (`i/2 + 1` pairs sum to `i` when every non-negative integer is an
    /// element), and all three scalars collapse: conductor = min = 1,
    /// genus = 0.
    #[must_use]
    pub fn full() -> Monoid {
        let mut decs = [0u8; SIZE];
        let mut i = 0;
        while i < SIZE {
            decs[i] = (i / 2 + 1) as u8;
            i += 1;
        }
        Monoid {
            decs,
            conductor: 1,
            min: 1,
            genus: 0,
        }
    }

    /// Number of gaps.
    #[inline(always)]
    #[must_use]
    pub fn genus(&self) -> usize {
        self.genus
    }

    /// First index from which every integer is an element.
    #[inline(always)]
    #[must_use]
    pub fn conductor(&self) -> usize {
        self.conductor
    }

    /// Smallest positive element (multiplicity).
    #[inline(always)]
    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    /// Decomposition count at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= SIZE`.
    #[inline(always)]
    #[must_use]
    pub fn dec(&self, i: usize) -> u8 {
        self.decs[i]
    }

    /// The full decomposition-count array.
    #[inline(always)]
    #[must_use]
    pub fn decs(&self) -> &[u8; SIZE] {
        &self.decs
    }

    /// Borrow block `i` of the count array.
    #[inline(always)]
    pub(crate) fn block(&self, i: usize) -> &Block {
        debug_assert!(i < NBLOCKS);
        // SAFETY: decs is SIZE = NBLOCKS * 16 bytes and i < NBLOCKS, so the
        // 16 bytes at offset i * 16 are in bounds.
        unsafe { &*self.decs.as_ptr().add(i << 4).cast::<Block>() }
    }

    /// Borrow block `i` of the count array mutably.
    #[inline(always)]
    fn block_mut(&mut self, i: usize) -> &mut Block {
        debug_assert!(i < NBLOCKS);
        // SAFETY: same bounds argument as `block`.
        unsafe { &mut *self.decs.as_mut_ptr().add(i << 4).cast::<Block>() }
    }

    /// Child monoid obtained by removing the generator `gen`.
    ///
    /// Allocation-free by-value variant for the spawn path; the walker's hot
    /// path uses [`remove_generator_from`](Monoid::remove_generator_from)
    /// to write into a pre-owned slot instead.
    #[must_use]
    pub fn remove_generator(&self, gen: usize) -> Monoid {
        let mut child = *self;
        child.remove_generator_from(self, gen);
        child
    }

    /// Overwrite `self` with the child of `parent` obtained by removing the
    /// generator `gen`.
    ///
    /// The removed generator becomes the child's Frobenius number:
    /// conductor = gen + 1, genus goes up by one, and the multiplicity only
    /// changes when the multiplicity itself was removed.
    ///
    /// For every index `i >= gen`, the count drops by 1 iff `i - gen` is an
    /// element of `parent`: the pair `(gen, i - gen)` no longer exists. The
    /// membership indicator is materialized block-wise, shifted so it lines
    /// up with `i`, clamped to 0/1 and subtracted in one kernel call per
    /// block. Indices below `gen` keep their counts.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `gen` is not a generator of `parent`, or if the
    /// derived child fails the conductor-sharpness postcondition. Either
    /// indicates an implementation bug, not a recoverable condition.
    pub fn remove_generator_from(&mut self, parent: &Monoid, gen: usize) {
        debug_assert_eq!(parent.decs[gen], 1, "removed index must be a generator");

        self.conductor = gen + 1;
        self.genus = parent.genus + 1;
        self.min = if gen == parent.min { gen + 1 } else { parent.min };
        self.decs = parent.decs;

        let start_block = gen >> 4;
        let shift = gen & 0xF;

        // Head block: positions gen..(start_block * 16 + 15). Their offsets
        // from gen are 0..(16 - shift), all inside parent block 0. The zero
        // fill keeps lanes below gen untouched.
        let head = blocks::shift_right_zero_fill(parent.block(0), shift);
        blocks::sub_nonzero_indicator(self.block_mut(start_block), &head);

        // Tail blocks: block i needs parent membership starting at offset
        // (i - start_block) * 16 - shift, which is never block-aligned when
        // shift != 0. The range is compile-time constant, so the loop
        // unrolls.
        for i in (start_block + 1)..NBLOCKS {
            let tail = blocks::load_unaligned(&parent.decs[((i - start_block) << 4) - shift..]);
            blocks::sub_nonzero_indicator(self.block_mut(i), &tail);
        }

        debug_assert_eq!(self.decs[gen], 0, "removed generator must become a gap");
        debug_assert_eq!(
            self.decs[self.conductor - 1],
            0,
            "conductor must be sharp"
        );
    }
}
