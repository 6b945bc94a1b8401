//! Kani formal verification proofs for the walker's slot pool.
//!
//! These proofs verify the slot-permutation discipline behind the walker's
//! raw-pointer pool writes:
//! - The swap-push sequence keeps `slots` a bijection on the pool
//! - A freshly written slot never aliases the parked current monoid
//! - Every slot index stays a valid pool offset
//!
//! Run with: `cargo kani --package genuswalk-core`

use crate::monoid::Monoid;
use crate::walker::STACK_SIZE;

/// Pool size for bounded proofs. The swap discipline is independent of the
/// pool size, so a small model keeps the proofs tractable.
const PROOF_SLOTS: usize = 8;

// ============================================================================
// Proof 1: The push sequence preserves the slot permutation
// ============================================================================
// File: walker.rs (walk_children_stack, child push loop)
// What: Prove that any run of swap(sp, sp+1); write slots[sp]; sp += 1 steps
//       keeps `slots` a bijection on 0..PROOF_SLOTS, never writes the parked
//       slot, and leaves the parked slot at the new top
// Why: The pool writes go through `base.add(slots[sp])` while the current
//      monoid is borrowed from `base.add(cur)`; a collision is a mutable
//      alias of a live shared borrow

/// Verify the slot-swap invariants of one expansion episode.
///
/// Starting from an arbitrary permutation and stack pointer, perform an
/// arbitrary (bounded) number of child pushes exactly the way the walker
/// does. At every step the write target must differ from the parked slot,
/// and afterwards the array must still be a permutation with the parked
/// slot back on top.
#[kani::proof]
#[kani::unwind(9)]
fn verify_slot_swap_preserves_permutation() {
    let mut slots: [u8; PROOF_SLOTS] = kani::any();

    // Assume a permutation: every entry in range, all entries distinct.
    let mut i = 0;
    while i < PROOF_SLOTS {
        kani::assume((slots[i] as usize) < PROOF_SLOTS);
        let mut j = i + 1;
        while j < PROOF_SLOTS {
            kani::assume(slots[i] != slots[j]);
            j += 1;
        }
        i += 1;
    }

    let start: usize = kani::any();
    let pushes: usize = kani::any();
    kani::assume(start < PROOF_SLOTS);
    kani::assume(pushes <= PROOF_SLOTS - 1 - start);

    let cur = slots[start];
    let mut sp = start;
    let mut n = 0;
    while n < pushes {
        slots.swap(sp, sp + 1);
        kani::assert(
            slots[sp] != cur,
            "write target must differ from the parked slot",
        );
        sp += 1;
        n += 1;
    }

    kani::assert(slots[sp] == cur, "parked slot must bubble to the new top");

    // Still a permutation: in range and pairwise distinct.
    let mut i = 0;
    while i < PROOF_SLOTS {
        kani::assert(
            (slots[i] as usize) < PROOF_SLOTS,
            "entries must stay in range",
        );
        let mut j = i + 1;
        while j < PROOF_SLOTS {
            kani::assert(slots[i] != slots[j], "entries must stay distinct");
            j += 1;
        }
        i += 1;
    }
}

// ============================================================================
// Proof 2: Slot indices are valid pool offsets
// ============================================================================
// File: walker.rs (walk_children_stack, base.add(cur) / base.add(slots[sp]))
// What: Prove the byte offset of `base.add(slot)` stays inside the pool
//       allocation and never overflows isize for any in-range slot entry
// Why: Both pointer offsets into the monoid pool come straight from `slots`;
//      an out-of-range or overflowing offset is undefined behavior

/// Verify that the walker's pointer offsets stay inside the pool.
///
/// `base.add(slot)` requires the byte offset `slot * size_of::<Monoid>()`
/// to stay within the pool allocation and within isize. The permutation
/// invariant (Proof 1) supplies `slot < STACK_SIZE`; this proof covers the
/// arithmetic on top of it, plus the fact that the u8 slot storage can
/// represent every pool index.
#[kani::proof]
fn verify_slot_index_pool_bounds() {
    let slot: usize = kani::any();
    kani::assume(slot < STACK_SIZE);

    let byte_offset = slot * core::mem::size_of::<Monoid>();
    let pool_bytes = STACK_SIZE * core::mem::size_of::<Monoid>();

    kani::assert(
        byte_offset + core::mem::size_of::<Monoid>() <= pool_bytes,
        "offset element must lie inside the pool allocation",
    );
    kani::assert(
        pool_bytes <= isize::MAX as usize,
        "pool offsets must not overflow isize",
    );
    kani::assert(
        STACK_SIZE - 1 <= u8::MAX as usize,
        "pool indices must fit the u8 slot storage",
    );
}
