//! Kani formal verification proofs for monoid block addressing.
//!
//! These proofs verify the offset arithmetic behind the unsafe block
//! accessors and the unaligned tail loads in child derivation:
//! - Block pointer offsets (monoid.rs `block` / `block_mut`)
//! - Generator index decomposition (monoid.rs `remove_generator_from`)
//! - Tail load offsets (monoid.rs `remove_generator_from`)
//!
//! Run with: `cargo kani --package genuswalk-core`

use crate::monoid::{NBLOCKS, SIZE, SIZE_BOUND};

// ============================================================================
// Proof 1: Block offsets stay inside the count array
// ============================================================================
// File: monoid.rs (block / block_mut)
// What: Prove i < NBLOCKS implies the 16 bytes at offset i << 4 lie in
//       [0, SIZE)
// Why: The accessors cast `decs.as_ptr().add(i << 4)` to a block reference;
//      an out-of-range offset is out-of-bounds memory access

/// Verify that every valid block index yields an in-bounds byte range.
///
/// `block` and `block_mut` derive `&[u8; 16]` from a raw offset into the
/// count array. This proof verifies the whole 16-byte window is inside the
/// array for every index the debug assertion admits.
#[kani::proof]
fn verify_block_offset_bounds() {
    let i: usize = kani::any();
    kani::assume(i < NBLOCKS);

    let offset = i << 4;

    kani::assert(offset < SIZE, "block offset must start inside the array");
    kani::assert(
        offset + 16 <= SIZE,
        "block window must end inside the array",
    );
}

// ============================================================================
// Proof 2: Generator index decomposition round-trips
// ============================================================================
// File: monoid.rs (remove_generator_from)
// What: Prove (gen >> 4, gen & 0xF) reconstructs gen with a valid block
//       index and lane shift
// Why: The head-block subtraction addresses block gen >> 4 and shifts by
//      gen & 0xF; a broken decomposition decrements the wrong lanes

/// Verify that the block/lane decomposition of a generator index is
/// reversible and in range.
#[kani::proof]
fn verify_generator_index_round_trip() {
    let gen: usize = kani::any();
    kani::assume(gen < SIZE_BOUND);

    let start_block = gen >> 4;
    let shift = gen & 0xF;

    kani::assert(shift < 16, "lane shift must be a valid shuffle index");
    kani::assert(start_block < NBLOCKS, "head block index must be valid");
    kani::assert(
        (start_block << 4) + shift == gen,
        "block/lane must reconstruct the generator index",
    );
}

// ============================================================================
// Proof 3: Tail load offsets are bounded
// ============================================================================
// File: monoid.rs (remove_generator_from, tail block loop)
// What: Prove ((i - start_block) << 4) - shift keeps the 16-byte unaligned
//       read inside the count array for every tail block
// Why: The tail loads read 16 bytes from an arbitrary offset of the parent
//      array; overshoot reads past the monoid state

/// Verify that every unaligned tail load stays inside the parent's count
/// array.
#[kani::proof]
fn verify_tail_load_offset_bounds() {
    let gen: usize = kani::any();
    let i: usize = kani::any();
    kani::assume(gen < SIZE_BOUND);

    let start_block = gen >> 4;
    let shift = gen & 0xF;
    kani::assume(i > start_block && i < NBLOCKS);

    let offset = ((i - start_block) << 4) - shift;

    kani::assert(offset >= 1, "tail offset must not underflow");
    kani::assert(
        offset + 16 <= SIZE,
        "tail load window must end inside the array",
    );
}
