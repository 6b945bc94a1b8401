//! Kani formal verification proofs for the block kernel.
//!
//! These proofs verify the lane-level contracts the child-derivation pass
//! depends on. The SIMD paths are not symbolically executable, so each proof
//! inlines the portable scalar model; the SIMD and scalar paths are checked
//! against each other by the integration test suite instead.
//!
//! Run with: `cargo kani --package genuswalk-core`

// ============================================================================
// Proof 1: shift_right_zero_fill routes and zero-fills lanes
// ============================================================================
// File: blocks.rs
// What: Prove lane j of the result is block[j - k] for j >= k and 0 below
// Why: A non-zero low lane would decrement counts below the removed
//      generator and corrupt the child monoid

/// Verify the shift-with-zero-fill lane contract for every k in 0..16.
#[kani::proof]
fn verify_shift_right_zero_fill_lanes() {
    let block: [u8; 16] = kani::any();
    let k: usize = kani::any();
    kani::assume(k < 16);

    // Inline portable shift_right_zero_fill
    let mut out = [0u8; 16];
    let mut j = k;
    while j < 16 {
        out[j] = block[j - k];
        j += 1;
    }

    let mut lane = 0;
    while lane < 16 {
        if lane < k {
            kani::assert(out[lane] == 0, "low lanes must be zero filled");
        } else {
            kani::assert(out[lane] == block[lane - k], "high lanes must shift");
        }
        lane += 1;
    }
}

// ============================================================================
// Proof 2: eq_one_mask bit semantics
// ============================================================================
// File: blocks.rs
// What: Prove bit j of the mask is set iff lane j equals 1
// Why: The generator iterator yields exactly the set bits; a wrong bit is a
//      wrong generator and a wrong subtree

/// Verify the equality mask marks exactly the lanes holding 1.
#[kani::proof]
fn verify_eq_one_mask_bits() {
    let block: [u8; 16] = kani::any();

    // Inline portable eq_one_mask
    let mut mask = 0u32;
    let mut lane = 0;
    while lane < 16 {
        mask |= u32::from(block[lane] == 1) << lane;
        lane += 1;
    }

    kani::assert(mask <= 0xFFFF, "mask must fit in 16 bits");
    let mut j = 0;
    while j < 16 {
        let bit = (mask >> j) & 1;
        kani::assert(
            (bit == 1) == (block[j] == 1),
            "bit j must mirror lane j == 1",
        );
        j += 1;
    }
}

// ============================================================================
// Proof 3: sub_nonzero_indicator lane rule
// ============================================================================
// File: blocks.rs
// What: Prove dst[j] drops by exactly 1 where src[j] != 0 and is unchanged
//       elsewhere
// Why: This is the whole child-derivation arithmetic; over- or
//      under-subtracting any lane corrupts every descendant count

/// Verify the fused clamp-and-subtract decrements exactly the non-zero
/// source lanes.
#[kani::proof]
fn verify_sub_nonzero_indicator_lanes() {
    let before: [u8; 16] = kani::any();
    let src: [u8; 16] = kani::any();

    // Inline portable sub_nonzero_indicator
    let mut dst = before;
    let mut lane = 0;
    while lane < 16 {
        dst[lane] = dst[lane].wrapping_sub(u8::from(src[lane] != 0));
        lane += 1;
    }

    let mut j = 0;
    while j < 16 {
        if src[j] != 0 {
            kani::assert(
                dst[j] == before[j].wrapping_sub(1),
                "non-zero source lane must decrement",
            );
        } else {
            kani::assert(dst[j] == before[j], "zero source lane must not change");
        }
        j += 1;
    }
}

// ============================================================================
// Proof 4: advance_shift consumes exactly one mask bit
// ============================================================================
// File: blocks.rs, generators.rs
// What: Prove gen += advance_shift(mask); mask >>= advance_shift(mask) lands
//       on the lowest set bit and removes it
// Why: The iterator loop terminates and yields each generator once only if
//      every step strictly consumes the lowest bit

/// Verify the mask-consumption step of the generator iterator.
#[kani::proof]
fn verify_advance_shift_consumes_lowest_bit() {
    let mask: u32 = kani::any();
    kani::assume(mask != 0);
    kani::assume(mask <= 0xFFFF);

    let shift = mask.trailing_zeros() + 1;

    kani::assert(shift >= 1 && shift <= 16, "shift must stay in 1..=16");
    kani::assert((mask >> (shift - 1)) & 1 == 1, "target bit must be set");
    let remaining = mask >> shift;
    kani::assert(
        remaining.count_ones() == mask.count_ones() - 1,
        "exactly one bit must be consumed",
    );
}
