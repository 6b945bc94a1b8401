// =============================================================================
// Intrinsics Module
// =============================================================================
//
// Low-level operations on 16-lane byte blocks, optimized for the target
// architecture.

/// 16-lane block kernel: equality masks, shifts, clamp-and-subtract.
pub mod blocks;

/// Kani formal verification proofs.
#[cfg(kani)]
mod kani_proofs;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use blocks::{
    advance_shift, eq_one_mask, load_unaligned, mask_low_lanes, popcnt16,
    shift_right_zero_fill, sub_nonzero_indicator, Block, LANES,
};
