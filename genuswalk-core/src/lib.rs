//! # genuswalk-core: SIMD-Accelerated Numerical Monoid Enumeration
//!
//! `genuswalk-core` is a `no_std`, zero-allocation library that counts
//! numerical monoids by genus. A numerical monoid is a subset of the
//! non-negative integers that contains 0, is closed under addition, and has
//! a finite complement; its genus is the size of that complement (the
//! "gaps").
//!
//! ## Overview
//!
//! Every numerical monoid of genus g + 1 is obtained from exactly one monoid
//! of genus g (its parent) by removing one generator that is at least the
//! parent's conductor. The monoids therefore form an infinite tree rooted at
//! the full monoid N = {0, 1, 2, ...}, and counting monoids by genus reduces
//! to walking that tree level by level:
//!
//! 1. **Represent a monoid compactly** - For each index i, store how many
//!    unordered pairs of monoid elements sum to i. Gaps have count 0,
//!    elements have count >= 1, and generators have count exactly 1.
//! 2. **Enumerate generators with bit masks** - A 16-lane byte comparison
//!    turns one block of counts into a bit mask of generator positions.
//! 3. **Derive children in a few vector ops** - Removing generator g
//!    subtracts a shifted 0/1 membership mask from the count array.
//!
//! ## Architecture
//!
//! The count array is organized in 16-byte blocks so every hot operation is
//! a single SIMD instruction on x86_64 (with portable fallbacks elsewhere).
//! Key design points:
//!
//! - **Fixed-capacity state** - Arrays are sized for [`MAX_GENUS`] at
//!   compile time; a run for any smaller target genus reuses them.
//! - **No heap allocation** - The depth-first walker owns a fixed pool of
//!   monoid slots and recycles them with a slot-index permutation instead of
//!   copying monoids around.
//! - **Leaf shortcut** - At the deepest counted level the walker only needs
//!   the number of children, which is a handful of popcounts.
//!
//! ## Quick Start
//!
//! ```ignore
//! use genuswalk_core::{count_by_genus, Monoid, GeneratorIter};
//!
//! // Count monoids of genus 0..10.
//! let counts = count_by_genus(10);
//! assert_eq!(&counts.as_slice()[..5], &[1, 1, 2, 4, 7]);
//!
//! // Inspect the tree by hand: N minus its generator 1.
//! let n1 = Monoid::full().remove_generator(1);
//! assert_eq!(n1.genus(), 1);
//! assert_eq!(GeneratorIter::children(&n1).count(), 2);
//! ```
//!
//! ## Module Organization
//!
//! - [`intrinsics`] - 16-lane block kernel (masks, shifts, clamp-subtract).
//! - [`monoid`] - Monoid state and child derivation.
//! - [`generators`] - Lazy generator iterator with a popcount shortcut.
//! - [`walker`] - Explicit-stack depth-first walker and per-genus counters.

#![no_std]
#![deny(missing_docs)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Low-level 16-lane block operations.
pub mod intrinsics;

/// Monoid state, constants, and child derivation.
pub mod monoid;

/// Lazy enumeration of a monoid's generators.
pub mod generators;

/// Depth-first tree walker and per-genus counters.
pub mod walker;

/// Kani formal verification proofs for monoid block addressing.
#[cfg(kani)]
mod monoid_kani;

/// Kani formal verification proofs for the walker's slot pool.
#[cfg(kani)]
mod walker_kani;

// =============================================================================
// Convenience Re-exports (Clean Public API)
// =============================================================================

// Capacity constants
pub use monoid::{MAX_GENUS, NBLOCKS, SIZE, SIZE_BOUND};

// Core state
pub use monoid::Monoid;

// Generator enumeration
pub use generators::GeneratorIter;

// Walking and counting
pub use walker::{count_by_genus, walk_children_stack, GenusCounts, STACK_SIZE};
