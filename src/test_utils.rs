// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Contrast math works in `f64`; these re-exports keep tests off `assert_eq!`
//! for values that only agree up to rounding.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Default epsilon for f64 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F64_EPSILON: f64 = 1e-10;
