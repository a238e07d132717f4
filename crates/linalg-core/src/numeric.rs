//! Element capability trait for matrix algorithms
//!
//! Elimination needs exact zero tests, the four field operations, negation and
//! a way to rank entries by magnitude for pivot selection. [`Field`] gathers
//! these so algorithms can run over native floats as well as exact or complex
//! element types.
//!
//! # Design Philosophy
//!
//! - **Pure type constraints**: arithmetic comes from `std::ops` and `num_traits`
//! - **Partial ordering**: magnitudes may be incomparable (NaN), callers decide
//! - **Extensible**: implement [`Field`] for any type with exact division

use num_complex::Complex;
use num_traits::{Float, One, Zero};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar type usable as a matrix element
pub trait Field:
    Clone
    + Debug
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Compare the magnitudes of two elements
    ///
    /// Returns `None` when the magnitudes are not comparable.
    fn magnitude_cmp(&self, other: &Self) -> Option<Ordering>;

    /// Whether `self` has strictly larger magnitude than `other`
    #[inline]
    fn magnitude_gt(&self, other: &Self) -> bool {
        matches!(self.magnitude_cmp(other), Some(Ordering::Greater))
    }
}

macro_rules! impl_field_for_float {
    ($($t:ty),*) => {
        $(
            impl Field for $t {
                #[inline]
                fn magnitude_cmp(&self, other: &Self) -> Option<Ordering> {
                    self.abs().partial_cmp(&other.abs())
                }
            }
        )*
    };
}

impl_field_for_float!(f32, f64);

impl<F> Field for Complex<F>
where
    F: Float + Debug,
{
    /// Magnitudes are ranked by squared norm, which orders like the norm.
    #[inline]
    fn magnitude_cmp(&self, other: &Self) -> Option<Ordering> {
        self.norm_sqr().partial_cmp(&other.norm_sqr())
    }
}

// =============================================================================
// Tests
// =============================================================================
