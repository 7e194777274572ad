//! Numeric precision of quantity values.
//!
//! The value type of a [`Quantity`](crate::Quantity) is a free parameter.
//! Addition, comparison and the other operators only need the matching
//! `core::ops` trait, so integers work too; [`Real`] adds the float-only
//! operations (`sqrt`, `abs`).

use core::ops::{Add, Div, Mul, Neg, Sub};

/// Precision used when a quantity does not name one.
///
/// `f64` unless the `single-precision` feature is enabled, in which case `f32`.
#[cfg(not(feature = "single-precision"))]
pub type DefaultPrecision = f64;

/// Precision used when a quantity does not name one.
///
/// `f64` unless the `single-precision` feature is enabled, in which case `f32`.
#[cfg(feature = "single-precision")]
pub type DefaultPrecision = f32;

/// Floating-point precisions.
///
/// Square roots follow IEEE-754: a negative value yields NaN, which is
/// propagated rather than turned into an error.
pub trait Real:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// `true` if the value is NaN.
    fn is_nan(self) -> bool;
}

impl Real for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn sqrt(self) -> Self {
        #[cfg(feature = "std")]
        {
            f64::sqrt(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sqrt(self)
        }
    }

    #[inline]
    fn abs(self) -> Self {
        #[cfg(feature = "std")]
        {
            f64::abs(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::fabs(self)
        }
    }

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}

impl Real for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn sqrt(self) -> Self {
        #[cfg(feature = "std")]
        {
            f32::sqrt(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sqrtf(self)
        }
    }

    #[inline]
    fn abs(self) -> Self {
        #[cfg(feature = "std")]
        {
            f32::abs(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::fabsf(self)
        }
    }

    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}
