//! Dimension arithmetic: the exponent rules behind `*`, `/` and `sqrt`.
//!
//! Each rule exists twice. The traits [`DimMul`], [`DimDiv`] and [`DimSqrt`]
//! compute the result at the type level, so the compiler picks the output
//! dimension of an operator before any value is computed. The `const fn`s on
//! [`DimensionVector`] apply the same rule to runtime vectors.
//!
//! | operation | exponents            |
//! |-----------|----------------------|
//! | multiply  | `a[i] + b[i]`        |
//! | divide    | `a[i] - b[i]`        |
//! | sqrt      | `a[i] / 2`, all even |

use crate::dimension::{Dim, Dimension, DimensionVector, BASIS_LEN};
use crate::error::{DimensionError, DimensionResult, Operation};
use core::ops::{Add, Sub};
use typenum::{Diff, Integer, PartialDiv, PartialQuot, Sum, P2};

/// Type-level product of two dimensions.
pub trait DimMul<Rhs: Dimension>: Dimension {
    /// Dimension of `Self * Rhs`.
    type Output: Dimension;
}

/// Type-level quotient of two dimensions.
pub trait DimDiv<Rhs: Dimension>: Dimension {
    /// Dimension of `Self / Rhs`.
    type Output: Dimension;
}

/// Type-level square root of a dimension.
///
/// Only implemented when every exponent is evenly divisible by two, so
/// `sqrt` of e.g. a length does not compile.
pub trait DimSqrt: Dimension {
    /// Dimension of `sqrt(Self)`.
    type Output: Dimension;
}

/// Dimension of `A * B`.
pub type Product<A, B> = <A as DimMul<B>>::Output;

/// Dimension of `A / B`.
pub type Quotient<A, B> = <A as DimDiv<B>>::Output;

/// Dimension of `sqrt(A)`.
pub type Root<A> = <A as DimSqrt>::Output;

impl<T1, M1, L1, A1, T2, M2, L2, A2> DimMul<Dim<T2, M2, L2, A2>> for Dim<T1, M1, L1, A1>
where
    Dim<T1, M1, L1, A1>: Dimension,
    Dim<T2, M2, L2, A2>: Dimension,
    T1: Add<T2>,
    M1: Add<M2>,
    L1: Add<L2>,
    A1: Add<A2>,
    Sum<T1, T2>: Integer + 'static,
    Sum<M1, M2>: Integer + 'static,
    Sum<L1, L2>: Integer + 'static,
    Sum<A1, A2>: Integer + 'static,
{
    type Output = Dim<Sum<T1, T2>, Sum<M1, M2>, Sum<L1, L2>, Sum<A1, A2>>;
}

impl<T1, M1, L1, A1, T2, M2, L2, A2> DimDiv<Dim<T2, M2, L2, A2>> for Dim<T1, M1, L1, A1>
where
    Dim<T1, M1, L1, A1>: Dimension,
    Dim<T2, M2, L2, A2>: Dimension,
    T1: Sub<T2>,
    M1: Sub<M2>,
    L1: Sub<L2>,
    A1: Sub<A2>,
    Diff<T1, T2>: Integer + 'static,
    Diff<M1, M2>: Integer + 'static,
    Diff<L1, L2>: Integer + 'static,
    Diff<A1, A2>: Integer + 'static,
{
    type Output = Dim<Diff<T1, T2>, Diff<M1, M2>, Diff<L1, L2>, Diff<A1, A2>>;
}

// `PartialDiv` only exists for exact division, which is what rejects odd exponents.
impl<T, M, L, A> DimSqrt for Dim<T, M, L, A>
where
    Dim<T, M, L, A>: Dimension,
    T: PartialDiv<P2>,
    M: PartialDiv<P2>,
    L: PartialDiv<P2>,
    A: PartialDiv<P2>,
    PartialQuot<T, P2>: Integer + 'static,
    PartialQuot<M, P2>: Integer + 'static,
    PartialQuot<L, P2>: Integer + 'static,
    PartialQuot<A, P2>: Integer + 'static,
{
    type Output = Dim<PartialQuot<T, P2>, PartialQuot<M, P2>, PartialQuot<L, P2>, PartialQuot<A, P2>>;
}

impl DimensionVector {
    /// Element-wise sum of exponents.
    ///
    /// Fails with [`DimensionError::Overflow`] if an exponent leaves the `i32`
    /// range; the result never wraps.
    ///
    /// ```rust
    /// use physmod_core::DimensionVector;
    ///
    /// let mass = DimensionVector::new(0, 1, 0, 0);
    /// let accel = DimensionVector::new(-2, 0, 1, 0);
    /// assert_eq!(mass.multiply(accel), Ok(DimensionVector::new(-2, 1, 1, 0)));
    /// ```
    pub const fn multiply(self, rhs: Self) -> DimensionResult<Self> {
        let (a, b) = (self.exponents(), rhs.exponents());
        let mut out = [0; BASIS_LEN];
        let mut i = 0;
        while i < BASIS_LEN {
            out[i] = match a[i].checked_add(b[i]) {
                Some(exp) => exp,
                None => return Err(self.overflow(Operation::Multiply, rhs)),
            };
            i += 1;
        }
        Ok(Self::from_exponents(out))
    }

    /// Element-wise difference of exponents (`self` minus `rhs`).
    ///
    /// Fails with [`DimensionError::Overflow`] like [`multiply`](Self::multiply).
    pub const fn divide(self, rhs: Self) -> DimensionResult<Self> {
        let (a, b) = (self.exponents(), rhs.exponents());
        let mut out = [0; BASIS_LEN];
        let mut i = 0;
        while i < BASIS_LEN {
            out[i] = match a[i].checked_sub(b[i]) {
                Some(exp) => exp,
                None => return Err(self.overflow(Operation::Divide, rhs)),
            };
            i += 1;
        }
        Ok(Self::from_exponents(out))
    }

    const fn overflow(self, operation: Operation, rhs: Self) -> DimensionError {
        DimensionError::Overflow {
            operation,
            lhs: self,
            rhs,
        }
    }

    /// Element-wise halving of exponents.
    ///
    /// Fails with [`DimensionError::OddExponent`] if any exponent is odd;
    /// exponents are never truncated.
    ///
    /// ```rust
    /// use physmod_core::{DimensionError, DimensionVector};
    ///
    /// let area = DimensionVector::new(0, 0, 2, 0);
    /// assert_eq!(area.sqrt(), Ok(DimensionVector::new(0, 0, 1, 0)));
    ///
    /// let volume = DimensionVector::new(0, 0, 3, 0);
    /// assert!(matches!(volume.sqrt(), Err(DimensionError::OddExponent { .. })));
    /// ```
    pub const fn sqrt(self) -> DimensionResult<Self> {
        let a = self.exponents();
        let mut out = [0; BASIS_LEN];
        let mut i = 0;
        while i < BASIS_LEN {
            if a[i] % 2 != 0 {
                return Err(DimensionError::OddExponent { dimension: self });
            }
            out[i] = a[i] / 2;
            i += 1;
        }
        Ok(Self::from_exponents(out))
    }
}

/// Free-function form of [`DimensionVector::multiply`].
#[inline]
pub const fn multiply(a: DimensionVector, b: DimensionVector) -> DimensionResult<DimensionVector> {
    a.multiply(b)
}

/// Free-function form of [`DimensionVector::divide`].
#[inline]
pub const fn divide(a: DimensionVector, b: DimensionVector) -> DimensionResult<DimensionVector> {
    a.divide(b)
}

/// Free-function form of [`DimensionVector::sqrt`].
#[inline]
pub const fn sqrt_dim(d: DimensionVector) -> DimensionResult<DimensionVector> {
    d.sqrt()
}
