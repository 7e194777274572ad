//! Runtime-tagged quantities.
//!
//! [`DynQuantity`] carries its [`DimensionVector`] as data instead of as a
//! type. Use it where the dimension is only known at run time, e.g. after
//! erasing the static tag to store mixed quantities together. The checks the
//! compiler performs for [`Quantity`] happen here at the first point of
//! combination, and a mismatch is returned as a [`DimensionError`] before any
//! value is produced.
//!
//! ```rust
//! use physmod_core::si::{Kilograms, Meters};
//! use physmod_core::{DimensionError, DynQuantity};
//!
//! let m = DynQuantity::from(Kilograms::new(2.0));
//! let x = DynQuantity::from(Meters::new(1.0));
//! assert!(matches!(m.checked_add(x), Err(DimensionError::Mismatch { .. })));
//! ```

use crate::dimension::{Dimension, DimensionVector};
use crate::error::{DimensionError, DimensionResult, Operation};
use crate::precision::{DefaultPrecision, Real};
use crate::quantity::Quantity;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul, Sub};

/// A value paired with a runtime [`DimensionVector`].
///
/// There is no `PartialEq`: `==` could not report a dimension mismatch, so
/// comparisons go through [`checked_eq`](Self::checked_eq) and
/// [`checked_cmp`](Self::checked_cmp).
#[derive(Clone, Copy, Debug)]
pub struct DynQuantity<P = DefaultPrecision> {
    value: P,
    dimension: DimensionVector,
}

impl<P> DynQuantity<P> {
    /// Creates a quantity with an explicit dimension.
    #[inline]
    pub const fn new(value: P, dimension: DimensionVector) -> Self {
        Self { value, dimension }
    }

    /// The runtime dimension.
    #[inline]
    pub const fn dimension(&self) -> DimensionVector {
        self.dimension
    }

    /// Fails unless `other` has the same dimension as `self`.
    fn ensure_compatible(&self, operation: Operation, other: DimensionVector) -> DimensionResult<()> {
        if self.dimension.compatible(other) {
            Ok(())
        } else {
            log::debug!(
                "rejected {} between [{}] and [{}]",
                operation,
                self.dimension,
                other
            );
            Err(DimensionError::mismatch(operation, self.dimension, other))
        }
    }
}

impl<P: Copy> DynQuantity<P> {
    /// Returns the raw numeric value, stripped of its dimension.
    #[inline]
    pub fn value(&self) -> P {
        self.value
    }

    /// Recovers a statically tagged quantity.
    ///
    /// Fails with [`Operation::Reinterpret`] unless the runtime dimension is
    /// exactly `D`.
    ///
    /// ```rust
    /// use physmod_core::si::Newtons;
    /// use physmod_core::{dims, DynQuantity};
    ///
    /// let f = DynQuantity::from(Newtons::new(3.0));
    /// assert_eq!(f.downcast::<dims::Force>().unwrap().value(), 3.0);
    /// assert!(f.downcast::<dims::Torque>().is_err());
    /// ```
    pub fn downcast<D: Dimension>(&self) -> DimensionResult<Quantity<D, P>> {
        if self.dimension.compatible(D::VECTOR) {
            Ok(Quantity::new(self.value))
        } else {
            log::debug!(
                "rejected {} from [{}] to [{}]",
                Operation::Reinterpret,
                self.dimension,
                D::VECTOR
            );
            Err(DimensionError::mismatch(
                Operation::Reinterpret,
                self.dimension,
                D::VECTOR,
            ))
        }
    }
}

impl<P: Copy + Add<Output = P>> DynQuantity<P> {
    /// `self + rhs`, if the dimensions match.
    pub fn checked_add(self, rhs: Self) -> DimensionResult<Self> {
        self.ensure_compatible(Operation::Add, rhs.dimension)?;
        Ok(Self::new(self.value + rhs.value, self.dimension))
    }

    /// `self += rhs`, if the dimensions match; `self` is untouched otherwise.
    pub fn try_add_assign(&mut self, rhs: Self) -> DimensionResult<()> {
        *self = self.checked_add(rhs)?;
        Ok(())
    }
}

impl<P: Copy + Sub<Output = P>> DynQuantity<P> {
    /// `self - rhs`, if the dimensions match.
    pub fn checked_sub(self, rhs: Self) -> DimensionResult<Self> {
        self.ensure_compatible(Operation::Subtract, rhs.dimension)?;
        Ok(Self::new(self.value - rhs.value, self.dimension))
    }

    /// `self -= rhs`, if the dimensions match; `self` is untouched otherwise.
    pub fn try_sub_assign(&mut self, rhs: Self) -> DimensionResult<()> {
        *self = self.checked_sub(rhs)?;
        Ok(())
    }
}

impl<P: PartialOrd> DynQuantity<P> {
    /// Compares values, if the dimensions match.
    ///
    /// `Ok(None)` means the values are unordered (NaN).
    pub fn checked_cmp(&self, rhs: &Self) -> DimensionResult<Option<Ordering>> {
        self.ensure_compatible(Operation::Compare, rhs.dimension)?;
        Ok(self.value.partial_cmp(&rhs.value))
    }

    /// Value equality, if the dimensions match.
    pub fn checked_eq(&self, rhs: &Self) -> DimensionResult<bool> {
        self.ensure_compatible(Operation::Compare, rhs.dimension)?;
        Ok(self.value == rhs.value)
    }
}

impl<P: Real> DynQuantity<P> {
    /// Square root; fails if any exponent is odd.
    ///
    /// A negative value yields NaN, as the underlying float does.
    pub fn sqrt(self) -> DimensionResult<Self> {
        let dimension = self.dimension.sqrt().map_err(|err| {
            log::debug!("rejected sqrt of [{}]", self.dimension);
            err
        })?;
        Ok(Self::new(self.value.sqrt(), dimension))
    }
}

impl<P: Mul<Output = P>> DynQuantity<P> {
    /// `self * rhs`, with the exponents of both operands added.
    ///
    /// Fails only if an exponent overflows.
    pub fn checked_mul(self, rhs: Self) -> DimensionResult<Self> {
        let dimension = self.dimension.multiply(rhs.dimension).map_err(|err| {
            log::debug!("rejected multiply of [{}] by [{}]", self.dimension, rhs.dimension);
            err
        })?;
        Ok(Self::new(self.value * rhs.value, dimension))
    }
}

impl<P: Div<Output = P>> DynQuantity<P> {
    /// `self / rhs`, with the exponents of `rhs` subtracted.
    ///
    /// Fails only if an exponent overflows.
    pub fn checked_div(self, rhs: Self) -> DimensionResult<Self> {
        let dimension = self.dimension.divide(rhs.dimension).map_err(|err| {
            log::debug!("rejected divide of [{}] by [{}]", self.dimension, rhs.dimension);
            err
        })?;
        Ok(Self::new(self.value / rhs.value, dimension))
    }
}

impl<D: Dimension, P> From<Quantity<D, P>> for DynQuantity<P>
where
    P: Copy,
{
    #[inline]
    fn from(quantity: Quantity<D, P>) -> Self {
        Self::new(quantity.value(), D::VECTOR)
    }
}

impl<D: Dimension, P: Copy> Quantity<D, P> {
    /// Moves the dimension from the type into the value.
    #[inline]
    pub fn erase(self) -> DynQuantity<P> {
        self.into()
    }
}

/// Formats the value only, like [`Quantity`].
impl<P: fmt::Display> fmt::Display for DynQuantity<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dims::*;
    use approx::assert_abs_diff_eq;

    fn dq<D: Dimension>(value: f64) -> DynQuantity<f64> {
        Quantity::<D, f64>::new(value).erase()
    }

    #[test]
    fn erase_keeps_value_and_dimension() {
        let q = dq::<Force>(12.5);
        assert_eq!(q.value(), 12.5);
        assert_eq!(q.dimension(), Force::VECTOR);
    }

    #[test]
    fn add_and_sub_with_matching_dimensions() {
        let a = dq::<Length>(0.5);
        let b = dq::<Length>(0.5);
        let sum = a.checked_add(b).unwrap();
        assert_eq!(sum.value(), 1.0);
        assert_eq!(sum.dimension(), Length::VECTOR);
        assert_eq!(a.checked_sub(b).unwrap().value(), 0.0);
    }

    #[test]
    fn add_with_mismatched_dimensions_fails() {
        let err = dq::<Length>(1.0).checked_add(dq::<Mass>(1.0)).unwrap_err();
        assert_eq!(
            err,
            DimensionError::Mismatch {
                operation: Operation::Add,
                lhs: Length::VECTOR,
                rhs: Mass::VECTOR,
            }
        );
    }

    #[test]
    fn sub_with_mismatched_dimensions_fails() {
        let err = dq::<Time>(1.0).checked_sub(dq::<Angle>(1.0)).unwrap_err();
        assert!(matches!(
            err,
            DimensionError::Mismatch {
                operation: Operation::Subtract,
                ..
            }
        ));
    }

    #[test]
    fn failed_accumulation_leaves_receiver_untouched() {
        let mut acc = dq::<Speed>(2.0);
        acc.try_add_assign(dq::<Speed>(1.0)).unwrap();
        assert_eq!(acc.value(), 3.0);
        assert!(acc.try_sub_assign(dq::<Accel>(1.0)).is_err());
        assert_eq!(acc.value(), 3.0);
        acc.try_sub_assign(dq::<Viscosity>(0.5)).unwrap();
        assert_eq!(acc.value(), 2.5);
    }

    #[test]
    fn equality_across_dimensions_is_an_error() {
        let x = dq::<Length>(1.0);
        let m = dq::<Mass>(1.0);
        assert_eq!(
            x.checked_eq(&m),
            Err(DimensionError::Mismatch {
                operation: Operation::Compare,
                lhs: Length::VECTOR,
                rhs: Mass::VECTOR,
            })
        );
        assert_eq!(x.checked_eq(&dq::<Length>(1.0)), Ok(true));
        assert_eq!(
            (x.value(), x.dimension()),
            (dq::<Length>(1.0).value(), Length::VECTOR)
        );
    }

    #[test]
    fn comparisons_are_checked() {
        let a = dq::<Mass>(1.0);
        let b = dq::<Mass>(2.0);
        assert_eq!(a.checked_cmp(&b), Ok(Some(Ordering::Less)));
        assert_eq!(a.checked_eq(&a), Ok(true));
        assert!(a.checked_cmp(&dq::<Length>(1.0)).is_err());
        assert!(a.checked_eq(&dq::<Length>(1.0)).is_err());
    }

    #[test]
    fn mul_and_div_derive_new_dimensions() {
        let f = dq::<Mass>(20.0).checked_mul(dq::<Accel>(9.81)).unwrap();
        assert_eq!(f.dimension(), Force::VECTOR);
        assert_abs_diff_eq!(f.value(), 196.2, epsilon = 1e-9);

        let a = f.checked_div(dq::<Mass>(20.0)).unwrap();
        assert_eq!(a.dimension(), Accel::VECTOR);
        assert_abs_diff_eq!(a.value(), 9.81, epsilon = 1e-12);
    }

    #[test]
    fn sqrt_requires_even_exponents() {
        let side = dq::<Area>(16.0).sqrt().unwrap();
        assert_eq!(side.dimension(), Length::VECTOR);
        assert_eq!(side.value(), 4.0);

        assert_eq!(
            dq::<Volume>(27.0).sqrt().unwrap_err(),
            DimensionError::OddExponent {
                dimension: Volume::VECTOR
            }
        );
    }

    #[test]
    fn mul_and_div_report_exponent_overflow() {
        let huge = DynQuantity::new(1.0, DimensionVector::new(i32::MAX, 0, 0, 0));
        assert_eq!(
            huge.checked_mul(dq::<Time>(1.0)).unwrap_err(),
            DimensionError::Overflow {
                operation: Operation::Multiply,
                lhs: huge.dimension(),
                rhs: Time::VECTOR,
            }
        );
        assert!(matches!(
            huge.checked_div(dq::<Speed>(1.0)),
            Err(DimensionError::Overflow {
                operation: Operation::Divide,
                ..
            })
        ));
        let back = huge.checked_div(dq::<Time>(2.0)).unwrap();
        assert_eq!(back.dimension(), DimensionVector::new(i32::MAX - 1, 0, 0, 0));
        assert_eq!(back.value(), 0.5);
    }

    #[test]
    fn sqrt_of_negative_value_is_nan() {
        assert!(dq::<Area>(-1.0).sqrt().unwrap().value().is_nan());
    }

    #[test]
    fn downcast_round_trip() {
        let q = dq::<AngViscosity>(0.25);
        let back: Quantity<AngViscosity, f64> = q.downcast().unwrap();
        assert_eq!(back.value(), 0.25);
        assert_eq!(
            q.downcast::<AngStiffness>().unwrap_err(),
            DimensionError::Mismatch {
                operation: Operation::Reinterpret,
                lhs: AngViscosity::VECTOR,
                rhs: AngStiffness::VECTOR,
            }
        );
    }

    #[test]
    fn downcast_across_aliases() {
        let b = dq::<Viscosity>(3.0);
        assert_eq!(b.downcast::<Speed>().unwrap().value(), 3.0);
    }

    #[test]
    fn display_is_value_only() {
        assert_eq!(dq::<Torque>(4.5).to_string(), "4.5");
    }
}
