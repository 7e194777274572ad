//! Quantity type and its implementations.

use crate::arithmetic::{DimDiv, DimMul, DimSqrt, Product, Quotient, Root};
use crate::dimension::{Dimension, DimensionVector};
use crate::precision::{DefaultPrecision, Real};
use core::cmp::Ordering;
use core::fmt;
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;
use typenum::Same;

/// A value tagged with a dimension.
///
/// `Quantity<D, P>` wraps a value of precision `P` together with phantom
/// type information about its dimension `D`. Operators are only defined
/// where they make dimensional sense, so mistakes are compile errors and the
/// tag costs nothing at run time.
///
/// - `+`, `-`, `+=`, `-=` and comparisons require the same dimension.
/// - `*` and `/` accept any two dimensions and compute the result dimension.
/// - [`sqrt`](Quantity::sqrt) requires every exponent to be even.
///
/// All operands must share the same precision.
///
/// # Examples
///
/// ```rust
/// use physmod_core::{dims, Quantity};
///
/// let m = Quantity::<dims::Mass>::new(20.0);
/// let a = Quantity::<dims::Accel>::new(9.81);
/// let f: Quantity<dims::Force> = m * a;
/// assert!((f.value() - 196.2).abs() < 1e-9);
/// ```
pub struct Quantity<D: Dimension, P = DefaultPrecision> {
    value: P,
    dimension: PhantomData<D>,
}

impl<D: Dimension, P> Quantity<D, P> {
    /// Creates a new quantity with the given value.
    ///
    /// There is no implicit conversion from a bare number: every
    /// construction names its dimension.
    ///
    /// ```rust
    /// use physmod_core::si::Meters;
    /// let d = Meters::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: P) -> Self {
        Self {
            value,
            dimension: PhantomData,
        }
    }

    /// Same as [`Quantity::new`].
    #[inline]
    pub const fn from_value(value: P) -> Self {
        Self::new(value)
    }

    /// The dimension's exponent vector.
    #[inline]
    pub const fn dimension(&self) -> DimensionVector {
        D::VECTOR
    }

    /// Re-tags this value as another name for the same dimension.
    ///
    /// Compiles only when `E` has the same exponent vector as `D`.
    ///
    /// ```rust
    /// use physmod_core::{dims, Quantity};
    ///
    /// let b = Quantity::<dims::Viscosity>::new(0.3);
    /// let v: Quantity<dims::Speed> = b.reinterpret();
    /// assert_eq!(v.value(), 0.3);
    /// ```
    #[inline]
    pub fn reinterpret<E>(self) -> Quantity<E, P>
    where
        E: Dimension + Same<D>,
    {
        Quantity::new(self.value)
    }
}

impl<D: Dimension, P: Copy> Quantity<D, P> {
    /// Returns the raw numeric value, stripped of its dimension.
    ///
    /// ```rust
    /// use physmod_core::si::Seconds;
    /// let t = Seconds::new(2.5);
    /// assert_eq!(t.value(), 2.5);
    /// ```
    #[inline]
    pub fn value(&self) -> P {
        self.value
    }
}

impl<D: Dimension, P: Real> Quantity<D, P> {
    /// Square root; the result dimension halves every exponent.
    ///
    /// Only available when all exponents are even. A negative value yields
    /// NaN, as the underlying float does.
    ///
    /// ```rust
    /// use physmod_core::{dims, Quantity};
    ///
    /// let area = Quantity::<dims::Area>::new(25.0);
    /// let side: Quantity<dims::Length> = area.sqrt();
    /// assert_eq!(side.value(), 5.0);
    /// ```
    #[inline]
    pub fn sqrt(self) -> Quantity<Root<D>, P>
    where
        D: DimSqrt,
    {
        Quantity::new(self.value.sqrt())
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    /// Returns the smaller of two quantities.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.value < self.value {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two quantities.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.value > self.value {
            other
        } else {
            self
        }
    }

    /// `true` if the value is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.value.is_nan()
    }
}

/// Square root of a quantity; see [`Quantity::sqrt`].
#[inline]
pub fn sqrt<D, P>(quantity: Quantity<D, P>) -> Quantity<Root<D>, P>
where
    D: DimSqrt,
    P: Real,
{
    quantity.sqrt()
}

// ─────────────────────────────────────────────────────────────────────────────
// Value semantics
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, P: Clone> Clone for Quantity<D, P> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<D: Dimension, P: Copy> Copy for Quantity<D, P> {}

impl<D: Dimension, P: Default> Default for Quantity<D, P> {
    /// A zero-valued quantity of the same dimension.
    #[inline]
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<D: Dimension, P: fmt::Debug> fmt::Debug for Quantity<D, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("dimension", &D::VECTOR)
            .finish()
    }
}

/// Formats the value only; the dimension is a static property.
impl<D: Dimension, P: fmt::Display> fmt::Display for Quantity<D, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison: same dimension only
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, P: PartialEq> PartialEq for Quantity<D, P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<D: Dimension, P: Eq> Eq for Quantity<D, P> {}

impl<D: Dimension, P: PartialOrd> PartialOrd for Quantity<D, P> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<D: Dimension, P: Ord> Ord for Quantity<D, P> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, P: Add<Output = P>> Add for Quantity<D, P> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<D: Dimension, P: AddAssign> AddAssign for Quantity<D, P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<D: Dimension, P: Sub<Output = P>> Sub for Quantity<D, P> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<D: Dimension, P: SubAssign> SubAssign for Quantity<D, P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<D: Dimension, P: Neg<Output = P>> Neg for Quantity<D, P> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<D1, D2, P> Mul<Quantity<D2, P>> for Quantity<D1, P>
where
    D1: DimMul<D2>,
    D2: Dimension,
    P: Mul<Output = P>,
{
    type Output = Quantity<Product<D1, D2>, P>;
    #[inline]
    fn mul(self, rhs: Quantity<D2, P>) -> Self::Output {
        Quantity::new(self.value * rhs.value)
    }
}

impl<D1, D2, P> Div<Quantity<D2, P>> for Quantity<D1, P>
where
    D1: DimDiv<D2>,
    D2: Dimension,
    P: Div<Output = P>,
{
    type Output = Quantity<Quotient<D1, D2>, P>;
    #[inline]
    fn div(self, rhs: Quantity<D2, P>) -> Self::Output {
        Quantity::new(self.value / rhs.value)
    }
}

impl<D: Dimension, P: Add<Output = P> + Default> Sum for Quantity<D, P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, q| acc + q)
    }
}

/// Scaling by a bare number of the quantity's own precision keeps the dimension.
macro_rules! impl_scalar_ops {
    ($($p:ty),+ $(,)?) => {
        $(
            impl<D: Dimension> Mul<$p> for Quantity<D, $p> {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: $p) -> Self {
                    Self::new(self.value * rhs)
                }
            }

            impl<D: Dimension> Mul<Quantity<D, $p>> for $p {
                type Output = Quantity<D, $p>;
                #[inline]
                fn mul(self, rhs: Quantity<D, $p>) -> Self::Output {
                    rhs * self
                }
            }

            impl<D: Dimension> Div<$p> for Quantity<D, $p> {
                type Output = Self;
                #[inline]
                fn div(self, rhs: $p) -> Self {
                    Self::new(self.value / rhs)
                }
            }

            impl<D: Dimension> MulAssign<$p> for Quantity<D, $p> {
                #[inline]
                fn mul_assign(&mut self, rhs: $p) {
                    self.value *= rhs;
                }
            }

            impl<D: Dimension> DivAssign<$p> for Quantity<D, $p> {
                #[inline]
                fn div_assign(&mut self, rhs: $p) {
                    self.value /= rhs;
                }
            }
        )+
    };
}

impl_scalar_ops!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dims::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    type Meters = Quantity<Length, f64>;
    type Kilograms = Quantity<Mass, f64>;
    type Q<D> = Quantity<D, f64>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn new_and_value_round_trip() {
        assert_eq!(Meters::new(42.0).value(), 42.0);
        assert_eq!(Meters::from_value(-1.5).value(), -1.5);
    }

    #[test]
    fn default_is_zero_of_same_dimension() {
        let d = Q::<Dimensionless>::default();
        assert_eq!(d, Q::<Dimensionless>::new(0.0));
        assert_eq!(d.dimension(), DimensionVector::DIMENSIONLESS);
    }

    #[test]
    fn const_construction() {
        const G: Q<Accel> = Q::new(9.81);
        assert_eq!(G.value(), 9.81);
    }

    #[test]
    fn dimension_reports_tag() {
        assert_eq!(Kilograms::new(1.0).dimension(), Mass::VECTOR);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Same-dimension operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn operator_add_and_sub() {
        let a = Meters::new(0.5);
        let b = Meters::new(0.5);
        assert_eq!((a + b).value(), 1.0);
        assert_eq!((a - b).value(), 0.0);
    }

    #[test]
    fn operator_add_assign_and_sub_assign() {
        let mut q = Meters::new(5.0);
        q += Meters::new(3.0);
        assert_eq!(q.value(), 8.0);
        q -= Meters::new(10.0);
        assert_eq!(q.value(), -2.0);
    }

    #[test]
    fn operator_neg() {
        assert_eq!((-Meters::new(5.0)).value(), -5.0);
    }

    #[test]
    fn comparisons() {
        let a = Kilograms::new(1.0);
        let b = Kilograms::new(2.0);
        assert!(a < b);
        assert!(a <= b);
        assert!(b > a);
        assert!(b >= a);
        assert!(a != b);
        assert!(a == Kilograms::new(1.0));
    }

    #[test]
    fn nan_is_unordered() {
        let nan = Meters::new(f64::NAN);
        assert!(nan.is_nan());
        assert_eq!(nan.partial_cmp(&Meters::new(1.0)), None);
        assert_ne!(nan, Meters::new(f64::NAN));
    }

    #[test]
    fn sum_of_iterator() {
        let total: Meters = [1.0, 2.0, 3.5].iter().map(|&v| Meters::new(v)).sum();
        assert_eq!(total.value(), 6.5);
    }

    #[test]
    fn min_max_abs() {
        let a = Meters::new(-3.0);
        let b = Meters::new(2.0);
        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
        assert_eq!(a.abs().value(), 3.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Dimension-changing operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn mass_times_accel_is_force() {
        let m = Kilograms::new(20.0);
        let a = Q::<Accel>::new(9.81);
        let f: Q<Force> = m * a;
        assert_eq!(f.dimension(), Force::VECTOR);
        assert_abs_diff_eq!(f.value(), 196.2, epsilon = 1e-9);
    }

    #[test]
    fn force_over_mass_is_accel() {
        let f = Q::<Force>::new(196.2);
        let m = Kilograms::new(20.0);
        let a: Q<Accel> = f / m;
        assert_abs_diff_eq!(a.value(), 9.81, epsilon = 1e-12);
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let v = Meters::new(1.0) / Q::<Time>::new(0.0);
        assert!(v.value().is_infinite());
        assert_eq!(v.dimension(), Speed::VECTOR);
    }

    #[test]
    fn sqrt_of_area() {
        let s = sqrt(Q::<Area>::new(25.0));
        assert_eq!(s.dimension(), Length::VECTOR);
        assert_eq!(s.value(), 5.0);
    }

    #[test]
    fn sqrt_of_negative_is_nan() {
        let s = Q::<Area>::new(-4.0).sqrt();
        assert!(s.is_nan());
    }

    #[test]
    fn scalar_scaling_keeps_dimension() {
        let q = Meters::new(5.0);
        assert_eq!((q * 3.0).value(), 15.0);
        assert_eq!((3.0 * q).value(), 15.0);
        assert_eq!((q / 2.0).value(), 2.5);
        let mut r = q;
        r *= 4.0;
        r /= 8.0;
        assert_eq!(r.value(), 2.5);
    }

    #[test]
    fn reinterpret_between_aliases() {
        let b = Q::<Viscosity>::new(0.7);
        let s: Q<Speed> = b.reinterpret();
        assert_eq!(s.value(), 0.7);
        let k = Q::<Stiffness>::new(120.0);
        let back: Q<Accel> = k.reinterpret();
        assert_eq!(back, Q::<Stiffness>::new(120.0));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Other precisions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn single_precision_quantities() {
        let a = Quantity::<Length, f32>::new(1.5);
        let b = Quantity::<Length, f32>::new(2.5);
        assert_eq!((a * b).value(), 3.75_f32);
        assert_eq!((a * b).sqrt().value(), (3.75_f32).sqrt());
    }

    #[test]
    fn integer_precision_quantities() {
        let a = Quantity::<Time, i64>::new(3);
        let b = Quantity::<Time, i64>::default();
        assert_eq!((a + b).value(), 3);
        assert_eq!((a * a).dimension(), DimensionVector::new(2, 0, 0, 0));
        assert_eq!(a.cmp(&b), Ordering::Greater);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Formatting
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_is_value_only() {
        assert_eq!(format!("{}", Q::<Force>::new(196.2)), "196.2");
        assert_eq!(format!("{:.2}", Meters::new(1.0 / 3.0)), "0.33");
        assert_eq!(format!("{}", Quantity::<Time, i32>::new(-7)), "-7");
    }

    #[test]
    fn debug_includes_dimension() {
        assert_eq!(
            format!("{:?}", Meters::new(2.0)),
            "Quantity { value: 2.0, dimension: DimensionVector([0, 0, 1, 0]) }"
        );
    }

    proptest! {
        #[test]
        fn prop_add_is_value_sum(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            let sum = Meters::new(a) + Meters::new(b);
            prop_assert_eq!(sum.dimension(), Length::VECTOR);
            prop_assert_eq!(sum.value(), a + b);
            prop_assert_eq!((Meters::new(a) - Meters::new(b)).value(), a - b);
        }

        #[test]
        fn prop_mul_div_values_and_dimensions(a in -1e3..1e3f64, b in 1e-3..1e3f64) {
            let p = Q::<Torque>::new(a) * Q::<AngSpeed>::new(b);
            prop_assert_eq!(Ok(p.dimension()), Torque::VECTOR.multiply(AngSpeed::VECTOR));
            prop_assert_eq!(p.value(), a * b);

            let q = Q::<Density>::new(a) / Q::<Volume>::new(b);
            prop_assert_eq!(Ok(q.dimension()), Density::VECTOR.divide(Volume::VECTOR));
            prop_assert_eq!(q.value(), a / b);
        }

        #[test]
        fn prop_sqrt_of_square_restores_dimension(v in 0.0..1e6f64) {
            let x = Q::<Force>::new(v);
            let r = (x * x).sqrt();
            prop_assert_eq!(r.dimension(), Force::VECTOR);
            prop_assert!((r.value() - v).abs() <= 1e-9 * v.max(1.0));
        }
    }
}
