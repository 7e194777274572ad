//! Dimension vectors and the [`Dimension`] trait.
//!
//! A physical dimension is a vector of integer exponents over a fixed basis
//! (time, mass, length, angle). It exists in two forms:
//!
//! - [`Dim<T, M, L, A>`]: a zero-sized type whose exponents are `typenum` integers. This is what [`Quantity`]
//!   is tagged with, so dimensional mistakes are type errors.
//! - [`DimensionVector`]: the same exponents as plain `i32`s, available as [`Dimension::VECTOR`] and used by the
//!   runtime-checked [`DynQuantity`].
//!
//! [`Quantity`]: crate::Quantity
//! [`DynQuantity`]: crate::DynQuantity

use core::fmt;
use core::marker::PhantomData;
use typenum::Integer;

/// Number of basis dimensions in a [`DimensionVector`].
pub const BASIS_LEN: usize = 4;

/// The fundamental dimensions, in canonical vector order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseDimension {
    /// Time, conventionally in seconds.
    Time,
    /// Mass, conventionally in kilograms.
    Mass,
    /// Length, conventionally in metres.
    Length,
    /// Plane angle, conventionally in radians.
    Angle,
}

impl BaseDimension {
    /// Every basis dimension, in vector order.
    pub const ALL: [BaseDimension; BASIS_LEN] = [
        BaseDimension::Time,
        BaseDimension::Mass,
        BaseDimension::Length,
        BaseDimension::Angle,
    ];

    /// Position of this basis dimension inside a [`DimensionVector`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Conventional SI symbol (`s`, `kg`, `m`, `rad`).
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Time => "s",
            BaseDimension::Mass => "kg",
            BaseDimension::Length => "m",
            BaseDimension::Angle => "rad",
        }
    }

    /// Lowercase human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            BaseDimension::Time => "time",
            BaseDimension::Mass => "mass",
            BaseDimension::Length => "length",
            BaseDimension::Angle => "angle",
        }
    }
}

impl fmt::Display for BaseDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exponents of each [`BaseDimension`] in a compound dimension.
///
/// Two vectors are *compatible* iff they are equal component-wise, across
/// every basis dimension including the zero ones.
///
/// ```rust
/// use physmod_core::{BaseDimension, DimensionVector};
///
/// let force = DimensionVector::new(-2, 1, 1, 0);
/// assert_eq!(force.exponent(BaseDimension::Mass), 1);
/// assert_eq!(force.to_string(), "s^-2·kg·m");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct DimensionVector([i32; BASIS_LEN]);

impl DimensionVector {
    /// The all-zero vector.
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0);

    /// Builds a vector from exponents in canonical order.
    #[inline]
    pub const fn new(time: i32, mass: i32, length: i32, angle: i32) -> Self {
        Self([time, mass, length, angle])
    }

    /// Builds a vector from an exponent array in canonical order.
    #[inline]
    pub const fn from_exponents(exponents: [i32; BASIS_LEN]) -> Self {
        Self(exponents)
    }

    /// All exponents in canonical order.
    #[inline]
    pub const fn exponents(self) -> [i32; BASIS_LEN] {
        self.0
    }

    /// Exponent of a single basis dimension.
    #[inline]
    pub const fn exponent(self, base: BaseDimension) -> i32 {
        self.0[base.index()]
    }

    /// Time exponent.
    #[inline]
    pub const fn time(self) -> i32 {
        self.0[0]
    }

    /// Mass exponent.
    #[inline]
    pub const fn mass(self) -> i32 {
        self.0[1]
    }

    /// Length exponent.
    #[inline]
    pub const fn length(self) -> i32 {
        self.0[2]
    }

    /// Angle exponent.
    #[inline]
    pub const fn angle(self) -> i32 {
        self.0[3]
    }

    /// Exact component-wise equality.
    ///
    /// This is the only gate for addition, subtraction, comparison and
    /// reinterpretation between quantities.
    pub const fn compatible(self, other: Self) -> bool {
        let mut i = 0;
        while i < BASIS_LEN {
            if self.0[i] != other.0[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// `true` when every exponent is zero.
    #[inline]
    pub const fn is_dimensionless(self) -> bool {
        self.compatible(Self::DIMENSIONLESS)
    }
}

impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for base in BaseDimension::ALL {
            let exp = self.exponent(base);
            if exp == 0 {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            f.write_str(base.symbol())?;
            if exp != 1 {
                write!(f, "^{}", exp)?;
            }
        }
        Ok(())
    }
}

/// Marker trait for **dimensions** usable as a [`Quantity`](crate::Quantity) tag.
///
/// It is implemented for every [`Dim<T, M, L, A>`] whose parameters are
/// `typenum` integers; the associated types expose the exponents to
/// type-level arithmetic and [`VECTOR`](Dimension::VECTOR) mirrors them at
/// run time.
pub trait Dimension: 'static {
    /// Exponent of time.
    type Time: Integer;
    /// Exponent of mass.
    type Mass: Integer;
    /// Exponent of length.
    type Length: Integer;
    /// Exponent of angle.
    type Angle: Integer;

    /// Runtime mirror of the exponents.
    const VECTOR: DimensionVector;
}

/// Type-level dimension vector: exponents of time, mass, length and angle.
///
/// Named dimensions in [`dims`](crate::dims) are aliases of this type, so two
/// names with the same exponents are the *same* type.
///
/// ```rust
/// use physmod_core::{Dim, Dimension, DimensionVector};
/// use typenum::{N2, P1, Z0};
///
/// type Force = Dim<N2, P1, P1, Z0>;
/// assert_eq!(Force::VECTOR, DimensionVector::new(-2, 1, 1, 0));
/// ```
pub struct Dim<T, M, L, A>(PhantomData<(T, M, L, A)>);

impl<T: Integer, M: Integer, L: Integer, A: Integer> Dimension for Dim<T, M, L, A>
where
    T: 'static,
    M: 'static,
    L: 'static,
    A: 'static,
{
    type Time = T;
    type Mass = M;
    type Length = L;
    type Angle = A;

    const VECTOR: DimensionVector = DimensionVector::new(T::I32, M::I32, L::I32, A::I32);
}

impl<T, M, L, A> Clone for Dim<T, M, L, A> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, M, L, A> Copy for Dim<T, M, L, A> {}

impl<T, M, L, A> Default for Dim<T, M, L, A> {
    #[inline]
    fn default() -> Self {
        Dim(PhantomData)
    }
}

impl<T, M, L, A> PartialEq for Dim<T, M, L, A> {
    #[inline]
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T, M, L, A> Eq for Dim<T, M, L, A> {}

impl<T: Integer, M: Integer, L: Integer, A: Integer> fmt::Debug for Dim<T, M, L, A>
where
    Self: Dimension,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dim({})", <Self as Dimension>::VECTOR)
    }
}

/// `true` iff `A` and `B` have identical exponent vectors.
///
/// ```rust
/// use physmod_core::{compatible, dims};
///
/// assert!(compatible::<dims::Viscosity, dims::Speed>());
/// assert!(!compatible::<dims::Length, dims::Mass>());
/// ```
#[inline]
pub const fn compatible<A: Dimension, B: Dimension>() -> bool {
    A::VECTOR.compatible(B::VECTOR)
}
