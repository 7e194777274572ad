//! Named dimensions.
//!
//! Order of exponents: time, mass, length, angle. Compound dimensions are
//! plain aliases of [`Dim`], so names sharing an exponent vector are the
//! same type and interchangeable (e.g. [`Viscosity`] and [`Speed`]).
//!
//! ```rust
//! use physmod_core::dims::{Accel, Force, Mass};
//! use physmod_core::{Dimension, DimensionVector};
//!
//! assert_eq!(Force::VECTOR, DimensionVector::new(-2, 1, 1, 0));
//! assert_eq!(Mass::VECTOR.multiply(Accel::VECTOR), Ok(Force::VECTOR));
//! ```

use crate::dimension::{Dim, Dimension, DimensionVector};
use typenum::{N1, N2, N3, P1, P2, P3, Z0};

// ─────────────────────────────────────────────────────────────────────────────
// Base dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// Dimensionless scalar.
///
/// Meant for genuinely unit-less coefficients, not for skipping a dimension
/// declaration.
pub type Dimensionless = Dim<Z0, Z0, Z0, Z0>;

/// Time (`s`).
pub type Time = Dim<P1, Z0, Z0, Z0>;

/// Mass (`kg`).
pub type Mass = Dim<Z0, P1, Z0, Z0>;

/// Length (`m`).
pub type Length = Dim<Z0, Z0, P1, Z0>;

/// Plane angle (`rad`).
pub type Angle = Dim<Z0, Z0, Z0, P1>;

// ─────────────────────────────────────────────────────────────────────────────
// Compound dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// Area (`m^2`).
pub type Area = Dim<Z0, Z0, P2, Z0>;

/// Volume (`m^3`).
pub type Volume = Dim<Z0, Z0, P3, Z0>;

/// Density (`kg/m^3`).
pub type Density = Dim<Z0, P1, N3, Z0>;

/// Speed (`m/s`).
pub type Speed = Dim<N1, Z0, P1, Z0>;

/// Acceleration (`m/s^2`).
pub type Accel = Dim<N2, Z0, P1, Z0>;

/// Angular speed (`rad/s`).
pub type AngSpeed = Dim<N1, Z0, Z0, P1>;

/// Angular acceleration (`rad/s^2`).
pub type AngAccel = Dim<N2, Z0, Z0, P1>;

/// Force (`N = kg·m/s^2`).
pub type Force = Dim<N2, P1, P1, Z0>;

/// Linear stiffness (`N/m`).
///
/// Declared with exponents `(-2, 0, 1, 0)`, the same vector as [`Accel`].
pub type Stiffness = Dim<N2, Z0, P1, Z0>;

/// Damping coefficient (`N·s/m`).
///
/// Declared with exponents `(-1, 0, 1, 0)`, the same vector as [`Speed`].
pub type Viscosity = Dim<N1, Z0, P1, Z0>;

/// Torque (`N·m`).
pub type Torque = Dim<N2, P1, P2, Z0>;

/// Angular stiffness (`N·m/rad`).
pub type AngStiffness = Dim<N2, P1, P2, N1>;

/// Angular damping coefficient (`N·m·s/rad`).
pub type AngViscosity = Dim<N1, P1, P2, N1>;

/// Moment of inertia (`kg·m^2`).
pub type MomentOfInertia = Dim<Z0, P1, P2, Z0>;

// ─────────────────────────────────────────────────────────────────────────────
// Runtime catalog
// ─────────────────────────────────────────────────────────────────────────────

/// A catalog entry: a dimension's name and exponent vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamedDimension {
    /// Lowercase catalog name.
    pub name: &'static str,
    /// Exponent vector.
    pub vector: DimensionVector,
}

const fn entry<D: Dimension>(name: &'static str) -> NamedDimension {
    NamedDimension {
        name,
        vector: D::VECTOR,
    }
}

/// Every named dimension with its exponent vector, base dimensions first.
pub const CATALOG: [NamedDimension; 19] = [
    entry::<Dimensionless>("dimensionless"),
    entry::<Time>("time"),
    entry::<Mass>("mass"),
    entry::<Length>("length"),
    entry::<Angle>("angle"),
    entry::<Area>("area"),
    entry::<Volume>("volume"),
    entry::<Density>("density"),
    entry::<Speed>("speed"),
    entry::<Accel>("accel"),
    entry::<AngSpeed>("ang_speed"),
    entry::<AngAccel>("ang_accel"),
    entry::<Force>("force"),
    entry::<Stiffness>("stiffness"),
    entry::<Viscosity>("viscosity"),
    entry::<Torque>("torque"),
    entry::<AngStiffness>("ang_stiffness"),
    entry::<AngViscosity>("ang_viscosity"),
    entry::<MomentOfInertia>("moment_of_inertia"),
];
