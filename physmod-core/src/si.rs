//! Quantity names in SI units.
//!
//! These are conveniences only: each alias is exactly
//! `Quantity<dims::X, P>`, so the two spellings are interchangeable. The
//! precision defaults to [`DefaultPrecision`].
//!
//! ```rust
//! use physmod_core::si::{Kilograms, MetersPerSecondSquared, Newtons};
//!
//! let m = Kilograms::new(20.0);
//! let a = MetersPerSecondSquared::new(9.81);
//! let f: Newtons = m * a;
//! assert!((f.value() - 196.2).abs() < 1e-9);
//! ```
//!
//! [`NewtonSecondsPerMeter`] and [`KilogramsPerSecond`] name the same
//! dimension, [`dims::Viscosity`].

use crate::dims;
use crate::precision::DefaultPrecision;
use crate::Quantity;

/// Dimensionless quantity.
pub type Dimensionless<P = DefaultPrecision> = Quantity<dims::Dimensionless, P>;
/// Mass in kilograms.
pub type Kilograms<P = DefaultPrecision> = Quantity<dims::Mass, P>;
/// Length in metres.
pub type Meters<P = DefaultPrecision> = Quantity<dims::Length, P>;
/// Force in newtons.
pub type Newtons<P = DefaultPrecision> = Quantity<dims::Force, P>;
/// Angle in radians.
pub type Radians<P = DefaultPrecision> = Quantity<dims::Angle, P>;
/// Time in seconds.
pub type Seconds<P = DefaultPrecision> = Quantity<dims::Time, P>;

/// Speed in metres per second.
pub type MetersPerSecond<P = DefaultPrecision> = Quantity<dims::Speed, P>;
/// Angular speed in radians per second.
pub type RadiansPerSecond<P = DefaultPrecision> = Quantity<dims::AngSpeed, P>;
/// Acceleration in metres per second squared.
pub type MetersPerSecondSquared<P = DefaultPrecision> = Quantity<dims::Accel, P>;
/// Torque in newton-metres.
pub type NewtonMeters<P = DefaultPrecision> = Quantity<dims::Torque, P>;
/// Linear stiffness in newtons per metre.
pub type NewtonsPerMeter<P = DefaultPrecision> = Quantity<dims::Stiffness, P>;
/// Angular stiffness in newton-metres per radian.
pub type NewtonMetersPerRadian<P = DefaultPrecision> = Quantity<dims::AngStiffness, P>;

/// Damping coefficient in newton-seconds per metre.
pub type NewtonSecondsPerMeter<P = DefaultPrecision> = Quantity<dims::Viscosity, P>;
/// Damping coefficient in kilograms per second.
pub type KilogramsPerSecond<P = DefaultPrecision> = Quantity<dims::Viscosity, P>;
/// Angular damping coefficient in newton-metre-seconds per radian.
pub type NewtonMeterSecondsPerRadian<P = DefaultPrecision> = Quantity<dims::AngViscosity, P>;

/// Moment of inertia in kilogram square metres.
pub type KilogramMetersSquared<P = DefaultPrecision> = Quantity<dims::MomentOfInertia, P>;

/// One kilogram.
pub const KILOGRAM: Kilograms = Kilograms::new(1.0);
/// One metre.
pub const METER: Meters = Meters::new(1.0);
/// One second.
pub const SECOND: Seconds = Seconds::new(1.0);
/// One radian.
pub const RADIAN: Radians = Radians::new(1.0);
/// One newton.
pub const NEWTON: Newtons = Newtons::new(1.0);
