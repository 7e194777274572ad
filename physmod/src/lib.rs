//! Dimension-aware physical quantities, checked by the compiler.
//!
//! `physmod` is the user-facing crate in this workspace. It re-exports the full API from `physmod-core`: the
//! [`Quantity`] type, the named dimensions in [`dims`] and the SI-named aliases in [`si`].
//!
//! The core idea is: a value is always a `Quantity<D>`, where `D` is a zero-sized type holding the exponents of
//! time, mass, length and angle. Dimensional analysis happens at compile time with no runtime overhead beyond the
//! number itself.
//!
//! # What this crate solves
//!
//! - Prevents combining incompatible dimensions (you can't add kilograms to metres).
//! - Computes the dimension of products, quotients and square roots for you.
//! - Offers the same rules at run time through [`DynQuantity`] when a dimension is only known dynamically.
//!
//! # What this crate does not try to solve
//!
//! - Unit conversion within a dimension (values are plain SI magnitudes).
//! - Parsing unit strings, serialization, or physical simulation.
//!
//! # Quick start
//!
//! ```rust
//! use physmod::si::{Kilograms, MetersPerSecondSquared, Newtons};
//!
//! let m = Kilograms::new(20.0);
//! let a = MetersPerSecondSquared::new(9.81);
//! let f: Newtons = m * a;
//! assert!((f.value() - 196.2).abs() < 1e-9);
//! ```
//!
//! Use dimensions directly, with a namespace alias:
//!
//! ```rust
//! use physmod::{dims, Quantity};
//!
//! let x1 = Quantity::<dims::Length>::new(0.5);
//! let x2 = Quantity::<dims::Length>::new(0.5);
//! assert_eq!((x1 + x2).value(), 1.0);
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! Adding different dimensions:
//!
//! ```compile_fail
//! use physmod::si::{Kilograms, Meters};
//!
//! let m = Kilograms::new(1.0);
//! let x = Meters::new(1.0);
//! let _ = m + x;
//! ```
//!
//! Subtracting different dimensions:
//!
//! ```compile_fail
//! use physmod::si::{MetersPerSecond, MetersPerSecondSquared};
//!
//! let v = MetersPerSecond::new(1.0);
//! let a = MetersPerSecondSquared::new(1.0);
//! let _ = v - a;
//! ```
//!
//! Comparing different dimensions:
//!
//! ```compile_fail
//! use physmod::si::{Radians, Seconds};
//!
//! let _ = Radians::new(1.0) < Seconds::new(1.0);
//! ```
//!
//! Storing a result under the wrong dimension:
//!
//! ```compile_fail
//! use physmod::si::{Kilograms, MetersPerSecond, Newtons};
//!
//! let f: Newtons = Kilograms::new(1.0) * MetersPerSecond::new(1.0);
//! ```
//!
//! Square root of a dimension with an odd exponent:
//!
//! ```compile_fail
//! use physmod::si::Meters;
//!
//! let _ = Meters::new(4.0).sqrt();
//! ```
//!
//! Reinterpreting as a different dimension:
//!
//! ```compile_fail
//! use physmod::{dims, Quantity};
//!
//! let _: Quantity<dims::Force> = Quantity::<dims::Torque>::new(1.0).reinterpret();
//! ```
//!
//! Implicit construction from a bare number:
//!
//! ```compile_fail
//! use physmod::si::Meters;
//!
//! let _: Meters = 3.0.into();
//! ```
//!
//! Mixing precisions:
//!
//! ```compile_fail
//! use physmod::si::Meters;
//!
//! let _ = Meters::new(1.0_f32) + Meters::new(1.0_f64);
//! ```
//!
//! Comparing runtime-tagged quantities with `==` (use `checked_eq`, which reports a dimension mismatch):
//!
//! ```compile_fail
//! use physmod::si::{Kilograms, Meters};
//!
//! let _ = Meters::new(1.0).erase() == Kilograms::new(1.0).erase();
//! ```
//!
//! # Modules
//!
//! - `physmod::dims`: named dimensions (`Length`, `Force`, `AngViscosity`, …) and their exponent catalog.
//! - `physmod::si`: SI-named quantity aliases (`Meters`, `Newtons`, `KilogramsPerSecond`, …).
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `physmod-core`.
//! - `single-precision`: makes the default precision `f32`.
//!
//! # Panics and errors
//!
//! Statically tagged quantities never return errors: dimensional mistakes don't compile, and numeric edge cases
//! follow IEEE-754. [`DynQuantity`] reports mismatches and exponent overflow as [`DimensionError`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use physmod_core::*;

pub use physmod_core::dims;
pub use physmod_core::si;
