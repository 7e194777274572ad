//! Core type system for dimension-aware physical quantities.
//!
//! `physmod-core` attaches a physical dimension to a number at the type level:
//!
//! - A *dimension* is a vector of integer exponents over time, mass, length and angle, encoded as the zero-sized
//!   type [`Dim<T, M, L, A>`] (see [`dims`] for the named catalog).
//! - A value tagged with a dimension is a [`Quantity<D, P>`], backed by a number of precision `P`
//!   ([`DefaultPrecision`] unless stated).
//! - `+`, `-` and comparisons only compile for equal dimensions; `*`, `/` and [`sqrt`] compute the result dimension
//!   through [`DimMul`], [`DimDiv`] and [`DimSqrt`].
//!
//! Most users should depend on `physmod` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time rejection of dimensionally invalid arithmetic (a mass plus a length does not type-check).
//! - Automatic dimensions for products, quotients and square roots (mass × acceleration is a force).
//! - Zero runtime overhead for the tags (phantom types only).
//! - A runtime fallback, [`DynQuantity`], with the same rules reported as [`DimensionError`]s.
//!
//! # What this crate does not try to solve
//!
//! - Conversion between scales of one dimension (feet vs. metres); values are assumed SI.
//! - Parsing units from strings.
//! - Mixed-precision arithmetic.
//!
//! # Quick start
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
//! Dimensions can also be named directly:
//!
//! ```rust
//! use physmod_core::{dims, sqrt, Quantity};
//!
//! let area = Quantity::<dims::Area>::new(9.0);
//! let side: Quantity<dims::Length> = sqrt(area);
//! assert_eq!(side.value(), 3.0);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build without `std`; square roots are then provided by `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `single-precision`: makes [`DefaultPrecision`] `f32` instead of `f64`.
//!
//! # Panics and errors
//!
//! Statically tagged quantities have no error paths: invalid combinations do not compile. Arithmetic follows
//! IEEE-754 (NaN and infinities propagate, `sqrt` of a negative value is NaN). [`DynQuantity`] returns
//! [`DimensionResult`] from every operation that needs matching dimensions, and from `checked_mul`/`checked_div`,
//! which fail if an exponent overflows `i32`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod arithmetic;
mod dimension;
mod dynamic;
mod error;
mod precision;
mod quantity;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use arithmetic::{divide, multiply, sqrt_dim, DimDiv, DimMul, DimSqrt, Product, Quotient, Root};
pub use dimension::{compatible, BaseDimension, Dim, Dimension, DimensionVector, BASIS_LEN};
pub use dynamic::DynQuantity;
pub use error::{DimensionError, DimensionResult, Operation};
pub use precision::{DefaultPrecision, Real};
pub use quantity::{sqrt, Quantity};

// ─────────────────────────────────────────────────────────────────────────────
// Catalogs
// ─────────────────────────────────────────────────────────────────────────────

pub mod dims;
pub mod si;
