//! Error types for runtime-checked dimension operations.
//!
//! Statically tagged [`Quantity`](crate::Quantity) values never produce these
//! errors: the same mistakes are rejected by the compiler. They surface from
//! [`DimensionVector::sqrt`](crate::DimensionVector::sqrt) and from
//! [`DynQuantity`](crate::DynQuantity).

use crate::dimension::DimensionVector;
use core::fmt;

/// Result type for runtime-checked dimension operations.
pub type DimensionResult<T> = Result<T, DimensionError>;

/// Operation that requires compatible dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `a + b` or `a += b`.
    Add,
    /// `a - b` or `a -= b`.
    Subtract,
    /// Ordering or equality comparison.
    Compare,
    /// Re-tagging a value as another dimension.
    Reinterpret,
    /// `a * b`; adds exponents.
    Multiply,
    /// `a / b`; subtracts exponents.
    Divide,
}

impl Operation {
    /// Lowercase name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Compare => "compare",
            Operation::Reinterpret => "reinterpret",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for dimensionally invalid operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    /// The operands of an operation that needs equal dimensions differ.
    #[error("dimension mismatch: cannot {operation} [{lhs}] and [{rhs}]")]
    Mismatch {
        /// Rejected operation.
        operation: Operation,
        /// Dimension of the left operand (or the source, for reinterpret).
        lhs: DimensionVector,
        /// Dimension of the right operand (or the target, for reinterpret).
        rhs: DimensionVector,
    },

    /// Square root of a dimension with an odd exponent.
    #[error("cannot take the square root of [{dimension}]: exponents must all be even")]
    OddExponent {
        /// The offending dimension.
        dimension: DimensionVector,
    },

    /// An exponent of the result does not fit in an `i32`.
    #[error("exponent overflow: cannot {operation} [{lhs}] and [{rhs}]")]
    Overflow {
        /// [`Operation::Multiply`] or [`Operation::Divide`].
        operation: Operation,
        /// Dimension of the left operand.
        lhs: DimensionVector,
        /// Dimension of the right operand.
        rhs: DimensionVector,
    },
}

impl DimensionError {
    /// Builds a [`DimensionError::Mismatch`].
    pub const fn mismatch(operation: Operation, lhs: DimensionVector, rhs: DimensionVector) -> Self {
        DimensionError::Mismatch { operation, lhs, rhs }
    }
}
