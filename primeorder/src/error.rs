//! Error types.

use core::fmt::{self, Display};

/// Result type with the `primeorder` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Point arithmetic errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Coordinates do not satisfy the curve equation.
    NotOnCurve,

    /// Operands belong to different curves.
    CurveMismatch,

    /// Division by a value with no modular inverse.
    NotInvertible,

    /// No named curve is registered under the requested name.
    UnknownCurve,

    /// Curve parameters are malformed or describe a singular curve.
    InvalidCurve,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotOnCurve => f.write_str("point is not on the curve"),
            Error::CurveMismatch => f.write_str("points belong to different curves"),
            Error::NotInvertible => f.write_str("value is not invertible"),
            Error::UnknownCurve => f.write_str("unknown curve name"),
            Error::InvalidCurve => f.write_str("invalid curve parameters"),
        }
    }
}

impl From<primefield::Error> for Error {
    fn from(_: primefield::Error) -> Error {
        Error::NotInvertible
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
