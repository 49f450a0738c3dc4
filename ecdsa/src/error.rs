//! Error types.

use core::fmt;

/// Result type with the `ecdsa` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// ECDSA errors.
///
/// Verification of a well-formed but invalid signature is not an error:
/// it yields `false`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Secret scalar is not in `[1, q-1]`.
    InvalidSecretScalar,

    /// Public key is the identity or is not a point on the curve.
    InvalidPublicKey,

    /// Key and curve parameters do not match.
    CurveMismatch,

    /// Division by a value with no modular inverse.
    NotInvertible,

    /// The ephemeral scalar produced `r = 0` or `s = 0` and must be replaced.
    NonceRegenerationRequired,

    /// No usable ephemeral scalar was found within the retry bound.
    SigningFailed,

    /// No public key could be recovered from the signature.
    RecoveryFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSecretScalar => f.write_str("secret scalar out of range"),
            Error::InvalidPublicKey => f.write_str("invalid public key"),
            Error::CurveMismatch => f.write_str("key belongs to a different curve"),
            Error::NotInvertible => f.write_str("value is not invertible"),
            Error::NonceRegenerationRequired => f.write_str("ephemeral scalar must be regenerated"),
            Error::SigningFailed => f.write_str("signing failed"),
            Error::RecoveryFailed => f.write_str("public key recovery failed"),
        }
    }
}

impl From<primeorder::Error> for Error {
    fn from(err: primeorder::Error) -> Error {
        match err {
            primeorder::Error::NotOnCurve => Error::InvalidPublicKey,
            primeorder::Error::CurveMismatch => Error::CurveMismatch,
            // curve lookup and construction errors do not arise from signing
            _ => Error::NotInvertible,
        }
    }
}

impl From<primefield::Error> for Error {
    fn from(_: primefield::Error) -> Error {
        Error::NotInvertible
    }
}

impl From<rfc6979::Error> for Error {
    fn from(err: rfc6979::Error) -> Error {
        match err {
            rfc6979::Error::InvalidSecretScalar => Error::InvalidSecretScalar,
            _ => Error::SigningFailed,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
