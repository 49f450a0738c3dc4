//! Error types.

use core::fmt;

/// Nonce derivation errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The secret scalar `x` is not in `[1, q-1]`.
    InvalidSecretScalar,

    /// The group order `q` is less than 2.
    InvalidModulus,

    /// The HMAC could not be keyed.
    Hmac,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSecretScalar => f.write_str("secret scalar out of range"),
            Error::InvalidModulus => f.write_str("group order must be at least 2"),
            Error::Hmac => f.write_str("HMAC initialization failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
