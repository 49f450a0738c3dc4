#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

//! ## Usage
//!
//! ```
//! use ecdsa::{SigningKey, named};
//! use rand_core::OsRng; // requires 'getrandom' feature
//! use sha2::Sha256;
//!
//! // Signing
//! let curve = named::p256();
//! let signing_key = SigningKey::random(&mut OsRng, curve)?;
//! let message = b"ECDSA proves knowledge of a secret number in the context of a single message";
//! let signature = signing_key.sign::<Sha256>(message)?;
//!
//! // Verification
//! let verifying_key = signing_key.verifying_key();
//! assert!(verifying_key.verify::<Sha256>(message, &signature));
//! # Ok::<(), ecdsa::Error>(())
//! ```

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod hazmat;

mod error;
mod recovery;
mod signature;
mod signing;
mod verifying;

pub use crate::{
    error::{Error, Result},
    recovery::{recover_from_prehash, recover_public_keys},
    signature::Signature,
    signing::SigningKey,
    verifying::VerifyingKey,
};
pub use digest::{self, Digest};
pub use num_bigint::{self, BigUint};
pub use primeorder::{self, AffinePoint, Curve, named};
pub use rand_core;

use digest::core_api::BlockSizeUser;

/// Sign `message` with secret scalar `d` on `curve`, hashing with `D`.
///
/// The ephemeral scalar is derived deterministically (RFC6979), so equal
/// inputs always produce equal signatures. Returns
/// [`Error::InvalidSecretScalar`] unless `1 <= d < q`.
pub fn sign<D>(message: &[u8], d: &BigUint, curve: &Curve) -> Result<Signature>
where
    D: Digest + BlockSizeUser,
{
    SigningKey::from_scalar(d.clone(), curve)?.sign::<D>(message)
}

/// Verify `signature` over `message` under public key `public_key` on
/// `curve`, hashing with `D`.
///
/// Any signature which does not verify yields `Ok(false)`. Fails with
/// [`Error::CurveMismatch`] if `public_key` is not on `curve`, and with
/// [`Error::InvalidPublicKey`] if it is the identity.
pub fn verify<D: Digest>(
    signature: &Signature,
    message: &[u8],
    public_key: &AffinePoint<'_>,
    curve: &Curve,
) -> Result<bool> {
    let e = hazmat::bits2field(&D::digest(message), curve);
    hazmat::verify_prehashed(public_key, &e, signature, curve)
}

/// Compute the public key `Q = d·G` for secret scalar `d`.
pub fn public_key<'c>(d: &BigUint, curve: &'c Curve) -> Result<AffinePoint<'c>> {
    let key = SigningKey::from_scalar(d.clone(), curve)?;
    Ok(key.verifying_key().as_affine().clone())
}
