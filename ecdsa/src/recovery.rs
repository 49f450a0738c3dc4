//! Public key recovery.
//!
//! A signature `(r, s)` over a known message determines the signer's public
//! key up to a handful of candidates: `r` is the x-coordinate of `R = k·G`
//! reduced modulo `q`, so `R` is one of the points with x-coordinate
//! `r + j·q < p` and either parity of `y`. For each such `R`,
//!
//! ```text
//! Q = r⁻¹·(s·R - e·G)
//! ```

use crate::{Error, Result, Signature, VerifyingKey, hazmat};
use alloc::vec::Vec;
use digest::Digest;
use num_bigint::BigUint;
use num_traits::Zero;
use primefield::{invert, mul, neg};
use primeorder::{AffinePoint, Curve};

/// Recover every public key under which `signature` is a valid signature
/// over `message`, hashed with `D`.
///
/// Returns [`Error::RecoveryFailed`] if there is none.
pub fn recover_public_keys<'c, D: Digest>(
    signature: &Signature,
    message: &[u8],
    curve: &'c Curve,
) -> Result<Vec<VerifyingKey<'c>>> {
    recover_from_prehash(signature, &D::digest(message), curve)
}

/// Recover every public key under which `signature` is a valid signature
/// over the message digest `prehash`.
///
/// Returns [`Error::RecoveryFailed`] if there is none.
pub fn recover_from_prehash<'c>(
    signature: &Signature,
    prehash: &[u8],
    curve: &'c Curve,
) -> Result<Vec<VerifyingKey<'c>>> {
    let q = curve.q();
    let (r, s) = (signature.r(), signature.s());

    if r.is_zero() || r >= q || s.is_zero() || s >= q {
        return Err(Error::RecoveryFailed);
    }

    let e = hazmat::bits2field(prehash, curve);
    let r_inv = invert(r, q)?;
    let u1 = neg(&mul(&e, &r_inv, q), q);
    let u2 = mul(s, &r_inv, q);

    let g = curve.generator();
    let mut keys = Vec::new();
    let mut x: BigUint = r.clone();

    while &x < curve.p() {
        for y_is_odd in [false, true] {
            let big_r = match AffinePoint::decompress(&x, y_is_odd, curve) {
                Ok(point) => point,
                Err(_) => continue,
            };

            let candidate = AffinePoint::lincomb((&g, &u1), (&big_r, &u2))?;
            let Ok(key) = VerifyingKey::from_affine(candidate) else {
                continue;
            };

            if !keys.contains(&key) && key.verify_prehash(prehash, signature) {
                keys.push(key);
            }
        }

        x += q;
    }

    if keys.is_empty() {
        return Err(Error::RecoveryFailed);
    }

    Ok(keys)
}

impl<'c> VerifyingKey<'c> {
    /// Recover the public keys which verify `signature` over `message`,
    /// hashed with `D`.
    ///
    /// See [`recover_public_keys`].
    pub fn recover_from_msg<D: Digest>(
        message: &[u8],
        signature: &Signature,
        curve: &'c Curve,
    ) -> Result<Vec<Self>> {
        recover_public_keys::<D>(signature, message, curve)
    }
}
