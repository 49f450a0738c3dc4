//! ECDSA verifying keys.

use crate::{Error, Result, Signature, hazmat};
use digest::Digest;
use num_bigint::BigUint;
use primeorder::{AffinePoint, Curve};

/// ECDSA public key used for verifying signatures: a non-identity point `Q`
/// on its curve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifyingKey<'c> {
    point: AffinePoint<'c>,
}

impl<'c> VerifyingKey<'c> {
    /// Initialize from an affine point.
    ///
    /// Returns [`Error::InvalidPublicKey`] for the identity.
    pub fn from_affine(point: AffinePoint<'c>) -> Result<Self> {
        if point.is_identity() {
            return Err(Error::InvalidPublicKey);
        }

        Ok(Self { point })
    }

    /// Initialize from affine coordinates, checking the curve equation.
    pub fn from_coordinates(x: BigUint, y: BigUint, curve: &'c Curve) -> Result<Self> {
        Self::from_affine(curve.point(x, y)?)
    }

    /// Borrow the inner [`AffinePoint`] for this public key.
    pub fn as_affine(&self) -> &AffinePoint<'c> {
        &self.point
    }

    /// Curve this key belongs to.
    pub fn curve(&self) -> &'c Curve {
        self.point.curve()
    }

    /// Verify `signature` over `message`, hashed with `D`.
    pub fn verify<D: Digest>(&self, message: &[u8], signature: &Signature) -> bool {
        self.verify_prehash(&D::digest(message), signature)
    }

    /// Verify `signature` over a message digest.
    pub fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> bool {
        let curve = self.curve();
        let e = hazmat::bits2field(prehash, curve);

        // key is on `curve` and not the identity
        hazmat::verify_prehashed(&self.point, &e, signature, curve).unwrap_or(false)
    }
}

impl<'c> From<VerifyingKey<'c>> for AffinePoint<'c> {
    fn from(key: VerifyingKey<'c>) -> AffinePoint<'c> {
        key.point
    }
}

impl<'c> TryFrom<AffinePoint<'c>> for VerifyingKey<'c> {
    type Error = Error;

    fn try_from(point: AffinePoint<'c>) -> Result<Self> {
        Self::from_affine(point)
    }
}
