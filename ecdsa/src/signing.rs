//! ECDSA signing keys.

use crate::{Error, Result, Signature, VerifyingKey, hazmat};
use alloc::vec;
use core::fmt;
use digest::{Digest, core_api::BlockSizeUser};
use num_bigint::BigUint;
use num_traits::Zero;
use primeorder::Curve;
use rand_core::CryptoRngCore;
use rfc6979::HmacDrbg;
use zeroize::Zeroizing;

/// Upper bound on ephemeral scalars tried by a single signing operation.
const MAX_SIGN_ATTEMPTS: usize = 64;

/// ECDSA secret key used for signing: a scalar `d` in `[1, q-1]` together
/// with its public key `Q = d·G`.
///
/// Signatures are deterministic (RFC6979) unless produced by
/// [`SigningKey::sign_with_rng`].
#[derive(Clone)]
pub struct SigningKey<'c> {
    /// Secret scalar `d`
    secret_scalar: BigUint,

    /// Public key `Q = d·G`
    verifying_key: VerifyingKey<'c>,
}

impl<'c> SigningKey<'c> {
    /// Initialize signing key from a secret scalar.
    ///
    /// Returns [`Error::InvalidSecretScalar`] unless `1 <= d < q`.
    pub fn from_scalar(d: BigUint, curve: &'c Curve) -> Result<Self> {
        if d.is_zero() || &d >= curve.q() {
            return Err(Error::InvalidSecretScalar);
        }

        let verifying_key = VerifyingKey::from_affine(curve.mul_by_generator(&d)?)?;

        Ok(Self {
            secret_scalar: d,
            verifying_key,
        })
    }

    /// Generate a cryptographically random [`SigningKey`].
    pub fn random(rng: &mut impl CryptoRngCore, curve: &'c Curve) -> Result<Self> {
        let bits = curve.order_bits();
        let mut bytes = Zeroizing::new(vec![0u8; curve.order_bytes()]);

        // Rejection sampling over `bitlen(q)`-bit candidates
        loop {
            rng.fill_bytes(&mut bytes);

            let excess = (bytes.len() as u64) * 8 - bits;
            bytes[0] &= 0xff >> excess;

            let d = BigUint::from_bytes_be(&bytes);
            if !d.is_zero() && &d < curve.q() {
                return Self::from_scalar(d, curve);
            }
        }
    }

    /// Borrow the secret scalar `d`.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    pub fn as_scalar(&self) -> &BigUint {
        &self.secret_scalar
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey<'c> {
        &self.verifying_key
    }

    /// Curve this key belongs to.
    pub fn curve(&self) -> &'c Curve {
        self.verifying_key.curve()
    }

    /// Sign `message`, hashed with `D`, using a deterministic ephemeral
    /// scalar (RFC6979).
    pub fn sign<D>(&self, message: &[u8]) -> Result<Signature>
    where
        D: Digest + BlockSizeUser,
    {
        self.sign_prehash::<D>(&D::digest(message))
    }

    /// Sign a message digest using a deterministic ephemeral scalar derived
    /// with the HMAC-`D` DRBG (RFC6979).
    pub fn sign_prehash<D>(&self, prehash: &[u8]) -> Result<Signature>
    where
        D: Digest + BlockSizeUser,
    {
        self.sign_prehash_with_data::<D>(prehash, &[])
    }

    /// Sign `message`, hashed with `D`, feeding `bitlen(q)` bits of entropy
    /// from `rng` into the RFC6979 DRBG as additional data (RFC6979 § 3.6).
    ///
    /// Signatures from this method are not reproducible.
    pub fn sign_with_rng<D>(
        &self,
        rng: &mut impl CryptoRngCore,
        message: &[u8],
    ) -> Result<Signature>
    where
        D: Digest + BlockSizeUser,
    {
        let mut entropy = Zeroizing::new(vec![0u8; self.curve().order_bytes()]);
        rng.fill_bytes(&mut entropy);
        self.sign_prehash_with_data::<D>(&D::digest(message), &entropy)
    }

    fn sign_prehash_with_data<D>(&self, prehash: &[u8], data: &[u8]) -> Result<Signature>
    where
        D: Digest + BlockSizeUser,
    {
        let curve = self.curve();
        let e = hazmat::bits2field(prehash, curve);
        let mut drbg = HmacDrbg::<D>::new(&self.secret_scalar, prehash, curve.q(), data)?;

        for _ in 0..MAX_SIGN_ATTEMPTS {
            let k = drbg.next_k()?;

            match hazmat::sign_prehashed(&self.secret_scalar, &k, &e, curve) {
                Err(Error::NonceRegenerationRequired) => continue,
                result => return result,
            }
        }

        Err(Error::SigningFailed)
    }
}

impl fmt::Debug for SigningKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

/// Constant-time comparison of the secret scalars.
impl PartialEq for SigningKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;

        if self.verifying_key != other.verifying_key {
            return false;
        }

        let len = self.curve().order_bytes();
        let a = Zeroizing::new(rfc6979::int2octets(&self.secret_scalar, len));
        let b = Zeroizing::new(rfc6979::int2octets(&other.secret_scalar, len));
        a.ct_eq(&b).into()
    }
}

impl Eq for SigningKey<'_> {}

impl<'c> From<&SigningKey<'c>> for VerifyingKey<'c> {
    fn from(signing_key: &SigningKey<'c>) -> VerifyingKey<'c> {
        signing_key.verifying_key.clone()
    }
}
