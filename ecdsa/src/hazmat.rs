//! Low-level ECDSA primitives.
//!
//! # ⚠️ Warning: Hazmat!
//!
//! YOU PROBABLY DON'T WANT TO USE THESE!
//!
//! These primitives are easy-to-misuse low-level interfaces. In particular
//! [`sign_prehashed`] takes the ephemeral scalar `k` from the caller: reusing
//! `k` for two different messages reveals the secret key.

use crate::{Error, Result, Signature};
use num_bigint::BigUint;
use num_traits::Zero;
use primefield::{add, invert, mul};
use primeorder::{AffinePoint, Curve};
use subtle::ConstantTimeEq;

/// Convert a message digest into the integer `e` used by signing and
/// verification.
///
/// Keeps the leftmost `bitlen(q)` bits of the digest, as RFC6979's
/// `bits2int`. The result is not reduced modulo `q`.
pub fn bits2field(digest: &[u8], curve: &Curve) -> BigUint {
    rfc6979::bits2int(digest, curve.order_bits())
}

/// Sign the prehashed message integer `e` with secret scalar `d` and
/// ephemeral scalar `k`.
///
/// Returns [`Error::NonceRegenerationRequired`] if `k` is not in `[1, q-1]`
/// or yields `r = 0` or `s = 0`; the caller must retry with a fresh `k`.
pub fn sign_prehashed(d: &BigUint, k: &BigUint, e: &BigUint, curve: &Curve) -> Result<Signature> {
    let q = curve.q();

    if d.is_zero() || d >= q {
        return Err(Error::InvalidSecretScalar);
    }

    if k.is_zero() || k >= q {
        return Err(Error::NonceRegenerationRequired);
    }

    // Compute scalar inversion of 𝑘
    let k_inv = invert(k, q)?;

    // Compute 𝑹 = 𝑘×𝑮
    let big_r = curve.mul_by_generator(k)?;

    // Lift x-coordinate of 𝑹 (element of base field) into a scalar
    let r = big_r.x().ok_or(Error::NonceRegenerationRequired)? % q;
    if r.is_zero() {
        return Err(Error::NonceRegenerationRequired);
    }

    // Compute 𝒔 as a signature over 𝒓 and 𝒆
    let s = mul(&k_inv, &add(e, &mul(&r, d, q), q), q);
    if s.is_zero() {
        return Err(Error::NonceRegenerationRequired);
    }

    Ok(Signature::from_scalars(r, s))
}

/// Verify the prehashed message integer `e` against `signature` under public
/// key `public_key`.
///
/// Returns `Ok(false)` for any signature which does not verify, including
/// components outside `[1, q-1]` and an `s` with no inverse modulo `q`.
/// Fails with [`Error::CurveMismatch`] if the key is not on `curve`, and
/// with [`Error::InvalidPublicKey`] if the key is the identity.
pub fn verify_prehashed(
    public_key: &AffinePoint<'_>,
    e: &BigUint,
    signature: &Signature,
    curve: &Curve,
) -> Result<bool> {
    if public_key.curve() != curve {
        return Err(Error::CurveMismatch);
    }

    if public_key.is_identity() {
        return Err(Error::InvalidPublicKey);
    }

    let q = curve.q();
    let (r, s) = (signature.r(), signature.s());

    if r.is_zero() || r >= q || s.is_zero() || s >= q {
        return Ok(false);
    }

    // Only reachable on custom curves with a composite order
    let s_inv = match invert(s, q) {
        Ok(s_inv) => s_inv,
        Err(_) => return Ok(false),
    };
    let u1 = mul(e, &s_inv, q);
    let u2 = mul(r, &s_inv, q);

    let big_r = AffinePoint::lincomb((&curve.generator(), &u1), (public_key, &u2))?;

    let x = match big_r.x() {
        Some(x) => x % q,
        None => return Ok(false),
    };

    let len = curve.order_bytes();
    let expected = rfc6979::int2octets(r, len);
    let actual = rfc6979::int2octets(&x, len);
    Ok(expected.ct_eq(&actual).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use primeorder::named::{p256, p384};

    #[test]
    fn bits2field_truncates_long_digests() {
        // 64-byte digest on a 256-bit order
        let digest = [0xffu8; 64];
        let e = bits2field(&digest, p256());
        assert_eq!(e.bits(), 256);
        assert!(&e >= p256().q());
    }

    #[test]
    fn bits2field_keeps_short_digests() {
        let digest = [0x01u8; 20];
        assert_eq!(bits2field(&digest, p384()), BigUint::from_bytes_be(&digest));
    }

    #[test]
    fn zero_s_requires_new_nonce() {
        let curve = p256();
        let d = BigUint::from(1u32);
        let k = BigUint::from(2u32);

        // pick e so that e + r·d ≡ 0 (mod q)
        let r = curve.mul_by_generator(&k).unwrap().x().unwrap() % curve.q();
        let e = curve.q() - (&r * &d) % curve.q();

        assert_eq!(
            sign_prehashed(&d, &k, &e, curve),
            Err(Error::NonceRegenerationRequired)
        );
    }

    #[test]
    fn out_of_range_nonce() {
        let curve = p256();
        let d = BigUint::from(1u32);
        let e = BigUint::from(7u32);

        for k in [BigUint::zero(), curve.q().clone()] {
            assert_eq!(
                sign_prehashed(&d, &k, &e, curve),
                Err(Error::NonceRegenerationRequired)
            );
        }
    }

    #[test]
    fn sign_verify_prehashed() {
        let curve = p384();
        let d = BigUint::from(0x1234_5678u32);
        let k = BigUint::from(0x9abc_def0u32);
        let e = BigUint::from(42u32);
        let public_key = curve.mul_by_generator(&d).unwrap();

        let signature = sign_prehashed(&d, &k, &e, curve).unwrap();
        assert_eq!(verify_prehashed(&public_key, &e, &signature, curve), Ok(true));

        let e = BigUint::from(43u32);
        assert_eq!(verify_prehashed(&public_key, &e, &signature, curve), Ok(false));
    }

    #[test]
    fn composite_order_rejects_non_invertible_s() {
        // `y² = x³ + 2x + 3` over `F_97` with a deliberately composite `q`
        let curve = Curve::new(
            "composite",
            97u32.into(),
            2u32.into(),
            3u32.into(),
            (3u32.into(), 6u32.into()),
            6u32.into(),
        )
        .unwrap();
        let public_key = curve.generator();
        let e = BigUint::from(1u32);

        for s in [2u32, 3, 4] {
            let signature = Signature::from_scalars(1u32.into(), s.into());
            assert_eq!(verify_prehashed(&public_key, &e, &signature, &curve), Ok(false));
        }
    }
}
