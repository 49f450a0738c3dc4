#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

//! ## Conventions
//!
//! All functions take operands of any magnitude and return values normalized
//! into `[0, p)`. The modulus `p` is expected to be an odd prime: inversion
//! and square roots rely on it, and a zero modulus panics.
//!
//! These routines are variable-time.

#[cfg(feature = "std")]
extern crate std;

mod error;
mod sqrt;

pub use crate::{
    error::{Error, Result},
    sqrt::{is_square, sqrt},
};
pub use num_bigint::{self, BigInt, BigUint};

use num_bigint::Sign;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Reduce `a` into `[0, p)`.
#[inline]
pub fn reduce(a: &BigUint, p: &BigUint) -> BigUint {
    a % p
}

/// Reduce a signed integer into `[0, p)`.
pub fn reduce_signed(a: &BigInt, p: &BigUint) -> BigUint {
    let (sign, magnitude) = a.mod_floor(&BigInt::from_biguint(Sign::Plus, p.clone())).into_parts();
    debug_assert_ne!(sign, Sign::Minus);
    magnitude
}

/// Compute `a + b (mod p)`.
#[inline]
pub fn add(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a + b) % p
}

/// Compute `a - b (mod p)`.
pub fn sub(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    let b = b % p;
    (a % p + p - b) % p
}

/// Compute `-a (mod p)`.
pub fn neg(a: &BigUint, p: &BigUint) -> BigUint {
    let a = a % p;

    if a.is_zero() { a } else { p - a }
}

/// Compute `a * b (mod p)`.
#[inline]
pub fn mul(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a * b) % p
}

/// Compute `a^2 (mod p)`.
#[inline]
pub fn square(a: &BigUint, p: &BigUint) -> BigUint {
    mul(a, a, p)
}

/// Compute `a^e (mod p)`.
#[inline]
pub fn pow(a: &BigUint, e: &BigUint, p: &BigUint) -> BigUint {
    a.modpow(e, p)
}

/// Compute the multiplicative inverse of `a` modulo `p` using the extended
/// Euclidean algorithm.
///
/// Returns [`Error::NotInvertible`] if `gcd(a, p) != 1`, which for a prime
/// modulus happens exactly when `a ≡ 0 (mod p)`.
pub fn invert(a: &BigUint, p: &BigUint) -> Result<BigUint> {
    if p <= &BigUint::one() {
        return Err(Error::NotInvertible);
    }

    let a = a % p;
    if a.is_zero() {
        return Err(Error::NotInvertible);
    }

    let (mut r0, mut r1) = (
        BigInt::from_biguint(Sign::Plus, p.clone()),
        BigInt::from_biguint(Sign::Plus, a),
    );
    let (mut t0, mut t1) = (BigInt::zero(), BigInt::one());

    while !r1.is_zero() {
        let quotient = &r0 / &r1;

        let r2 = &r0 - &quotient * &r1;
        r0 = core::mem::replace(&mut r1, r2);

        let t2 = &t0 - &quotient * &t1;
        t0 = core::mem::replace(&mut t1, t2);
    }

    // r0 = gcd(a, p)
    if !r0.is_one() {
        return Err(Error::NotInvertible);
    }

    Ok(reduce_signed(&t0, p))
}
