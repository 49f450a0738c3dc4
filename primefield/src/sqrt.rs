//! Modular square roots, following <https://eprint.iacr.org/2012/685.pdf>.

use crate::{mul, pow, square, sub};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Square root algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Algorithm {
    /// Atkins algorithm for `p ≡ 5 (mod 8)`.
    Atkins,

    /// Shanks algorithm for `p ≡ 3 (mod 4)`.
    Shanks,

    /// Tonelli-Shanks algorithm for any odd prime.
    TonelliShanks,
}

impl Algorithm {
    /// Determine the best algorithm to use with a particular modulus.
    fn for_modulus(p: &BigUint) -> Self {
        if mod_residue(p, 4) == 3 {
            Self::Shanks
        } else if mod_residue(p, 8) == 5 {
            Self::Atkins
        } else {
            Self::TonelliShanks
        }
    }
}

/// Is `a` a quadratic residue modulo the odd prime `p` (Euler's criterion)?
///
/// Zero is considered a square.
pub fn is_square(a: &BigUint, p: &BigUint) -> bool {
    let a = a % p;
    if a.is_zero() {
        return true;
    }

    let exp = (p - 1u32) >> 1u32;
    pow(&a, &exp, p).is_one()
}

/// Returns a square root of `a` modulo the odd prime `p`, or `None` if `a` is
/// not a quadratic residue.
///
/// Which of the two roots is returned is unspecified; callers needing a
/// particular one should select by parity.
pub fn sqrt(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let a = a % p;
    if a.is_zero() {
        return Some(a);
    }

    if !is_square(&a, p) {
        return None;
    }

    let root = match Algorithm::for_modulus(p) {
        Algorithm::Atkins => sqrt_atkins(&a, p),
        Algorithm::Shanks => sqrt_shanks(&a, p),
        Algorithm::TonelliShanks => sqrt_tonelli_shanks(&a, p)?,
    };

    (square(&root, p) == a).then_some(root)
}

/// Atkins algorithm for `p ≡ 5 (mod 8)`.
///
/// From <https://eprint.iacr.org/2012/685.pdf> (page 10, algorithm 3)
fn sqrt_atkins(a: &BigUint, p: &BigUint) -> BigUint {
    debug_assert_eq!(mod_residue(p, 8), 5);

    let mod_minus_5_over_8 = (p - 5u32) >> 3u32;
    let two = BigUint::from(2u32);

    let t = pow(&two, &mod_minus_5_over_8, p);
    let a1 = pow(a, &mod_minus_5_over_8, p);
    let b = mul(&t, &a1, p);
    let ab = mul(a, &b, p);
    let i = mul(&mul(&two, &ab, p), &b, p);
    mul(&ab, &sub(&i, &BigUint::one(), p), p)
}

/// Shanks algorithm for `p ≡ 3 (mod 4)`.
///
/// For `p ≡ 3 (mod 4)`, sqrt can be computed with only one exponentiation as
/// `a^((p + 1) / 4) (mod p)`.
fn sqrt_shanks(a: &BigUint, p: &BigUint) -> BigUint {
    debug_assert_eq!(mod_residue(p, 4), 3);

    let mod_plus_1_over_4 = (p + 1u32) >> 2u32;
    pow(a, &mod_plus_1_over_4, p)
}

/// Tonelli-Shanks algorithm works for every odd prime.
fn sqrt_tonelli_shanks(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    // p - 1 = t * 2^s with t odd
    let p_minus_1 = p - 1u32;
    let s = p_minus_1.trailing_zeros()?;
    let t = &p_minus_1 >> s;

    // Smallest quadratic non-residue
    let mut z = BigUint::from(2u32);
    while is_square(&z, p) {
        z += 1u32;
    }

    let mut m = s;
    let mut c = pow(&z, &t, p);
    let mut r = pow(a, &((&t + 1u32) >> 1u32), p);
    let mut b = pow(a, &t, p);

    while !b.is_one() {
        // Least i in (0, m) with b^(2^i) = 1
        let mut i = 0u64;
        let mut b2i = b.clone();
        while !b2i.is_one() {
            b2i = square(&b2i, p);
            i += 1;
            if i == m {
                return None;
            }
        }

        let e = BigUint::one() << (m - i - 1);
        let w = pow(&c, &e, p);
        m = i;
        c = square(&w, p);
        r = mul(&r, &w, p);
        b = mul(&b, &c, p);
    }

    Some(r)
}

/// Compute residue classes of the modulus for selecting particular square root algorithms.
fn mod_residue(p: &BigUint, n: u32) -> u32 {
    (p % n).iter_u32_digits().next().unwrap_or(0)
}
