//! Scalar multiplication.

use crate::{AffinePoint, Curve, Result};
use num_bigint::{BigInt, BigUint, Sign};

impl<'c> AffinePoint<'c> {
    /// Compute `k·self` by binary double-and-add, most significant bit first.
    ///
    /// `k` is not reduced modulo the group order. Returns the identity for
    /// `k = 0`.
    pub fn mul(&self, k: &BigUint) -> Result<Self> {
        let mut acc = AffinePoint::identity(self.curve());

        for i in (0..k.bits()).rev() {
            acc = acc.double()?;

            if k.bit(i) {
                acc = acc.add(self)?;
            }
        }

        Ok(acc)
    }

    /// Compute `k·self` for a signed scalar: negative `k` multiplies `-self`
    /// by `|k|`.
    pub fn mul_signed(&self, k: &BigInt) -> Result<Self> {
        match k.sign() {
            Sign::Minus => self.negate().mul(k.magnitude()),
            _ => self.mul(k.magnitude()),
        }
    }

    /// Compute `a·x + b·y` with a single shared doubling chain (Shamir's trick).
    pub fn lincomb(x: (&Self, &BigUint), y: (&AffinePoint<'_>, &BigUint)) -> Result<Self> {
        let (p, a) = x;
        let (q, b) = y;
        let both = p.add(q)?;

        let mut acc = AffinePoint::identity(p.curve());

        for i in (0..a.bits().max(b.bits())).rev() {
            acc = acc.double()?;

            acc = match (a.bit(i), b.bit(i)) {
                (true, true) => acc.add(&both)?,
                (true, false) => acc.add(p)?,
                (false, true) => acc.add(q)?,
                (false, false) => acc,
            };
        }

        Ok(acc)
    }
}

impl Curve {
    /// Compute `k·G`.
    pub fn mul_by_generator(&self, k: &BigUint) -> Result<AffinePoint<'_>> {
        self.generator().mul(k)
    }
}
