//! Curve parameters.

use crate::{AffinePoint, Error, Result};
use core::{fmt, ptr};
use num_bigint::BigUint;
use num_traits::Zero;
use primefield::{add, mul, reduce, square};

/// Elliptic curve in short Weierstrass form over a prime field:
///
/// ```text
/// y² = x³ + ax + b (mod p)
/// ```
///
/// together with a base point `G` generating a cyclic subgroup of prime
/// order `q`.
///
/// Curves are immutable. Points borrow the curve they belong to, so a point
/// can never outlive its curve.
#[derive(Clone)]
pub struct Curve {
    name: &'static str,
    p: BigUint,
    a: BigUint,
    b: BigUint,
    gx: BigUint,
    gy: BigUint,
    q: BigUint,
}

impl Curve {
    /// Define a custom curve.
    ///
    /// The coefficients are reduced modulo `p`. Fails with
    /// [`Error::InvalidCurve`] if `p` is not an odd integer greater than 3,
    /// if `q < 2`, or if the curve is singular (`4a³ + 27b² ≡ 0`), and with
    /// [`Error::NotOnCurve`] if the generator does not satisfy the equation.
    ///
    /// Primality of `p` and `q` and the order of `G` are not checked.
    pub fn new(
        name: &'static str,
        p: BigUint,
        a: BigUint,
        b: BigUint,
        generator: (BigUint, BigUint),
        q: BigUint,
    ) -> Result<Self> {
        if p <= BigUint::from(3u32) || !p.bit(0) || q < BigUint::from(2u32) {
            return Err(Error::InvalidCurve);
        }

        let a = reduce(&a, &p);
        let b = reduce(&b, &p);
        let discriminant = add(
            &mul(&BigUint::from(4u32), &mul(&square(&a, &p), &a, &p), &p),
            &mul(&BigUint::from(27u32), &square(&b, &p), &p),
            &p,
        );
        if discriminant.is_zero() {
            return Err(Error::InvalidCurve);
        }

        let curve = Self {
            name,
            p,
            a,
            b,
            gx: generator.0,
            gy: generator.1,
            q,
        };

        if !curve.contains(&curve.gx, &curve.gy) {
            return Err(Error::NotOnCurve);
        }

        Ok(curve)
    }

    /// Construct a curve from trusted constants.
    pub(crate) fn from_params(
        name: &'static str,
        p: BigUint,
        a: BigUint,
        b: BigUint,
        generator: (BigUint, BigUint),
        q: BigUint,
    ) -> Self {
        let curve = Self {
            name,
            p,
            a,
            b,
            gx: generator.0,
            gy: generator.1,
            q,
        };
        debug_assert!(curve.contains(&curve.gx, &curve.gy));
        curve
    }

    /// Human-readable name of this curve.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Field modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient `a` of the curve equation, in `[0, p)`.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b` of the curve equation, in `[0, p)`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Order `q` of the subgroup generated by `G`.
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Base point `G`.
    pub fn generator(&self) -> AffinePoint<'_> {
        AffinePoint::from_coordinates_unchecked(self, self.gx.clone(), self.gy.clone())
    }

    /// Point at infinity.
    pub fn identity(&self) -> AffinePoint<'_> {
        AffinePoint::identity(self)
    }

    /// Construct a point on this curve, checking the curve equation.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<AffinePoint<'_>> {
        AffinePoint::new(x, y, self)
    }

    /// Right-hand side of the curve equation: `x³ + ax + b (mod p)`.
    pub fn evaluate(&self, x: &BigUint) -> BigUint {
        let p = &self.p;
        let x3 = mul(&square(x, p), x, p);
        add(&add(&x3, &mul(&self.a, x, p), p), &self.b, p)
    }

    /// Does `(x, y)` satisfy the curve equation, with both coordinates in `[0, p)`?
    pub fn contains(&self, x: &BigUint, y: &BigUint) -> bool {
        x < &self.p && y < &self.p && square(y, &self.p) == self.evaluate(x)
    }

    /// Bit length of the field modulus.
    pub fn field_bits(&self) -> u64 {
        self.p.bits()
    }

    /// Bit length of the group order.
    pub fn order_bits(&self) -> u64 {
        self.q.bits()
    }

    /// Number of bytes needed to encode an integer modulo `q`.
    pub fn order_bytes(&self) -> usize {
        self.order_bits().div_ceil(8) as usize
    }
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve").field("name", &self.name).finish_non_exhaustive()
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Curves are equal if they are the same value or have identical parameters.
/// The name is not compared.
impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
            || (self.p == other.p
                && self.a == other.a
                && self.b == other.b
                && self.gx == other.gx
                && self.gy == other.gy
                && self.q == other.q)
    }
}

impl Eq for Curve {}
