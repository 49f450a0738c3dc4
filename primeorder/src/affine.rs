//! Affine points.

use crate::{Curve, Error, Result};
use core::{fmt, ops::Neg};
use num_bigint::BigUint;
use num_traits::Zero;
use primefield::{add, invert, mul, neg, sqrt, square, sub};

/// Coordinates of a point.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Coordinates {
    /// Identity point (a.k.a. point at infinity).
    Identity,

    /// Finite point with both coordinates in `[0, p)`.
    Affine {
        /// x-coordinate
        x: BigUint,

        /// y-coordinate
        y: BigUint,
    },
}

/// Point on a short Weierstrass curve in affine coordinates.
///
/// Every point borrows the [`Curve`] it belongs to. Finite points always
/// satisfy the curve equation.
#[derive(Clone)]
pub struct AffinePoint<'c> {
    curve: &'c Curve,
    coordinates: Coordinates,
}

impl<'c> AffinePoint<'c> {
    /// Create a point from affine coordinates.
    ///
    /// Returns [`Error::NotOnCurve`] unless `0 <= x, y < p` and
    /// `y² ≡ x³ + ax + b (mod p)`.
    pub fn new(x: BigUint, y: BigUint, curve: &'c Curve) -> Result<Self> {
        if !curve.contains(&x, &y) {
            return Err(Error::NotOnCurve);
        }

        Ok(Self::from_coordinates_unchecked(curve, x, y))
    }

    /// Point at infinity on `curve`.
    pub fn identity(curve: &'c Curve) -> Self {
        Self {
            curve,
            coordinates: Coordinates::Identity,
        }
    }

    pub(crate) fn from_coordinates_unchecked(curve: &'c Curve, x: BigUint, y: BigUint) -> Self {
        Self {
            curve,
            coordinates: Coordinates::Affine { x, y },
        }
    }

    /// Recover a finite point from its x-coordinate and the parity of `y`.
    ///
    /// Returns [`Error::NotOnCurve`] if `x >= p` or `x³ + ax + b` is not a
    /// quadratic residue.
    pub fn decompress(x: &BigUint, y_is_odd: bool, curve: &'c Curve) -> Result<Self> {
        if x >= curve.p() {
            return Err(Error::NotOnCurve);
        }

        let y = sqrt(&curve.evaluate(x), curve.p()).ok_or(Error::NotOnCurve)?;
        let y = if y.bit(0) == y_is_odd {
            y
        } else {
            neg(&y, curve.p())
        };

        // y = 0 has no odd counterpart
        if y.bit(0) != y_is_odd {
            return Err(Error::NotOnCurve);
        }

        Ok(Self::from_coordinates_unchecked(curve, x.clone(), y))
    }

    /// Curve this point belongs to.
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// Coordinates of this point.
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.coordinates == Coordinates::Identity
    }

    /// x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BigUint> {
        match &self.coordinates {
            Coordinates::Affine { x, .. } => Some(x),
            Coordinates::Identity => None,
        }
    }

    /// y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        match &self.coordinates {
            Coordinates::Affine { y, .. } => Some(y),
            Coordinates::Identity => None,
        }
    }

    /// Group addition.
    ///
    /// Returns [`Error::CurveMismatch`] if the operands belong to different
    /// curves.
    pub fn add(&self, other: &AffinePoint<'_>) -> Result<Self> {
        if self.curve != other.curve {
            return Err(Error::CurveMismatch);
        }

        let (px, py, qx, qy) = match (&self.coordinates, &other.coordinates) {
            (Coordinates::Identity, _) => {
                return Ok(self.with_coordinates(other.coordinates.clone()));
            }
            (_, Coordinates::Identity) => return Ok(self.clone()),
            (Coordinates::Affine { x: px, y: py }, Coordinates::Affine { x: qx, y: qy }) => {
                (px, py, qx, qy)
            }
        };

        if px == qx {
            return if py == qy {
                self.double()
            } else {
                Ok(Self::identity(self.curve))
            };
        }

        let p = self.curve.p();
        let lambda = mul(&sub(qy, py, p), &invert(&sub(qx, px, p), p)?, p);
        Ok(self.chord(&lambda, px, py, qx))
    }

    /// Group subtraction: `self + (-other)`.
    pub fn sub(&self, other: &AffinePoint<'_>) -> Result<Self> {
        self.add(&-other)
    }

    /// Point doubling.
    pub fn double(&self) -> Result<Self> {
        let (x, y) = match &self.coordinates {
            Coordinates::Identity => return Ok(self.clone()),
            Coordinates::Affine { x, y } => (x, y),
        };

        // vertical tangent
        if y.is_zero() {
            return Ok(Self::identity(self.curve));
        }

        let p = self.curve.p();
        let numerator = add(&mul(&BigUint::from(3u32), &square(x, p), p), self.curve.a(), p);
        let denominator = add(y, y, p);
        let lambda = mul(&numerator, &invert(&denominator, p)?, p);
        Ok(self.chord(&lambda, x, y, x))
    }

    /// Additive inverse: `(x, p - y)`, or the identity for the identity.
    pub fn negate(&self) -> Self {
        match &self.coordinates {
            Coordinates::Identity => self.clone(),
            Coordinates::Affine { x, y } => {
                Self::from_coordinates_unchecked(self.curve, x.clone(), neg(y, self.curve.p()))
            }
        }
    }

    /// Third intersection of the line with slope `lambda` through `(px, py)`,
    /// reflected over the x-axis.
    fn chord(&self, lambda: &BigUint, px: &BigUint, py: &BigUint, qx: &BigUint) -> Self {
        let p = self.curve.p();
        let rx = sub(&sub(&square(lambda, p), px, p), qx, p);
        let ry = sub(&mul(lambda, &sub(px, &rx, p), p), py, p);
        Self::from_coordinates_unchecked(self.curve, rx, ry)
    }

    fn with_coordinates(&self, coordinates: Coordinates) -> Self {
        Self {
            curve: self.curve,
            coordinates,
        }
    }
}

impl fmt::Debug for AffinePoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coordinates {
            Coordinates::Identity => write!(f, "AffinePoint({}, identity)", self.curve.name()),
            Coordinates::Affine { x, y } => {
                write!(f, "AffinePoint({}, x: 0x{:x}, y: 0x{:x})", self.curve.name(), x, y)
            }
        }
    }
}

/// Identities are equal to each other on any curve; finite points must have
/// the same coordinates and equal curves.
impl<'b> PartialEq<AffinePoint<'b>> for AffinePoint<'_> {
    fn eq(&self, other: &AffinePoint<'b>) -> bool {
        match (&self.coordinates, &other.coordinates) {
            (Coordinates::Identity, Coordinates::Identity) => true,
            (Coordinates::Affine { .. }, Coordinates::Affine { .. }) => {
                self.coordinates == other.coordinates && self.curve == other.curve
            }
            _ => false,
        }
    }
}

impl Eq for AffinePoint<'_> {}

impl<'c> Neg for AffinePoint<'c> {
    type Output = AffinePoint<'c>;

    fn neg(self) -> AffinePoint<'c> {
        self.negate()
    }
}

impl<'c> Neg for &AffinePoint<'c> {
    type Output = AffinePoint<'c>;

    fn neg(self) -> AffinePoint<'c> {
        self.negate()
    }
}
