//! ECDSA signatures.

use num_bigint::BigUint;
use primeorder::Curve;

/// ECDSA signature: the pair `(r, s)`.
///
/// Both components of a valid signature lie in `[1, q-1]`. Construction does
/// not check this, so that out-of-range values received from elsewhere reach
/// verification and are rejected there.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a signature from its `r` and `s` components.
    pub fn from_scalars(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Get the `r` component of this signature.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Get the `s` component of this signature.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Split the signature into its `r` and `s` components.
    pub fn split_scalars(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }

    /// Normalize signature into "low S" form as described in
    /// [BIP 0062: Dealing with Malleability][1].
    ///
    /// Returns `Some` with `s` replaced by `q - s` if `s > q/2`, or `None` if
    /// the signature is already normalized. Both forms verify.
    ///
    /// [1]: https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki
    pub fn normalize_s(&self, curve: &Curve) -> Option<Self> {
        let q = curve.q();

        if self.s > (q >> 1u32) && &self.s < q {
            Some(Self {
                r: self.r.clone(),
                s: q - &self.s,
            })
        } else {
            None
        }
    }
}

impl From<(BigUint, BigUint)> for Signature {
    fn from((r, s): (BigUint, BigUint)) -> Signature {
        Self::from_scalars(r, s)
    }
}
