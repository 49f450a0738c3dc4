#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

//! ## Usage
//!
//! See also: the documentation for the [`generate_k`] function.
//!
//! ```
//! use hex_literal::hex;
//! use rfc6979::BigUint;
//! use sha2::Sha256;
//!
//! // NIST P-256 group order
//! const NIST_P256_ORDER: [u8; 32] =
//!     hex!("FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551");
//!
//! // Secret key for RFC6979 NIST P256/SHA256 test case
//! const RFC6979_KEY: [u8; 32] =
//!     hex!("C9AFA9D845BA75166B5C215767B1D6934E50C3DB36E89B127B8A622B120F6721");
//!
//! // Expected K for RFC6979 NIST P256/SHA256 test case
//! const RFC6979_EXPECTED_K: [u8; 32] =
//!     hex!("A6E3C57DD01ABE90086538398355DD4C3B17AA873382B0F24D6129493D8AAD60");
//!
//! let k = rfc6979::generate_k::<Sha256>(
//!     b"sample",
//!     &BigUint::from_bytes_be(&RFC6979_KEY),
//!     &BigUint::from_bytes_be(&NIST_P256_ORDER),
//! )
//! .unwrap();
//! assert_eq!(k, BigUint::from_bytes_be(&RFC6979_EXPECTED_K));
//! ```

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;

pub use crate::error::{Error, Result};
pub use hmac::digest::{self, Digest};
pub use num_bigint::{self, BigUint};

use alloc::{vec, vec::Vec};
use core::fmt;
use hmac::{
    Mac, SimpleHmac,
    digest::{KeyInit, core_api::BlockSizeUser},
};
use num_traits::Zero;
use zeroize::Zeroizing;

/// Deterministically generate ephemeral scalar `k`.
///
/// Hashes `message` with `D` and runs the HMAC-DRBG of RFC6979 § 3.2 keyed on
/// the secret scalar `x`, returning the first candidate in `[1, q-1]`.
///
/// Accepts the following parameters:
/// - `message`: message to be signed.
/// - `x`: secret key, in `[1, q-1]`.
/// - `q`: field modulus (a.k.a. group order).
pub fn generate_k<D>(message: &[u8], x: &BigUint, q: &BigUint) -> Result<BigUint>
where
    D: Digest + BlockSizeUser,
{
    let h1 = D::digest(message);
    generate_k_prehashed::<D>(&h1, x, q, &[])
}

/// Deterministically generate ephemeral scalar `k` from a message digest.
///
/// Accepts the following parameters:
/// - `h1`: digest of the message to be signed. Its length need not match
///   the output size of `D`.
/// - `x`: secret key, in `[1, q-1]`.
/// - `q`: field modulus (a.k.a. group order).
/// - `data`: additional associated data, e.g. CSRNG output used as added
///   entropy (RFC6979 § 3.6). Empty for the purely deterministic variant.
pub fn generate_k_prehashed<D>(h1: &[u8], x: &BigUint, q: &BigUint, data: &[u8]) -> Result<BigUint>
where
    D: Digest + BlockSizeUser,
{
    HmacDrbg::<D>::new(x, h1, q, data)?.next_k()
}

/// Convert a bit string to an integer, keeping only its leftmost `qlen` bits
/// (RFC6979 § 2.3.2).
pub fn bits2int(b: &[u8], qlen: u64) -> BigUint {
    let blen = (b.len() as u64) * 8;
    let x = BigUint::from_bytes_be(b);

    if blen > qlen { x >> (blen - qlen) } else { x }
}

/// Encode an integer as exactly `rlen` big-endian bytes (RFC6979 § 2.3.3).
///
/// Higher-order bytes which do not fit into `rlen` are dropped; callers pass
/// values below `2^(8·rlen)`.
pub fn int2octets(x: &BigUint, rlen: usize) -> Vec<u8> {
    let bytes = x.to_bytes_be();
    let mut out = vec![0u8; rlen];

    if bytes.len() >= rlen {
        out.copy_from_slice(&bytes[bytes.len() - rlen..]);
    } else {
        out[rlen - bytes.len()..].copy_from_slice(&bytes);
    }

    out
}

/// Convert a bit string to an integer in `[0, q)`, then to `rlen` octets
/// (RFC6979 § 2.3.4).
pub fn bits2octets(b: &[u8], q: &BigUint) -> Vec<u8> {
    let z1 = bits2int(b, q.bits());
    let z2 = if &z1 >= q { z1 - q } else { z1 };
    int2octets(&z2, rlen(q))
}

/// Byte length of the group order.
fn rlen(q: &BigUint) -> usize {
    q.bits().div_ceil(8) as usize
}

/// Internal implementation of `HMAC_DRBG` as described in NIST SP800-90A,
/// instantiated the way RFC6979 § 3.2 prescribes.
///
/// Each call to [`HmacDrbg::next_k`] yields the next candidate in `[1, q-1]`
/// from the same deterministic stream.
pub struct HmacDrbg<D>
where
    D: Digest + BlockSizeUser,
{
    /// HMAC key `K`
    k: Zeroizing<Vec<u8>>,

    /// Chaining value `V`
    v: Zeroizing<Vec<u8>>,

    /// Group order
    q: BigUint,

    _digest: core::marker::PhantomData<D>,
}

impl<D> HmacDrbg<D>
where
    D: Digest + BlockSizeUser,
{
    /// Initialize `HMAC_DRBG` (RFC6979 § 3.2 steps b through g).
    pub fn new(x: &BigUint, h1: &[u8], q: &BigUint, data: &[u8]) -> Result<Self> {
        if q < &BigUint::from(2u32) {
            return Err(Error::InvalidModulus);
        }

        if x.is_zero() || x >= q {
            return Err(Error::InvalidSecretScalar);
        }

        let rlen = rlen(q);
        let x = Zeroizing::new(int2octets(x, rlen));
        let h1 = bits2octets(h1, q);
        let hlen = <D as Digest>::output_size();

        let mut drbg = Self {
            k: Zeroizing::new(vec![0x00; hlen]),
            v: Zeroizing::new(vec![0x01; hlen]),
            q: q.clone(),
            _digest: core::marker::PhantomData,
        };

        for i in [0x00, 0x01] {
            drbg.k = drbg.hmac(&[&drbg.v, &[i], &x, &h1, data])?;
            drbg.v = drbg.hmac(&[&drbg.v])?;
        }

        Ok(drbg)
    }

    /// Produce the next candidate `k` in `[1, q-1]` (RFC6979 § 3.2 step h).
    pub fn next_k(&mut self) -> Result<BigUint> {
        let qlen = self.q.bits();
        let rlen = rlen(&self.q);

        loop {
            let mut t = Zeroizing::new(Vec::with_capacity(rlen));

            while t.len() < rlen {
                self.v = self.hmac(&[&self.v])?;
                t.extend_from_slice(&self.v);
            }

            let k = bits2int(&t, qlen);

            self.k = self.hmac(&[&self.v, &[0x00]])?;
            self.v = self.hmac(&[&self.v])?;

            if !k.is_zero() && k < self.q {
                return Ok(k);
            }
        }
    }

    /// Compute `HMAC_K(parts[0] || parts[1] || ...)`.
    fn hmac(&self, parts: &[&[u8]]) -> Result<Zeroizing<Vec<u8>>> {
        let mut mac = <SimpleHmac<D> as KeyInit>::new_from_slice(&self.k).map_err(|_| Error::Hmac)?;

        for part in parts {
            mac.update(part);
        }

        Ok(Zeroizing::new(mac.finalize().into_bytes().to_vec()))
    }
}

impl<D> fmt::Debug for HmacDrbg<D>
where
    D: Digest + BlockSizeUser,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacDrbg").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use num_traits::One;
    use sha2::Sha256;

    /// Group order from RFC6979 § A.1.
    const Q: [u8; 21] = hex!("04000000000000000000020108A2E0CC0D99F8A5EF");

    /// Secret key from RFC6979 § A.1.
    const X: [u8; 21] = hex!("009A4D6792295A7F730FC3F2B49CBC0F62E862272F");

    #[test]
    fn bits2int_truncates() {
        let b = hex!("ff00");
        assert_eq!(bits2int(&b, 16), BigUint::from(0xff00u32));
        assert_eq!(bits2int(&b, 12), BigUint::from(0xff0u32));
        assert_eq!(bits2int(&b, 32), BigUint::from(0xff00u32));
    }

    #[test]
    fn int2octets_pads() {
        assert_eq!(int2octets(&BigUint::from(0x0102u32), 4), hex!("00000102"));
        assert_eq!(int2octets(&BigUint::zero(), 2), hex!("0000"));
        assert_eq!(
            int2octets(&BigUint::from_bytes_be(&X), 21),
            hex!("009A4D6792295A7F730FC3F2B49CBC0F62E862272F")
        );
    }

    /// RFC6979 § A.1.2
    #[test]
    fn bits2octets_reduces() {
        let q = BigUint::from_bytes_be(&Q);
        let h1 = Sha256::digest(b"sample");

        assert_eq!(
            bits2int(&h1, q.bits()),
            BigUint::from_bytes_be(&hex!("05795EDF0D54DB760F156F0EB4A7A0FE38D418E813"))
        );
        assert_eq!(
            bits2octets(&h1, &q),
            hex!("01795EDF0D54DB760F156D0DAC04C0322B3A204224")
        );
    }

    #[test]
    fn rejects_out_of_range_secret() {
        let q = BigUint::from_bytes_be(&Q);

        for x in [BigUint::zero(), q.clone(), &q + 1u32] {
            assert_eq!(
                generate_k::<Sha256>(b"sample", &x, &q),
                Err(Error::InvalidSecretScalar)
            );
        }
    }

    #[test]
    fn rejects_tiny_modulus() {
        assert_eq!(
            generate_k::<Sha256>(b"sample", &BigUint::one(), &BigUint::one()),
            Err(Error::InvalidModulus)
        );
    }

    #[test]
    fn stream_yields_distinct_candidates() {
        let q = BigUint::from_bytes_be(&Q);
        let x = BigUint::from_bytes_be(&X);
        let h1 = Sha256::digest(b"sample");

        let mut drbg = HmacDrbg::<Sha256>::new(&x, &h1, &q, &[]).unwrap();
        let first = drbg.next_k().unwrap();
        let second = drbg.next_k().unwrap();

        assert_eq!(first, generate_k::<Sha256>(b"sample", &x, &q).unwrap());
        assert_ne!(first, second);
        assert!(!second.is_zero() && second < q);
    }

    #[test]
    fn debug_is_redacted() {
        let q = BigUint::from_bytes_be(&Q);
        let x = BigUint::from_bytes_be(&X);
        let drbg = HmacDrbg::<Sha256>::new(&x, b"", &q, &[]).unwrap();
        assert_eq!(alloc::format!("{:?}", drbg), "HmacDrbg { .. }");
    }
}
