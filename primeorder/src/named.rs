//! Registry of named curves.
//!
//! Each curve is built on first use and lives for the rest of the process;
//! repeated lookups return the same `&'static Curve`.

use crate::{Curve, Error, Result};
use alloc::boxed::Box;
use hex_literal::hex;
use num_bigint::BigUint;
use once_cell::race::OnceBox;

/// Define a lazily-initialized named curve accessor.
macro_rules! named_curve {
    (
        $(#[$attr:meta])*
        $fn_name:ident,
        name: $name:expr,
        p: $p:literal,
        a: $a:literal,
        b: $b:literal,
        gx: $gx:literal,
        gy: $gy:literal,
        q: $q:literal $(,)?
    ) => {
        $(#[$attr])*
        pub fn $fn_name() -> &'static Curve {
            static CURVE: OnceBox<Curve> = OnceBox::new();

            CURVE.get_or_init(|| {
                Box::new(Curve::from_params(
                    $name,
                    BigUint::from_bytes_be(&hex!($p)),
                    BigUint::from_bytes_be(&hex!($a)),
                    BigUint::from_bytes_be(&hex!($b)),
                    (
                        BigUint::from_bytes_be(&hex!($gx)),
                        BigUint::from_bytes_be(&hex!($gy)),
                    ),
                    BigUint::from_bytes_be(&hex!($q)),
                ))
            })
        }
    };
}

/// Names (and aliases) recognized by [`Curve::from_name`].
const ALIASES: &[(&str, fn() -> &'static Curve)] = &[
    ("P192", p192),
    ("P-192", p192),
    ("secp192r1", p192),
    ("prime192v1", p192),
    ("P224", p224),
    ("P-224", p224),
    ("secp224r1", p224),
    ("P256", p256),
    ("P-256", p256),
    ("secp256r1", p256),
    ("prime256v1", p256),
    ("P384", p384),
    ("P-384", p384),
    ("secp384r1", p384),
    ("P521", p521),
    ("P-521", p521),
    ("secp521r1", p521),
    ("secp256k1", secp256k1),
    ("brainpoolP256r1", brainpool_p256r1),
    ("brainpoolP384r1", brainpool_p384r1),
];

/// Every named curve, in order of increasing field size within each family.
pub fn all() -> [&'static Curve; 8] {
    [
        p192(),
        p224(),
        p256(),
        p384(),
        p521(),
        secp256k1(),
        brainpool_p256r1(),
        brainpool_p384r1(),
    ]
}

impl Curve {
    /// Look up a named curve. Matching is ASCII case-insensitive and accepts
    /// the common SEC/ANSI aliases (e.g. `secp256r1`, `prime256v1`).
    pub fn from_name(name: &str) -> Result<&'static Curve> {
        ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map(|(_, curve)| curve())
            .ok_or(Error::UnknownCurve)
    }
}

named_curve! {
    /// NIST P-192 elliptic curve (a.k.a. secp192r1, prime192v1).
    ///
    /// Its equation is `y² = x³ - 3x + b` over a ~192-bit prime field, as
    /// specified in FIPS 186-4 § D.1.2.1.
    p192,
    name: "P192",
    p: "ffffffff ffffffff ffffffff fffffffe ffffffff ffffffff",
    a: "ffffffff ffffffff ffffffff fffffffe ffffffff fffffffc",
    b: "64210519 e59c80e7 0fa7e9ab 72243049 feb8deec c146b9b1",
    gx: "188da80e b03090f6 7cbf20eb 43a18800 f4ff0afd 82ff1012",
    gy: "07192b95 ffc8da78 631011ed 6b24cdd5 73f977a1 1e794811",
    q: "ffffffff ffffffff ffffffff 99def836 146bc9b1 b4d22831",
}

named_curve! {
    /// NIST P-224 elliptic curve (a.k.a. secp224r1).
    ///
    /// Its equation is `y² = x³ - 3x + b` over a ~224-bit prime field, as
    /// specified in FIPS 186-4 § D.1.2.2. Its field modulus is `≡ 1 (mod 4)`, so
    /// square roots go through Tonelli-Shanks.
    p224,
    name: "P224",
    p: "ffffffff ffffffff ffffffff ffffffff 00000000 00000000 00000001",
    a: "ffffffff ffffffff ffffffff fffffffe ffffffff ffffffff fffffffe",
    b: "b4050a85 0c04b3ab f5413256 5044b0b7 d7bfd8ba 270b3943 2355ffb4",
    gx: "b70e0cbd 6bb4bf7f 321390b9 4a03c1d3 56c21122 343280d6 115c1d21",
    gy: "bd376388 b5f723fb 4c22dfe6 cd4375a0 5a074764 44d58199 85007e34",
    q: "ffffffff ffffffff ffffffff ffff16a2 e0b8f03e 13dd2945 5c5c2a3d",
}

named_curve! {
    /// NIST P-256 elliptic curve (a.k.a. secp256r1, prime256v1).
    ///
    /// This curve is specified in FIPS 186-4 § D.1.2.3 and is widely used in
    /// protocols like TLS and the associated X.509 PKI.
    ///
    /// Its equation is `y² = x³ - 3x + b` over a ~256-bit prime field where `b`
    /// is the "verifiably random" constant:
    ///
    /// ```text
    /// b = 41058363725152142129326129780047268409114441015993725554835256314039467401291
    /// ```
    p256,
    name: "P256",
    p: "ffffffff 00000001 00000000 00000000 00000000 ffffffff ffffffff ffffffff",
    a: "ffffffff 00000001 00000000 00000000 00000000 ffffffff ffffffff fffffffc",
    b: "5ac635d8 aa3a93e7 b3ebbd55 769886bc 651d06b0 cc53b0f6 3bce3c3e 27d2604b",
    gx: "6b17d1f2 e12c4247 f8bce6e5 63a440f2 77037d81 2deb33a0 f4a13945 d898c296",
    gy: "4fe342e2 fe1a7f9b 8ee7eb4a 7c0f9e16 2bce3357 6b315ece cbb64068 37bf51f5",
    q: "ffffffff 00000000 ffffffff ffffffff bce6faad a7179e84 f3b9cac2 fc632551",
}

named_curve! {
    /// NIST P-384 elliptic curve (a.k.a. secp384r1).
    ///
    /// Its equation is `y² = x³ - 3x + b` over a ~384-bit prime field, as
    /// specified in FIPS 186-4 § D.1.2.4.
    p384,
    name: "P384",
    p: "ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff fffffffe
        ffffffff 00000000 00000000 ffffffff",
    a: "ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff fffffffe
        ffffffff 00000000 00000000 fffffffc",
    b: "b3312fa7 e23ee7e4 988e056b e3f82d19 181d9c6e fe814112 0314088f 5013875a
        c656398d 8a2ed19d 2a85c8ed d3ec2aef",
    gx: "aa87ca22 be8b0537 8eb1c71e f320ad74 6e1d3b62 8ba79b98 59f741e0 82542a38
         5502f25d bf55296c 3a545e38 72760ab7",
    gy: "3617de4a 96262c6f 5d9e98bf 9292dc29 f8f41dbd 289a147c e9da3113 b5f0b8c0
         0a60b1ce 1d7e819d 7a431d7c 90ea0e5f",
    q: "ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff c7634d81 f4372ddf
        581a0db2 48b0a77a ecec196a ccc52973",
}

named_curve! {
    /// NIST P-521 elliptic curve (a.k.a. secp521r1).
    ///
    /// Its equation is `y² = x³ - 3x + b` over the Mersenne prime field
    /// `p = 2^521 - 1`, as specified in FIPS 186-4 § D.1.2.5.
    p521,
    name: "P521",
    p: "01ff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff
        ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff
        ffffffff",
    a: "01ff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff
        ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff
        fffffffc",
    b: "0051 953eb961 8e1c9a1f 929a21a0 b68540ee a2da725b 99b315f3 b8b48991
        8ef109e1 56193951 ec7e937b 1652c0bd 3bb1bf07 3573df88 3d2c34f1 ef451fd4
        6b503f00",
    gx: "00c6 858e06b7 0404e9cd 9e3ecb66 2395b442 9c648139 053fb521 f828af60
         6b4d3dba a14b5e77 efe75928 fe1dc127 a2ffa8de 3348b3c1 856a429b f97e7e31
         c2e5bd66",
    gy: "0118 39296a78 9a3bc004 5c8a5fb4 2c7d1bd9 98f54449 579b4468 17afbd17
         273e662c 97ee7299 5ef42640 c550b901 3fad0761 353c7086 a272c240 88be9476
         9fd16650",
    q: "01ff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff
        fffffffa 51868783 bf2f966b 7fcc0148 f709a5d0 3bb5c9b8 899c47ae bb6fb71e
        91386409",
}

named_curve! {
    /// secp256k1 elliptic curve, as specified in SEC 2 § 2.4.1.
    ///
    /// Its equation is `y² = x³ + 7` over a ~256-bit prime field.
    secp256k1,
    name: "secp256k1",
    p: "ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff fffffffe fffffc2f",
    a: "00000000 00000000 00000000 00000000 00000000 00000000 00000000 00000000",
    b: "00000000 00000000 00000000 00000000 00000000 00000000 00000000 00000007",
    gx: "79be667e f9dcbbac 55a06295 ce870b07 029bfcdb 2dce28d9 59f2815b 16f81798",
    gy: "483ada77 26a3c465 5da4fbfc 0e1108a8 fd17b448 a6855419 9c47d08f fb10d4b8",
    q: "ffffffff ffffffff ffffffff fffffffe baaedce6 af48a03b bfd25e8c d0364141",
}

named_curve! {
    /// brainpoolP256r1 elliptic curve, as specified in RFC 5639 § 3.4.
    brainpool_p256r1,
    name: "brainpoolP256r1",
    p: "a9fb57db a1eea9bc 3e660a90 9d838d72 6e3bf623 d5262028 2013481d 1f6e5377",
    a: "7d5a0975 fc2c3057 eef67530 417affe7 fb8055c1 26dc5c6c e94a4b44 f330b5d9",
    b: "26dc5c6c e94a4b44 f330b5d9 bbd77cbf 95841629 5cf7e1ce 6bccdc18 ff8c07b6",
    gx: "8bd2aeb9 cb7e57cb 2c4b482f fc81b7af b9de27e1 e3bd23c2 3a4453bd 9ace3262",
    gy: "547ef835 c3dac4fd 97f8461a 14611dc9 c2774513 2ded8e54 5c1d54c7 2f046997",
    q: "a9fb57db a1eea9bc 3e660a90 9d838d71 8c397aa3 b561a6f7 901e0e82 974856a7",
}

named_curve! {
    /// brainpoolP384r1 elliptic curve, as specified in RFC 5639 § 3.6.
    brainpool_p384r1,
    name: "brainpoolP384r1",
    p: "8cb91e82 a3386d28 0f5d6f7e 50e641df 152f7109 ed5456b4 12b1da19 7fb71123
        acd3a729 901d1a71 87470013 3107ec53",
    a: "7bc382c6 3d8c150c 3c72080a ce05afa0 c2bea28e 4fb22787 139165ef ba91f90f
        8aa5814a 503ad4eb 04a8c7dd 22ce2826",
    b: "04a8c7dd 22ce2826 8b39b554 16f0447c 2fb77de1 07dcd2a6 2e880ea5 3eeb62d5
        7cb43902 95dbc994 3ab78696 fa504c11",
    gx: "1d1c64f0 68cf45ff a2a63a81 b7c13f6b 8847a3e7 7ef14fe3 db7fcafe 0cbd10e8
         e826e034 36d646aa ef87b2e2 47d4af1e",
    gy: "8abe1d75 20f9c2a4 5cb1eb8e 95cfd552 62b70b29 feec5864 e19c054f f9912928
         0e464621 77918111 42820341 263c5315",
    q: "8cb91e82 a3386d28 0f5d6f7e 50e641df 152f7109 ed5456b3 1f166e6c ac0425a7
        cf3ab6af 6b7fc310 3b883202 e9046565",
}

#[cfg(test)]
mod tests {
    use super::{all, p256, secp256k1};
    use crate::{Curve, Error};
    use core::ptr;

    #[test]
    fn generators_are_on_their_curves() {
        for curve in all() {
            let g = curve.generator();
            assert!(curve.contains(g.x().unwrap(), g.y().unwrap()), "{}", curve.name());
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(ptr::eq(Curve::from_name("p256").unwrap(), p256()));
        assert!(ptr::eq(Curve::from_name("PRIME256V1").unwrap(), p256()));
        assert!(ptr::eq(Curve::from_name("SECP256K1").unwrap(), secp256k1()));
    }

    #[test]
    fn lookup_by_canonical_name() {
        for curve in all() {
            assert!(ptr::eq(Curve::from_name(curve.name()).unwrap(), curve));
        }
    }

    #[test]
    fn unknown_name() {
        assert_eq!(Curve::from_name("P-255"), Err(Error::UnknownCurve));
        assert_eq!(Curve::from_name(""), Err(Error::UnknownCurve));
    }

    #[test]
    fn initialized_once() {
        assert!(ptr::eq(p256(), p256()));
    }
}
