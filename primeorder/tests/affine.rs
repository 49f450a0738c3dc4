//! Group law tests.

use primeorder::{AffinePoint, BigUint, Curve, Error, named};
use proptest::prelude::*;

/// `y² = x³ + 2x + 3` over `F_97`, with `G = (3, 6)` of order 5.
fn toy() -> Curve {
    Curve::new(
        "toy",
        97u32.into(),
        2u32.into(),
        3u32.into(),
        (3u32.into(), 6u32.into()),
        5u32.into(),
    )
    .unwrap()
}

fn pt(curve: &Curve, x: u32, y: u32) -> AffinePoint<'_> {
    curve.point(x.into(), y.into()).unwrap()
}

#[test]
fn toy_curve_multiples() {
    let curve = toy();
    let g = curve.generator();

    let g2 = g.double().unwrap();
    assert_eq!(g2, pt(&curve, 80, 10));

    let g3 = g2.add(&g).unwrap();
    assert_eq!(g3, pt(&curve, 80, 87));
    assert_eq!(g3, -&g2);

    let g5 = g3.add(&g2).unwrap();
    assert!(g5.is_identity());
}

#[test]
fn add_identity() {
    let curve = named::p256();
    let g = curve.generator();
    let o = curve.identity();

    assert_eq!(g.add(&o).unwrap(), g);
    assert_eq!(o.add(&g).unwrap(), g);
    assert!(o.add(&o).unwrap().is_identity());
    assert!(o.double().unwrap().is_identity());
}

#[test]
fn add_negation_is_identity() {
    for curve in named::all() {
        let g = curve.generator();
        assert!(g.add(&g.negate()).unwrap().is_identity());
        assert!(g.sub(&g).unwrap().is_identity());
    }
}

#[test]
fn add_equal_points_doubles() {
    let curve = named::secp256k1();
    let g = curve.generator();
    assert_eq!(g.add(&g).unwrap(), g.double().unwrap());
}

#[test]
fn double_two_torsion_point() {
    let curve = toy();
    // (30, 0) has order 2
    let t = pt(&curve, 30, 0);
    assert_eq!(t.negate(), t);
    assert!(t.double().unwrap().is_identity());
    assert!(t.add(&t).unwrap().is_identity());
}

#[test]
fn negate_identity() {
    let o = named::p521().identity();
    assert!(o.negate().is_identity());
}

#[test]
fn curve_mismatch() {
    let g = named::p256().generator();
    let h = named::brainpool_p256r1().generator();
    assert_eq!(g.add(&h).unwrap_err(), Error::CurveMismatch);
    assert_eq!(g.sub(&h).unwrap_err(), Error::CurveMismatch);
}

#[test]
fn equality() {
    let toy = toy();

    // identities compare equal on any curve
    assert_eq!(named::p256().identity(), toy.identity());
    assert_ne!(named::p256().generator(), named::p256().identity());

    // same coordinates on a copy of the curve
    let copy = named::p192().clone();
    assert_eq!(copy.generator(), named::p192().generator());
}

#[test]
fn results_stay_reduced() {
    let curve = named::p224();
    let mut p = curve.generator();

    for _ in 0..32 {
        p = p.add(&curve.generator()).unwrap().double().unwrap();
        assert!(p.x().unwrap() < curve.p());
        assert!(p.y().unwrap() < curve.p());
        assert!(curve.contains(p.x().unwrap(), p.y().unwrap()));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn associativity(a in 1u64.., b in 1u64.., c in 1u64..) {
        let curve = named::p256();
        let g = curve.generator();
        let (p, q, r) = (
            g.mul(&BigUint::from(a)).unwrap(),
            g.mul(&BigUint::from(b)).unwrap(),
            g.mul(&BigUint::from(c)).unwrap(),
        );

        let left = p.add(&q).unwrap().add(&r).unwrap();
        let right = p.add(&q.add(&r).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn sub_undoes_add(a in 1u64.., b in 1u64..) {
        let curve = named::secp256k1();
        let g = curve.generator();
        let p = g.mul(&BigUint::from(a)).unwrap();
        let q = g.mul(&BigUint::from(b)).unwrap();

        prop_assert_eq!(p.add(&q).unwrap().sub(&q).unwrap(), p);
    }

    #[test]
    fn decompress_round_trip(k in 1u64..) {
        let curve = named::p224();
        let p = curve.mul_by_generator(&BigUint::from(k)).unwrap();
        let odd = p.y().unwrap().bit(0);

        prop_assert_eq!(AffinePoint::decompress(p.x().unwrap(), odd, curve).unwrap(), p);
    }
}
