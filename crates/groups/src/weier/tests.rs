//! Short Weierstrass family unit tests

use super::*;
use crate::fp;
use ecsuite_api::{Group, Marshaling, Point as _, Scalar as _};
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn all_suites() -> Vec<SuiteWeierstrass> {
    vec![SuiteWeierstrass::p256(), SuiteWeierstrass::bn256_g1()]
}

fn on_curve(p: &Point) -> bool {
    if p.is_identity() {
        return true;
    }
    let c = &p.c;
    let y2 = fp::mul(&c.p, &p.y, &p.y);
    let x3 = fp::mul(&c.p, &fp::mul(&c.p, &p.x, &p.x), &p.x);
    let rhs = fp::add(&c.p, &fp::add(&c.p, &x3, &fp::mul(&c.p, &c.a, &p.x)), &c.b);
    y2 == rhs
}

#[test]
fn test_base_points_on_curve() {
    for suite in all_suites() {
        let mut b = suite.point();
        b.base();
        let p = b.as_any().downcast_ref::<Point>().unwrap();
        assert!(on_curve(p), "{} base point off curve", suite.name());
        assert!(!p.is_identity());
    }
}

#[test]
fn test_group_law() {
    for suite in all_suites() {
        let mut g = suite.point();
        g.base();

        // G + G == 2*G
        let mut doubled = suite.point();
        doubled.add(&*g, &*g);
        let mut two = suite.scalar();
        two.set_int64(2);
        let mut mul2 = suite.point();
        mul2.mul(&*two, None);
        assert!(mul2.equal(&*doubled), "{}", suite.name());
        assert!(!mul2.equal(&*g), "{}", suite.name());

        // G + (-G) == O and G - G == O
        let mut null = suite.point();
        null.null();
        let mut neg_g = suite.point();
        neg_g.neg(&*g);
        let mut sum = suite.point();
        sum.add(&*g, &*neg_g);
        assert!(sum.equal(&*null), "{}", suite.name());
        let mut diff = suite.point();
        diff.sub(&*g, &*g);
        assert!(diff.equal(&*null), "{}", suite.name());

        // Associativity spot-check: two different addition orders of 6G
        let mut g3 = suite.point();
        g3.add(&*doubled, &*g);
        let mut lhs = suite.point();
        lhs.add(&*g3, &*g3);
        let mut rhs_inner = suite.point();
        rhs_inner.add(&*doubled, &*g3);
        let mut rhs = suite.point();
        rhs.add(&*g, &*rhs_inner);
        let mut six = suite.scalar();
        six.set_int64(6);
        let mut g6 = suite.point();
        g6.mul(&*six, None);
        assert!(lhs.equal(&*g6), "{}", suite.name());
        assert!(rhs.equal(&*g6), "{}", suite.name());
    }
}

#[test]
fn test_mul_by_group_order_is_identity() {
    for suite in all_suites() {
        let mut zero = suite.scalar();
        zero.zero();
        let mut one = suite.scalar();
        one.one();
        let mut qm1 = suite.scalar();
        qm1.sub(&*zero, &*one);

        // (q - 1)*G + G == O
        let mut p = suite.point();
        p.mul(&*qm1, None);
        let mut g = suite.point();
        g.base();
        let mut sum = suite.point();
        sum.add(&*p, &*g);
        let mut null = suite.point();
        null.null();
        assert!(sum.equal(&*null), "{}", suite.name());

        // 0 * G == O
        let mut z = suite.point();
        z.mul(&*zero, None);
        assert!(z.equal(&*null), "{}", suite.name());

        // 1 * G == G
        let mut o = suite.point();
        o.mul(&*one, None);
        assert!(o.equal(&*g), "{}", suite.name());
    }
}

#[test]
fn test_scalar_homomorphism() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    for suite in all_suites() {
        let mut a = suite.scalar();
        let mut b = suite.scalar();
        a.pick(&mut rng);
        b.pick(&mut rng);

        let mut sum = suite.scalar();
        sum.add(&*a, &*b);

        let mut lhs = suite.point();
        lhs.mul(&*sum, None);

        let mut ag = suite.point();
        let mut bg = suite.point();
        ag.mul(&*a, None);
        bg.mul(&*b, None);
        let mut rhs = suite.point();
        rhs.add(&*ag, &*bg);

        assert!(lhs.equal(&*rhs), "{}", suite.name());
    }
}

#[test]
fn test_marshal_roundtrip() {
    let mut rng = OsRng;
    for suite in all_suites() {
        let mut p = suite.point();
        p.pick(&mut rng);
        let buf = p.marshal_binary().unwrap();
        assert_eq!(buf.len(), 32);

        let mut q = suite.point();
        q.unmarshal_binary(&buf).unwrap();
        assert!(q.equal(&*p), "{}", suite.name());

        // Identity round-trips through all zeros.
        let mut null = suite.point();
        null.null();
        let zbuf = null.marshal_binary().unwrap();
        assert!(zbuf.iter().all(|&b| b == 0));
        let mut null2 = suite.point();
        null2.unmarshal_binary(&zbuf).unwrap();
        assert!(null2.equal(&*null));

        assert!(q.unmarshal_binary(&buf[1..]).is_err());
    }
}

#[test]
fn test_embed_roundtrip() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    for suite in all_suites() {
        let msg = b"wire payload";
        let mut p = suite.point();
        p.embed(msg, &mut rng);
        assert!(on_curve(p.as_any().downcast_ref::<Point>().unwrap()));
        assert_eq!(p.data().unwrap(), msg.to_vec(), "{}", suite.name());

        // Data survives a marshal round-trip.
        let buf = p.marshal_binary().unwrap();
        let mut q = suite.point();
        q.unmarshal_binary(&buf).unwrap();
        assert_eq!(q.data().unwrap(), msg.to_vec(), "{}", suite.name());
    }
}
