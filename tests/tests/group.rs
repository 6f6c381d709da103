//! Cross-suite group contract tests: every registered suite is driven
//! through the same generic harness.

use ecsuite_api::{Group, Point as _, Scalar as _};
use ecsuite_tests::suite_test;

#[test]
fn test_ed25519() {
    suite_test(&*ecsuite_suites::must_find("ed25519"));
}

#[test]
fn test_p256() {
    suite_test(&*ecsuite_suites::must_find("P256"));
}

#[test]
fn test_bn256_g1() {
    suite_test(&*ecsuite_suites::must_find("BN256_G1"));
}

#[test]
fn test_curve1174() {
    suite_test(&*ecsuite_suites::must_find("Curve1174"));
}

#[test]
fn test_curve41417() {
    suite_test(&*ecsuite_suites::must_find("Curve41417"));
}

#[test]
fn test_e382() {
    suite_test(&*ecsuite_suites::must_find("E382"));
}

#[test]
fn test_e521() {
    suite_test(&*ecsuite_suites::must_find("E521"));
}

#[test]
fn test_twisted25519() {
    suite_test(&*ecsuite_suites::must_find("Twisted25519"));
}

#[test]
fn test_pick_is_deterministic_per_stream() {
    // Same seed, same stream, same point; `pick` is a pure function of
    // the randomness source.
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    for name in ["ed25519", "P256", "Curve1174"] {
        let suite = ecsuite_suites::must_find(name);

        let mut r1 = ChaCha20Rng::seed_from_u64(1234);
        let mut r2 = ChaCha20Rng::seed_from_u64(1234);
        let mut p1 = suite.point();
        let mut p2 = suite.point();
        p1.pick(&mut r1);
        p2.pick(&mut r2);
        assert!(p1.equal(&*p2), "{}: pick not deterministic", name);
    }
}

#[test]
fn test_curve25519_double_scenario() {
    // The Curve25519 suite: s = 2, P = s*B must equal B + B and differ
    // from B.
    let suite = ecsuite_suites::must_find("ed25519");

    let mut s = suite.scalar();
    s.set_int64(2);

    let mut p = suite.point();
    p.mul(&*s, None);

    let mut base = suite.point();
    base.base();
    let mut doubled = suite.point();
    doubled.add(&*base, &*base);

    assert!(p.equal(&*doubled));
    assert!(!p.equal(&*base));
}
