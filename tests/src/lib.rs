//! Generic exercising harness for suites
//!
//! [`suite_test`] drives any [`Suite`] through the algebraic and encoding
//! contracts every curve family must satisfy, so each registered suite
//! gets identical coverage from one code path. Integration tests call it
//! per suite name.

#![forbid(unsafe_code)]

use std::io::Cursor;

use ecsuite_api::{
    DynDigest as _, ElementKind, Group, Marshaling, Point as _, Scalar as _, Suite, Xof as _,
};
use rand::RngCore as _;

/// Drive one suite through the full capability contract, panicking on any
/// violated property.
pub fn suite_test(suite: &dyn Suite) {
    scalar_test(suite);
    point_test(suite);
    encoding_test(suite);
    embed_test(suite);
    codec_test(suite);
    primitives_test(suite);
}

/// Scalar field axioms over random and small values.
pub fn scalar_test(suite: &dyn Suite) {
    let name = suite.name();
    let mut rng = suite.xof(b"scalar-test");

    let mut zero = suite.scalar();
    zero.zero();
    let mut one = suite.scalar();
    one.one();

    for _ in 0..8 {
        let mut a = suite.scalar();
        let mut b = suite.scalar();
        let mut c = suite.scalar();
        a.pick(&mut *rng);
        b.pick(&mut *rng);
        c.pick(&mut *rng);

        // add(a, b) == add(b, a)
        let mut ab = suite.scalar();
        ab.add(&*a, &*b);
        let mut ba = suite.scalar();
        ba.add(&*b, &*a);
        assert!(ab.equal(&*ba), "{}: addition not commutative", name);

        // add(add(a, b), c) == add(a, add(b, c))
        let mut abc = suite.scalar();
        abc.add(&*ab, &*c);
        let mut bc = suite.scalar();
        bc.add(&*b, &*c);
        let mut abc2 = suite.scalar();
        abc2.add(&*a, &*bc);
        assert!(abc.equal(&*abc2), "{}: addition not associative", name);

        // add(a, zero) == a
        let mut a0 = suite.scalar();
        a0.add(&*a, &*zero);
        assert!(a0.equal(&*a), "{}: zero not neutral", name);

        // add(a, neg(a)) == zero
        let mut neg_a = suite.scalar();
        neg_a.neg(&*a);
        let mut cancelled = suite.scalar();
        cancelled.add(&*a, &*neg_a);
        assert!(cancelled.equal(&*zero), "{}: negation broken", name);

        // sub(add(a, b), b) == a
        let mut back = suite.scalar();
        back.sub(&*ab, &*b);
        assert!(back.equal(&*a), "{}: subtraction broken", name);

        if !a.equal(&*zero) {
            // mul(a, inv(a)) == one
            let mut inv_a = suite.scalar();
            inv_a.inv(&*a);
            let mut unit = suite.scalar();
            unit.mul(&*a, &*inv_a);
            assert!(unit.equal(&*one), "{}: inversion broken", name);
        }
        if !b.equal(&*zero) {
            // div(mul(a, b), b) == a
            let mut prod = suite.scalar();
            prod.mul(&*a, &*b);
            let mut quot = suite.scalar();
            quot.div(&*prod, &*b);
            assert!(quot.equal(&*a), "{}: division broken", name);
        }

        // set/clone produce independent equal copies
        let mut copy = suite.scalar();
        copy.set(&*a);
        assert!(copy.equal(&*a), "{}: set broken", name);
        let cloned = a.clone_boxed();
        assert!(cloned.equal(&*a), "{}: clone broken", name);
    }

    // set_int64 respects signs.
    let mut five = suite.scalar();
    five.set_int64(5);
    let mut minus_five = suite.scalar();
    minus_five.set_int64(-5);
    let mut sum = suite.scalar();
    sum.add(&*five, &*minus_five);
    assert!(sum.equal(&*zero), "{}: set_int64 sign handling broken", name);
}

/// Group-law properties over the base point.
///
/// Distributivity checks use small integers so they hold for every
/// family, including the one whose scalars reduce modulo the field prime
/// rather than the group order.
pub fn point_test(suite: &dyn Suite) {
    let name = suite.name();

    let mut null = suite.point();
    null.null();
    let mut base = suite.point();
    base.base();

    let mut zero = suite.scalar();
    zero.zero();
    let mut one = suite.scalar();
    one.one();

    // mul(one, None) == base, mul(zero, None) == null
    let mut p = suite.point();
    p.mul(&*one, None);
    assert!(p.equal(&*base), "{}: 1*G != G", name);
    p.mul(&*zero, None);
    assert!(p.equal(&*null), "{}: 0*G != O", name);

    // base + null == base
    let mut sum = suite.point();
    sum.add(&*base, &*null);
    assert!(sum.equal(&*base), "{}: identity not neutral", name);

    // 2*G == G + G, and differs from G
    let mut two = suite.scalar();
    two.set_int64(2);
    let mut doubled = suite.point();
    doubled.add(&*base, &*base);
    let mut mul2 = suite.point();
    mul2.mul(&*two, None);
    assert!(mul2.equal(&*doubled), "{}: 2*G != G+G", name);
    assert!(!mul2.equal(&*base), "{}: 2*G == G", name);

    // (a + b)*G == a*G + b*G for small a, b
    let mut a = suite.scalar();
    a.set_int64(31);
    let mut b = suite.scalar();
    b.set_int64(17);
    let mut ab = suite.scalar();
    ab.add(&*a, &*b);
    let mut lhs = suite.point();
    lhs.mul(&*ab, None);
    let mut ag = suite.point();
    ag.mul(&*a, None);
    let mut bg = suite.point();
    bg.mul(&*b, None);
    let mut rhs = suite.point();
    rhs.add(&*ag, &*bg);
    assert!(lhs.equal(&*rhs), "{}: scalar mult not distributive", name);

    // a*G - b*G == (a - b)*G
    let mut diff = suite.point();
    diff.sub(&*ag, &*bg);
    let mut amb = suite.scalar();
    amb.sub(&*a, &*b);
    let mut expect = suite.point();
    expect.mul(&*amb, None);
    assert!(diff.equal(&*expect), "{}: point subtraction broken", name);

    // G + (-G) == O
    let mut neg_base = suite.point();
    neg_base.neg(&*base);
    let mut cancelled = suite.point();
    cancelled.add(&*base, &*neg_base);
    assert!(cancelled.equal(&*null), "{}: point negation broken", name);

    // mul against an explicit base equals mul against the default base.
    let mut explicit = suite.point();
    explicit.mul(&*two, Some(&*base));
    assert!(explicit.equal(&*doubled), "{}: explicit base mul broken", name);

    // set/clone produce independent equal copies.
    let mut copy = suite.point();
    copy.set(&*doubled);
    assert!(copy.equal(&*doubled), "{}: set broken", name);
    let cloned = doubled.clone_boxed();
    assert!(cloned.equal(&*doubled), "{}: clone broken", name);
}

/// Marshal/unmarshal round-trips and length enforcement.
pub fn encoding_test(suite: &dyn Suite) {
    let name = suite.name();
    let mut rng = suite.xof(b"encoding-test");

    // Points produced by pick, base and arithmetic round-trip.
    let mut base = suite.point();
    base.base();
    let mut picked = suite.point();
    picked.pick(&mut *rng);
    let mut summed = suite.point();
    summed.add(&*base, &*picked);

    for p in [&base, &picked, &summed] {
        let buf = p.marshal_binary().unwrap();
        assert_eq!(buf.len(), suite.point_len(), "{}: point length", name);
        assert_eq!(buf.len(), p.marshal_size(), "{}: marshal_size", name);

        let mut back = suite.point();
        back.unmarshal_binary(&buf).unwrap();
        assert!(back.equal(&**p), "{}: point round-trip", name);
    }

    // Scalars round-trip.
    let mut s = suite.scalar();
    s.pick(&mut *rng);
    let buf = s.marshal_binary().unwrap();
    assert_eq!(buf.len(), suite.scalar_len(), "{}: scalar length", name);
    let mut back = suite.scalar();
    back.unmarshal_binary(&buf).unwrap();
    assert!(back.equal(&*s), "{}: scalar round-trip", name);

    // Wrong-length buffers are hard errors for points and scalars.
    let mut p = suite.point();
    assert!(p.unmarshal_binary(&vec![0u8; suite.point_len() - 1]).is_err());
    assert!(p.unmarshal_binary(&vec![0u8; suite.point_len() + 1]).is_err());
    assert!(p.unmarshal_binary(&[]).is_err());
    let mut sc = suite.scalar();
    assert!(sc.unmarshal_binary(&vec![0u8; suite.scalar_len() + 1]).is_err());
}

/// Payload embedding and extraction.
pub fn embed_test(suite: &dyn Suite) {
    let name = suite.name();
    let mut rng = suite.xof(b"embed-test");

    let embed_len = suite.point().embed_len();
    assert!(embed_len > 0, "{}: embed_len", name);

    // Short payload.
    let msg = b"abc";
    let mut p = suite.point();
    p.embed(msg, &mut *rng);
    assert_eq!(p.data().unwrap(), msg.to_vec(), "{}: embed round-trip", name);

    // Payload survives the wire.
    let buf = p.marshal_binary().unwrap();
    let mut q = suite.point();
    q.unmarshal_binary(&buf).unwrap();
    assert_eq!(q.data().unwrap(), msg.to_vec(), "{}: embed wire trip", name);

    // Maximum-length payload.
    let full: Vec<u8> = (0..embed_len as u8).collect();
    let mut r = suite.point();
    r.embed(&full, &mut *rng);
    assert_eq!(r.data().unwrap(), full, "{}: max embed round-trip", name);
}

/// The fixed-size stream codec: heterogeneous write then in-order read.
pub fn codec_test(suite: &dyn Suite) {
    let name = suite.name();
    let mut rng = suite.xof(b"codec-test");

    let mut p1 = suite.point();
    p1.pick(&mut *rng);
    let mut s1 = suite.scalar();
    s1.pick(&mut *rng);
    let mut p2 = suite.point();
    p2.pick(&mut *rng);

    let mut wire: Vec<u8> = Vec::new();
    suite
        .write(&mut wire, &[&*p1, &*s1, &*p2])
        .expect("write failed");
    assert_eq!(
        wire.len(),
        2 * suite.point_len() + suite.scalar_len(),
        "{}: codec writes fixed sizes with no framing",
        name
    );

    let mut q1 = suite.point();
    let mut t1 = suite.scalar();
    let mut q2 = suite.point();
    {
        let mut cursor = Cursor::new(&wire[..]);
        suite
            .read(&mut cursor, &mut [&mut *q1, &mut *t1, &mut *q2])
            .expect("read failed");
    }
    assert!(q1.equal(&*p1), "{}: codec point 1", name);
    assert!(t1.equal(&*s1), "{}: codec scalar", name);
    assert!(q2.equal(&*p2), "{}: codec point 2", name);

    // A truncated stream is an error.
    let mut cursor = Cursor::new(&wire[..wire.len() - 1]);
    assert!(suite
        .read(&mut cursor, &mut [&mut *q1, &mut *t1, &mut *q2])
        .is_err());

    // Generic decoders can mint destination objects by abstract kind.
    let mut obj_p = suite.new_element(ElementKind::Point);
    let mut obj_s = suite.new_element(ElementKind::Scalar);
    assert_eq!(obj_p.marshal_size(), suite.point_len());
    assert_eq!(obj_s.marshal_size(), suite.scalar_len());
    let mut cursor = Cursor::new(&wire[..]);
    suite
        .read(&mut cursor, &mut [&mut *obj_p, &mut *obj_s])
        .expect("read into new_element failed");
    assert_eq!(obj_p.marshal_binary().unwrap(), p1.marshal_binary().unwrap());
    assert_eq!(obj_s.marshal_binary().unwrap(), s1.marshal_binary().unwrap());
}

/// The bundled hash, XOF and randomness primitives.
pub fn primitives_test(suite: &dyn Suite) {
    let name = suite.name();

    // SHA-256 known answer.
    let mut h = suite.hash();
    h.update(b"abc");
    let digest = h.finalize_reset();
    assert_eq!(
        hex::encode(&digest),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        "{}: hash is not SHA-256",
        name
    );

    // XOF streams are deterministic per seed and differ across seeds.
    let mut x1 = suite.xof(b"seed");
    let mut x2 = suite.xof(b"seed");
    let mut x3 = suite.xof(b"different");
    let mut b1 = [0u8; 32];
    let mut b2 = [0u8; 32];
    let mut b3 = [0u8; 32];
    x1.squeeze(&mut b1);
    x2.squeeze(&mut b2);
    x3.squeeze(&mut b3);
    assert_eq!(b1, b2, "{}: XOF not deterministic", name);
    assert_ne!(b1, b3, "{}: XOF ignores seed", name);

    // The OS random stream yields distinct nonzero blocks.
    let mut rng = suite.random_stream();
    let mut r1 = [0u8; 32];
    let mut r2 = [0u8; 32];
    rng.fill_bytes(&mut r1);
    rng.fill_bytes(&mut r2);
    assert_ne!(r1, r2, "{}: random stream repeated itself", name);
    assert_ne!(r1, [0u8; 32], "{}: random stream all zero", name);
}
