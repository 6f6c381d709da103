//! Parameter sets for the short Weierstrass curve family
//!
//! The equation is `y^2 = x^3 + a*x + b` over the prime field F_p. Both
//! curves here have cofactor 1, so the base point generates the whole
//! group. These parameter sets back the variable-time big-integer
//! implementation.

/// Parameter record for one short Weierstrass curve.
pub struct WeierstrassParams {
    /// Canonical curve name as registered in the suite registry.
    pub name: &'static str,
    /// Size in bytes of an encoded field element, scalar and point.
    pub element_len: usize,
    /// Bit length of the prime modulus.
    pub bits: u32,
    /// Prime modulus p.
    pub p: &'static str,
    /// Curve coefficient a (reduced mod p at parse time).
    pub a: i64,
    /// Curve coefficient b.
    pub b: &'static str,
    /// Group order.
    pub q: &'static str,
    /// Base point x-coordinate.
    pub gx: &'static str,
    /// Base point y-coordinate.
    pub gy: &'static str,
}

/// NIST P-256: p = 2^256 - 2^224 + 2^192 + 2^96 - 1, a = -3.
pub const NIST_P256: WeierstrassParams = WeierstrassParams {
    name: "P256",
    element_len: 32,
    bits: 256,
    p: "115792089210356248762697446949407573530086143415290314195533631308867097853951",
    a: -3,
    b: "41058363725152142129326129780047268409114441015993725554835256314039467401291",
    q: "115792089210356248762697446949407573529996955224135760342422259061068512044369",
    gx: "48439561293906451759052585252797914202762949526041747995844080717082404635286",
    gy: "36134250956749795798585127919587881956611106672985015071877198253568414405109",
};

/// BN256 G1: the ordinary curve y^2 = x^3 + 3 underlying the G1 group of
/// the 256-bit Barreto-Naehrig pairing construction, generator (1, 2).
/// Only the G1 registry entry is backed here; the pairing towers (G2, GT)
/// are a separate subsystem.
pub const BN256_G1: WeierstrassParams = WeierstrassParams {
    name: "BN256_G1",
    element_len: 32,
    bits: 256,
    p: "65000549695646603732796438742359905742825358107623003571877145026864184071783",
    a: 0,
    b: "3",
    q: "65000549695646603732796438742359905742570406053903786389881062969044166799969",
    gx: "1",
    gy: "2",
};
