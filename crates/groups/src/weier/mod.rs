//! Parametrized short Weierstrass curve family
//!
//! One implementation serves NIST P-256 and the BN256 G1 curve, selected
//! by a [`WeierstrassParams`](ecsuite_params::weierstrass::WeierstrassParams)
//! record. The equation is y^2 = x^3 + a*x + b; both curves have
//! cofactor 1.
//!
//! Arithmetic is variable-time big-integer work; every suite built here
//! advertises `constant_time() == false`.
//!
//! The canonical point encoding is the big-endian x-coordinate over the
//! field length. The P-256 prime uses all 256 bits, leaving no spare bit
//! for the sign of y, so this family identifies a point with its
//! negation: equality, like the encoding, is on the x-line.

mod point;
mod suite;

pub use point::Point;
pub use suite::SuiteWeierstrass;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use num_bigint::BigUint;

use ecsuite_params::weierstrass::WeierstrassParams;

use crate::fp;

/// Runtime form of one short Weierstrass parameter set.
#[derive(Debug)]
pub(crate) struct Curve {
    pub(crate) name: String,
    pub(crate) p: BigUint,
    pub(crate) a: BigUint,
    pub(crate) b: BigUint,
    pub(crate) q: BigUint,
    pub(crate) gx: BigUint,
    pub(crate) gy: BigUint,
    pub(crate) element_len: usize,
    pub(crate) scalar_len: usize,
    pub(crate) embed_len: usize,
    pub(crate) top_mask: u8,
}

impl Curve {
    pub(crate) fn new(params: &WeierstrassParams) -> Arc<Curve> {
        let p = fp::parse_unreduced(params.p);
        let a = if params.a < 0 {
            fp::neg(&p, &BigUint::from(params.a.unsigned_abs()))
        } else {
            BigUint::from(params.a as u64)
        };
        let b = fp::parse(params.b, &p);
        let q = fp::parse_unreduced(params.q);
        let gx = fp::parse(params.gx, &p);
        let gy = fp::parse(params.gy, &p);

        let rem = params.bits % 8;
        let top_mask = if rem == 0 { 0xff } else { (1u8 << rem) - 1 };

        Arc::new(Curve {
            name: params.name.to_string(),
            scalar_len: ((q.bits() + 7) / 8) as usize,
            embed_len: ((params.bits as usize) - 16) / 8,
            p,
            a,
            b,
            q,
            gx,
            gy,
            element_len: params.element_len,
            top_mask,
        })
    }
}
