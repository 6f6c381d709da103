//! Parametrized twisted Edwards curve family
//!
//! One implementation serves every curve selected by an
//! [`EdwardsParams`](ecsuite_params::edwards::EdwardsParams) record:
//! Curve1174, Curve41417, E382, E521 and an Ed25519-compatible set. The
//! equation is a*x^2 + y^2 = 1 + d*x^2*y^2 with a square and d non-square,
//! so the unified addition formulas are complete.
//!
//! Arithmetic is variable-time big-integer work; every suite built here
//! advertises `constant_time() == false`. A `full_group` flag selects
//! between the full curve group and its prime-order subgroup: with the
//! subgroup selected, `pick` and `embed` reject candidates outside it,
//! which clears the cofactor without destroying embedded data.

mod point;
mod suite;

pub use point::Point;
pub use suite::SuiteTwisted;


use std::sync::Arc;

use num_bigint::BigUint;

use ecsuite_params::edwards::EdwardsParams;

use crate::fp;

/// Runtime form of one twisted Edwards parameter set, parsed once at
/// suite construction and shared read-only by all of its points.
#[derive(Debug)]
pub(crate) struct Curve {
    pub(crate) name: String,
    pub(crate) p: BigUint,
    pub(crate) a: BigUint,
    pub(crate) d: BigUint,
    pub(crate) q: BigUint,
    pub(crate) gx: BigUint,
    pub(crate) gy: BigUint,
    pub(crate) element_len: usize,
    pub(crate) scalar_len: usize,
    pub(crate) embed_len: usize,
    /// Mask for the top byte of a candidate coordinate, so candidates
    /// stay below 2^bits.
    pub(crate) top_mask: u8,
    pub(crate) full_group: bool,
}

impl Curve {
    pub(crate) fn new(params: &EdwardsParams, full_group: bool) -> Arc<Curve> {
        let p = fp::parse_unreduced(params.p);
        let a = if params.a < 0 {
            fp::neg(&p, &BigUint::from(params.a.unsigned_abs()))
        } else {
            BigUint::from(params.a as u64)
        };
        let d = fp::parse(params.d, &p);
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
            d,
            q,
            gx,
            gy,
            element_len: params.element_len,
            top_mask,
            full_group,
        })
    }
}
