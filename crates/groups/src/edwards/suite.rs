//! Suites for the twisted Edwards family: SHA-256 and SHAKE-256 over one
//! parametrized curve implementation

use std::sync::Arc;

use digest::DynDigest;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

use ecsuite_api::{Group, Suite, Xof};
use ecsuite_params::edwards::{CURVE1174, CURVE41417, E382, E521, TWISTED25519};

use crate::edwards::{Curve, Point};
use crate::int::Int;
use crate::xof::Shake256Xof;

/// Cipher suite over one twisted Edwards parameter set.
///
/// If `full_group` is false, the group is the prime-order subgroup and
/// `pick`/`embed` clear the cofactor by rejection.
#[derive(Debug, Clone)]
pub struct SuiteTwisted {
    curve: Arc<Curve>,
}

impl SuiteTwisted {
    fn with_params(params: &ecsuite_params::edwards::EdwardsParams, full_group: bool) -> Self {
        SuiteTwisted {
            curve: Curve::new(params, full_group),
        }
    }

    /// Suite based on SHA-256, SHAKE-256 and Curve1174.
    pub fn curve1174(full_group: bool) -> Self {
        Self::with_params(&CURVE1174, full_group)
    }

    /// Suite based on SHA-256, SHAKE-256 and Curve41417.
    pub fn curve41417(full_group: bool) -> Self {
        Self::with_params(&CURVE41417, full_group)
    }

    /// Suite based on SHA-256, SHAKE-256 and E-382.
    pub fn e382(full_group: bool) -> Self {
        Self::with_params(&E382, full_group)
    }

    /// Suite based on SHA-256, SHAKE-256 and E-521.
    pub fn e521(full_group: bool) -> Self {
        Self::with_params(&E521, full_group)
    }

    /// Suite based on SHA-256, SHAKE-256 and an Ed25519-compatible
    /// twisted Edwards parameter set.
    pub fn twisted25519(full_group: bool) -> Self {
        Self::with_params(&TWISTED25519, full_group)
    }
}

impl Group for SuiteTwisted {
    fn name(&self) -> String {
        self.curve.name.clone()
    }

    fn scalar_len(&self) -> usize {
        self.curve.scalar_len
    }

    fn scalar(&self) -> Box<dyn ecsuite_api::Scalar> {
        Box::new(Int::new(self.curve.q.clone()))
    }

    fn point_len(&self) -> usize {
        self.curve.element_len
    }

    fn point(&self) -> Box<dyn ecsuite_api::Point> {
        Box::new(Point::identity(self.curve.clone()))
    }

    fn constant_time(&self) -> bool {
        false
    }
}

impl Suite for SuiteTwisted {
    fn hash(&self) -> Box<dyn DynDigest> {
        Box::new(Sha256::new())
    }

    fn xof(&self, seed: &[u8]) -> Box<dyn Xof> {
        Box::new(Shake256Xof::new(seed))
    }

    fn random_stream(&self) -> Box<dyn RngCore> {
        Box::new(OsRng)
    }
}
