//! Suites for the short Weierstrass family: SHA-256 and SHAKE-256 over
//! one parametrized curve implementation

use std::sync::Arc;

use digest::DynDigest;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

use ecsuite_api::{Group, Suite, Xof};
use ecsuite_params::weierstrass::{BN256_G1, NIST_P256};

use crate::int::Int;
use crate::weier::{Curve, Point};
use crate::xof::Shake256Xof;

/// Cipher suite over one short Weierstrass parameter set.
#[derive(Debug, Clone)]
pub struct SuiteWeierstrass {
    curve: Arc<Curve>,
}

impl SuiteWeierstrass {
    /// Suite based on SHA-256, SHAKE-256 and the NIST P-256 curve.
    pub fn p256() -> Self {
        SuiteWeierstrass {
            curve: Curve::new(&NIST_P256),
        }
    }

    /// Suite based on SHA-256, SHAKE-256 and the BN256 G1 curve.
    pub fn bn256_g1() -> Self {
        SuiteWeierstrass {
            curve: Curve::new(&BN256_G1),
        }
    }
}

impl Group for SuiteWeierstrass {
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

impl Suite for SuiteWeierstrass {
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
