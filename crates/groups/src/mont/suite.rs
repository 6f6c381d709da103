//! The Ed25519 suite: Montgomery Curve25519 with SHA-256 and SHAKE-256

use digest::DynDigest;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

use ecsuite_api::{Group, Suite, Xof};
use ecsuite_params::montgomery::CURVE25519_FIELD_ELEMENT_SIZE;

use crate::mont::point::Point;
use crate::mont::scalar::Scalar;
use crate::xof::Shake256Xof;

/// Cipher suite based on SHA-256, SHAKE-256 and Curve25519 in Montgomery
/// representation. This is the one constant-time suite and should be used
/// whenever possible.
#[derive(Debug, Default, Clone, Copy)]
pub struct SuiteEd25519;

impl SuiteEd25519 {
    /// Create the suite.
    pub fn new() -> Self {
        SuiteEd25519
    }
}

impl Group for SuiteEd25519 {
    fn name(&self) -> String {
        "Ed25519".to_string()
    }

    fn scalar_len(&self) -> usize {
        CURVE25519_FIELD_ELEMENT_SIZE
    }

    fn scalar(&self) -> Box<dyn ecsuite_api::Scalar> {
        Box::new(Scalar::default())
    }

    fn point_len(&self) -> usize {
        CURVE25519_FIELD_ELEMENT_SIZE
    }

    fn point(&self) -> Box<dyn ecsuite_api::Point> {
        Box::new(Point::identity())
    }

    fn constant_time(&self) -> bool {
        true
    }
}

impl Suite for SuiteEd25519 {
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
