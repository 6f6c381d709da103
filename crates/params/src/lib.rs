//! Curve parameter constants for the ecsuite library
//!
//! Immutable per-curve records: prime modulus, curve coefficients, subgroup
//! order, cofactor and base-point coordinates. Big integers are stored as
//! decimal string literals and parsed once at suite-construction time;
//! nothing here is mutated after initialization.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod edwards;
pub mod montgomery;
pub mod weierstrass;

pub use edwards::{EdwardsParams, CURVE1174, CURVE41417, E382, E521, TWISTED25519};
pub use weierstrass::{WeierstrassParams, BN256_G1, NIST_P256};
