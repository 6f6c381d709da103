//! Concrete group implementations for the ecsuite library
//!
//! Three curve families share the one algebraic contract defined in
//! `ecsuite-api`:
//!
//! - [`mont`] — Montgomery Curve25519 with a dedicated constant-time field
//!   engine (the "Ed25519" suite).
//! - [`edwards`] — a parametrized twisted Edwards family over variable-time
//!   big-integer arithmetic (Curve1174, Curve41417, E382, E521 and an
//!   Ed25519-compatible parameter set).
//! - [`weier`] — a parametrized short Weierstrass family over the same
//!   variable-time arithmetic (NIST P-256 and BN256 G1).
//!
//! The variable-time families advertise `constant_time() == false`; the
//! suite registry's enforcement mode filters them out.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod edwards;
pub mod fp;
pub mod int;
pub mod mont;
pub mod weier;
pub mod xof;

pub use edwards::SuiteTwisted;
pub use int::Int;
pub use mont::SuiteEd25519;
pub use weier::SuiteWeierstrass;
pub use xof::Shake256Xof;
