//! # ecsuite
//!
//! A pure Rust elliptic-curve group-algebra toolkit.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`ecsuite-api`]: the group, suite and encoding trait contracts
//! - [`ecsuite-params`]: immutable per-curve parameter records
//! - [`ecsuite-groups`]: field arithmetic and the concrete curve families
//! - [`ecsuite-suites`]: the process-wide suite registry
//!
//! ## Usage
//!
//! Obtain a suite from the registry by name and stay generic over the
//! traits; concrete curve modules never need to be imported directly:
//!
//! ```
//! use ecsuite::prelude::*;
//! use ecsuite::suites;
//!
//! let suite = suites::must_find("ed25519");
//! let mut rng = suite.random_stream();
//!
//! let mut s = suite.scalar();
//! s.pick(&mut *rng);
//!
//! // Public key: s * G.
//! let mut p = suite.point();
//! p.mul(&*s, None);
//! ```
//!
//! Production deployments that must not touch variable-time arithmetic
//! can call `suites::require_constant_time()` once at startup; lookups of
//! variable-time suites then fail with a policy error.

#![forbid(unsafe_code)]

pub use ecsuite_api as api;
pub use ecsuite_groups as groups;
pub use ecsuite_params as params;
pub use ecsuite_suites as suites;

// Re-export the workspace primitives users are likely to need alongside
// the suite traits.
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for ecsuite users
pub mod prelude {
    pub use ecsuite_api::{
        DynDigest, ElementKind, Error, Group, Marshaling, Point, Result, Scalar, Suite, Xof,
    };
}

pub use ecsuite_api::{
    DynDigest, ElementKind, Error, Group, Marshaling, Point, Result, Scalar, Suite, Xof,
};
