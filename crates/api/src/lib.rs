//! Public API traits and types for the ecsuite library
//!
//! This crate provides the public API surface for the ecsuite ecosystem:
//! the group-algebra contracts ([`Point`], [`Scalar`], [`Group`]), the
//! [`Suite`] bundle tying a group to its hash, XOF and randomness
//! primitives, the fixed-size wire codec ([`Marshaling`]), and the error
//! types shared throughout the workspace.
//!
//! Callers are expected to be generic over these traits and never import a
//! concrete curve module directly; the suite registry hands out
//! `Arc<dyn Suite>` handles so new curve families can be added without
//! touching shared code.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use traits::{ElementKind, Group, Marshaling, Point, Scalar, Suite, Xof};

// The object-safe hash trait used by `Suite::hash`, re-exported so
// consumers need no direct `digest` dependency.
pub use digest::DynDigest;
