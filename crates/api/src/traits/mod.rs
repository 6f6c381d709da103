//! Trait definitions for the group-algebra and suite layers

pub mod group;
pub mod marshaling;
pub mod suite;
pub mod xof;

pub use group::{Group, Point, Scalar};
pub use marshaling::Marshaling;
pub use suite::{ElementKind, Suite};
pub use xof::Xof;
