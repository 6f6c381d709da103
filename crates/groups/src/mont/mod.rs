//! Montgomery Curve25519 group
//!
//! The curve is y^2 = x^3 + 486662*x^2 + x over F_p with p = 2^255 - 19.
//! Field operations, the scalar-multiplication ladder and the conditional
//! swaps are constant-time; this is the group behind the "Ed25519" suite,
//! the only built-in suite that advertises constant-time arithmetic.
//!
//! Byte encodings are little-endian throughout, and scalars are field
//! elements modulo p (not the subgroup order), to remain compatible with
//! the wider Curve25519 ecosystem.

mod field;
mod point;
mod scalar;
mod suite;

pub use field::FieldElement;
pub use point::Point;
pub use scalar::Scalar;
pub use suite::SuiteEd25519;
