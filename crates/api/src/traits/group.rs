//! The group capability contract shared by every curve family.
//!
//! Mutating operations write into the receiver and return it again so calls
//! can be chained; the borrow checker rules out aliasing between receiver
//! and operands. [`Scalar::set`]/[`Point::set`] and the boxed clones are
//! the only sanctioned ways to obtain an independent copy.

use rand::RngCore;

use crate::error::Result;
use crate::traits::Marshaling;

/// An exponent value: an integer modulo the group order for prime-order
/// curves, or modulo the field prime where a family documents that choice
/// (the Montgomery Curve25519 scalars, for instance).
pub trait Scalar: Marshaling {
    /// Equality test for two scalars derived from the same group.
    ///
    /// Scalars from a different group compare unequal.
    fn equal(&self, other: &dyn Scalar) -> bool;

    /// Set the receiver equal to another scalar `a` and return it.
    fn set(&mut self, a: &dyn Scalar) -> &mut dyn Scalar;

    /// Independent copy of this scalar.
    fn clone_boxed(&self) -> Box<dyn Scalar>;

    /// Set to a small integer value.
    fn set_int64(&mut self, v: i64) -> &mut dyn Scalar;

    /// Set to the additive identity (0).
    fn zero(&mut self) -> &mut dyn Scalar;

    /// Set to the multiplicative identity (1).
    fn one(&mut self) -> &mut dyn Scalar;

    /// Set to the modular sum of scalars `a` and `b`.
    fn add(&mut self, a: &dyn Scalar, b: &dyn Scalar) -> &mut dyn Scalar;

    /// Set to the modular difference `a - b`.
    fn sub(&mut self, a: &dyn Scalar, b: &dyn Scalar) -> &mut dyn Scalar;

    /// Set to the modular negation of scalar `a`.
    fn neg(&mut self, a: &dyn Scalar) -> &mut dyn Scalar;

    /// Set to the modular product of scalars `a` and `b`.
    fn mul(&mut self, a: &dyn Scalar, b: &dyn Scalar) -> &mut dyn Scalar;

    /// Set to the modular quotient `a / b`, i.e. `a * inv(b)`.
    ///
    /// Undefined when `b` is the additive identity; callers must not pass
    /// a zero divisor.
    fn div(&mut self, a: &dyn Scalar, b: &dyn Scalar) -> &mut dyn Scalar;

    /// Set to the modular inverse of scalar `a`.
    ///
    /// Undefined when `a` is the additive identity.
    fn inv(&mut self, a: &dyn Scalar) -> &mut dyn Scalar;

    /// Set to a fresh random or pseudo-random scalar drawn from `rng`.
    fn pick(&mut self, rng: &mut dyn RngCore) -> &mut dyn Scalar;

    /// Set the scalar from a byte string, reducing modulo the family's
    /// modulus. Byte order is family-specific: little-endian for the
    /// Curve25519 family, big-endian elsewhere.
    fn set_bytes(&mut self, bytes: &[u8]) -> &mut dyn Scalar;
}

impl Clone for Box<dyn Scalar> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

/// A group element tied to exactly one curve instance.
///
/// Any point produced by a public operation either lies on the curve or is
/// the designated neutral element; equality compares canonical coordinates,
/// never internal representation.
pub trait Point: Marshaling {
    /// Equality test for two points derived from the same group.
    fn equal(&self, other: &dyn Point) -> bool;

    /// Set the receiver to the neutral (identity) element.
    fn null(&mut self) -> &mut dyn Point;

    /// Set the receiver to this group's standard base point.
    fn base(&mut self) -> &mut dyn Point;

    /// Set the receiver to a fresh random point drawn from `rng`.
    fn pick(&mut self, rng: &mut dyn RngCore) -> &mut dyn Point;

    /// Set the receiver equal to another point `a` and return it.
    fn set(&mut self, a: &dyn Point) -> &mut dyn Point;

    /// Independent copy of this point.
    fn clone_boxed(&self) -> Box<dyn Point>;

    /// Maximum number of payload bytes [`embed`](Point::embed) can encode
    /// into a single group element.
    fn embed_len(&self) -> usize;

    /// Encode up to `embed_len` bytes of `data` into the receiver, using
    /// `rng` to fill the remaining coordinate bytes until a valid curve
    /// element is found. Bytes beyond `embed_len` are ignored.
    fn embed(&mut self, data: &[u8], rng: &mut dyn RngCore) -> &mut dyn Point;

    /// Extract data embedded via [`embed`](Point::embed).
    ///
    /// Fails with a decoding error if the point does not carry a valid
    /// payload length marker.
    fn data(&self) -> Result<Vec<u8>>;

    /// Set to the sum `a + b` under the group law.
    fn add(&mut self, a: &dyn Point, b: &dyn Point) -> &mut dyn Point;

    /// Set to the difference `a - b` under the group law.
    fn sub(&mut self, a: &dyn Point, b: &dyn Point) -> &mut dyn Point;

    /// Set to the negation of point `a`.
    fn neg(&mut self, a: &dyn Point) -> &mut dyn Point;

    /// Set to `s * base` where `base` defaults to the group's standard
    /// base point when `None`.
    ///
    /// Correct for the zero scalar (identity) and for a scalar equal to
    /// the group order (identity).
    fn mul(&mut self, s: &dyn Scalar, base: Option<&dyn Point>) -> &mut dyn Point;
}

impl Clone for Box<dyn Point> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

/// A group: factories for points and scalars plus the sizes of their
/// canonical encodings.
pub trait Group: Send + Sync {
    /// Canonical name of the group, e.g. `"Ed25519"` or `"P256"`.
    fn name(&self) -> String;

    /// Size in bytes of an encoded scalar.
    fn scalar_len(&self) -> usize;

    /// Fresh zero scalar bound to this group.
    fn scalar(&self) -> Box<dyn Scalar>;

    /// Size in bytes of an encoded point.
    fn point_len(&self) -> usize;

    /// Fresh neutral point bound to this group.
    fn point(&self) -> Box<dyn Point>;

    /// Whether this group's arithmetic is constant-time.
    ///
    /// Variable-time implementations are allowed for performance but must
    /// advertise it here so the registry's enforcement mode can exclude
    /// them.
    fn constant_time(&self) -> bool;
}
