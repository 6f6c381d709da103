//! The suite bundle: one group plus the non-algebraic primitives a
//! protocol needs, so consumers never import a concrete curve module.

use std::io::{Read, Write};

use digest::DynDigest;
use rand::RngCore;

use crate::error::Result;
use crate::traits::{Group, Marshaling, Xof};

/// The abstract element kinds a suite can mint for generic decoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// A group element.
    Point,
    /// An exponent value.
    Scalar,
}

/// A fixed bundle of one group with hash, XOF, randomness and a canonical
/// stream codec. Immutable after construction; one instance represents one
/// algorithm combination.
pub trait Suite: Group {
    /// Fresh cryptographic hash instance (SHA-256 in all built-in suites).
    fn hash(&self) -> Box<dyn DynDigest>;

    /// Fresh extendable-output stream keyed by `seed`.
    fn xof(&self, seed: &[u8]) -> Box<dyn Xof>;

    /// Fresh cryptographically secure byte stream backed by the operating
    /// system's randomness source.
    fn random_stream(&self) -> Box<dyn RngCore>;

    /// Sequentially write each object's fixed-size encoding to `w`, in
    /// order, with no delimiters or length prefixes.
    fn write(&self, w: &mut dyn Write, objs: &[&dyn Marshaling]) -> Result<()> {
        for obj in objs {
            obj.marshal_to(w)?;
        }
        Ok(())
    }

    /// Sequentially decode from `r` into the caller-supplied destination
    /// objects; each consumes exactly its own `marshal_size` bytes, so the
    /// caller must supply freshly constructed objects in the expected type
    /// order.
    fn read(&self, r: &mut dyn Read, objs: &mut [&mut dyn Marshaling]) -> Result<()> {
        for obj in objs.iter_mut() {
            obj.unmarshal_from(r)?;
        }
        Ok(())
    }

    /// Fresh zero-valued element of the requested abstract kind, bound to
    /// this suite's group. Used by generic decoding code that does not
    /// know the concrete curve ahead of time.
    fn new_element(&self, kind: ElementKind) -> Box<dyn Marshaling> {
        match kind {
            ElementKind::Point => self.point(),
            ElementKind::Scalar => self.scalar(),
        }
    }
}
