//! Fixed-size binary encoding of group elements.

use std::any::Any;
use std::fmt::Debug;
use std::io::{Read, Write};

use crate::error::Result;

/// Canonical fixed-length wire encoding.
///
/// Every point and scalar encodes to a byte string of exactly
/// [`marshal_size`](Marshaling::marshal_size) bytes, with no framing or
/// delimiters; decoding a buffer of any other length is a hard error.
/// Sequences of such objects are concatenated by the suite codec, so the
/// decoder must know the expected type sequence in advance.
pub trait Marshaling: Any + Debug + Send + Sync {
    /// Encoded length of this object in bytes.
    fn marshal_size(&self) -> usize;

    /// Encode the contents of this object into a fresh byte vector.
    fn marshal_binary(&self) -> Result<Vec<u8>>;

    /// Decode this object in place from `data`.
    ///
    /// Fails with a decoding error on wrong length or, where membership is
    /// checked, on bytes that do not name a valid element.
    fn unmarshal_binary(&mut self, data: &[u8]) -> Result<()>;

    /// Encode this object and write it to `w`, returning the byte count.
    fn marshal_to(&self, w: &mut dyn Write) -> Result<usize> {
        let buf = self.marshal_binary()?;
        w.write_all(&buf)?;
        Ok(buf.len())
    }

    /// Decode this object by reading exactly `marshal_size` bytes from `r`.
    fn unmarshal_from(&mut self, r: &mut dyn Read) -> Result<usize> {
        let mut buf = vec![0u8; self.marshal_size()];
        r.read_exact(&mut buf)?;
        self.unmarshal_binary(&buf)?;
        Ok(buf.len())
    }

    /// Concrete-type recovery for callers holding a trait object.
    fn as_any(&self) -> &dyn Any;
}
