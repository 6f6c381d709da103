//! Extendable-output function used by the built-in suites
//!
//! All suites key a SHAKE-256 stream with the caller's seed. The stream
//! also implements [`RngCore`] so it can drive `pick` and `embed`
//! deterministically.

use rand::RngCore;
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake256, Shake256Reader};

use ecsuite_api::Xof;

/// A SHAKE-256 extendable-output stream keyed by a seed.
pub struct Shake256Xof {
    reader: Shake256Reader,
}

impl Shake256Xof {
    /// Create a stream absorbed over `seed`.
    pub fn new(seed: &[u8]) -> Self {
        let mut hasher = Shake256::default();
        hasher.update(seed);
        Shake256Xof {
            reader: hasher.finalize_xof(),
        }
    }
}

impl Xof for Shake256Xof {
    fn squeeze(&mut self, output: &mut [u8]) {
        self.reader.read(output);
    }
}

impl RngCore for Shake256Xof {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.reader.read(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.reader.read(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.reader.read(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.reader.read(dest);
        Ok(())
    }
}
