//! Error handling for the group and suite layers

pub mod validate;

use thiserror::Error;

/// The error type shared by every crate in the workspace.
///
/// Algebraic operations that can only fail on genuine programmer error
/// (inverting the zero scalar, dividing by the additive identity) are
/// documented caller preconditions rather than runtime-checked errors.
/// Everything that touches untrusted bytes or process-wide state reports
/// through this enum instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Byte input whose length does not match the fixed encoding size.
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Bytes of the right length that do not decode to a valid element,
    /// or a point that carries no valid embedded payload.
    #[error("cannot decode {context}: {reason}")]
    Decoding {
        /// What was being decoded
        context: &'static str,
        /// Reason the input was rejected
        reason: &'static str,
    },

    /// Suite name not present in the registry.
    #[error("unknown suite {0:?}")]
    UnknownSuite(String),

    /// Suite present but excluded by constant-time enforcement.
    #[error("suite {0:?} is not constant-time")]
    VariableTimeSuite(String),

    /// I/O failure while streaming an encoding.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for all group and suite operations
pub type Result<T> = core::result::Result<T, Error>;
