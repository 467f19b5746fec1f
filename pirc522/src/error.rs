// pirc522/src/error.rs
//! Error type shared by the whole crate.

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The builder was not given a transport and a GPIO driver
    #[error("device not found")]
    DeviceNotFound,

    /// Bus transfer failed or returned a malformed reply
    #[error("bus transfer error: {0}")]
    Transport(String),

    /// Pin configuration or output failed
    #[error("gpio error: {0}")]
    Gpio(String),

    /// A byte sequence had the wrong length for its value type
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length
        expected: usize,
        /// Length seen
        actual: usize,
    },

    /// Address outside the register map
    #[error("invalid register address: {0:#04x}")]
    InvalidRegister(u8),

    /// No answer: poll budget exhausted or chip timer expired
    #[error("operation timed out")]
    Timeout,

    /// ErrorReg reported failure bits
    #[error("chip reported protocol error: error_reg={error_reg:#04x}")]
    Protocol {
        /// ErrorReg masked with the failure bits
        error_reg: u8,
    },

    /// A card answer had the wrong length for the operation
    #[error("unexpected response length: expected {expected_bits} bits, got {actual_bits}")]
    ResponseShape {
        /// Bits the operation requires
        expected_bits: usize,
        /// Bits received
        actual_bits: usize,
    },

    /// Serial number check byte did not match its identity bytes
    #[error("uid checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// XOR of the identity bytes
        expected: u8,
        /// Check byte received
        actual: u8,
        /// The unvalidated response
        raw: Vec<u8>,
    },

    /// Malformed hex text
    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Bus and GPIO failures are fatal; everything else can be retried by
    /// re-issuing the card operation.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Error::Transport(_) | Error::Gpio(_) | Error::DeviceNotFound | Error::InvalidRegister(_)
        )
    }
}

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, Error>;
