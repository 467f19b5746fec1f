// pirc522/src/protocol/mod.rs
//! Chip vocabulary: registers, command codes and checksums.

pub mod checksum;
pub mod commands;
pub mod registers;

pub use checksum::{bcc, crc_a};
pub use commands::Mode;
pub use registers::Register;
