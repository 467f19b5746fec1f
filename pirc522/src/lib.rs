// pirc522/src/lib.rs

//! pirc522
//!
//! Driver core for the MFRC522 contactless reader chip: register access,
//! the chip's command engine and CRC coprocessor, ISO 14443A REQUEST,
//! ANTICOLLISION and SELECT, and an interrupt-driven wait for tags.
#![warn(missing_docs)]

pub mod card;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod presence;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
