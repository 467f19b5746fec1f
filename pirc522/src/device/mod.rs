// pirc522/src/device/mod.rs
//! The reader handle and everything that talks to the chip through it.

pub mod access;
pub mod builder;
pub mod crc;
pub mod engine;
pub mod handle;
pub mod session;

pub use builder::DeviceBuilder;
pub use engine::{Fault, PollExit, TransactionResult};
pub use handle::{Device, Initialized, Uninitialized};
pub use session::AuthSession;
