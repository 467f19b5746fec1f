//! Small helpers shared across the crate: hex formatting for logs and
//! millisecond durations.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
