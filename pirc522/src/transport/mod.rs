// pirc522/src/transport/mod.rs
//! Bus and pin abstractions, with a mock chip and an embedded-hal adapter.

#[cfg(feature = "hal")]
pub mod hal;
pub mod mock;
pub mod traits;

#[cfg(feature = "hal")]
pub use hal::HalTransport;
pub use mock::{BusOp, GpioOp, MockChip, MockGpio, MockReply};
pub use traits::{Gpio, Transport};
