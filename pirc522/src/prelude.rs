// pirc522/src/prelude.rs
//! Everything needed to drive a reader: `use pirc522::prelude::*;`.

pub use crate::card::Card;
pub use crate::config::ReaderConfig;
pub use crate::device::{Device, DeviceBuilder, TransactionResult};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::presence::{IrqEvent, Presence};
pub use crate::protocol::{Mode, Register};
pub use crate::transport::{Gpio, Transport};
pub use crate::{Atqa, Error, PinNumbering, ReqMode, Result, Uid};

pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
