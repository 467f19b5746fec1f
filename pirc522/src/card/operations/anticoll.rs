//! ANTICOLLISION, cascade level 1.

use log::debug;

use crate::constants::{BIT_FRAMING_FULL_BYTES, UID_BITS, UID_LEN};
use crate::device::{Device, Initialized};
use crate::protocol::commands::anticoll_frame;
use crate::protocol::{Mode, Register};
use crate::types::Uid;
use crate::{Error, Result};

/// Cascade level 1 anti-collision: fetch the serial number of the tag that
/// answered REQUEST and verify its check byte.
///
/// On a check byte mismatch the raw response travels in
/// [`Error::ChecksumMismatch`].
pub fn anticoll(device: &mut Device<Initialized>) -> Result<Uid> {
    device.write_register(Register::BitFraming, BIT_FRAMING_FULL_BYTES)?;
    let result = device
        .execute(Mode::Transceive, &anticoll_frame())?
        .into_result()?;

    if result.data.len() != UID_LEN {
        debug!("anticoll: {} bytes back", result.data.len());
        return Err(Error::ResponseShape {
            expected_bits: UID_BITS,
            actual_bits: result.bits,
        });
    }
    let uid = Uid::try_from(&result.data[..])?;
    debug!("anticoll: uid {}", uid);
    Ok(uid)
}
