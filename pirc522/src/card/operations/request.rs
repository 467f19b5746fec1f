//! REQUEST (REQA / WUPA).

use log::debug;

use crate::constants::{ATQA_BITS, BIT_FRAMING_SHORT_FRAME};
use crate::device::{Device, Initialized};
use crate::protocol::{Mode, Register};
use crate::types::{Atqa, ReqMode};
use crate::{Error, Result};

/// Wake tags in the field. Succeeds only when exactly one 16-bit ATQA comes
/// back.
pub fn request(device: &mut Device<Initialized>, mode: ReqMode) -> Result<Atqa> {
    // REQA/WUPA are 7-bit short frames
    device.write_register(Register::BitFraming, BIT_FRAMING_SHORT_FRAME)?;
    let result = device.execute(Mode::Transceive, &[mode.code()])?.into_result()?;

    if result.bits != ATQA_BITS {
        debug!("{}: got {} bits instead of an ATQA", mode, result.bits);
        return Err(Error::ResponseShape {
            expected_bits: ATQA_BITS,
            actual_bits: result.bits,
        });
    }
    Atqa::try_from(&result.data[..])
}
