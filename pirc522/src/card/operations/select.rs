//! SELECT, cascade level 1.

use log::debug;

use crate::constants::SAK_BITS;
use crate::device::{Device, Initialized};
use crate::protocol::Mode;
use crate::protocol::commands::select_frame;
use crate::types::Uid;
use crate::{Error, Result};

/// Commit to `uid`. The tag must answer with SAK + CRC (24 bits); the SAK
/// byte is returned.
pub fn select_tag(device: &mut Device<Initialized>, uid: &Uid) -> Result<u8> {
    let mut buf = select_frame(uid);
    let crc = device.compute_crc(&buf)?;
    buf.extend_from_slice(&crc);

    let result = device.execute(Mode::Transceive, &buf)?.into_result()?;
    if result.bits != SAK_BITS {
        debug!("select {}: got {} bits", uid, result.bits);
        return Err(Error::ResponseShape {
            expected_bits: SAK_BITS,
            actual_bits: result.bits,
        });
    }
    Ok(result.data[0])
}
