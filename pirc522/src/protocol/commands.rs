// pirc522/src/protocol/commands.rs
//! Chip command codes and card-facing frames.

/// Operation modes written to CommandReg. Exactly one is active per
/// transaction.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Mode {
    /// No command; cancels the running one
    #[display(fmt = "idle")]
    Idle = 0x00,
    /// Run the CRC coprocessor over the FIFO
    #[display(fmt = "calc-crc")]
    CalcCrc = 0x03,
    /// Send the FIFO contents
    #[display(fmt = "transmit")]
    Transmit = 0x04,
    /// Activate the receiver
    #[display(fmt = "receive")]
    Receive = 0x08,
    /// Send the FIFO, then receive the answer
    #[display(fmt = "transceive")]
    Transceive = 0x0C,
    /// MIFARE Classic authentication
    #[display(fmt = "authenticate")]
    Authenticate = 0x0E,
    /// Reset the chip
    #[display(fmt = "soft-reset")]
    SoftReset = 0x0F,
}

impl Mode {
    /// CommandReg value
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode the command bits (low nibble) of a CommandReg value.
    pub fn from_code(code: u8) -> Option<Self> {
        match code & 0x0F {
            0x00 => Some(Self::Idle),
            0x03 => Some(Self::CalcCrc),
            0x04 => Some(Self::Transmit),
            0x08 => Some(Self::Receive),
            0x0C => Some(Self::Transceive),
            0x0E => Some(Self::Authenticate),
            0x0F => Some(Self::SoftReset),
            _ => None,
        }
    }
}

/// Anti-collision frame for cascade level 1 (SEL, NVB)
pub fn anticoll_frame() -> [u8; 2] {
    [crate::constants::PICC_ANTICOLL_CL1, crate::constants::NVB_ANTICOLL]
}

/// SELECT frame for cascade level 1 without the trailing CRC
pub fn select_frame(uid: &crate::types::Uid) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2 + crate::constants::UID_LEN + 2);
    buf.push(crate::constants::PICC_SELECT_CL1);
    buf.push(crate::constants::NVB_SELECT);
    buf.extend_from_slice(uid.as_bytes());
    buf
}
