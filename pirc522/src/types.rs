// pirc522/src/types.rs
//! Value types exchanged with tags.

use crate::Error;
use crate::constants::{PICC_REQALL, PICC_REQIDL, UID_LEN};
use crate::protocol::checksum::bcc;
use std::convert::TryFrom;

/// Tag serial number: 4 identity bytes followed by the BCC check byte.
///
/// A `Uid` only exists once the check byte has been verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; UID_LEN]);

impl Uid {
    /// Build from the 4 identity bytes, computing the check byte.
    pub fn from_identity(identity: [u8; 4]) -> Self {
        let check = bcc(&identity);
        Self([identity[0], identity[1], identity[2], identity[3], check])
    }

    /// Identity bytes followed by the check byte.
    pub fn as_bytes(&self) -> &[u8; UID_LEN] {
        &self.0
    }

    /// The 4 identity bytes.
    pub fn identity(&self) -> [u8; 4] {
        [self.0[0], self.0[1], self.0[2], self.0[3]]
    }

    /// The BCC check byte.
    pub fn check_byte(&self) -> u8 {
        self.0[4]
    }

    /// Identity bytes as a big-endian number, the way readers usually print it.
    pub fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.identity())
    }

    /// Identity bytes as compact lowercase hex.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.identity())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != UID_LEN {
            return Err(Error::InvalidLength {
                expected: UID_LEN,
                actual: bytes.len(),
            });
        }
        let expected = bcc(&bytes[..4]);
        if expected != bytes[4] {
            return Err(Error::ChecksumMismatch {
                expected,
                actual: bytes[4],
                raw: bytes.to_vec(),
            });
        }
        let mut arr = [0u8; UID_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

impl std::str::FromStr for Uid {
    type Err = Error;

    /// Parse 5 hex bytes, spaces allowed. The check byte is validated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = crate::utils::parse_hex(s).map_err(Error::Parse)?;
        Uid::try_from(bytes.as_slice())
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::utils::bytes_to_hex_spaced(self.as_bytes()))
    }
}

/// Answer to request: the 2-byte tag type indicator returned by REQUEST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atqa([u8; 2]);

impl Atqa {
    /// Wrap the two ATQA bytes as received.
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// Bytes in reception order.
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// Little-endian value, e.g. 0x0004 for MIFARE Classic 1K.
    pub fn as_u16(&self) -> u16 {
        u16::from_le_bytes(self.0)
    }
}

impl TryFrom<&[u8]> for Atqa {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 2 {
            return Err(Error::InvalidLength {
                expected: 2,
                actual: bytes.len(),
            });
        }
        Ok(Self([bytes[0], bytes[1]]))
    }
}

/// REQUEST flavour: wake idle tags only, or every tag in the field.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum ReqMode {
    #[default]
    /// REQA (0x26)
    #[display(fmt = "REQIDL")]
    Idle = PICC_REQIDL,
    /// WUPA (0x52)
    #[display(fmt = "REQALL")]
    All = PICC_REQALL,
}

impl ReqMode {
    /// Command byte sent to the tag
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// GPIO pin numbering scheme handed to the GPIO collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinNumbering {
    /// Physical header pin numbers
    #[default]
    Board,
    /// SoC (Broadcom) GPIO numbers
    Bcm,
}
