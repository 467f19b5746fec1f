// fixtures.rs: tag identities and canned card replies

use pirc522::protocol::crc_a;
use pirc522::types::Uid;

/// Identity of the tag most tests read.
pub fn sample_identity() -> [u8; 4] {
    [0x3A, 0x7F, 0x10, 0xC4]
}

pub fn sample_uid() -> Uid {
    Uid::from_identity(sample_identity())
}

/// ATQA of a MIFARE Classic 1K
pub fn classic_atqa() -> [u8; 2] {
    hex_bytes("04 00").try_into().unwrap()
}

/// SAK of a MIFARE Classic 1K
pub const CLASSIC_SAK: u8 = 0x08;

/// SELECT acknowledge frame: SAK followed by its CRC_A.
pub fn sak_frame(sak: u8) -> Vec<u8> {
    let crc = crc_a(&[sak]);
    vec![sak, crc[0], crc[1]]
}

/// 5-byte ANTICOLLISION answer whose check byte is wrong.
pub fn corrupt_uid_frame() -> Vec<u8> {
    let mut frame = sample_uid().as_bytes().to_vec();
    frame[4] ^= 0xFF;
    frame
}

pub fn hex_bytes(text: &str) -> Vec<u8> {
    hex::decode(text.replace(' ', "")).unwrap()
}
