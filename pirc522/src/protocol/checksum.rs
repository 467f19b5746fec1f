// pirc522/src/protocol/checksum.rs
//! Software checksums: the serial number BCC and ISO 14443-3 CRC_A.

/// Block check character of a serial number: XOR of the identity bytes.
pub fn bcc(identity: &[u8]) -> u8 {
    identity.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// ISO/IEC 14443-3 CRC_A (preset 0x6363, reflected polynomial 0x8408).
///
/// Returned low byte first, the order the chip's CRC result registers are
/// read back and appended to a frame.
pub fn crc_a(data: &[u8]) -> [u8; 2] {
    let mut crc: u16 = 0x6363;
    for &b in data {
        let mut ch = b ^ (crc & 0x00ff) as u8;
        ch ^= ch << 4;
        crc = (crc >> 8) ^ ((ch as u16) << 8) ^ ((ch as u16) << 3) ^ ((ch as u16) >> 4);
    }
    crc.to_le_bytes()
}
