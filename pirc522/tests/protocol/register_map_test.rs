use pirc522::protocol::{Mode, Register};
use pirc522::Error;

#[test]
fn address_frames_keep_the_framing_bits() {
    for reg in Register::ALL {
        // MSB selects read, LSB is always zero
        assert_eq!(reg.read_frame() & 0x81, 0x80);
        assert_eq!(reg.write_frame() & 0x81, 0x00);
        assert_eq!(Register::try_from(reg.addr()), Ok(reg));
    }
}

#[test]
fn unknown_addresses_are_rejected() {
    assert_eq!(Register::from_addr(0x00), Err(Error::InvalidRegister(0x00)));
    assert_eq!(Register::from_addr(0x3F), Err(Error::InvalidRegister(0x3F)));
}

#[test]
fn command_codes() {
    assert_eq!(Mode::Transceive.code(), 0x0C);
    assert_eq!(Mode::CalcCrc.code(), 0x03);
    assert_eq!(Mode::from_code(0x2F), Some(Mode::SoftReset));
    assert_eq!(Mode::from_code(0x01), None);
}
