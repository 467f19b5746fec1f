#[path = "../common/mod.rs"]
mod common;

use pirc522::device::{Fault, PollExit};
use pirc522::protocol::{Mode, Register};
use pirc522::transport::mock::MockReply;
use pirc522::Error;

#[test]
fn transceive_collects_frame_and_bit_count() {
    let (mut dev, chip, _) = common::default_device();
    chip.push_reply(MockReply::Frame {
        data: vec![0x11, 0x22, 0x33],
        last_bits: 0,
    });

    let result = dev.execute(Mode::Transceive, &[0x30, 0x04]).unwrap();
    assert!(!result.is_error());
    assert_eq!(result.exit, PollExit::WaitCondition);
    assert_eq!(result.data, vec![0x11, 0x22, 0x33]);
    assert_eq!(result.bits, 24);
    assert_eq!(chip.sent_frames(), vec![vec![0x30, 0x04]]);
    // StartSend is released after every transaction
    assert_eq!(chip.register(Register::BitFraming) & 0x80, 0);
}

#[test]
fn silent_card_is_a_timer_timeout() -> anyhow::Result<()> {
    let (mut dev, chip, _) = common::default_device();
    chip.push_reply(MockReply::Silence);

    let result = dev.execute(Mode::Transceive, &[0x26])?;
    assert_eq!(result.exit, PollExit::TimerExpired);
    assert_eq!(result.fault, Some(Fault::TimerExpired));
    assert_eq!(result.into_result(), Err(Error::Timeout));
    Ok(())
}

#[test]
fn no_irq_exhausts_budget() -> anyhow::Result<()> {
    let (mut dev, chip, _) = common::default_device();
    chip.clear_log();

    let result = dev.execute(Mode::Transceive, &[0x26])?;
    assert_eq!(result.exit, PollExit::BudgetExhausted);
    assert_eq!(result.fault, Some(Fault::NoResponse));
    assert!(result.data.is_empty());
    // the extra read belongs to the flag clear before the FIFO is loaded
    assert_eq!(chip.reads_of(Register::ComIrq), 2000 + 1);
    Ok(())
}

#[test]
fn chip_error_bits_become_protocol_error() {
    let (mut dev, chip, _) = common::default_device();
    chip.push_reply(MockReply::ChipError(0x08));

    let result = dev.execute(Mode::Transceive, &[0x93, 0x20]).unwrap();
    assert_eq!(result.fault, Some(Fault::ChipError(0x08)));
    assert_eq!(
        result.into_result(),
        Err(Error::Protocol { error_reg: 0x08 })
    );
}

#[test]
fn compute_crc_agrees_with_software_crc() {
    let (mut dev, _chip, _) = common::default_device();
    let frame = common::fixtures::hex_bytes("93 70 3a 7f 10 c4 91");
    assert_eq!(dev.compute_crc(&frame).unwrap(), pirc522::protocol::crc_a(&frame));
}
