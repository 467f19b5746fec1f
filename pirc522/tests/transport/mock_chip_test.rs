use pirc522::protocol::{crc_a, Register};
use pirc522::transport::mock::{BusOp, MockChip, MockReply};
use pirc522::transport::Transport;

fn write(chip: &mut MockChip, reg: Register, value: u8) {
    chip.transfer(&[reg.write_frame(), value]).unwrap();
}

fn read(chip: &mut MockChip, reg: Register) -> u8 {
    chip.transfer(&[reg.read_frame(), 0x00]).unwrap()[1]
}

#[test]
fn register_file_over_raw_frames() {
    let mut chip = MockChip::new();
    assert_eq!(read(&mut chip, Register::Version), 0x92);
    write(&mut chip, Register::TMode, 0x8D);
    assert_eq!(read(&mut chip, Register::TMode), 0x8D);
    assert_eq!(
        chip.log(),
        vec![
            BusOp::Read(Register::Version),
            BusOp::Write(Register::TMode, 0x8D),
            BusOp::Read(Register::TMode),
        ]
    );
}

#[test]
fn irq_registers_set_and_clear_marked_flags() {
    let mut chip = MockChip::new();
    write(&mut chip, Register::ComIrq, 0x80 | 0x21);
    assert_eq!(read(&mut chip, Register::ComIrq), 0x21);
    write(&mut chip, Register::ComIrq, 0x01);
    assert_eq!(read(&mut chip, Register::ComIrq), 0x20);
}

#[test]
fn calc_crc_command_fills_result_registers() {
    let mut chip = MockChip::new();
    for b in [0x93, 0x70] {
        write(&mut chip, Register::FifoData, b);
    }
    write(&mut chip, Register::Command, 0x03);
    let crc = crc_a(&[0x93, 0x70]);
    assert_eq!(read(&mut chip, Register::CrcResultL), crc[0]);
    assert_eq!(read(&mut chip, Register::CrcResultH), crc[1]);
    assert_eq!(read(&mut chip, Register::DivIrq) & 0x04, 0x04);
}

#[test]
fn transceive_pops_scripted_reply() {
    let mut chip = MockChip::new();
    chip.push_reply(MockReply::Frame {
        data: vec![0x04, 0x00],
        last_bits: 0,
    });
    write(&mut chip, Register::FifoData, 0x26);
    write(&mut chip, Register::Command, 0x0C);
    write(&mut chip, Register::BitFraming, 0x87);

    assert_eq!(chip.sent_frames(), vec![vec![0x26]]);
    assert_eq!(read(&mut chip, Register::FifoLevel), 2);
    assert_eq!(read(&mut chip, Register::FifoData), 0x04);
    assert_eq!(read(&mut chip, Register::ComIrq) & 0x30, 0x30);
}

#[test]
fn flush_empties_fifo() {
    let mut chip = MockChip::new();
    write(&mut chip, Register::FifoData, 0xAA);
    assert_eq!(chip.fifo_len(), 1);
    write(&mut chip, Register::FifoLevel, 0x80);
    assert_eq!(chip.fifo_len(), 0);
}
