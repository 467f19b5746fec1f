#[path = "../common/mod.rs"]
mod common;

use pirc522::config::ReaderConfig;
use pirc522::device::{Device, Initialized};
use pirc522::protocol::Register;
use pirc522::transport::mock::{GpioOp, MockChip, MockGpio};

#[test]
fn initialize_transitions_and_keeps_config() {
    let chip = MockChip::new();
    let gpio = MockGpio::wired_to(&chip);
    let config = ReaderConfig::default().bus(1, 2).speed_hz(500_000);
    let device = Device::new(Box::new(chip.clone()), Box::new(gpio.clone()), config.clone());

    // Register access already works before initialization
    let mut device = device;
    assert_eq!(device.version().unwrap(), 0x92);

    let initialized: Device<Initialized> = device.initialize().unwrap();
    assert_eq!(initialized.config(), &config);
    assert!(gpio.ops().contains(&GpioOp::WatchFallingEdge(18)));
    assert_eq!(chip.register(Register::Mode), 0x3D);
}

#[test]
fn builder_path_turns_antenna_on() {
    let (mut dev, chip, _) = common::default_device();
    assert_eq!(chip.register(Register::TxControl) & 0x03, 0x03);
    assert_eq!(dev.read_register(Register::TxAsk).unwrap(), 0x40);
}
