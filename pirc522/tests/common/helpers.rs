// helpers.rs: mock-backed device construction for integration tests

use pirc522::config::ReaderConfig;
use pirc522::device::{Device, DeviceBuilder, Initialized};
use pirc522::transport::mock::{MockChip, MockGpio};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build an initialized device through the public builder, returning handles
/// on the mock chip and pins it drives.
pub fn built_device(config: ReaderConfig) -> anyhow::Result<(Device<Initialized>, MockChip, MockGpio)> {
    init_logger();
    let chip = MockChip::new();
    let gpio = MockGpio::wired_to(&chip);
    let device = DeviceBuilder::new()
        .with_transport(Box::new(chip.clone()))
        .with_gpio(Box::new(gpio.clone()))
        .with_config(config)
        .build()?;
    Ok((device, chip, gpio))
}

pub fn default_device() -> (Device<Initialized>, MockChip, MockGpio) {
    built_device(ReaderConfig::default()).unwrap()
}
