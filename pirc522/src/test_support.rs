//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockChip setup so tests across the crate
//! and the tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::config::ReaderConfig;
use crate::device::{Device, Initialized, Uninitialized};
use crate::transport::mock::{MockChip, MockGpio};

/// Build a Device<Uninitialized> over a fresh MockChip with a MockGpio wired
/// to it. The returned mocks share state with the ones inside the device.
#[doc(hidden)]
pub fn uninitialized_mock_device(
    config: ReaderConfig,
) -> (Device<Uninitialized>, MockChip, MockGpio) {
    let chip = MockChip::new();
    let gpio = MockGpio::wired_to(&chip);
    let device = Device::new(Box::new(chip.clone()), Box::new(gpio.clone()), config);
    (device, chip, gpio)
}

/// Convenience: create and initialize a mock-backed device with the default
/// wiring. Panics if initialization fails, which a fresh mock never does.
#[doc(hidden)]
pub fn initialized_mock_device() -> (Device<Initialized>, MockChip, MockGpio) {
    let (device, chip, gpio) = uninitialized_mock_device(ReaderConfig::default());
    let device = device
        .initialize()
        .expect("mock device initialization cannot fail");
    (device, chip, gpio)
}

/// Seed the replies of a REQUEST + ANTICOLLISION exchange for `identity`.
#[doc(hidden)]
pub fn seed_tag(chip: &MockChip, atqa: [u8; 2], identity: [u8; 4]) {
    chip.push_frame(&atqa);
    let uid = crate::types::Uid::from_identity(identity);
    chip.push_frame(uid.as_bytes());
}
