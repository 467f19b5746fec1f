#[path = "../common/mod.rs"]
mod common;

use pirc522::config::ReaderConfig;
use pirc522::protocol::Register;
use pirc522::transport::mock::GpioOp;

#[test]
fn chip_select_frames_every_transfer() -> anyhow::Result<()> {
    let config = ReaderConfig::default().pins(22, 24, 18);
    let (mut dev, _chip, gpio) = common::built_device(config)?;
    let before = gpio.ops().len();

    dev.read_register(Register::Version)?;
    let ops = gpio.ops();
    assert_eq!(&ops[before..], &[GpioOp::Set(24, false), GpioOp::Set(24, true)]);
    Ok(())
}

#[test]
fn reset_closes_session_and_reinit_restores_timer() -> anyhow::Result<()> {
    let (mut dev, chip, _) = common::default_device();
    dev.session_mut().mark_open();
    dev.write_register(Register::TPrescaler, 0x00)?;

    dev.init()?;
    assert!(!dev.session().is_open());
    assert_eq!(chip.register(Register::TPrescaler), 0x3E);
    Ok(())
}

#[test]
fn antenna_toggles() -> anyhow::Result<()> {
    let (mut dev, chip, _) = common::default_device();
    dev.set_antenna(false)?;
    assert_eq!(chip.register(Register::TxControl) & 0x03, 0);
    dev.set_antenna(true)?;
    assert_eq!(chip.register(Register::TxControl) & 0x03, 0x03);

    // Already on: no write
    chip.clear_log();
    dev.set_antenna(true)?;
    assert!(chip.writes_to(Register::TxControl).is_empty());
    Ok(())
}

#[test]
fn cleanup_stops_crypto_before_releasing_pins() -> anyhow::Result<()> {
    let (mut dev, chip, gpio) = common::default_device();
    chip.set_register(Register::Status2, 0x08);
    dev.session_mut().mark_open();

    dev.cleanup()?;
    assert_eq!(chip.register(Register::Status2) & 0x08, 0);
    assert_eq!(chip.register(Register::TxControl) & 0x03, 0);
    assert_eq!(gpio.ops().last(), Some(&GpioOp::Cleanup));
    Ok(())
}
