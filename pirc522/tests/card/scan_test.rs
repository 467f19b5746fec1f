#[path = "../common/mod.rs"]
mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use pirc522::transport::mock::MockReply;
use serial_test::serial;

#[test]
fn read_uid_survives_a_collision_round() -> anyhow::Result<()> {
    let (mut dev, chip, _) = common::default_device();
    // first pair: REQUEST answered, ANTICOLLISION collides
    chip.push_frame(&common::fixtures::classic_atqa());
    chip.push_reply(MockReply::ChipError(0x08));
    pirc522::test_support::seed_tag(
        &chip,
        common::fixtures::classic_atqa(),
        common::fixtures::sample_identity(),
    );

    let card = dev.read_uid(3)?;
    assert_eq!(card.uid(), &common::fixtures::sample_uid());
    assert_eq!(chip.sent_frames().len(), 4);
    Ok(())
}

#[test]
#[serial]
fn scan_waits_for_tag_then_reads_it() -> anyhow::Result<()> {
    let (mut dev, chip, _) = common::default_device();
    // answer to the armed REQUEST, then the read itself
    chip.push_frame(&common::fixtures::classic_atqa());
    pirc522::test_support::seed_tag(
        &chip,
        common::fixtures::classic_atqa(),
        common::fixtures::sample_identity(),
    );

    let card = dev.scan(&AtomicBool::new(false))?;
    assert_eq!(card.map(|c| *c.uid()), Some(common::fixtures::sample_uid()));
    Ok(())
}

#[test]
#[serial]
fn scan_can_be_stopped_from_another_thread() -> anyhow::Result<()> {
    let (mut dev, _chip, _) = common::default_device();
    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);
    let stopper = thread::spawn(move || {
        thread::sleep(Duration::from_millis(150));
        flag.store(true, Ordering::Release);
    });

    assert_eq!(dev.scan(&stop)?, None);
    stopper.join().unwrap();
    Ok(())
}
