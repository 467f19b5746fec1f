#[path = "../common/mod.rs"]
mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use pirc522::presence::{Presence, PRESENCE_WAIT_MS};
use pirc522::protocol::Register;
use serial_test::serial;

#[test]
#[serial]
fn tag_already_in_field_is_found_immediately() -> anyhow::Result<()> {
    let (mut dev, chip, _) = common::default_device();
    chip.push_frame(&common::fixtures::classic_atqa());

    let start = Instant::now();
    assert_eq!(dev.wait_for_tag()?, 1);
    assert!(start.elapsed() < Duration::from_millis(PRESENCE_WAIT_MS));
    // chip is reinitialized after detection
    assert_eq!(chip.register(Register::TMode), 0x8D);
    Ok(())
}

#[test]
#[serial]
fn tag_arriving_later_is_picked_up_on_a_later_cycle() -> anyhow::Result<()> {
    let (mut dev, chip, _) = common::default_device();
    let arriving = chip.clone();
    let arrival = thread::spawn(move || {
        thread::sleep(Duration::from_millis(220));
        arriving.push_frame(&[0x04, 0x00]);
    });

    let presence = dev.wait_for_tag_until(&AtomicBool::new(false))?;
    arrival.join().unwrap();
    match presence {
        Presence::Detected { attempts } => assert!(attempts >= 3),
        other => panic!("expected detection, got {:?}", other),
    }
    Ok(())
}

#[test]
#[serial]
fn empty_field_re_arms_every_cycle() -> anyhow::Result<()> {
    let (mut dev, chip, _) = common::default_device();
    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);
    let stopper = thread::spawn(move || {
        thread::sleep(Duration::from_millis(6 * PRESENCE_WAIT_MS));
        flag.store(true, Ordering::Release);
    });

    let presence = dev.wait_for_tag_until(&stop)?;
    stopper.join().unwrap();

    assert!(!presence.is_detected());
    assert!(presence.attempts() >= 3);
    // one REQUEST frame per arm cycle, no attempt limit
    assert_eq!(chip.sent_frames().len(), presence.attempts());
    assert!(chip.writes_to(Register::BitFraming).iter().all(|&v| v == 0x87));
    Ok(())
}
