#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{classic_atqa, corrupt_uid_frame, sak_frame, sample_uid, CLASSIC_SAK};
use pirc522::card::Card;
use pirc522::protocol::crc_a;
use pirc522::transport::mock::MockReply;
use pirc522::types::ReqMode;
use pirc522::Error;

#[test]
fn request_anticoll_select_sequence() -> anyhow::Result<()> {
    let (mut dev, chip, _) = common::default_device();
    let uid = sample_uid();
    chip.push_frame(&classic_atqa());
    chip.push_frame(uid.as_bytes());
    chip.push_frame(&sak_frame(CLASSIC_SAK));

    let atqa = dev.request(ReqMode::Idle)?;
    let read = dev.anticoll()?;
    let card = Card::new(atqa, read);
    let sak = card.select(&mut dev)?;

    assert_eq!(card.uid(), &uid);
    assert_eq!(sak, CLASSIC_SAK);

    let sent = chip.sent_frames();
    assert_eq!(sent[0], vec![0x26]);
    assert_eq!(sent[1], vec![0x93, 0x20]);
    let mut select = vec![0x93, 0x70];
    select.extend_from_slice(uid.as_bytes());
    let crc = crc_a(&select);
    select.extend_from_slice(&crc);
    assert_eq!(sent[2], select);
    Ok(())
}

#[test]
fn request_all_uses_wakeup_code() -> anyhow::Result<()> {
    let (mut dev, chip, _) = common::default_device();
    chip.push_frame(&classic_atqa());
    dev.request(ReqMode::All)?;
    assert_eq!(chip.sent_frames(), vec![vec![0x52]]);
    Ok(())
}

#[test]
fn corrupted_uid_is_reported_with_raw_bytes() {
    let (mut dev, chip, _) = common::default_device();
    chip.push_frame(&corrupt_uid_frame());

    match dev.anticoll() {
        Err(Error::ChecksumMismatch { raw, .. }) => assert_eq!(raw, corrupt_uid_frame()),
        other => panic!("expected checksum mismatch, got {:?}", other),
    }
}

#[test]
fn short_atqa_is_a_shape_error() {
    let (mut dev, chip, _) = common::default_device();
    chip.push_reply(MockReply::Frame {
        data: vec![0x04, 0x00],
        last_bits: 3,
    });
    assert_eq!(
        dev.request(ReqMode::Idle),
        Err(Error::ResponseShape {
            expected_bits: 16,
            actual_bits: 11,
        })
    );
}

#[test]
fn select_without_card_times_out() {
    let (mut dev, chip, _) = common::default_device();
    chip.push_reply(MockReply::Silence);
    assert_eq!(dev.select_tag(&sample_uid()), Err(Error::Timeout));
}
