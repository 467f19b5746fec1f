//! Caller-level helpers that combine presence detection, REQUEST and
//! ANTICOLLISION with retries. The card operations themselves never retry.

use std::sync::atomic::AtomicBool;

use log::{debug, info};

use crate::card::Card;
use crate::device::{Device, Initialized};
use crate::presence::Presence;
use crate::types::ReqMode;
use crate::{Error, Result};

/// Attempts `scan` makes at reading a tag once one is detected
pub const DEFAULT_READ_TRIES: usize = 100;

impl Device<Initialized> {
    /// REQUEST then ANTICOLLISION, retried up to `tries` times on
    /// recoverable errors. Fatal errors are returned at once.
    pub fn read_uid(&mut self, tries: usize) -> Result<Card> {
        let mut last = Error::Timeout;
        for attempt in 1..=tries {
            let read = self
                .request(ReqMode::Idle)
                .and_then(|atqa| self.anticoll().map(|uid| Card::new(atqa, uid)));
            match read {
                Ok(card) => {
                    info!("tag {} read on attempt {}", card.uid(), attempt);
                    return Ok(card);
                }
                Err(e) if e.is_recoverable() => {
                    debug!("read attempt {} failed: {}", attempt, e);
                    last = e;
                }
                Err(e) => return Err(e),
            }
        }
        Err(last)
    }

    /// Block until a tag shows up, then read it. Returns `Ok(None)` once
    /// `stop` is raised.
    pub fn scan(&mut self, stop: &AtomicBool) -> Result<Option<Card>> {
        match self.wait_for_tag_until(stop)? {
            Presence::Stopped { .. } => Ok(None),
            Presence::Detected { .. } => self.read_uid(DEFAULT_READ_TRIES).map(Some),
        }
    }
}
