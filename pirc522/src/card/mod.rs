// pirc522/src/card/mod.rs
//! ISO 14443A card operations and the tag value they produce.

use crate::device::{Device, Initialized};
use crate::types::{Atqa, ReqMode, Uid};
use crate::Result;

pub mod operations;
pub mod scan;

pub use scan::DEFAULT_READ_TRIES;

/// A tag that answered REQUEST and ANTICOLLISION.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    atqa: Atqa,
    uid: Uid,
}

impl Card {
    /// Pair an ATQA with the serial number read after it.
    pub fn new(atqa: Atqa, uid: Uid) -> Self {
        Self { atqa, uid }
    }

    /// Answer to REQUEST.
    pub fn atqa(&self) -> &Atqa {
        &self.atqa
    }

    /// Verified serial number.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Select this tag; returns its SAK.
    pub fn select(&self, device: &mut Device<Initialized>) -> Result<u8> {
        operations::select_tag(device, &self.uid)
    }
}

impl Device<Initialized> {
    /// REQUEST. See [`operations::request`].
    pub fn request(&mut self, mode: ReqMode) -> Result<Atqa> {
        operations::request(self, mode)
    }

    /// ANTICOLLISION. See [`operations::anticoll`].
    pub fn anticoll(&mut self) -> Result<Uid> {
        operations::anticoll(self)
    }

    /// SELECT. See [`operations::select_tag`].
    pub fn select_tag(&mut self, uid: &Uid) -> Result<u8> {
        operations::select_tag(self, uid)
    }
}
