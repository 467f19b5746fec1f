//! Interrupt-driven wait for a tag entering the field.
//!
//! The chip is armed to transmit a REQUEST frame with only the receive
//! interrupt routed to the IRQ line. Each cycle waits a short while on the
//! [`IrqEvent`] and re-arms on timeout.

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};

use crate::constants::*;
use crate::device::{Device, Initialized};
use crate::protocol::{Mode, Register};
use crate::utils::ms;
use crate::Result;

pub mod event;

pub use event::IrqEvent;

/// Time the loop waits on the interrupt event before re-arming
pub const PRESENCE_WAIT_MS: u64 = 100;

/// How a stoppable presence wait ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// A tag answered; `attempts` counts the arm cycles used.
    Detected {
        /// Arm cycles used
        attempts: usize,
    },
    /// The stop flag was raised before any tag answered.
    Stopped {
        /// Arm cycles completed
        attempts: usize,
    },
}

impl Presence {
    /// Whether a tag answered.
    pub fn is_detected(&self) -> bool {
        matches!(self, Presence::Detected { .. })
    }

    /// Arm cycles used.
    pub fn attempts(&self) -> usize {
        match *self {
            Presence::Detected { attempts } | Presence::Stopped { attempts } => attempts,
        }
    }
}

impl Device<Initialized> {
    /// Block until a tag answers the armed REQUEST. Returns the number of
    /// arm cycles used. There is no attempt limit.
    pub fn wait_for_tag(&mut self) -> Result<usize> {
        let never = AtomicBool::new(false);
        self.wait_for_tag_until(&never).map(|p| p.attempts())
    }

    /// Like [`wait_for_tag`](Self::wait_for_tag) but gives up when `stop`
    /// is set. The flag is checked between arm cycles.
    pub fn wait_for_tag_until(&mut self, stop: &AtomicBool) -> Result<Presence> {
        let event = self.irq_event();

        self.init()?;
        event.clear();
        self.write_register(Register::ComIrq, 0x00)?;
        self.write_register(Register::ComIEn, PRESENCE_IRQ_EN)?;

        let mut attempts = 0;
        loop {
            if stop.load(Ordering::Acquire) {
                debug!("presence wait stopped after {} cycles", attempts);
                return Ok(Presence::Stopped { attempts });
            }
            attempts += 1;
            self.arm_request()?;

            if event.wait_timeout(ms(PRESENCE_WAIT_MS)) {
                break;
            }
            debug!("no tag after cycle {}, re-arming", attempts);
        }

        event.clear();
        self.init()?;
        info!("tag detected after {} cycles", attempts);
        Ok(Presence::Detected { attempts })
    }

    fn arm_request(&mut self) -> Result<()> {
        self.init()?;
        self.write_register(Register::ComIrq, 0x00)?;
        self.write_register(Register::ComIEn, PRESENCE_IRQ_EN)?;
        self.write_register(Register::FifoData, PICC_REQIDL)?;
        self.write_register(Register::Command, Mode::Transceive.code())?;
        self.write_register(
            Register::BitFraming,
            BIT_FRAMING_START_SEND | BIT_FRAMING_SHORT_FRAME,
        )
    }
}
