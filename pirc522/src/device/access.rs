// pirc522/src/device/access.rs
//! Register access layer. Every call is a live bus round trip; nothing is
//! cached, and read-modify-write helpers assume a single owner.

use log::trace;

use crate::device::handle::Device;
use crate::protocol::Register;
use crate::{Error, Result};

impl<State> Device<State> {
    /// One framed bus transaction, with chip-select held low around it when
    /// a CS pin is configured.
    fn bus_transfer(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        let cs = self.config.chip_select();
        if let Some(pin) = cs {
            self.gpio.set_output(pin, false)?;
        }
        let reply = self.transport.transfer(frame);
        if let Some(pin) = cs {
            self.gpio.set_output(pin, true)?;
        }
        let reply = reply?;
        if reply.len() != frame.len() {
            return Err(Error::Transport(format!(
                "short reply: expected {} bytes, got {}",
                frame.len(),
                reply.len()
            )));
        }
        Ok(reply)
    }

    /// Read one register.
    pub fn read_register(&mut self, reg: Register) -> Result<u8> {
        let reply = self.bus_transfer(&[reg.read_frame(), 0x00])?;
        // The value is clocked out while the dummy byte goes in.
        let value = reply[1];
        trace!("read {} -> {:#04x}", reg, value);
        Ok(value)
    }

    /// Write one register.
    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        trace!("write {} <- {:#04x}", reg, value);
        self.bus_transfer(&[reg.write_frame(), value])?;
        Ok(())
    }

    /// Read-modify-write: set the bits of `mask`.
    pub fn set_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let current = self.read_register(reg)?;
        self.write_register(reg, current | mask)
    }

    /// Read-modify-write: clear the bits of `mask`.
    pub fn clear_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let current = self.read_register(reg)?;
        self.write_register(reg, current & !mask)
    }
}
