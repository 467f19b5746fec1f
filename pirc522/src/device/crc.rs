// pirc522/src/device/crc.rs
//! Client of the chip's CRC coprocessor.

use log::warn;

use crate::constants::{CRC_POLL_BUDGET, DIV_IRQ_CRC, FIFO_FLUSH};
use crate::device::handle::{Device, Initialized};
use crate::protocol::{Mode, Register};
use crate::Result;

impl Device<Initialized> {
    /// Run `data` through the chip's CRC coprocessor and return the result
    /// low byte first.
    ///
    /// Running out of poll budget is not an error: the result registers are
    /// read regardless and may hold a stale value.
    pub fn compute_crc(&mut self, data: &[u8]) -> Result<[u8; 2]> {
        // CRCIRq is cleared by writing it with Set2 low
        self.write_register(Register::DivIrq, DIV_IRQ_CRC)?;
        self.set_bits(Register::FifoLevel, FIFO_FLUSH)?;

        for &b in data {
            self.write_register(Register::FifoData, b)?;
        }
        self.write_register(Register::Command, Mode::CalcCrc.code())?;

        let mut ready = false;
        for _ in 0..CRC_POLL_BUDGET {
            if self.read_register(Register::DivIrq)? & DIV_IRQ_CRC != 0 {
                ready = true;
                break;
            }
        }
        if !ready {
            warn!("crc coprocessor did not finish; result may be stale");
        }

        let low = self.read_register(Register::CrcResultL)?;
        let high = self.read_register(Register::CrcResultH)?;
        Ok([low, high])
    }
}
