// pirc522/src/device/engine.rs
//! Command execution engine: load the FIFO, start an operation mode, poll
//! for completion, drain the response.

use log::{debug, warn};

use crate::constants::*;
use crate::device::handle::{Device, Initialized};
use crate::protocol::{Mode, Register};
use crate::{Error, Result};

/// Why the interrupt poll loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PollExit {
    /// No exit condition within the poll budget
    #[display(fmt = "budget exhausted")]
    BudgetExhausted,
    /// TimerIRq was set
    #[display(fmt = "timer expired")]
    TimerExpired,
    /// One of the awaited flags was set
    #[display(fmt = "wait condition")]
    WaitCondition,
}

/// Transaction-level failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Poll budget ran out before any exit condition fired
    NoResponse,
    /// ErrorReg reported these bits (already masked with 0x1B)
    ChipError(u8),
    /// Chip timer fired while the timer interrupt was enabled
    TimerExpired,
}

impl From<Fault> for Error {
    fn from(fault: Fault) -> Self {
        match fault {
            Fault::NoResponse | Fault::TimerExpired => Error::Timeout,
            Fault::ChipError(error_reg) => Error::Protocol { error_reg },
        }
    }
}

/// Outcome of one [`Device::execute`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionResult {
    /// Set when the transaction failed
    pub fault: Option<Fault>,
    /// Bytes drained from the FIFO, at most [`FIFO_CAPACITY`]
    pub data: Vec<u8>,
    /// Response length in bits; the last byte may be partial
    pub bits: usize,
    /// How the poll loop ended
    pub exit: PollExit,
    /// Last ComIrqReg value seen by the poll loop
    pub irq: u8,
}

impl TransactionResult {
    /// Whether a fault was recorded.
    pub fn is_error(&self) -> bool {
        self.fault.is_some()
    }

    /// Turn a faulted transaction into the matching error.
    pub fn into_result(self) -> Result<Self> {
        match self.fault {
            Some(fault) => Err(fault.into()),
            None => Ok(self),
        }
    }
}

/// Bits received given the FIFO byte count and RxLastBits.
pub fn response_bits(count: usize, last_bits: u8) -> usize {
    if last_bits != 0 {
        count.saturating_sub(1) * 8 + last_bits as usize
    } else {
        count * 8
    }
}

impl Device<Initialized> {
    /// Run one chip operation: write `data` to the FIFO, start `mode`, wait
    /// for it to finish and collect the response.
    ///
    /// Only bus failures are returned as `Err`; timeouts and chip-reported
    /// errors come back in [`TransactionResult::fault`].
    pub fn execute(&mut self, mode: Mode, data: &[u8]) -> Result<TransactionResult> {
        let (irq_en, irq_wait) = match mode {
            Mode::Transceive => (TRANSCEIVE_IRQ_EN, TRANSCEIVE_IRQ_WAIT),
            _ => (0x00, 0x00),
        };

        self.write_register(Register::ComIEn, irq_en | IRQ_SET)?;
        self.clear_bits(Register::ComIrq, IRQ_SET)?;
        self.set_bits(Register::FifoLevel, FIFO_FLUSH)?;
        self.write_register(Register::Command, Mode::Idle.code())?;

        for &b in data {
            self.write_register(Register::FifoData, b)?;
        }

        self.write_register(Register::Command, mode.code())?;
        if mode == Mode::Transceive {
            self.set_bits(Register::BitFraming, BIT_FRAMING_START_SEND)?;
        }

        let mut irq = 0u8;
        let mut exit = PollExit::BudgetExhausted;
        for _ in 0..EXECUTE_POLL_BUDGET {
            irq = self.read_register(Register::ComIrq)?;
            if irq & IRQ_TIMER != 0 {
                exit = PollExit::TimerExpired;
                break;
            }
            if irq & irq_wait != 0 {
                exit = PollExit::WaitCondition;
                break;
            }
        }

        self.clear_bits(Register::BitFraming, BIT_FRAMING_START_SEND)?;

        if exit == PollExit::BudgetExhausted {
            debug!("{} on {} bytes: no response", mode, data.len());
            return Ok(TransactionResult {
                fault: Some(Fault::NoResponse),
                data: Vec::new(),
                bits: 0,
                exit,
                irq,
            });
        }

        let error_reg = self.read_register(Register::Error)? & ERROR_MASK;
        if error_reg != 0 {
            debug!("{}: chip error {:#04x}", mode, error_reg);
            return Ok(TransactionResult {
                fault: Some(Fault::ChipError(error_reg)),
                data: Vec::new(),
                bits: 0,
                exit,
                irq,
            });
        }

        let mut fault = None;
        // TODO: decide whether a timer expiry with data in the FIFO should be
        // a partial-response success; for now it is flagged and drained.
        if irq & irq_en & IRQ_TIMER != 0 {
            warn!("{}: request timed out, draining FIFO anyway", mode);
            fault = Some(Fault::TimerExpired);
        }

        let mut back = Vec::new();
        let mut bits = 0;
        if mode == Mode::Transceive {
            let count = (self.read_register(Register::FifoLevel)? & 0x7F) as usize;
            let last_bits = self.read_register(Register::Control)? & CONTROL_RX_LAST_BITS;
            bits = response_bits(count, last_bits);

            let n = count.clamp(1, FIFO_CAPACITY);
            back.reserve(n);
            for _ in 0..n {
                back.push(self.read_register(Register::FifoData)?);
            }
        }

        debug!(
            "{}: exit={} bits={} data={}",
            mode,
            exit,
            bits,
            crate::utils::bytes_to_hex_spaced(&back)
        );
        Ok(TransactionResult {
            fault,
            data: back,
            bits,
            exit,
            irq,
        })
    }
}
