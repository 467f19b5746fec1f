// pirc522/src/transport/mock.rs
//! Register-level chip simulator and pin driver for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::constants::*;
use crate::presence::IrqEvent;
use crate::protocol::{Mode, Register, crc_a};
use crate::transport::traits::{Gpio, Transport};
use crate::{Error, Result};

/// Chip FIFO size on real hardware
const CHIP_FIFO_SIZE: usize = 64;
/// VersionReg of an MFRC522 v2.0
const MOCK_VERSION: u8 = 0x92;
/// TxControlReg after reset
const TX_CONTROL_RESET: u8 = 0x80;

/// One register access seen on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusOp {
    /// Register read
    Read(Register),
    /// Register write with the value written
    Write(Register, u8),
}

/// What the simulated card does when a transceive is started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Card answers with `data`
    Frame {
        /// Received bytes
        data: Vec<u8>,
        /// Valid bits in the last byte (0 = all 8)
        last_bits: u8,
    },
    /// Nobody answers and the chip timer runs out
    Silence,
    /// The receiver flags the given ErrorReg bits
    ChipError(u8),
    /// Card answers, but only after the chip timer already fired
    Late {
        /// Received bytes
        data: Vec<u8>,
        /// Valid bits in the last byte (0 = all 8)
        last_bits: u8,
    },
}

impl MockReply {
    /// Whole-byte answer.
    pub fn bytes(data: &[u8]) -> Self {
        MockReply::Frame {
            data: data.to_vec(),
            last_bits: 0,
        }
    }
}

#[derive(Debug)]
struct ChipState {
    regs: [u8; 64],
    fifo: VecDeque<u8>,
    replies: VecDeque<MockReply>,
    sent_frames: Vec<Vec<u8>>,
    log: Vec<BusOp>,
    crc_stall: bool,
    fail_transfers: usize,
    fifo_level_override: Option<u8>,
    /// ComIrq reads left before `flags` get raised
    irq_on_read: Option<(usize, u8)>,
    irq: Option<IrqEvent>,
}

impl ChipState {
    fn new() -> Self {
        let mut regs = [0u8; 64];
        regs[Register::Version.addr() as usize] = MOCK_VERSION;
        regs[Register::TxControl.addr() as usize] = TX_CONTROL_RESET;
        Self {
            regs,
            fifo: VecDeque::new(),
            replies: VecDeque::new(),
            sent_frames: Vec::new(),
            log: Vec::new(),
            crc_stall: false,
            fail_transfers: 0,
            fifo_level_override: None,
            irq_on_read: None,
            irq: None,
        }
    }

    fn reg(&self, reg: Register) -> u8 {
        self.regs[reg.addr() as usize]
    }

    fn reg_mut(&mut self, reg: Register) -> &mut u8 {
        &mut self.regs[reg.addr() as usize]
    }

    fn read(&mut self, reg: Register) -> u8 {
        self.log.push(BusOp::Read(reg));
        match reg {
            Register::FifoData => self.fifo.pop_front().unwrap_or(0),
            Register::FifoLevel => self
                .fifo_level_override
                .unwrap_or(self.fifo.len().min(CHIP_FIFO_SIZE) as u8),
            Register::ComIrq => {
                if let Some((left, flags)) = self.irq_on_read {
                    if left <= 1 {
                        self.irq_on_read = None;
                        *self.reg_mut(Register::ComIrq) |= flags;
                    } else {
                        self.irq_on_read = Some((left - 1, flags));
                    }
                }
                self.reg(Register::ComIrq)
            }
            r => self.reg(r),
        }
    }

    fn write(&mut self, reg: Register, value: u8) {
        self.log.push(BusOp::Write(reg, value));
        match reg {
            Register::FifoData => {
                if self.fifo.len() < CHIP_FIFO_SIZE {
                    self.fifo.push_back(value);
                } else {
                    *self.reg_mut(Register::Error) |= 0x10;
                }
            }
            Register::FifoLevel => {
                if value & FIFO_FLUSH != 0 {
                    self.fifo.clear();
                }
            }
            // Set1 bit selects between setting and clearing the marked flags
            Register::ComIrq | Register::DivIrq => {
                let flags = value & IRQ_ALL;
                if value & IRQ_SET != 0 {
                    *self.reg_mut(reg) |= flags;
                } else {
                    *self.reg_mut(reg) &= !flags;
                }
            }
            Register::Command => {
                *self.reg_mut(reg) = value;
                match Mode::from_code(value) {
                    Some(Mode::SoftReset) => self.soft_reset(),
                    Some(Mode::CalcCrc) => self.calc_crc(),
                    Some(Mode::Transceive) if self.reg(Register::BitFraming) & BIT_FRAMING_START_SEND != 0 => {
                        self.exchange()
                    }
                    _ => {}
                }
            }
            Register::BitFraming => {
                *self.reg_mut(reg) = value;
                if value & BIT_FRAMING_START_SEND != 0
                    && Mode::from_code(self.reg(Register::Command)) == Some(Mode::Transceive)
                {
                    self.exchange();
                }
            }
            r => *self.reg_mut(r) = value,
        }
    }

    fn soft_reset(&mut self) {
        let version = self.reg(Register::Version);
        self.regs = [0u8; 64];
        *self.reg_mut(Register::Version) = version;
        *self.reg_mut(Register::TxControl) = TX_CONTROL_RESET;
        self.fifo.clear();
    }

    fn calc_crc(&mut self) {
        if self.crc_stall {
            return;
        }
        let data: Vec<u8> = self.fifo.drain(..).collect();
        let crc = crc_a(&data);
        *self.reg_mut(Register::CrcResultL) = crc[0];
        *self.reg_mut(Register::CrcResultH) = crc[1];
        *self.reg_mut(Register::DivIrq) |= DIV_IRQ_CRC;
    }

    fn exchange(&mut self) {
        let frame: Vec<u8> = self.fifo.drain(..).collect();
        self.sent_frames.push(frame);
        *self.reg_mut(Register::Error) = 0;
        *self.reg_mut(Register::ComIrq) |= IRQ_TX;

        match self.replies.pop_front() {
            None => {}
            Some(MockReply::Silence) => *self.reg_mut(Register::ComIrq) |= IRQ_TIMER,
            Some(MockReply::ChipError(bits)) => {
                *self.reg_mut(Register::Error) = bits;
                *self.reg_mut(Register::ComIrq) |= IRQ_ERR | IRQ_RX;
            }
            Some(MockReply::Frame { data, last_bits }) => {
                self.receive(&data, last_bits);
            }
            Some(MockReply::Late { data, last_bits }) => {
                *self.reg_mut(Register::ComIrq) |= IRQ_TIMER;
                self.receive(&data, last_bits);
            }
        }

        if self.reg(Register::ComIrq) & self.reg(Register::ComIEn) & IRQ_RX != 0 {
            if let Some(event) = &self.irq {
                event.signal();
            }
        }
    }

    fn receive(&mut self, data: &[u8], last_bits: u8) {
        self.fifo.extend(data.iter().copied());
        let control = self.reg(Register::Control) & !CONTROL_RX_LAST_BITS;
        *self.reg_mut(Register::Control) = control | (last_bits & CONTROL_RX_LAST_BITS);
        *self.reg_mut(Register::ComIrq) |= IRQ_RX | IRQ_IDLE;
    }
}

/// Register-level simulation of the reader chip for unit tests.
///
/// Clones share the same chip, so a test can keep a handle after moving one
/// into a `Device`.
#[derive(Debug, Clone)]
pub struct MockChip {
    inner: Arc<Mutex<ChipState>>,
}

impl Default for MockChip {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChip {
    /// A chip fresh out of power-on reset.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ChipState::new())),
        }
    }

    fn state(&self) -> MutexGuard<'_, ChipState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue the card's answer to the next transceive.
    pub fn push_reply(&self, reply: MockReply) {
        self.state().replies.push_back(reply);
    }

    /// Queue a whole-byte answer.
    pub fn push_frame(&self, data: &[u8]) {
        self.push_reply(MockReply::bytes(data));
    }

    /// Replies not consumed yet.
    pub fn pending_replies(&self) -> usize {
        self.state().replies.len()
    }

    /// Poke a register without logging a bus op.
    pub fn set_register(&self, reg: Register, value: u8) {
        *self.state().reg_mut(reg) = value;
    }

    /// Peek a register without logging a bus op.
    pub fn register(&self, reg: Register) -> u8 {
        self.state().reg(reg)
    }

    /// Keep the CRC unit from ever finishing.
    pub fn set_crc_stall(&self, stall: bool) {
        self.state().crc_stall = stall;
    }

    /// Report a fixed FIFOLevelReg value regardless of FIFO contents.
    pub fn set_fifo_level_override(&self, level: Option<u8>) {
        self.state().fifo_level_override = level;
    }

    /// Raise `flags` in ComIrqReg just before the `n`th ComIrq read from
    /// now (1-based) returns.
    pub fn raise_irq_on_read(&self, n: usize, flags: u8) {
        self.state().irq_on_read = Some((n, flags));
    }

    /// Fail the next `n` transfers with a transport error.
    pub fn fail_next_transfers(&self, n: usize) {
        self.state().fail_transfers = n;
    }

    /// Wire the chip IRQ output to `event`.
    pub fn attach_irq(&self, event: IrqEvent) {
        self.state().irq = Some(event);
    }

    /// FIFO contents at the start of each transceive.
    pub fn sent_frames(&self) -> Vec<Vec<u8>> {
        self.state().sent_frames.clone()
    }

    /// Bytes currently in the FIFO.
    pub fn fifo_len(&self) -> usize {
        self.state().fifo.len()
    }

    /// Every register access since creation or the last `clear_log`.
    pub fn log(&self) -> Vec<BusOp> {
        self.state().log.clone()
    }

    /// Forget the recorded bus ops.
    pub fn clear_log(&self) {
        self.state().log.clear();
    }

    /// Number of logged reads of `reg`.
    pub fn reads_of(&self, reg: Register) -> usize {
        self.state()
            .log
            .iter()
            .filter(|op| **op == BusOp::Read(reg))
            .count()
    }

    /// Values written to `reg`, in order.
    pub fn writes_to(&self, reg: Register) -> Vec<u8> {
        self.state()
            .log
            .iter()
            .filter_map(|op| match op {
                BusOp::Write(r, v) if *r == reg => Some(*v),
                _ => None,
            })
            .collect()
    }
}

impl Transport for MockChip {
    fn transfer(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let mut st = self.state();
        if st.fail_transfers > 0 {
            st.fail_transfers -= 1;
            return Err(Error::Transport("injected transfer failure".into()));
        }
        if data.len() != 2 {
            return Err(Error::Transport(format!(
                "mock chip takes 2-byte frames, got {}",
                data.len()
            )));
        }
        let (reg, is_read) = Register::decode_frame(data[0])?;
        if is_read {
            let value = st.read(reg);
            Ok(vec![0x00, value])
        } else {
            st.write(reg, data[1]);
            Ok(vec![0x00, 0x00])
        }
    }
}

/// One pin operation seen by [`MockGpio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioOp {
    /// Pin set up as input
    ConfigureInput(u8),
    /// Edge callback registered
    WatchFallingEdge(u8),
    /// Pin set up as output
    ConfigureOutput(u8),
    /// Output driven high (`true`) or low
    Set(u8, bool),
    /// All pins released
    Cleanup,
}

#[derive(Debug, Default)]
struct GpioState {
    ops: Vec<GpioOp>,
    event: Option<IrqEvent>,
    fail_ops: usize,
}

/// Mock pin driver. Optionally wired to a [`MockChip`] so the chip's IRQ
/// output reaches the watched event like a real interrupt line.
#[derive(Debug, Clone, Default)]
pub struct MockGpio {
    inner: Arc<Mutex<GpioState>>,
    chip: Option<MockChip>,
}

impl MockGpio {
    /// Pin driver not connected to any chip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin driver whose watched interrupt pin follows `chip`.
    pub fn wired_to(chip: &MockChip) -> Self {
        Self {
            inner: Arc::default(),
            chip: Some(chip.clone()),
        }
    }

    fn state(&self) -> MutexGuard<'_, GpioState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Pin operations seen so far.
    pub fn ops(&self) -> Vec<GpioOp> {
        self.state().ops.clone()
    }

    /// Fail the next `n` pin operations.
    pub fn fail_next(&self, n: usize) {
        self.state().fail_ops = n;
    }

    /// Simulate a falling edge on the watched interrupt pin.
    pub fn fire_edge(&self) -> bool {
        match &self.state().event {
            Some(event) => {
                event.signal();
                true
            }
            None => false,
        }
    }

    fn record(&self, op: GpioOp) -> Result<()> {
        let mut st = self.state();
        if st.fail_ops > 0 {
            st.fail_ops -= 1;
            return Err(Error::Gpio(format!("injected failure on {:?}", op)));
        }
        st.ops.push(op);
        Ok(())
    }
}

impl Gpio for MockGpio {
    fn configure_input(&mut self, pin: u8) -> Result<()> {
        self.record(GpioOp::ConfigureInput(pin))
    }

    fn watch_falling_edge(&mut self, pin: u8, event: IrqEvent) -> Result<()> {
        self.record(GpioOp::WatchFallingEdge(pin))?;
        if let Some(chip) = &self.chip {
            chip.attach_irq(event.clone());
        }
        self.state().event = Some(event);
        Ok(())
    }

    fn configure_output(&mut self, pin: u8) -> Result<()> {
        self.record(GpioOp::ConfigureOutput(pin))
    }

    fn set_output(&mut self, pin: u8, high: bool) -> Result<()> {
        self.record(GpioOp::Set(pin, high))
    }

    fn cleanup(&mut self) -> Result<()> {
        self.record(GpioOp::Cleanup)?;
        self.state().event = None;
        Ok(())
    }
}
