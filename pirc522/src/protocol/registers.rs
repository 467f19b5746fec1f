// pirc522/src/protocol/registers.rs
//! Register map and SPI address framing.

use crate::constants::{ADDR_MASK, ADDR_READ_FLAG};
use crate::{Error, Result};

/// Chip registers used by the driver (page addresses 0x00-0x3F).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Register {
    /// Starts and stops command execution
    #[display(fmt = "CommandReg")]
    Command = 0x01,
    /// Interrupt request enables
    #[display(fmt = "ComIEnReg")]
    ComIEn = 0x02,
    /// Interrupt request enables, second set
    #[display(fmt = "DivIEnReg")]
    DivIEn = 0x03,
    /// Interrupt request flags
    #[display(fmt = "ComIrqReg")]
    ComIrq = 0x04,
    /// Interrupt request flags, second set (CRCIRq)
    #[display(fmt = "DivIrqReg")]
    DivIrq = 0x05,
    /// Error flags of the last command
    #[display(fmt = "ErrorReg")]
    Error = 0x06,
    /// Communication status
    #[display(fmt = "Status1Reg")]
    Status1 = 0x07,
    /// Receiver, transmitter and crypto status
    #[display(fmt = "Status2Reg")]
    Status2 = 0x08,
    /// FIFO input and output
    #[display(fmt = "FIFODataReg")]
    FifoData = 0x09,
    /// Bytes stored in the FIFO; bit 7 flushes
    #[display(fmt = "FIFOLevelReg")]
    FifoLevel = 0x0A,
    /// FIFO warning level
    #[display(fmt = "WaterLevelReg")]
    WaterLevel = 0x0B,
    /// Miscellaneous control, RxLastBits
    #[display(fmt = "ControlReg")]
    Control = 0x0C,
    /// Bit-oriented frame adjustments, StartSend
    #[display(fmt = "BitFramingReg")]
    BitFraming = 0x0D,
    /// First detected bit collision
    #[display(fmt = "CollReg")]
    Coll = 0x0E,
    /// Transmit and receive modes, CRC preset
    #[display(fmt = "ModeReg")]
    Mode = 0x11,
    /// Transmission data rate and framing
    #[display(fmt = "TxModeReg")]
    TxMode = 0x12,
    /// Reception data rate and framing
    #[display(fmt = "RxModeReg")]
    RxMode = 0x13,
    /// Antenna driver pins TX1 and TX2
    #[display(fmt = "TxControlReg")]
    TxControl = 0x14,
    /// Transmit modulation
    #[display(fmt = "TxASKReg")]
    TxAsk = 0x15,
    /// CRC result, high byte
    #[display(fmt = "CRCResultRegH")]
    CrcResultH = 0x21,
    /// CRC result, low byte
    #[display(fmt = "CRCResultRegL")]
    CrcResultL = 0x22,
    /// Modulation width
    #[display(fmt = "ModWidthReg")]
    ModWidth = 0x24,
    /// Receiver gain
    #[display(fmt = "RFCfgReg")]
    RfCfg = 0x26,
    /// Timer settings
    #[display(fmt = "TModeReg")]
    TMode = 0x2A,
    /// Timer prescaler low byte
    #[display(fmt = "TPrescalerReg")]
    TPrescaler = 0x2B,
    /// Timer reload value, high byte
    #[display(fmt = "TReloadRegH")]
    TReloadH = 0x2C,
    /// Timer reload value, low byte
    #[display(fmt = "TReloadRegL")]
    TReloadL = 0x2D,
    /// Chip version
    #[display(fmt = "VersionReg")]
    Version = 0x37,
}

impl Register {
    /// Every register, in address order
    pub const ALL: [Register; 28] = [
        Register::Command,
        Register::ComIEn,
        Register::DivIEn,
        Register::ComIrq,
        Register::DivIrq,
        Register::Error,
        Register::Status1,
        Register::Status2,
        Register::FifoData,
        Register::FifoLevel,
        Register::WaterLevel,
        Register::Control,
        Register::BitFraming,
        Register::Coll,
        Register::Mode,
        Register::TxMode,
        Register::RxMode,
        Register::TxControl,
        Register::TxAsk,
        Register::CrcResultH,
        Register::CrcResultL,
        Register::ModWidth,
        Register::RfCfg,
        Register::TMode,
        Register::TPrescaler,
        Register::TReloadH,
        Register::TReloadL,
        Register::Version,
    ];

    /// Register address (0x00-0x3F)
    pub fn addr(self) -> u8 {
        self as u8
    }

    /// First byte of a read transfer: `1aaaaaa0`
    pub fn read_frame(self) -> u8 {
        ((self.addr() << 1) & ADDR_MASK) | ADDR_READ_FLAG
    }

    /// First byte of a write transfer: `0aaaaaa0`
    pub fn write_frame(self) -> u8 {
        (self.addr() << 1) & ADDR_MASK
    }

    /// Look up a register by address.
    pub fn from_addr(addr: u8) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.addr() == addr)
            .ok_or(Error::InvalidRegister(addr))
    }

    /// Decode the address byte of a transfer into (register, is_read).
    pub fn decode_frame(frame: u8) -> Result<(Self, bool)> {
        let reg = Self::from_addr((frame & ADDR_MASK) >> 1)?;
        Ok((reg, frame & ADDR_READ_FLAG != 0))
    }
}

impl TryFrom<u8> for Register {
    type Error = Error;

    fn try_from(addr: u8) -> Result<Self> {
        Self::from_addr(addr)
    }
}
