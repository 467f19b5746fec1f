// pirc522/src/constants.rs
//! Common chip constants used across the crate

/// FIFO capacity drained per transaction
pub const FIFO_CAPACITY: usize = 16;

/// Poll budget of the command execution engine (ComIrq reads)
pub const EXECUTE_POLL_BUDGET: usize = 2000;

/// Poll budget of the CRC coprocessor (DivIrq reads)
pub const CRC_POLL_BUDGET: usize = 255;

// Register address framing: MSB set marks a read, LSB is always zero
/// Read flag of the address byte
pub const ADDR_READ_FLAG: u8 = 0x80;
/// Address bits of the address byte, already shifted left by one
pub const ADDR_MASK: u8 = 0x7E;

// ComIEnReg / ComIrqReg bits
/// Set1: writing ComIrq with this bit set sets the marked flags
pub const IRQ_SET: u8 = 0x80;
/// TxIRq
pub const IRQ_TX: u8 = 0x40;
/// RxIRq
pub const IRQ_RX: u8 = 0x20;
/// IdleIRq
pub const IRQ_IDLE: u8 = 0x10;
/// ErrIRq
pub const IRQ_ERR: u8 = 0x02;
/// TimerIRq
pub const IRQ_TIMER: u8 = 0x01;
/// Write with `IRQ_SET` cleared: every marked flag is cleared
pub const IRQ_ALL: u8 = 0x7F;

/// Interrupt sources enabled for transceive
pub const TRANSCEIVE_IRQ_EN: u8 = 0x77;
/// Flags that end the transceive poll loop
pub const TRANSCEIVE_IRQ_WAIT: u8 = IRQ_RX | IRQ_IDLE;

/// ComIEnReg value used while waiting for a tag: IRq pin inverted, RxIEn
pub const PRESENCE_IRQ_EN: u8 = 0xA0;

/// DivIrqReg CRCIRq bit
pub const DIV_IRQ_CRC: u8 = 0x04;

/// ErrorReg bits treated as a failed transaction (BufferOvfl, ParityErr, ProtocolErr, CollErr)
pub const ERROR_MASK: u8 = 0x1B;

/// FIFOLevelReg FlushBuffer bit
pub const FIFO_FLUSH: u8 = 0x80;

/// BitFramingReg StartSend bit
pub const BIT_FRAMING_START_SEND: u8 = 0x80;
/// BitFramingReg TxLastBits for a 7-bit short frame
pub const BIT_FRAMING_SHORT_FRAME: u8 = 0x07;
/// BitFramingReg TxLastBits for whole bytes
pub const BIT_FRAMING_FULL_BYTES: u8 = 0x00;

/// ControlReg RxLastBits mask
pub const CONTROL_RX_LAST_BITS: u8 = 0x07;

/// TxControlReg Tx1RFEn | Tx2RFEn
pub const TX_CONTROL_ANTENNA: u8 = 0x03;

/// Status2Reg MFCrypto1On
pub const STATUS2_CRYPTO_ON: u8 = 0x08;

// Timer and modulation configuration written by chip init
/// TModeReg: TAuto, prescaler high nibble 0x0D
pub const INIT_T_MODE: u8 = 0x8D;
/// TPrescalerReg low byte
pub const INIT_T_PRESCALER: u8 = 0x3E;
/// TReloadReg low byte
pub const INIT_T_RELOAD_L: u8 = 30;
/// TReloadReg high byte
pub const INIT_T_RELOAD_H: u8 = 0;
/// TxASKReg: force 100% ASK
pub const INIT_TX_ASK: u8 = 0x40;
/// ModeReg: CRC preset 0x6363
pub const INIT_MODE: u8 = 0x3D;

// Card-facing command bytes
/// REQA: wake tags that are not halted
pub const PICC_REQIDL: u8 = 0x26;
/// WUPA: wake every tag, halted ones included
pub const PICC_REQALL: u8 = 0x52;
/// Anti-collision, cascade level 1
pub const PICC_ANTICOLL_CL1: u8 = 0x93;
/// SELECT, cascade level 1
pub const PICC_SELECT_CL1: u8 = 0x93;

/// NVB for anti-collision (2 bytes valid)
pub const NVB_ANTICOLL: u8 = 0x20;
/// NVB for select (7 bytes valid)
pub const NVB_SELECT: u8 = 0x70;

/// ATQA length in bits
pub const ATQA_BITS: usize = 16;
/// SAK + CRC_A length in bits
pub const SAK_BITS: usize = 24;

/// Serial number length including the check byte
pub const UID_LEN: usize = 5;
/// Anti-collision answer length in bits
pub const UID_BITS: usize = UID_LEN * 8;
