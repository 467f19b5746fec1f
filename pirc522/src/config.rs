// pirc522/src/config.rs
//! Reader wiring configuration

use crate::types::PinNumbering;

/// Default reset pin (board numbering)
pub const DEFAULT_PIN_RST: u8 = 22;
/// Default interrupt pin (board numbering)
pub const DEFAULT_PIN_IRQ: u8 = 18;
/// Default SPI clock
pub const DEFAULT_SPEED_HZ: u32 = 1_000_000;

/// Bus and pin wiring of one reader. Fixed once the device is built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderConfig {
    /// SPI bus number
    pub bus: u8,
    /// Chip-select index on the bus
    pub device: u8,
    /// SPI clock
    pub speed_hz: u32,
    /// Reset line, driven high at start-up
    pub pin_rst: u8,
    /// Chip-select pin; 0 leaves chip select to the bus driver
    pub pin_ce: u8,
    /// Interrupt line, watched for falling edges
    pub pin_irq: u8,
    /// How the pin numbers above are interpreted
    pub pin_mode: PinNumbering,
}

impl ReaderConfig {
    /// Default wiring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the SPI bus and device.
    pub fn bus(mut self, bus: u8, device: u8) -> Self {
        self.bus = bus;
        self.device = device;
        self
    }

    /// Set the SPI clock.
    pub fn speed_hz(mut self, speed_hz: u32) -> Self {
        self.speed_hz = speed_hz;
        self
    }

    /// Set the reset, chip-select and interrupt pins.
    pub fn pins(mut self, pin_rst: u8, pin_ce: u8, pin_irq: u8) -> Self {
        self.pin_rst = pin_rst;
        self.pin_ce = pin_ce;
        self.pin_irq = pin_irq;
        self
    }

    /// Set the pin numbering scheme.
    pub fn pin_mode(mut self, mode: PinNumbering) -> Self {
        self.pin_mode = mode;
        self
    }

    /// Chip select pin if one is wired
    pub fn chip_select(&self) -> Option<u8> {
        (self.pin_ce != 0).then_some(self.pin_ce)
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            bus: 0,
            device: 0,
            speed_hz: DEFAULT_SPEED_HZ,
            pin_rst: DEFAULT_PIN_RST,
            pin_ce: 0,
            pin_irq: DEFAULT_PIN_IRQ,
            pin_mode: PinNumbering::Board,
        }
    }
}
