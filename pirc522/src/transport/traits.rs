// pirc522/src/transport/traits.rs
//! Seams to the platform: the SPI bus and the GPIO lines.

use crate::Result;
use crate::presence::IrqEvent;

/// Transport trait abstracts the synchronous serial bus away from the
/// register protocol.
pub trait Transport: Send {
    /// Full-duplex exchange. The reply has the same length as `data`; byte
    /// `i` of the reply is clocked in while byte `i` of `data` is clocked
    /// out, so a register value shows up one byte after its address.
    fn transfer(&mut self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Digital pin control needed around the chip: the interrupt line, the
/// optional chip-select line and the reset line.
pub trait Gpio: Send {
    /// Configure `pin` as an input with pull-up.
    fn configure_input(&mut self, pin: u8) -> Result<()>;

    /// Signal `event` on every falling edge of `pin`. The callback runs
    /// outside the driver's flow of control.
    fn watch_falling_edge(&mut self, pin: u8, event: IrqEvent) -> Result<()>;

    /// Configure `pin` as an output.
    fn configure_output(&mut self, pin: u8) -> Result<()>;

    /// Drive `pin` high or low.
    fn set_output(&mut self, pin: u8, high: bool) -> Result<()>;

    /// Release every pin touched so far. Default is a no-op for pin
    /// drivers that release on drop.
    fn cleanup(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn transfer(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        (**self).transfer(data)
    }
}
