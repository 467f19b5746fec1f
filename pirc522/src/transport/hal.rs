// pirc522/src/transport/hal.rs
//! Bus transport over embedded-hal 1.0 SPI devices.

#![cfg(feature = "hal")]

use embedded_hal::spi::SpiDevice;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Bus transport over any embedded-hal 1.0 `SpiDevice`. The device owns
/// chip-select, so leave `pin_ce` at 0 when using it.
pub struct HalTransport<S> {
    spi: S,
}

impl<S> HalTransport<S>
where
    S: SpiDevice<u8> + Send,
{
    /// Take ownership of `spi`.
    pub fn new(spi: S) -> Self {
        Self { spi }
    }

    /// Give the SPI device back.
    pub fn release(self) -> S {
        self.spi
    }
}

impl<S> Transport for HalTransport<S>
where
    S: SpiDevice<u8> + Send,
{
    fn transfer(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let mut read = vec![0u8; data.len()];
        self.spi
            .transfer(&mut read, data)
            .map_err(|e| Error::Transport(format!("{:?}", e)))?;
        Ok(read)
    }
}
