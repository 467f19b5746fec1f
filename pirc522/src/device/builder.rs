// pirc522/src/device/builder.rs
//! Step-by-step construction of a [`Device`].

use crate::config::ReaderConfig;
use crate::device::handle::{Device, Uninitialized};
use crate::transport::{Gpio, Transport};
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    gpio: Option<Box<dyn Gpio>>,
    config: ReaderConfig,
}

impl DeviceBuilder {
    /// Empty builder with the default wiring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bus the chip sits on.
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Pin driver for the interrupt, reset and chip-select lines.
    pub fn with_gpio(mut self, gpio: Box<dyn Gpio>) -> Self {
        self.gpio = Some(gpio);
        self
    }

    /// Override the default wiring.
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires both a transport and a GPIO driver; otherwise returns
    /// DeviceNotFound.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        match (self.transport, self.gpio) {
            (Some(t), Some(g)) => Ok(Device::new(t, g, self.config)),
            _ => Err(Error::DeviceNotFound),
        }
    }

    /// Build and initialize in one go.
    pub fn build(self) -> Result<Device<crate::device::Initialized>> {
        self.build_uninitialized()?.initialize()
    }
}
