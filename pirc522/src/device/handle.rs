// pirc522/src/device/handle.rs
//! Type-state reader handle and chip lifecycle.

use std::marker::PhantomData;

use log::info;

use crate::config::ReaderConfig;
use crate::constants::*;
use crate::device::session::AuthSession;
use crate::presence::IrqEvent;
use crate::protocol::{Mode, Register};
use crate::transport::{Gpio, Transport};
use crate::Result;

/// Type-state marker: pins not claimed, chip not configured
#[derive(Debug)]
pub struct Uninitialized;
#[derive(Debug)]
/// Chip configured and pins claimed
pub struct Initialized;

/// Reader handle that enforces initialization state at compile time.
///
/// The handle is the single owner of the bus and of the chip state; every
/// operation takes `&mut self`.
pub struct Device<State = Uninitialized> {
    pub(super) transport: Box<dyn Transport>,
    pub(super) gpio: Box<dyn Gpio>,
    pub(super) config: ReaderConfig,
    pub(super) irq: IrqEvent,
    pub(super) session: AuthSession,
    _state: PhantomData<State>,
}

impl<State> Device<State> {
    /// Wiring this device was built with.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Event the interrupt line signals. Clone it to hand to an edge
    /// callback that is wired outside of the [`Gpio`] implementation.
    pub fn irq_event(&self) -> IrqEvent {
        self.irq.clone()
    }

    /// Crypto session state.
    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    /// Crypto session state, mutable.
    pub fn session_mut(&mut self) -> &mut AuthSession {
        &mut self.session
    }

    /// Soft reset. Any crypto session on the tag is gone afterwards.
    pub fn reset(&mut self) -> Result<()> {
        self.session.close();
        self.write_register(Register::Command, Mode::SoftReset.code())
    }

    /// Soft reset followed by timer, modulation and antenna setup.
    pub fn init(&mut self) -> Result<()> {
        self.reset()?;
        self.write_register(Register::TMode, INIT_T_MODE)?;
        self.write_register(Register::TPrescaler, INIT_T_PRESCALER)?;
        self.write_register(Register::TReloadL, INIT_T_RELOAD_L)?;
        self.write_register(Register::TReloadH, INIT_T_RELOAD_H)?;
        self.write_register(Register::TxAsk, INIT_TX_ASK)?;
        self.write_register(Register::Mode, INIT_MODE)?;
        self.set_antenna(true)
    }

    /// Switch the antenna drivers. Switching on leaves TxControl alone when
    /// both drivers are already enabled.
    pub fn set_antenna(&mut self, on: bool) -> Result<()> {
        if on {
            let current = self.read_register(Register::TxControl)?;
            if current & TX_CONTROL_ANTENNA != TX_CONTROL_ANTENNA {
                self.set_bits(Register::TxControl, TX_CONTROL_ANTENNA)?;
            }
            Ok(())
        } else {
            self.clear_bits(Register::TxControl, TX_CONTROL_ANTENNA)
        }
    }

    /// Chip version byte (0x91 or 0x92 for MFRC522).
    pub fn version(&mut self) -> Result<u8> {
        self.read_register(Register::Version)
    }
}

impl Device<Uninitialized> {
    /// Wrap a bus and a pin driver. Nothing is touched until
    /// [`initialize`](Self::initialize).
    pub fn new(transport: Box<dyn Transport>, gpio: Box<dyn Gpio>, config: ReaderConfig) -> Self {
        Self {
            transport,
            gpio,
            config,
            irq: IrqEvent::new(),
            session: AuthSession::default(),
            _state: PhantomData,
        }
    }

    /// Claim the pins and bring the chip up.
    pub fn initialize(self) -> Result<Device<Initialized>> {
        let mut this = self;
        let pin_irq = this.config.pin_irq;
        this.gpio.configure_input(pin_irq)?;
        this.gpio.watch_falling_edge(pin_irq, this.irq.clone())?;

        if let Some(ce) = this.config.chip_select() {
            this.gpio.configure_output(ce)?;
            this.gpio.set_output(ce, true)?;
        }
        let pin_rst = this.config.pin_rst;
        this.gpio.configure_output(pin_rst)?;
        this.gpio.set_output(pin_rst, true)?;

        this.init()?;
        info!(
            "reader on spi{}.{} initialized (irq pin {})",
            this.config.bus, this.config.device, pin_irq
        );

        Ok(Device {
            transport: this.transport,
            gpio: this.gpio,
            config: this.config,
            irq: this.irq,
            session: this.session,
            _state: PhantomData,
        })
    }
}

impl Device<Initialized> {
    /// Drop the MIFARE Crypto1 session if one is open.
    pub fn stop_crypto(&mut self) -> Result<()> {
        self.clear_bits(Register::Status2, STATUS2_CRYPTO_ON)?;
        self.session.close();
        Ok(())
    }

    /// Close any crypto session, switch the antenna off and release the pins.
    pub fn cleanup(mut self) -> Result<()> {
        if self.session.is_open() {
            self.stop_crypto()?;
        }
        self.set_antenna(false)?;
        self.gpio.cleanup()?;
        info!("reader on spi{}.{} released", self.config.bus, self.config.device);
        Ok(())
    }
}
