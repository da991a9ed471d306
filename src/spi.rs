//! SPI transport backends
//!
//! 4-wire SPI: MOSI + SCK on the bus, plus a data/command select pin and a
//! reset pin. [`SpiInterface`] additionally drives an active-low chip
//! select around every transfer; [`SpiInterfaceNoCs`] omits it for panels
//! that are the only device on the bus. Both produce identical byte
//! streams on the bus itself.
//!
//! The bus clock is reprogrammed to [`SPI_CLOCK_HZ`] / mode 0 before every
//! transfer, so sharing the bus with devices that use other settings is
//! safe without any coordination beyond caller-side serialization.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{Mode, SpiBus, MODE_0};

use crate::interface::{reset_sequence, DisplayInterface, InterfaceError};

/// Clock rate programmed before every transfer.
pub const SPI_CLOCK_HZ: u32 = 10_000_000;

/// SPI mode 0: idle-low clock, capture on first transition.
pub const SPI_MODE: Mode = MODE_0;

/// An SPI bus whose clock and mode can be reprogrammed between transfers
///
/// [`SpiBus`] has no runtime reconfiguration; HAL bus types that support
/// it implement this extension so the driver can restore its settings on a
/// shared bus.
pub trait ConfigurableSpiBus: SpiBus<u8> {
    /// Reprogram the bus clock rate and mode
    fn configure(&mut self, clock_hz: u32, mode: Mode) -> Result<(), Self::Error>;
}

/// SPI interface with a driver-managed chip select line
pub struct SpiInterface<SPI, DC, CS, RST> {
    spi: SPI,
    /// Data/command select pin (low = command, high = data)
    dc: DC,
    /// Chip select pin (active low)
    cs: CS,
    /// Reset pin
    rst: RST,
}

impl<SPI, DC, CS, RST> SpiInterface<SPI, DC, CS, RST> {
    /// Create a new SPI interface with chip select
    pub fn new(spi: SPI, dc: DC, cs: CS, rst: RST) -> Self {
        Self { spi, dc, cs, rst }
    }

    /// Consume the interface and release the bus and pins
    pub fn release(self) -> (SPI, DC, CS, RST) {
        (self.spi, self.dc, self.cs, self.rst)
    }
}

impl<SPI, DC, CS, RST, PinErr> SpiInterface<SPI, DC, CS, RST>
where
    SPI: ConfigurableSpiBus,
    DC: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
{
    fn transfer(
        &mut self,
        data_mode: bool,
        bytes: &[u8],
    ) -> Result<(), InterfaceError<SPI::Error, PinErr>> {
        self.spi
            .configure(SPI_CLOCK_HZ, SPI_MODE)
            .map_err(InterfaceError::Comm)?;
        self.cs.set_high().map_err(InterfaceError::Pin)?;
        if data_mode {
            self.dc.set_high().map_err(InterfaceError::Pin)?;
        } else {
            self.dc.set_low().map_err(InterfaceError::Pin)?;
        }
        self.cs.set_low().map_err(InterfaceError::Pin)?;
        // Deassert chip select even when the write fails, then report the
        // write error first.
        let written = self
            .spi
            .write(bytes)
            .and_then(|_| self.spi.flush())
            .map_err(InterfaceError::Comm);
        let deasserted = self.cs.set_high().map_err(InterfaceError::Pin);
        written.and(deasserted)
    }
}

impl<SPI, DC, CS, RST, PinErr> DisplayInterface for SpiInterface<SPI, DC, CS, RST>
where
    SPI: ConfigurableSpiBus,
    DC: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: core::fmt::Debug,
    SPI::Error: core::fmt::Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), Self::Error> {
        self.transfer(false, cmds)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.transfer(true, data)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        reset_sequence(&mut self.rst, delay).map_err(InterfaceError::Pin)
    }
}

/// SPI interface without a chip select line
///
/// For displays wired as the sole bus occupant with CS strapped low.
pub struct SpiInterfaceNoCs<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: RST,
}

impl<SPI, DC, RST> SpiInterfaceNoCs<SPI, DC, RST> {
    /// Create a new SPI interface without chip select
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self { spi, dc, rst }
    }

    /// Consume the interface and release the bus and pins
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST, PinErr> SpiInterfaceNoCs<SPI, DC, RST>
where
    SPI: ConfigurableSpiBus,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
{
    fn transfer(
        &mut self,
        data_mode: bool,
        bytes: &[u8],
    ) -> Result<(), InterfaceError<SPI::Error, PinErr>> {
        self.spi
            .configure(SPI_CLOCK_HZ, SPI_MODE)
            .map_err(InterfaceError::Comm)?;
        if data_mode {
            self.dc.set_high().map_err(InterfaceError::Pin)?;
        } else {
            self.dc.set_low().map_err(InterfaceError::Pin)?;
        }
        self.spi
            .write(bytes)
            .and_then(|_| self.spi.flush())
            .map_err(InterfaceError::Comm)
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for SpiInterfaceNoCs<SPI, DC, RST>
where
    SPI: ConfigurableSpiBus,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: core::fmt::Debug,
    SPI::Error: core::fmt::Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), Self::Error> {
        self.transfer(false, cmds)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.transfer(true, data)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        reset_sequence(&mut self.rst, delay).map_err(InterfaceError::Pin)
    }
}
