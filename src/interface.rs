//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait implemented by the
//! four transport backends:
//!
//! - [`I2cInterface`](crate::i2c::I2cInterface) - hardware I2C with burst writes
//! - [`BitBangI2cInterface`](crate::i2c::BitBangI2cInterface) - software I2C
//!   built from start/write/stop session primitives
//! - [`SpiInterface`](crate::spi::SpiInterface) - 4-wire SPI with a chip
//!   select line driven by the driver
//! - [`SpiInterfaceNoCs`](crate::spi::SpiInterfaceNoCs) - 3-wire SPI for a
//!   display that is the sole bus occupant
//!
//! The backend is chosen once, by constructing one of these types; the
//! driver never re-decides framing at runtime.

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Trait for hardware interfaces to the SH1106 controller
///
/// Command and data writes take a non-empty byte slice; each backend frames
/// them according to its bus protocol. Errors from the underlying bus or
/// pins propagate unchanged and are never retried here.
pub trait DisplayInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Send command bytes to the controller
    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), Self::Error>;

    /// Send data bytes (framebuffer contents) to the controller
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Perform the hardware reset pulse sequence
    ///
    /// Must run before the power-up command table is sent; skipping or
    /// reordering it risks an unresponsive controller.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over the bus and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<CommErr, PinErr> {
    /// Bus communication error (I2C or SPI write failed)
    Comm(CommErr),
    /// GPIO pin error (reset, data/command or chip select)
    Pin(PinErr),
}

impl<CommErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<CommErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterfaceError::Comm(e) => write!(f, "Bus error: {e:?}"),
            InterfaceError::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<CommErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<CommErr, PinErr> {}

/// Drive the reset pin through the power-up pulse: high for 1 ms, low for
/// 20 ms, then high again with 20 ms for the controller to come out of
/// reset. Shared by all backends.
pub(crate) fn reset_sequence<RST, D>(rst: &mut RST, delay: &mut D) -> Result<(), RST::Error>
where
    RST: OutputPin,
    D: DelayNs,
{
    rst.set_high()?;
    delay.delay_ms(1);
    rst.set_low()?;
    delay.delay_ms(20);
    rst.set_high()?;
    delay.delay_ms(20);
    Ok(())
}
