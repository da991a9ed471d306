//! I2C transport backends
//!
//! Two variants exist for the same logical framing:
//!
//! - [`I2cInterface`] drives a hardware I2C peripheral through the
//!   [`embedded_hal::i2c::I2c`] trait and sends each frame as one burst
//!   write.
//! - [`BitBangI2cInterface`] drives a software (bit-banged) bus through the
//!   [`BitBangBus`] session primitives, for bus implementations that have
//!   no burst write. Picking it is an explicit construction choice, not a
//!   per-call capability probe.
//!
//! On the wire both produce SH1106 control framing: a command byte travels
//! as `[0x80, cmd]`, a data payload travels as one `0x40`-prefixed write.

use alloc::vec::Vec;
use core::fmt::Debug;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;

use crate::interface::{reset_sequence, DisplayInterface, InterfaceError};

/// Factory-default I2C address of SH1106 modules.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

// Control bytes: Co=1/DC#=0 prefixes a single command byte, Co=0/DC#=1
// prefixes a data burst.
const CONTROL_COMMAND: u8 = 0x80;
const CONTROL_DATA: u8 = 0x40;

/// Hardware I2C interface
///
/// Owns the bus handle, the 7-bit device address and the reset pin. The
/// data path prepends the `0x40` control byte and sends the whole frame as
/// a single write, which is what hardware peripherals with burst support
/// are good at.
pub struct I2cInterface<I2C, RST> {
    i2c: I2C,
    address: u8,
    rst: RST,
    /// Scratch frame for the control-byte prefix, reused across writes.
    scratch: Vec<u8>,
}

impl<I2C, RST> I2cInterface<I2C, RST> {
    /// Create a new hardware I2C interface
    ///
    /// `address` is the 7-bit device address, usually [`DEFAULT_ADDRESS`].
    pub fn new(i2c: I2C, address: u8, rst: RST) -> Self {
        Self {
            i2c,
            address,
            rst,
            scratch: Vec::new(),
        }
    }

    /// Consume the interface and release the bus and reset pin
    pub fn release(self) -> (I2C, RST) {
        (self.i2c, self.rst)
    }
}

impl<I2C, RST> DisplayInterface for I2cInterface<I2C, RST>
where
    I2C: I2c,
    RST: OutputPin,
{
    type Error = InterfaceError<I2C::Error, RST::Error>;

    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), Self::Error> {
        // One control prefix per command byte; the controller treats each
        // two-byte write as an independent command frame.
        for &cmd in cmds {
            self.i2c
                .write(self.address, &[CONTROL_COMMAND, cmd])
                .map_err(InterfaceError::Comm)?;
        }
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.scratch.clear();
        self.scratch.reserve(data.len() + 1);
        self.scratch.push(CONTROL_DATA);
        self.scratch.extend_from_slice(data);
        self.i2c
            .write(self.address, &self.scratch)
            .map_err(InterfaceError::Comm)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        reset_sequence(&mut self.rst, delay).map_err(InterfaceError::Pin)
    }
}

/// Session-based contract for software (bit-banged) buses
///
/// Software bus implementations usually expose raw start/write/stop
/// primitives instead of a burst write; this trait is the minimal surface
/// the driver needs from them. A session is `start`, one or more
/// `write_byte`, then `stop`; the caller is responsible for pairing
/// `start` with `stop`.
pub trait BitBangBus {
    /// Error type for bus operations
    type Error: Debug;

    /// Issue a start condition
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Clock out one byte
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Issue a stop condition
    fn stop(&mut self) -> Result<(), Self::Error>;
}

/// Software (bit-banged) I2C interface
///
/// Produces the same logical framing as [`I2cInterface`] but builds each
/// frame from explicit session primitives, including the shifted address
/// byte that a hardware peripheral would generate itself.
pub struct BitBangI2cInterface<B, RST> {
    bus: B,
    address: u8,
    rst: RST,
}

impl<B, RST> BitBangI2cInterface<B, RST> {
    /// Create a new software I2C interface
    pub fn new(bus: B, address: u8, rst: RST) -> Self {
        Self { bus, address, rst }
    }

    /// Consume the interface and release the bus and reset pin
    pub fn release(self) -> (B, RST) {
        (self.bus, self.rst)
    }
}

impl<B, RST> BitBangI2cInterface<B, RST>
where
    B: BitBangBus,
{
    /// Address byte on the wire: 7-bit address shifted left, write bit clear.
    fn address_byte(&self) -> u8 {
        self.address << 1
    }
}

impl<B, RST> DisplayInterface for BitBangI2cInterface<B, RST>
where
    B: BitBangBus,
    RST: OutputPin,
{
    type Error = InterfaceError<B::Error, RST::Error>;

    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), Self::Error> {
        for &cmd in cmds {
            self.bus.start().map_err(InterfaceError::Comm)?;
            self.bus
                .write_byte(self.address_byte())
                .map_err(InterfaceError::Comm)?;
            self.bus
                .write_byte(CONTROL_COMMAND)
                .map_err(InterfaceError::Comm)?;
            self.bus.write_byte(cmd).map_err(InterfaceError::Comm)?;
            self.bus.stop().map_err(InterfaceError::Comm)?;
        }
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.bus.start().map_err(InterfaceError::Comm)?;
        self.bus
            .write_byte(self.address_byte())
            .map_err(InterfaceError::Comm)?;
        self.bus
            .write_byte(CONTROL_DATA)
            .map_err(InterfaceError::Comm)?;
        for &byte in data {
            self.bus.write_byte(byte).map_err(InterfaceError::Comm)?;
        }
        self.bus.stop().map_err(InterfaceError::Comm)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        reset_sequence(&mut self.rst, delay).map_err(InterfaceError::Pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Event, MockBitBangBus, MockI2c, MockPin, SharedLog};

    #[test]
    fn test_hardware_command_framing() {
        let log = SharedLog::default();
        let mut iface = I2cInterface::new(MockI2c::new(&log), DEFAULT_ADDRESS, MockPin::new(&log));

        iface.send_commands(&[0x81, 0xCF]).unwrap();

        assert_eq!(
            log.take(),
            [
                Event::I2cWrite(0x3C, [0x80, 0x81].to_vec()),
                Event::I2cWrite(0x3C, [0x80, 0xCF].to_vec()),
            ]
        );
    }

    #[test]
    fn test_hardware_data_is_one_prefixed_write() {
        let log = SharedLog::default();
        let mut iface = I2cInterface::new(MockI2c::new(&log), DEFAULT_ADDRESS, MockPin::new(&log));

        iface.send_data(&[0xAA, 0x55, 0xAA]).unwrap();

        assert_eq!(
            log.take(),
            [Event::I2cWrite(0x3C, [0x40, 0xAA, 0x55, 0xAA].to_vec())]
        );
    }

    #[test]
    fn test_bitbang_command_session_per_byte() {
        let log = SharedLog::default();
        let mut iface =
            BitBangI2cInterface::new(MockBitBangBus::new(&log), DEFAULT_ADDRESS, MockPin::new(&log));

        iface.send_commands(&[0xAE, 0xAF]).unwrap();

        assert_eq!(
            log.take(),
            [
                Event::BusStart,
                Event::BusByte(0x78), // 0x3C << 1
                Event::BusByte(0x80),
                Event::BusByte(0xAE),
                Event::BusStop,
                Event::BusStart,
                Event::BusByte(0x78),
                Event::BusByte(0x80),
                Event::BusByte(0xAF),
                Event::BusStop,
            ]
        );
    }

    #[test]
    fn test_bitbang_data_single_session() {
        let log = SharedLog::default();
        let mut iface =
            BitBangI2cInterface::new(MockBitBangBus::new(&log), DEFAULT_ADDRESS, MockPin::new(&log));

        iface.send_data(&[0x01, 0x02]).unwrap();

        assert_eq!(
            log.take(),
            [
                Event::BusStart,
                Event::BusByte(0x78),
                Event::BusByte(0x40),
                Event::BusByte(0x01),
                Event::BusByte(0x02),
                Event::BusStop,
            ]
        );
    }
}
