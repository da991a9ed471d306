//! Shared mocks for unit tests
//!
//! The pin, delay and bus mocks push into one ordered event log so tests
//! can assert on the exact interleaving of pin toggles, delays and bus
//! writes, which is where transport framing bugs hide.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::{I2c, Operation};
use embedded_hal::spi::{Mode, SpiBus};

use crate::spi::ConfigurableSpiBus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinRole {
    Reset,
    DataCommand,
    ChipSelect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Pin(PinRole, bool),
    DelayMs(u32),
    I2cWrite(u8, Vec<u8>),
    BusStart,
    BusByte(u8),
    BusStop,
    SpiConfigure(u32),
    SpiWrite(Vec<u8>),
}

/// Ordered event log shared between mocks via `Rc`.
#[derive(Clone, Default)]
pub struct SharedLog(Rc<RefCell<Vec<Event>>>);

impl SharedLog {
    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn take(&self) -> Vec<Event> {
        core::mem::take(&mut *self.0.borrow_mut())
    }
}

pub struct MockPin {
    log: SharedLog,
    role: PinRole,
}

impl MockPin {
    pub fn new(log: &SharedLog) -> Self {
        Self::with_role(log, PinRole::Reset)
    }

    pub fn with_role(log: &SharedLog, role: PinRole) -> Self {
        Self {
            log: log.clone(),
            role,
        }
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::Pin(self.role, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::Pin(self.role, true));
        Ok(())
    }
}

pub struct MockDelay {
    log: SharedLog,
}

impl MockDelay {
    pub fn new(log: &SharedLog) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::DelayMs(ms));
    }
}

pub struct MockI2c {
    log: SharedLog,
}

impl MockI2c {
    pub fn new(log: &SharedLog) -> Self {
        Self { log: log.clone() }
    }
}

impl embedded_hal::i2c::ErrorType for MockI2c {
    type Error = Infallible;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations.iter() {
            if let Operation::Write(bytes) = op {
                self.log.push(Event::I2cWrite(address, bytes.to_vec()));
            }
        }
        Ok(())
    }
}

pub struct MockBitBangBus {
    log: SharedLog,
}

impl MockBitBangBus {
    pub fn new(log: &SharedLog) -> Self {
        Self { log: log.clone() }
    }
}

impl crate::i2c::BitBangBus for MockBitBangBus {
    type Error = Infallible;

    fn start(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::BusStart);
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.log.push(Event::BusByte(byte));
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::BusStop);
        Ok(())
    }
}

pub struct MockSpiBus {
    log: SharedLog,
}

impl MockSpiBus {
    pub fn new(log: &SharedLog) -> Self {
        Self { log: log.clone() }
    }
}

impl embedded_hal::spi::ErrorType for MockSpiBus {
    type Error = Infallible;
}

impl SpiBus<u8> for MockSpiBus {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        words.fill(0);
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        self.log.push(Event::SpiWrite(words.to_vec()));
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        read.fill(0);
        self.log.push(Event::SpiWrite(write.to_vec()));
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        self.log.push(Event::SpiWrite(words.to_vec()));
        words.fill(0);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl ConfigurableSpiBus for MockSpiBus {
    fn configure(&mut self, clock_hz: u32, _mode: Mode) -> Result<(), Self::Error> {
        self.log.push(Event::SpiConfigure(clock_hz));
        Ok(())
    }
}
