//! SH1106 monochrome OLED display driver
//!
//! A driver for the SH1106 OLED controller (and close SSD1306-style
//! relatives) behind panels up to 132x64 pixels. The driver owns an
//! off-screen 1-bit framebuffer and streams it to the controller's
//! page/column addressed RAM over one of four transport backends:
//!
//! - hardware I2C ([`I2cInterface`])
//! - software bit-banged I2C ([`BitBangI2cInterface`])
//! - 4-wire SPI with chip select ([`SpiInterface`])
//! - 4-wire SPI without chip select ([`SpiInterfaceNoCs`])
//!
//! ## Features
//!
//! - `no_std` compatible (requires `alloc` for the framebuffer)
//! - `embedded-hal` v1.0 pin, delay, I2C and SPI traits
//! - `embedded-graphics` integration (with the `graphics` feature,
//!   default on)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::i2c::{I2c, Operation};
//! use sh1106::{Display, I2cInterface, DEFAULT_ADDRESS};
//!
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let i2c = MockI2c;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = I2cInterface::new(i2c, DEFAULT_ADDRESS, rst);
//! let mut display = match Display::new(interface, 128, 64, &mut delay) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! display.fill(false);
//! display.set_pixel(10, 10, true);
//! let _ = display.show();
//! ```
//!
//! With the `graphics` feature the display is an
//! `embedded_graphics::draw_target::DrawTarget`, so fills, lines,
//! rectangles and text all come from that ecosystem and render into the
//! framebuffer; call [`Display::show`] to push the result to the panel.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// SH1106 command definitions
mod command;
/// Display dimension validation
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// I2C transport backends
pub mod i2c;
/// Hardware interface abstraction
pub mod interface;
/// SPI transport backends
pub mod spi;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
mod testing;

pub use config::{Dimensions, MAX_COLUMNS, MAX_ROWS};
pub use display::{Display, DisplayState};
pub use error::{ConfigError, Error};
pub use i2c::{BitBangBus, BitBangI2cInterface, I2cInterface, DEFAULT_ADDRESS};
pub use interface::{DisplayInterface, InterfaceError};
pub use spi::{ConfigurableSpiBus, SpiInterface, SpiInterfaceNoCs, SPI_CLOCK_HZ, SPI_MODE};
