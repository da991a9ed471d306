//! Core display operations
//!
//! [`Display`] owns the framebuffer, one transport backend and the
//! persistent controller state. Drawing happens in memory (directly via
//! [`Display::set_pixel`] or through embedded-graphics with the `graphics`
//! feature); nothing reaches the panel until [`Display::show`] streams the
//! buffer out page by page.

use alloc::vec;
use alloc::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::command::{
    COLUMN_OFFSET, DEFAULT_CONTRAST, HIGH_COLUMN_ADDRESS, INIT_SEQUENCE, LOW_COLUMN_ADDRESS,
    SET_COM_SCAN_DIR, SET_CONTRAST, SET_DISP, SET_NORM_INV, SET_PAGE_ADDRESS, SET_SEG_REMAP,
    SET_START_LINE,
};
use crate::config::Dimensions;
use crate::error::Error;
use crate::interface::DisplayInterface;

/// Persistent controller state, mirrored in memory
///
/// Updated only by [`Display`] operations. A transport failure leaves the
/// in-memory state already updated even though the panel may not reflect
/// it; callers that need the two back in sync re-issue the operation or
/// [`Display::show`] after recovering the bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayState {
    powered: bool,
    asleep: bool,
    contrast: u8,
    inverted: bool,
    start_line: u8,
    mirrored: bool,
    flipped: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            powered: false,
            asleep: false,
            // Programmed by the power-up table.
            contrast: DEFAULT_CONTRAST,
            inverted: false,
            start_line: 0,
            mirrored: false,
            flipped: false,
        }
    }
}

impl DisplayState {
    /// Whether the display output is on
    pub fn powered(&self) -> bool {
        self.powered
    }

    /// Whether the panel was put to sleep via [`Display::sleep`]
    pub fn asleep(&self) -> bool {
        self.asleep
    }

    /// Current contrast value
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Whether pixel polarity is inverted
    pub fn inverted(&self) -> bool {
        self.inverted
    }

    /// Current display start line
    pub fn start_line(&self) -> u8 {
        self.start_line
    }

    /// Whether columns are mirrored (segment remap)
    pub fn mirrored(&self) -> bool {
        self.mirrored
    }

    /// Whether rows are flipped (COM scan direction)
    pub fn flipped(&self) -> bool {
        self.flipped
    }
}

/// SH1106 display driver
///
/// Generic over the transport backend; the backend is chosen once when the
/// interface is constructed and never re-decided afterwards. All
/// operations are synchronous and take `&mut self` - concurrent use from
/// multiple threads is unsupported, callers serialize access themselves.
pub struct Display<I>
where
    I: DisplayInterface,
{
    interface: I,
    dimensions: Dimensions,
    /// One byte per column per page; bit 0 is the topmost row of the page.
    buffer: Vec<u8>,
    state: DisplayState,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create and initialize a display
    ///
    /// Validates the dimensions, allocates a zeroed framebuffer, runs the
    /// hardware reset pulse, sends the power-up command table bit-exactly,
    /// then powers the panel on and shows the cleared buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for invalid dimensions (raised before any
    /// bus traffic) and [`Error::Interface`] if the transport fails at any
    /// point; no partially initialized display is ever returned.
    pub fn new<D: DelayNs>(
        interface: I,
        width: u16,
        height: u16,
        delay: &mut D,
    ) -> Result<Self, Error<I>> {
        let dimensions = Dimensions::new(width, height)?;
        let mut display = Self {
            interface,
            dimensions,
            buffer: vec![0; dimensions.buffer_size()],
            state: DisplayState::default(),
        };
        display.init(delay)?;
        Ok(display)
    }

    fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        log::debug!(
            "initializing {}x{} panel ({} pages)",
            self.dimensions.width,
            self.dimensions.height,
            self.dimensions.pages()
        );
        self.interface.reset(delay).map_err(Error::Interface)?;
        self.send_commands(&INIT_SEQUENCE)?;
        self.power(true)?;
        self.show()
    }

    /// Turn the display output on or off
    ///
    /// Like all state operations, the in-memory state is updated before
    /// the bus write, so a transport failure leaves the state ahead of the
    /// panel; re-issue the operation after recovering the bus.
    pub fn power(&mut self, on: bool) -> Result<(), Error<I>> {
        self.state.powered = on;
        self.send_commands(&[SET_DISP | u8::from(on)])
    }

    /// Put the panel to sleep or wake it
    ///
    /// The controller has no distinct sleep register; sleeping is the
    /// display-off command with inverted polarity, i.e. `sleep(true)` is
    /// `power(false)`.
    pub fn sleep(&mut self, asleep: bool) -> Result<(), Error<I>> {
        self.state.asleep = asleep;
        self.power(!asleep)
    }

    /// Set the contrast (0 = dimmest, 255 = brightest)
    pub fn contrast(&mut self, value: u8) -> Result<(), Error<I>> {
        self.state.contrast = value;
        self.send_commands(&[SET_CONTRAST, value])
    }

    /// Invert pixel polarity without touching the framebuffer
    pub fn invert(&mut self, inverted: bool) -> Result<(), Error<I>> {
        self.state.inverted = inverted;
        self.send_commands(&[SET_NORM_INV | u8::from(inverted)])
    }

    /// Set the display start line (vertical scroll position)
    ///
    /// `line` must be below the panel height; the command encodes 6 bits.
    pub fn set_start_line(&mut self, line: u8) -> Result<(), Error<I>> {
        let line = line & 0x3F;
        self.state.start_line = line;
        self.send_commands(&[SET_START_LINE | line])
    }

    /// Mirror columns horizontally (segment remap)
    pub fn mirror(&mut self, mirrored: bool) -> Result<(), Error<I>> {
        self.state.mirrored = mirrored;
        self.send_commands(&[SET_SEG_REMAP | u8::from(mirrored)])
    }

    /// Flip rows vertically (COM scan direction)
    pub fn flip(&mut self, flipped: bool) -> Result<(), Error<I>> {
        self.state.flipped = flipped;
        let cmd = SET_COM_SCAN_DIR | if flipped { 0x08 } else { 0x00 };
        self.send_commands(&[cmd])
    }

    /// Stream the framebuffer to the panel
    ///
    /// The controller keeps an internal cursor that must be re-addressed
    /// for every page: each page gets its page-address and column-address
    /// commands before its `width` bytes of data, in ascending page order.
    pub fn show(&mut self) -> Result<(), Error<I>> {
        let width = self.dimensions.width as usize;
        for page in 0..self.dimensions.pages() {
            self.interface
                .send_commands(&[
                    SET_PAGE_ADDRESS | page as u8,
                    LOW_COLUMN_ADDRESS | COLUMN_OFFSET,
                    HIGH_COLUMN_ADDRESS,
                ])
                .map_err(Error::Interface)?;
            let start = page * width;
            self.interface
                .send_data(&self.buffer[start..start + width])
                .map_err(Error::Interface)?;
        }
        Ok(())
    }

    /// Clear the framebuffer and show the result
    pub fn clear(&mut self) -> Result<(), Error<I>> {
        self.fill(false);
        self.show()
    }

    /// One-shot vertical scroll reveal
    ///
    /// Walks the start line from 0 to `height - 2` with `step_ms` between
    /// steps, showing the buffer once on the first step so the image
    /// scrolls into view. Leaves the framebuffer cleared without a final
    /// [`Display::show`].
    pub fn vpage<D: DelayNs>(&mut self, delay: &mut D, step_ms: u32) -> Result<(), Error<I>> {
        for line in 0..self.dimensions.height - 1 {
            self.set_start_line(line as u8)?;
            if line == 0 {
                self.show()?;
            }
            delay.delay_ms(step_ms);
        }
        self.fill(false);
        Ok(())
    }

    /// Fill the framebuffer with all-on or all-off pixels
    ///
    /// In-memory only; call [`Display::show`] to make it visible.
    pub fn fill(&mut self, on: bool) {
        self.buffer.fill(if on { 0xFF } else { 0x00 });
    }

    /// Set a single pixel in the framebuffer
    ///
    /// Out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: u16, y: u16, on: bool) {
        if x >= self.dimensions.width || y >= self.dimensions.height {
            return;
        }
        let index = (y as usize / 8) * self.dimensions.width as usize + x as usize;
        let bit = 1u8 << (y % 8);
        if on {
            self.buffer[index] |= bit;
        } else {
            self.buffer[index] &= !bit;
        }
    }

    /// Raw framebuffer contents
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Mutable raw framebuffer contents
    ///
    /// Byte at `page * width + column` packs 8 vertically stacked pixels
    /// of that column, bit 0 on top.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    /// Panel dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Current controller state
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Consume the driver and release the interface
    pub fn release(self) -> I {
        self.interface
    }

    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), Error<I>> {
        self.interface.send_commands(cmds).map_err(Error::Interface)
    }
}
