// SH1106 command definitions

pub const SET_CONTRAST: u8 = 0x81; // Contrast control, followed by one value byte
pub const SET_NORM_INV: u8 = 0xA6; // Normal (A6) / inverted (A7) display
pub const SET_DISP: u8 = 0xAE; // Display off (AE) / on (AF)
pub const LOW_COLUMN_ADDRESS: u8 = 0x00; // Lower column address nibble
pub const HIGH_COLUMN_ADDRESS: u8 = 0x10; // Higher column address nibble
pub const SET_PAGE_ADDRESS: u8 = 0xB0; // Page address (B0..B7)
pub const SET_START_LINE: u8 = 0x40; // Display start line (40..7F)
pub const SET_SEG_REMAP: u8 = 0xA0; // Segment remap off (A0) / mirrored (A1)
pub const SET_COM_SCAN_DIR: u8 = 0xC0; // COM scan direction normal (C0) / flipped (C8)

// The controller RAM is 132 columns wide; a 128 column panel sits at
// columns 2..130, so every page write starts at RAM column 2.
pub const COLUMN_OFFSET: u8 = 2;

// Contrast value programmed by the power-up table.
pub const DEFAULT_CONTRAST: u8 = 0xCF;

/// Power-up command table, sent verbatim after the hardware reset.
///
/// Order is significant and the bytes are controller-specific; do not
/// reorder or "clean up" values without checking against the datasheet.
pub const INIT_SEQUENCE: [u8; 25] = [
    0xAE, // display off
    0xD5, 0x80, // clock divide ratio / oscillator frequency
    0xA8, 0x3F, // multiplex ratio 64
    0xD3, 0x00, // display offset 0
    0x40, // start line 0
    0x8D, 0x14, // charge pump on
    0x20, 0x00, // horizontal addressing mode
    0xC0, // COM scan direction normal
    0xA0, // segment remap off
    0xDA, 0x12, // COM pin configuration
    0x81, 0xCF, // contrast
    0xD9, 0xF1, // pre-charge period
    0xDB, 0x40, // VCOMH deselect level
    0xA4, // resume to RAM content display
    0xA6, // normal (non-inverted) display
    0xAF, // display on
];
