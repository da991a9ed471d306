//! Display dimension validation

use crate::error::ConfigError;

/// Maximum RAM columns (segment outputs) of the SH1106 controller.
pub const MAX_COLUMNS: u16 = 132;

/// Maximum COM lines (rows) of the SH1106 controller.
pub const MAX_ROWS: u16 = 64;

/// Validated panel dimensions
///
/// The framebuffer packs 8 vertically stacked pixels per byte, so the
/// height must divide evenly into pages of 8 rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Panel width in pixels (columns)
    pub width: u16,
    /// Panel height in pixels (rows)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDimensions`] if:
    /// - width is 0 or exceeds [`MAX_COLUMNS`]
    /// - height is 0 or exceeds [`MAX_ROWS`]
    /// - height is not a multiple of 8
    pub fn new(width: u16, height: u16) -> Result<Self, ConfigError> {
        if width == 0 || width > MAX_COLUMNS {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_ROWS || height % 8 != 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> usize {
        self.height as usize / 8
    }

    /// Required framebuffer size in bytes (`width * pages`)
    pub fn buffer_size(&self) -> usize {
        self.width as usize * self.pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dimensions() {
        let dims = Dimensions::new(128, 64).unwrap();
        assert_eq!(dims.pages(), 8);
        assert_eq!(dims.buffer_size(), 1024);
    }

    #[test]
    fn test_buffer_size_matches_width_times_pages() {
        for (width, height) in [(128, 64), (128, 32), (132, 64), (96, 16), (64, 48)] {
            let dims = Dimensions::new(width, height).unwrap();
            assert_eq!(
                dims.buffer_size(),
                width as usize * (height as usize / 8),
                "{width}x{height}"
            );
        }
    }

    #[test]
    fn test_height_must_be_page_aligned() {
        assert!(matches!(
            Dimensions::new(128, 65),
            Err(ConfigError::InvalidDimensions {
                width: 128,
                height: 65
            })
        ));
        assert!(Dimensions::new(128, 63).is_err());
    }

    #[test]
    fn test_zero_and_oversized_dimensions() {
        assert!(Dimensions::new(0, 64).is_err());
        assert!(Dimensions::new(128, 0).is_err());
        assert!(Dimensions::new(133, 64).is_err());
        assert!(Dimensions::new(128, 72).is_err());
        assert!(Dimensions::new(132, 64).is_ok());
    }
}
