//! Panel and font geometry

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometry of the panel and its fixed-width text font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Panel width in pixels
    pub width: u16,
    /// Panel height in pixels
    pub height: u16,
    /// Text font cell width in pixels
    pub char_width: u8,
    /// Text font cell height in pixels
    pub char_height: u8,
    /// X offset of text drawn beside a status icon
    pub text_indent: u8,
}

impl Default for DisplayConfig {
    /// 128x64 SSD1306 with a 5x8 font
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
            char_width: 5,
            char_height: 8,
            text_indent: 9,
        }
    }
}

impl DisplayConfig {
    /// Number of whole characters that fit on one line
    pub fn columns(&self) -> usize {
        if self.char_width == 0 {
            return 0;
        }
        usize::from(self.width / u16::from(self.char_width))
    }

    /// Top of a status row
    ///
    /// Rows are one character cell plus a pixel of spacing apart.
    pub fn row_y(&self, row: u8) -> u16 {
        u16::from(row) * (u16::from(self.char_height) + 1)
    }
}
