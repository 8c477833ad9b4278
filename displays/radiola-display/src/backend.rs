//! Display backend trait
//!
//! Defines the interface the screen layout draws through.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface to a monochrome pixel display
/// with a frame buffer. Drawing calls only touch the buffer; nothing is
/// visible until [`flush`](Self::flush).
pub trait DisplayBackend {
    /// Clear a rectangle to background color
    fn clear_area(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError>;

    /// Draw text in the text font
    ///
    /// - `x`, `y`: Top-left corner of the first character cell in pixels
    /// - `text`: 7-bit text, already converted for the font
    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> Result<(), DisplayError>;

    /// Draw a single glyph from the icon font
    ///
    /// - `x`, `y`: Top-left corner of the glyph cell in pixels
    /// - `glyph`: Codepoint in the icon font
    fn draw_glyph(&mut self, x: u16, y: u16, glyph: u16) -> Result<(), DisplayError>;

    /// Send the frame buffer to the display
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Descent of the text font in pixels (zero or negative)
    fn font_descent(&self) -> i8;

    /// Get pixel dimensions as (width, height)
    fn pixel_dimensions(&self) -> (u16, u16);
}
