//! Radio screen layout
//!
//! Status rows from the top of the panel, each one character cell plus a
//! pixel apart and prefixed by an icon:
//!
//! ```text
//! row 0  ♪ artist
//! row 1  ♫ song
//! row 2  ⌂ station name
//! row 3  ▤ content type
//! row 4  ⧗ (waiting for data)
//! ...
//! bottom    debug line
//! ```

use crate::backend::{DisplayBackend, DisplayError};
use crate::config::DisplayConfig;
use crate::text::{TextLine, LINE_BUF_LEN};

// Icon font codepoints
/// Person
pub const ICON_ARTIST: u16 = 0xE5;
/// Music note
pub const ICON_SONG: u16 = 0xE1;
/// Antenna
pub const ICON_STATION: u16 = 0xF8;
/// File
pub const ICON_CONTENT_TYPE: u16 = 0xF9;
/// Hourglass
pub const ICON_WAITING: u16 = 0xCD;

const ROW_ARTIST: u8 = 0;
const ROW_SONG: u8 = 1;
const ROW_STATION: u8 = 2;
const ROW_CONTENT_TYPE: u8 = 3;
const ROW_WAITING: u8 = 4;

/// Screen renderer for the radio front panel
pub struct RadioScreen<B> {
    backend: B,
    config: DisplayConfig,
    /// Whether the waiting icon is currently shown
    waiting: bool,
}

impl<B: DisplayBackend> RadioScreen<B> {
    /// Create a screen with the default font, sized to the backend's panel
    pub fn new(backend: B) -> Self {
        let (width, height) = backend.pixel_dimensions();
        let config = DisplayConfig {
            width,
            height,
            ..DisplayConfig::default()
        };
        Self::with_config(backend, config)
    }

    /// Create a screen with explicit geometry
    pub fn with_config(backend: B, config: DisplayConfig) -> Self {
        Self {
            backend,
            config,
            waiting: false,
        }
    }

    /// Show artist and song title
    pub fn show_now_playing(&mut self, artist: &str, song: &str) -> Result<(), DisplayError> {
        let height = self.row_height()? + u16::from(self.config.char_height);
        self.backend.clear_area(0, 0, self.config.width, height)?;

        self.draw_row(ROW_ARTIST, ICON_ARTIST, artist)?;
        self.draw_row(ROW_SONG, ICON_SONG, song)?;
        self.backend.flush()
    }

    /// Show the station name
    pub fn show_station_name(&mut self, name: &str) -> Result<(), DisplayError> {
        self.clear_row(ROW_STATION)?;
        self.draw_row(ROW_STATION, ICON_STATION, name)?;
        self.backend.flush()
    }

    /// Show the stream content type (e.g. `audio/mpeg`)
    pub fn show_content_type(&mut self, content_type: &str) -> Result<(), DisplayError> {
        self.clear_row(ROW_CONTENT_TYPE)?;
        self.draw_row(ROW_CONTENT_TYPE, ICON_CONTENT_TYPE, content_type)?;
        self.backend.flush()
    }

    /// Show the waiting-for-data icon
    ///
    /// Does nothing if it is already shown.
    pub fn show_waiting_icon(&mut self) -> Result<(), DisplayError> {
        if self.waiting {
            return Ok(());
        }
        self.waiting = true;

        self.clear_row(ROW_WAITING)?;
        let y = self.config.row_y(ROW_WAITING);
        self.backend.draw_glyph(0, y, ICON_WAITING)?;
        self.backend.flush()
    }

    /// Hide the waiting-for-data icon
    ///
    /// Does nothing if it is not shown.
    pub fn hide_waiting_icon(&mut self) -> Result<(), DisplayError> {
        if !self.waiting {
            return Ok(());
        }
        self.waiting = false;

        self.clear_row(ROW_WAITING)?;
        self.backend.flush()
    }

    /// Check if the waiting icon is shown
    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// Show a line of text at the bottom of the panel
    pub fn show_debug(&mut self, text: &str) -> Result<(), DisplayError> {
        let descent = i32::from(self.backend.font_descent());
        let char_height = i32::from(self.config.char_height);

        let y = to_coord(i32::from(self.config.height) - char_height + descent)?;
        let height = to_coord(char_height - descent)?;
        self.backend.clear_area(0, y, self.config.width, height)?;

        let line = TextLine::<LINE_BUF_LEN>::from_utf8(text);
        self.backend.draw_text(0, y, line.as_str())?;
        self.backend.flush()
    }

    /// Get the panel geometry
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Access the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consume the screen and return the backend
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Height to clear for one row, including the font's descent
    fn row_height(&self) -> Result<u16, DisplayError> {
        let descent = i32::from(self.backend.font_descent());
        to_coord(i32::from(self.config.char_height) + 1 - descent)
    }

    fn clear_row(&mut self, row: u8) -> Result<(), DisplayError> {
        let height = self.row_height()?;
        let y = self.config.row_y(row);
        self.backend.clear_area(0, y, self.config.width, height)
    }

    /// Draw an icon and converted text on a status row
    fn draw_row(&mut self, row: u8, icon: u16, text: &str) -> Result<(), DisplayError> {
        let y = self.config.row_y(row);
        self.backend.draw_glyph(0, y, icon)?;

        let line = TextLine::<LINE_BUF_LEN>::from_utf8(text);
        self.backend
            .draw_text(u16::from(self.config.text_indent), y, line.as_str())
    }
}

fn to_coord(value: i32) -> Result<u16, DisplayError> {
    u16::try_from(value).map_err(|_| DisplayError::InvalidCoordinates)
}
