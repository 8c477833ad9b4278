//! Fixed-capacity display lines
//!
//! Source strings (stream titles, station names) can be arbitrarily long
//! UTF-8. A [`TextLine`] keeps at most `N - 1` source bytes plus a
//! terminator and converts them in place for the one-byte-per-glyph font.

use radiola_text::utf8_to_ascii_in_place;

/// Line buffer size for the default panel: 128 px / 5 px per char, plus
/// the terminator
pub const LINE_BUF_LEN: usize = 128 / 5 + 1;

/// A converted line of at most `N - 1` characters
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextLine<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> TextLine<N> {
    /// Truncate `text` to fit and convert it
    ///
    /// Truncation counts source bytes, so it can cut a multi-byte character
    /// in half; the partial character is then dropped by the decoder.
    pub fn from_utf8(text: &str) -> Self {
        let mut buf = [0u8; N];
        let take = text.len().min(N.saturating_sub(1));
        buf[..take].copy_from_slice(&text.as_bytes()[..take]);
        let len = utf8_to_ascii_in_place(&mut buf);
        Self { buf, len }
    }

    /// Converted bytes, without the terminator
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Converted text
    pub fn as_str(&self) -> &str {
        // The fold table only produces 7-bit output
        core::str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    /// Number of characters after conversion
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if nothing survived conversion
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<const N: usize> Default for TextLine<N> {
    fn default() -> Self {
        Self {
            buf: [0; N],
            len: 0,
        }
    }
}
