//! UTF-8 to extended ASCII conversion for glyph displays
//!
//! Small OLED panels driven with a fixed-width font can only render one
//! byte per glyph. This crate folds a UTF-8 byte stream down to that
//! representation:
//!
//! - Plain ASCII passes through unchanged
//! - Accented Latin-1 letters (`é`, `Ü`, `ç`, ...) fold to their base letter
//! - `€` folds to `E`
//! - Anything else is dropped
//!
//! Decoding is a single pass over the input with one byte of state and no
//! lookahead, so a buffer can be converted in place.
//!
//! ```
//! use radiola_text::utf8_to_ascii_in_place;
//!
//! let mut buf = *b"Caf\xC3\xA9\0";
//! let len = utf8_to_ascii_in_place(&mut buf);
//! assert_eq!(&buf[..len], b"Cafe");
//! assert_eq!(buf[len], 0);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod decoder;
pub mod table;

pub use decoder::{utf8_to_ascii_in_place, Utf8Ascii, SUPPRESS};
pub use table::{LATIN1_FOLD, UNMAPPED};
