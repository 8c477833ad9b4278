//! Byte-at-a-time UTF-8 to extended ASCII decoder
//!
//! The decoder is a two-state machine (plain / inside a multi-byte
//! sequence) that remembers only the previous non-ASCII byte. A lead byte
//! produces nothing on its own; the byte after it is resolved against the
//! remembered lead.

use crate::table;

/// Decoder output meaning "emit nothing for this input byte"
pub const SUPPRESS: u8 = 0;

/// Lead byte for U+0080..=U+00BF; every character in it renders as `~`
const LEAD_C2: u8 = 0xC2;

/// Lead byte for U+00C0..=U+00FF, resolved through the fold table
const LEAD_C3: u8 = 0xC3;

/// Second byte of `€` (E2 82 AC), remembered as the lead of its last byte
const EURO_MID: u8 = 0x82;

/// Final byte of `€`
const EURO_LAST: u8 = 0xAC;

/// UTF-8 to extended ASCII decoder
///
/// One instance per logical string. Sharing an instance between strings
/// that are decoded interleaved corrupts both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Utf8Ascii {
    /// Previous byte if it was >= 0x80, otherwise 0
    lead: u8,
}

impl Utf8Ascii {
    /// Create a decoder positioned outside any multi-byte sequence
    pub const fn new() -> Self {
        Self { lead: 0 }
    }

    /// Forget any partially decoded sequence
    pub fn reset(&mut self) {
        self.lead = 0;
    }

    /// Whether the previous byte left the decoder inside a sequence
    pub fn in_sequence(&self) -> bool {
        self.lead != 0
    }

    /// Decode a single byte
    ///
    /// Returns the extended ASCII byte to emit, or [`SUPPRESS`] when this
    /// byte produces no output (lead bytes, unknown sequences).
    pub fn decode_byte(&mut self, input: u8) -> u8 {
        if input <= 0x7F {
            self.lead = 0;
            return input;
        }

        let output = match (self.lead, input) {
            (LEAD_C2, _) => b'~',
            (LEAD_C3, trail) => table::fold(trail),
            (EURO_MID, EURO_LAST) => b'E',
            _ => SUPPRESS,
        };

        self.lead = input;
        output
    }

    /// Convert a zero-terminated string in place
    ///
    /// Decoding stops at the first 0 byte, or at the end of the slice if
    /// there is none. The decoder is reset first, so each call treats
    /// `buffer` as an independent string. The converted text is compacted
    /// to the front of `buffer` and re-terminated when there is room.
    ///
    /// Returns the converted length, excluding the terminator. This is
    /// never longer than the input string.
    pub fn decode_in_place(&mut self, buffer: &mut [u8]) -> usize {
        self.reset();

        let mut out = 0;
        for i in 0..buffer.len() {
            let byte = buffer[i];
            if byte == 0 {
                break;
            }
            let decoded = self.decode_byte(byte);
            if decoded != SUPPRESS {
                // out <= i, so this never overwrites unread input
                buffer[out] = decoded;
                out += 1;
            }
        }

        if out < buffer.len() {
            buffer[out] = 0;
        }
        out
    }

    /// Decode a chunk of a longer stream into `output`
    ///
    /// Unlike [`decode_in_place`](Self::decode_in_place) this keeps the
    /// remembered lead byte, so a character split across two chunks is
    /// still decoded. Stops early when `output` is full.
    ///
    /// Returns `(consumed, written)`.
    pub fn decode_bytes(&mut self, input: &[u8], output: &mut [u8]) -> (usize, usize) {
        let mut written = 0;
        for (consumed, &byte) in input.iter().enumerate() {
            if written == output.len() {
                return (consumed, written);
            }
            let decoded = self.decode_byte(byte);
            if decoded != SUPPRESS {
                output[written] = decoded;
                written += 1;
            }
        }
        (input.len(), written)
    }
}

/// Convert a zero-terminated string in place with a fresh decoder
///
/// Returns the converted length, excluding the terminator.
pub fn utf8_to_ascii_in_place(buffer: &mut [u8]) -> usize {
    Utf8Ascii::new().decode_in_place(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;
    use proptest::prelude::*;

    fn decode_all(bytes: &[u8]) -> Vec<u8, 16> {
        let mut decoder = Utf8Ascii::new();
        bytes.iter().map(|&b| decoder.decode_byte(b)).collect()
    }

    #[test]
    fn test_two_byte_lead_suppressed_trail_resolved() {
        assert_eq!(decode_all(&[0xC3, 0xA9]), [0, b'e']);
    }

    #[test]
    fn test_c2_lead_is_tilde() {
        assert_eq!(decode_all(&[0xC2, 0xAA]), [0, b'~']);
        assert_eq!(decode_all(&[0xC2, 0xB0]), [0, b'~']); // °
        assert_eq!(decode_all(&[0xC2, 0xFF]), [0, b'~']);
    }

    #[test]
    fn test_euro_sign() {
        assert_eq!(decode_all(&[0x82, 0xAC]), [0, b'E']);
        // Full UTF-8 encoding of €
        assert_eq!(decode_all(&[0xE2, 0x82, 0xAC]), [0, 0, b'E']);
    }

    #[test]
    fn test_unmapped_trail_is_hash() {
        assert_eq!(decode_all(&[0xC3, 0x98]), [0, b'#']);
    }

    #[test]
    fn test_unknown_sequences_suppressed() {
        // U+2013 EN DASH
        assert_eq!(decode_all(&[0xE2, 0x80, 0x93]), [0, 0, 0]);
        // 0x82 followed by something other than 0xAC
        assert_eq!(decode_all(&[0x82, 0xAD]), [0, 0]);
        // Lone continuation byte
        assert_eq!(decode_all(&[0xA9]), [0]);
    }

    #[test]
    fn test_ascii_clears_lead() {
        let mut decoder = Utf8Ascii::new();
        assert_eq!(decoder.decode_byte(0xC3), SUPPRESS);
        assert!(decoder.in_sequence());
        assert_eq!(decoder.decode_byte(b'x'), b'x');
        assert!(!decoder.in_sequence());
        // The lead was forgotten, so this is a lone continuation byte
        assert_eq!(decoder.decode_byte(0xA9), SUPPRESS);
    }

    #[test]
    fn test_reset() {
        let mut decoder = Utf8Ascii::new();
        decoder.decode_byte(0xC3);
        decoder.reset();
        assert_eq!(decoder, Utf8Ascii::default());
        assert_eq!(decoder.decode_byte(0xA9), SUPPRESS);
    }

    #[test]
    fn test_decode_in_place_compacts() {
        let mut buf = [b'H', b'i', 0xC3, 0xA9, 0];
        let len = utf8_to_ascii_in_place(&mut buf);
        assert_eq!(len, 3);
        assert_eq!(&buf[..4], &[b'H', b'i', b'e', 0]);
    }

    #[test]
    fn test_decode_in_place_stops_at_terminator() {
        let mut buf = *b"ab\0\xC3\xA9cd";
        let len = utf8_to_ascii_in_place(&mut buf);
        assert_eq!(len, 2);
        // Bytes after the terminator are untouched
        assert_eq!(&buf, b"ab\0\xC3\xA9cd");
    }

    #[test]
    fn test_decode_in_place_without_terminator() {
        let mut buf = *b"M\xC3\xBCller";
        let len = utf8_to_ascii_in_place(&mut buf);
        assert_eq!(&buf[..len], b"Muller");
        assert_eq!(buf[len], 0);

        let mut full = *b"abc";
        assert_eq!(utf8_to_ascii_in_place(&mut full), 3);
        assert_eq!(&full, b"abc");
    }

    #[test]
    fn test_decode_in_place_empty() {
        let mut empty: [u8; 0] = [];
        assert_eq!(utf8_to_ascii_in_place(&mut empty), 0);

        let mut only_terminator = [0u8];
        assert_eq!(utf8_to_ascii_in_place(&mut only_terminator), 0);
        assert_eq!(only_terminator, [0]);
    }

    #[test]
    fn test_decode_in_place_resets_between_strings() {
        let mut decoder = Utf8Ascii::new();

        // Ends on a dangling lead byte
        let mut first = *b"abc\xC3\0";
        assert_eq!(decoder.decode_in_place(&mut first), 3);

        // A stray continuation byte must not pair with the old lead
        let mut second = *b"\xA9x\0";
        assert_eq!(decoder.decode_in_place(&mut second), 1);
        assert_eq!(&second[..2], b"x\0");
    }

    #[test]
    fn test_decode_bytes_across_chunks() {
        let mut decoder = Utf8Ascii::new();
        let mut out = [0u8; 8];

        let (consumed, written) = decoder.decode_bytes(b"Jos\xC3", &mut out);
        assert_eq!((consumed, written), (4, 3));

        let (consumed, written2) = decoder.decode_bytes(b"\xA9!", &mut out[written..]);
        assert_eq!((consumed, written2), (2, 2));
        assert_eq!(&out[..written + written2], b"Jose!");
    }

    #[test]
    fn test_decode_bytes_stops_when_output_full() {
        let mut decoder = Utf8Ascii::new();
        let mut out = [0u8; 2];
        let (consumed, written) = decoder.decode_bytes(b"\xC3\xA0bc", &mut out);
        assert_eq!((consumed, written), (3, 2));
        assert_eq!(&out, b"ab");
    }

    proptest! {
        #[test]
        fn prop_ascii_identity(bytes in proptest::collection::vec(0u8..=0x7F, 0..64)) {
            let mut decoder = Utf8Ascii::new();
            for &b in &bytes {
                prop_assert_eq!(decoder.decode_byte(b), b);
                prop_assert!(!decoder.in_sequence());
            }
        }

        #[test]
        fn prop_pure_ascii_in_place_is_noop(text in "[\\x01-\\x7F]{0,40}") {
            let mut buf = std::vec::Vec::from(text.as_bytes());
            buf.push(0);
            let original = buf.clone();

            let len = utf8_to_ascii_in_place(&mut buf);
            prop_assert_eq!(len, text.len());
            prop_assert_eq!(buf, original);
        }

        #[test]
        fn prop_output_never_longer(mut bytes in proptest::collection::vec(1u8..=0xFF, 0..64)) {
            let input_len = bytes.len();
            bytes.push(0);

            let len = utf8_to_ascii_in_place(&mut bytes);
            prop_assert!(len <= input_len);
            prop_assert_eq!(bytes[len], 0);
            prop_assert!(bytes[..len].iter().all(|&b| b != 0 && b.is_ascii()));
        }

        #[test]
        fn prop_any_utf8_string_decodes_to_ascii(text in "\\PC{0,24}") {
            let mut buf = std::vec::Vec::from(text.as_bytes());
            buf.push(0);

            let len = utf8_to_ascii_in_place(&mut buf);
            prop_assert!(len <= text.chars().count());
            prop_assert!(core::str::from_utf8(&buf[..len]).is_ok());
        }
    }
}
