//! Latin-1 Supplement fold table
//!
//! Maps the trailing byte of a `0xC3 xx` UTF-8 sequence (U+00C0..=U+00FF)
//! to a single displayable byte. Entries the font cannot approximate hold
//! [`UNMAPPED`].

/// Displayed in place of a character with no single-byte fold
pub const UNMAPPED: u8 = b'#';

/// Folds for trailing bytes 0x80..=0xBF, sixteen per row
const FOLD_ROWS: [&[u8; 16]; 4] = [
    b"AAAAAAACEEEEIIII", // 0x80: À Á Â Ã Ä Å Æ Ç È É Ê Ë Ì Í Î Ï
    b"DNOOOOO##UUUU###", // 0x90: Ð Ñ Ò Ó Ô Õ Ö × Ø Ù Ú Û Ü Ý Þ ß
    b"aaaaaaaceeeeiiii", // 0xA0: à á â ã ä å æ ç è é ê ë ì í î ï
    b"dnooooo##uuuuyyy", // 0xB0: ð ñ ò ó ô õ ö ÷ ø ù ú û ü ý þ ÿ
];

/// Fold table indexed by `trailing_byte - 0x80`
///
/// Bytes 0xC0..=0xFF are never valid continuation bytes; they are still
/// covered so that every lookup is in bounds.
pub const LATIN1_FOLD: [u8; 128] = build_table();

const fn build_table() -> [u8; 128] {
    let mut table = [UNMAPPED; 128];
    let mut row = 0;
    while row < FOLD_ROWS.len() {
        let mut col = 0;
        while col < 16 {
            table[row * 16 + col] = FOLD_ROWS[row][col];
            col += 1;
        }
        row += 1;
    }
    table
}

/// Look up the fold for a trailing byte in 0x80..=0xFF
#[inline]
pub const fn fold(trail: u8) -> u8 {
    LATIN1_FOLD[(trail & 0x7F) as usize]
}
