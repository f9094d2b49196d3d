//! Symbol tables: Unicode braille patterns and North American braille ASCII.

use super::cell::Cell;
use super::error::BrailleError;

/// Codepoint of the blank braille pattern (U+2800). Cell `m` is `BRAILLE_BASE + m`.
pub const BRAILLE_BASE: u32 = 0x2800;

/// Braille ASCII alphabet. The character at index `i` is the mnemonic for mask `i`.
///
/// Only six-dot cells (masks 0..=63) have a mnemonic.
pub const ASCII_BRAILLE: &str =
    " A1B'K2L@CIF/MSP\"E3H9O6R^DJG>NTQ,*5<-U8V.%[$+X!&;:4\\0Z7(_?W]#Y)=";

const NO_MNEMONIC: u8 = 0xFF;

/// ASCII code to mask, `NO_MNEMONIC` where the character is not in the alphabet.
const ASCII_TO_MASK: [u8; 128] = build_inverse();

const fn build_inverse() -> [u8; 128] {
    let bytes = ASCII_BRAILLE.as_bytes();
    let mut table = [NO_MNEMONIC; 128];
    let mut i = 0;
    while i < bytes.len() {
        table[bytes[i] as usize] = i as u8;
        i += 1;
    }
    table
}

impl Cell {
    /// Unicode braille pattern for this cell. Never fails.
    pub fn to_unicode(self) -> char {
        char::from_u32(BRAILLE_BASE + u32::from(self.mask())).unwrap_or('\u{2800}')
    }

    /// Decode a Unicode braille pattern.
    pub fn from_unicode(ch: char) -> Result<Self, BrailleError> {
        u32::from(ch)
            .checked_sub(BRAILLE_BASE)
            .and_then(|offset| u8::try_from(offset).ok())
            .map(Cell::from_mask)
            .ok_or_else(|| BrailleError::OutOfRange {
                unit: ch.to_string(),
            })
    }

    /// Braille ASCII mnemonic for this cell, if it is six-dot.
    pub fn to_ascii(self) -> Result<char, BrailleError> {
        ASCII_BRAILLE
            .as_bytes()
            .get(usize::from(self.mask()))
            .map(|&b| char::from(b))
            .ok_or(BrailleError::NoMnemonic { cell: self })
    }

    /// Decode a braille ASCII mnemonic.
    ///
    /// With `liberal` set, lowercase letters are looked up as uppercase.
    pub fn from_ascii(ch: char, liberal: bool) -> Result<Self, BrailleError> {
        let key = if liberal { ch.to_ascii_uppercase() } else { ch };
        if !key.is_ascii() {
            return Err(BrailleError::UnknownMnemonic { ch });
        }
        match ASCII_TO_MASK[key as usize] {
            NO_MNEMONIC => Err(BrailleError::UnknownMnemonic { ch }),
            mask => Ok(Cell::from_mask(mask)),
        }
    }
}
