//! Error types for braille conversions.

use super::cell::Cell;

/// A unit of input that could not be converted.
///
/// Every variant except [`BrailleError::MalformedGrid`] concerns a single
/// cell and is subject to the converter's [`ErrorPolicy`](super::ErrorPolicy).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrailleError {
    #[error("'{unit}' is not a braille cell")]
    OutOfRange {
        /// The offending text, verbatim
        unit: String,
    },

    #[error("cell {:#04x} uses dots 7/8 and has no braille ASCII mnemonic", .cell.mask())]
    NoMnemonic { cell: Cell },

    #[error("'{ch}' is not a braille ASCII character")]
    UnknownMnemonic { ch: char },

    #[error("invalid character '{ch}' in dot notation \"{segment}\"")]
    InvalidDotListChar {
        ch: char,
        /// The single-cell segment that contained the character
        segment: String,
    },

    #[error("pseudo-braille cell {column} is not a dot pattern: \"{glyph}\"")]
    InvalidPseudoCell { column: usize, glyph: String },

    #[error("pseudo-braille block must have 3 or 4 rows, found {rows}")]
    MalformedGrid { rows: usize },
}

impl BrailleError {
    /// The untranslated input text this error refers to, if it is local to one unit.
    pub fn unit_text(&self) -> Option<String> {
        match self {
            BrailleError::OutOfRange { unit } => Some(unit.clone()),
            BrailleError::NoMnemonic { cell } => Some(cell.to_unicode().to_string()),
            BrailleError::UnknownMnemonic { ch } => Some(ch.to_string()),
            BrailleError::InvalidDotListChar { segment, .. } => Some(segment.clone()),
            BrailleError::InvalidPseudoCell { glyph, .. } => Some(glyph.clone()),
            BrailleError::MalformedGrid { .. } => None,
        }
    }
}
