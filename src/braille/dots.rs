//! Dot-number notation: `p1235`, `(1,2,3,5)`, `<1-2-3>` and similar.
//!
//! A cell is written as `prefix`, the raised dot numbers in ascending order
//! joined by `delimiter`, then `suffix`. The blank cell is written with the
//! single digit `0`.
//!
//! Parsing is liberal: a dot is raised if its digit appears anywhere in the
//! cell's text, so `3120`, `0123` and `p123` all mean dots 1, 2 and 3.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::error::BrailleError;

/// Output decoration for dot notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotStyle {
    pub prefix: String,
    pub delimiter: String,
    pub suffix: String,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self::new("p", "", "")
    }
}

impl DotStyle {
    pub fn new(prefix: &str, delimiter: &str, suffix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            delimiter: delimiter.to_string(),
            suffix: suffix.to_string(),
        }
    }

    /// The `(1,2,3)` style.
    pub fn parenthesized() -> Self {
        Self::new("(", ",", ")")
    }

    /// Render one cell.
    pub fn format_cell(&self, cell: Cell) -> String {
        let digits = if cell.is_blank() {
            "0".to_string()
        } else {
            cell.raised_dots()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(&self.delimiter)
        };
        format!("{}{}{}", self.prefix, digits, self.suffix)
    }
}

/// How multi-cell dot notation is split and which characters it may contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotParseOptions {
    /// Separator between cells, e.g. `p` for `p123p1` or `(` for `(123)(1)`.
    /// Empty disables splitting.
    pub cell_delimiter: String,
    /// Every character of a single cell must be one of these.
    pub valid_chars: String,
}

impl Default for DotParseOptions {
    fn default() -> Self {
        Self::new("p", "012345678,p() ")
    }
}

impl DotParseOptions {
    pub fn new(cell_delimiter: &str, valid_chars: &str) -> Self {
        Self {
            cell_delimiter: cell_delimiter.to_string(),
            valid_chars: valid_chars.to_string(),
        }
    }

    /// Split `text` into single-cell segments.
    ///
    /// Surrounding whitespace is trimmed and empty text yields no segments.
    /// The text is only split when the delimiter occurs and produces more
    /// than two pieces; a lone leading or trailing delimiter (`p123`,
    /// `123p`) leaves it a single cell. Empty pieces are dropped and each
    /// piece is trimmed again.
    pub fn split_cells<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }
        let delim = self.cell_delimiter.as_str();
        if delim.is_empty() || text.split(delim).nth(2).is_none() {
            return vec![text];
        }
        text.split(delim)
            .filter(|piece| !piece.is_empty())
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .inspect(|piece| log::trace!("dot notation segment: {:?}", piece))
            .collect()
    }

    /// Parse one cell's text.
    pub fn parse_cell(&self, segment: &str) -> Result<Cell, BrailleError> {
        if let Some(ch) = segment.chars().find(|c| !self.valid_chars.contains(*c)) {
            return Err(BrailleError::InvalidDotListChar {
                ch,
                segment: segment.to_string(),
            });
        }
        Ok(Cell::from_dots(
            segment
                .chars()
                .filter_map(|c| c.to_digit(10))
                .filter_map(|d| u8::try_from(d).ok()),
        ))
    }

    /// Split and parse, stopping at the first invalid segment.
    pub fn parse(&self, text: &str) -> Result<Vec<Cell>, BrailleError> {
        self.split_cells(text)
            .into_iter()
            .map(|segment| self.parse_cell(segment))
            .collect()
    }
}
