//! Conversions between the four braille representations.
//!
//! Every conversion decodes its input into a sequence of [`Unit`]s and
//! encodes that sequence into the target form. Units keep their input
//! order. Input that cannot be decoded (or a cell the target cannot
//! express) is handled by the [`Converter`]'s [`ErrorPolicy`].

use std::fmt;

use super::cell::{self, Cell};
use super::dots::{DotParseOptions, DotStyle};
use super::error::BrailleError;
use super::policy::ErrorPolicy;
use super::pseudo;

/// Default replacement for [`ErrorPolicy::Replace`].
pub const DEFAULT_REPLACEMENT: char = '?';

/// One decoded unit of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    Cell(Cell),
    /// Text kept by the error policy (the original unit or the replacement).
    Verbatim(String),
}

impl Unit {
    pub fn cell(&self) -> Option<Cell> {
        match self {
            Unit::Cell(cell) => Some(*cell),
            Unit::Verbatim(_) => None,
        }
    }
}

/// The cells among `units`, verbatim text skipped.
pub fn cells(units: &[Unit]) -> Vec<Cell> {
    units.iter().filter_map(Unit::cell).collect()
}

/// Representation names, without per-call parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Unicode braille patterns, `⠗`
    Unicode,
    /// North American braille ASCII, `R`
    Ascii,
    /// Dot numbers, `p1235`
    Dots,
    /// Grid of `o`/`.` markers
    Pseudo,
}

impl Format {
    pub fn name(&self) -> &'static str {
        match self {
            Format::Unicode => "unicode",
            Format::Ascii => "ascii",
            Format::Dots => "dots",
            Format::Pseudo => "pseudo",
        }
    }

    /// Attach dot-notation parsing options (used only by [`Format::Dots`]).
    pub fn source(self, options: &DotParseOptions) -> Source<'_> {
        match self {
            Format::Unicode => Source::Unicode,
            Format::Ascii => Source::Ascii,
            Format::Dots => Source::Dots(options),
            Format::Pseudo => Source::Pseudo,
        }
    }

    /// Attach output parameters (style for dots, row count for pseudo-braille).
    pub fn target(self, style: &DotStyle, eight_dot: bool) -> Target<'_> {
        match self {
            Format::Unicode => Target::Unicode,
            Format::Ascii => Target::Ascii,
            Format::Dots => Target::Dots(style),
            Format::Pseudo => Target::Pseudo { eight_dot },
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input representation with its parsing parameters.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    Unicode,
    Ascii,
    Dots(&'a DotParseOptions),
    Pseudo,
}

/// Output representation with its formatting parameters.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Unicode,
    Ascii,
    Dots(&'a DotStyle),
    Pseudo { eight_dot: bool },
}

/// Conversion context: error policy, replacement character and input leniency.
///
/// Converters are plain values, so independent conversions can use
/// different policies at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    policy: ErrorPolicy,
    replacement: char,
    liberal_input: bool,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            policy: ErrorPolicy::default(),
            replacement: DEFAULT_REPLACEMENT,
            liberal_input: true,
        }
    }
}

impl Converter {
    pub fn new(policy: ErrorPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_replacement(mut self, replacement: char) -> Self {
        self.replacement = replacement;
        self
    }

    /// Accept lowercase braille ASCII (default on).
    #[must_use]
    pub fn with_liberal_input(mut self, liberal: bool) -> Self {
        self.liberal_input = liberal;
        self
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    pub fn replacement(&self) -> char {
        self.replacement
    }

    pub fn liberal_input(&self) -> bool {
        self.liberal_input
    }

    /// Apply the policy to one failed unit, giving the text to emit in its place.
    fn recover(&self, err: BrailleError) -> Result<String, BrailleError> {
        let Some(text) = err.unit_text() else {
            return Err(err);
        };
        match self.policy {
            ErrorPolicy::Raise => Err(err),
            ErrorPolicy::Passthrough => {
                log::debug!("passing through: {}", err);
                Ok(text)
            }
            ErrorPolicy::Replace => {
                log::debug!("replacing with {:?}: {}", self.replacement, err);
                Ok(self.replacement.to_string())
            }
        }
    }

    fn resolve(&self, result: Result<Cell, BrailleError>) -> Result<Unit, BrailleError> {
        match result {
            Ok(cell) => Ok(Unit::Cell(cell)),
            Err(err) => self.recover(err).map(Unit::Verbatim),
        }
    }

    /// Decode `input` into units, one per cell.
    pub fn decode(&self, input: &str, source: Source<'_>) -> Result<Vec<Unit>, BrailleError> {
        match source {
            Source::Unicode => input
                .chars()
                .map(|ch| self.resolve(Cell::from_unicode(ch)))
                .collect(),
            Source::Ascii => input
                .chars()
                .map(|ch| self.resolve(Cell::from_ascii(ch, self.liberal_input)))
                .collect(),
            Source::Dots(options) => options
                .split_cells(input)
                .into_iter()
                .map(|segment| self.resolve(options.parse_cell(segment)))
                .collect(),
            Source::Pseudo => pseudo::parse(input)?
                .into_iter()
                .map(|cell| self.resolve(cell))
                .collect(),
        }
    }

    /// Encode units into the target representation.
    pub fn encode(&self, units: &[Unit], target: Target<'_>) -> Result<String, BrailleError> {
        match target {
            Target::Unicode => self.encode_cells(units, |cell| Ok(cell.to_unicode().to_string())),
            Target::Ascii => self.encode_cells(units, |cell| cell.to_ascii().map(String::from)),
            Target::Dots(style) => self.encode_cells(units, |cell| Ok(style.format_cell(cell))),
            Target::Pseudo { eight_dot } => self.render_pseudo(units, eight_dot),
        }
    }

    fn encode_cells<F>(&self, units: &[Unit], encode: F) -> Result<String, BrailleError>
    where
        F: Fn(Cell) -> Result<String, BrailleError>,
    {
        let mut out = String::with_capacity(units.len());
        for unit in units {
            match unit {
                Unit::Cell(cell) => match encode(*cell) {
                    Ok(text) => out.push_str(&text),
                    Err(err) => out.push_str(&self.recover(err)?),
                },
                Unit::Verbatim(text) => out.push_str(text),
            }
        }
        Ok(out)
    }

    fn render_pseudo(&self, units: &[Unit], eight_dot: bool) -> Result<String, BrailleError> {
        if self.policy == ErrorPolicy::Raise {
            if let Some(text) = units.iter().find_map(|u| match u {
                Unit::Verbatim(text) => Some(text),
                Unit::Cell(_) => None,
            }) {
                return Err(BrailleError::OutOfRange { unit: text.clone() });
            }
        }
        Ok(pseudo::render(units.iter().map(Unit::cell), eight_dot))
    }

    /// Decode then encode.
    pub fn convert(
        &self,
        input: &str,
        source: Source<'_>,
        target: Target<'_>,
    ) -> Result<String, BrailleError> {
        let units = self.decode(input, source)?;
        self.encode(&units, target)
    }

    /// True iff no cell of `input` has dot 7 or dot 8 raised.
    pub fn is_six_dot(&self, input: &str, source: Source<'_>) -> Result<bool, BrailleError> {
        let units = self.decode(input, source)?;
        Ok(cell::is_six_dot(&cells(&units)))
    }

    /// Clear dots 7 and 8 of every cell, re-encoding into `target`.
    pub fn strip_dots78(
        &self,
        input: &str,
        source: Source<'_>,
        target: Target<'_>,
    ) -> Result<String, BrailleError> {
        let units: Vec<Unit> = self
            .decode(input, source)?
            .into_iter()
            .map(|unit| match unit {
                Unit::Cell(cell) => Unit::Cell(cell.strip_dots78()),
                verbatim => verbatim,
            })
            .collect();
        self.encode(&units, target)
    }

    pub fn unicode_to_ascii(&self, text: &str) -> Result<String, BrailleError> {
        self.convert(text, Source::Unicode, Target::Ascii)
    }

    pub fn unicode_to_dots(&self, text: &str, style: &DotStyle) -> Result<String, BrailleError> {
        self.convert(text, Source::Unicode, Target::Dots(style))
    }

    pub fn unicode_to_pseudo(&self, text: &str, eight_dot: bool) -> Result<String, BrailleError> {
        self.convert(text, Source::Unicode, Target::Pseudo { eight_dot })
    }

    pub fn ascii_to_unicode(&self, text: &str) -> Result<String, BrailleError> {
        self.convert(text, Source::Ascii, Target::Unicode)
    }

    pub fn ascii_to_dots(&self, text: &str, style: &DotStyle) -> Result<String, BrailleError> {
        self.convert(text, Source::Ascii, Target::Dots(style))
    }

    pub fn ascii_to_pseudo(&self, text: &str, eight_dot: bool) -> Result<String, BrailleError> {
        self.convert(text, Source::Ascii, Target::Pseudo { eight_dot })
    }

    pub fn dots_to_unicode(
        &self,
        text: &str,
        options: &DotParseOptions,
    ) -> Result<String, BrailleError> {
        self.convert(text, Source::Dots(options), Target::Unicode)
    }

    pub fn dots_to_ascii(
        &self,
        text: &str,
        options: &DotParseOptions,
    ) -> Result<String, BrailleError> {
        self.convert(text, Source::Dots(options), Target::Ascii)
    }

    pub fn dots_to_pseudo(
        &self,
        text: &str,
        options: &DotParseOptions,
        eight_dot: bool,
    ) -> Result<String, BrailleError> {
        self.convert(text, Source::Dots(options), Target::Pseudo { eight_dot })
    }

    pub fn pseudo_to_unicode(&self, text: &str) -> Result<String, BrailleError> {
        self.convert(text, Source::Pseudo, Target::Unicode)
    }

    pub fn pseudo_to_ascii(&self, text: &str) -> Result<String, BrailleError> {
        self.convert(text, Source::Pseudo, Target::Ascii)
    }

    pub fn pseudo_to_dots(&self, text: &str, style: &DotStyle) -> Result<String, BrailleError> {
        self.convert(text, Source::Pseudo, Target::Dots(style))
    }
}
