//! Braille cell model and conversions between its text representations.
//!
//! Four representations are supported:
//!
//! 1. **Unicode** - one braille pattern codepoint per cell (`⠇⠁⠃`)
//! 2. **ASCII** - North American braille ASCII, six-dot cells only (`LAB`)
//! 3. **Dots** - dot numbers with configurable decoration (`p123p1p12`, `(1,2,3)(1)(1,2)`)
//! 4. **Pseudo** - a grid of `o`/`.` markers for visual inspection
//!
//! All conversions go through [`Converter`], which carries the
//! [`ErrorPolicy`] for input it cannot translate.

mod cell;
mod convert;
mod dots;
mod error;
mod policy;
pub mod pseudo;
mod table;

pub use cell::{is_six_dot, strip_dots78, Cell, DOTS_78};
pub use convert::{cells, Converter, Format, Source, Target, Unit, DEFAULT_REPLACEMENT};
pub use dots::{DotParseOptions, DotStyle};
pub use error::BrailleError;
pub use policy::{ErrorPolicy, UnknownPolicy};
pub use table::{ASCII_BRAILLE, BRAILLE_BASE};
