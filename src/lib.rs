//! brlconv library crate.
//!
//! Conversions between Unicode braille, braille ASCII, dot-number notation
//! and pseudo-braille, plus the configuration and CLI used by the binary.

pub mod braille;
pub mod cli;
pub mod config;

pub use braille::{BrailleError, Cell, Converter, ErrorPolicy};
