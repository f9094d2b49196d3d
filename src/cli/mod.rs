//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction, DotArgs, PolicyArgs};
pub use commands::{run, table_rows, CommandError};
pub use enums::{FormatArg, PolicyArg};
