//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{FormatArg, PolicyArg};

/// Convert braille between Unicode, braille ASCII, dot numbers and pseudo-braille
#[derive(Parser, Debug)]
#[command(name = "brlconv")]
#[command(version, about = "Braille representation converter", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

/// Error policy overrides.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PolicyArgs {
    /// What to do with untranslatable input
    #[arg(long)]
    pub on_error: Option<PolicyArg>,

    /// Placeholder for --on-error replace
    #[arg(long)]
    pub replacement: Option<char>,

    /// Reject lowercase braille ASCII
    #[arg(long)]
    pub strict_case: bool,
}

/// Dot notation overrides.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DotArgs {
    /// Text before each cell's dot numbers
    #[arg(long, allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Text between dot numbers
    #[arg(long, allow_hyphen_values = true)]
    pub delimiter: Option<String>,

    /// Text after each cell's dot numbers
    #[arg(long, allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Separator between cells when reading dot notation
    #[arg(long, allow_hyphen_values = true)]
    pub cell_delimiter: Option<String>,

    /// Characters allowed in a cell when reading dot notation
    #[arg(long, allow_hyphen_values = true)]
    pub valid_chars: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert text from one representation to another
    Convert {
        #[arg(long, short)]
        from: FormatArg,
        #[arg(long, short)]
        to: FormatArg,
        /// Input text (read from stdin when omitted)
        text: Option<String>,
        /// Draw pseudo-braille without the dots 7/8 row
        #[arg(long)]
        six_dot: bool,
        #[command(flatten)]
        policy: PolicyArgs,
        #[command(flatten)]
        dots: DotArgs,
    },
    /// Report whether the input uses only dots 1-6
    Check {
        #[arg(long, short)]
        from: FormatArg,
        /// Input text (read from stdin when omitted)
        text: Option<String>,
        #[command(flatten)]
        policy: PolicyArgs,
        #[command(flatten)]
        dots: DotArgs,
    },
    /// Remove dots 7 and 8 from every cell
    Strip {
        #[arg(long, short)]
        from: FormatArg,
        /// Output representation (defaults to the input representation)
        #[arg(long, short)]
        to: Option<FormatArg>,
        /// Input text (read from stdin when omitted)
        text: Option<String>,
        #[command(flatten)]
        policy: PolicyArgs,
        #[command(flatten)]
        dots: DotArgs,
    },
    /// Print every cell in all representations
    Table {
        /// Include the 192 cells that use dots 7/8
        #[arg(long)]
        eight_dot: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_convert_defaults() {
        let args = Args::parse_from(["brlconv", "convert", "--from", "ascii", "--to", "unicode"]);
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "warn");
        match args.command {
            Command::Convert {
                from,
                to,
                text,
                six_dot,
                policy,
                dots,
            } => {
                assert_eq!(from, FormatArg::Ascii);
                assert_eq!(to, FormatArg::Unicode);
                assert!(text.is_none());
                assert!(!six_dot);
                assert!(policy.on_error.is_none());
                assert!(policy.replacement.is_none());
                assert!(!policy.strict_case);
                assert!(dots.prefix.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_args_convert_with_overrides() {
        let args = Args::parse_from([
            "brlconv",
            "convert",
            "-f",
            "dots",
            "-t",
            "pseudo",
            "--on-error",
            "replace",
            "--replacement",
            "#",
            "--cell-delimiter",
            "(",
            "--six-dot",
            "(1,2)(1)",
        ]);
        match args.command {
            Command::Convert {
                text,
                six_dot,
                policy,
                dots,
                ..
            } => {
                assert_eq!(text.as_deref(), Some("(1,2)(1)"));
                assert!(six_dot);
                assert_eq!(policy.on_error, Some(PolicyArg::Replace));
                assert_eq!(policy.replacement, Some('#'));
                assert_eq!(dots.cell_delimiter.as_deref(), Some("("));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_args_dash_delimiter() {
        let args = Args::parse_from([
            "brlconv",
            "convert",
            "-f",
            "unicode",
            "-t",
            "dots",
            "--delimiter",
            "-",
            "⠇",
        ]);
        match args.command {
            Command::Convert { dots, text, .. } => {
                assert_eq!(dots.delimiter.as_deref(), Some("-"));
                assert_eq!(text.as_deref(), Some("⠇"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_args_strip_default_target() {
        let args = Args::parse_from(["brlconv", "strip", "--from", "unicode", "⢹"]);
        match args.command {
            Command::Strip { from, to, .. } => {
                assert_eq!(from, FormatArg::Unicode);
                assert!(to.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_args_global_config() {
        let args = Args::parse_from(["brlconv", "table", "--config", "/tmp/brl.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/brl.toml")));
        assert!(matches!(args.command, Command::Table { eight_dot: false }));
    }

    #[test]
    fn test_args_config_subcommand() {
        let args = Args::parse_from(["brlconv", "config", "init"]);
        assert!(matches!(
            args.command,
            Command::Config {
                action: ConfigAction::Init
            }
        ));
    }

    #[test]
    fn test_args_rejects_unknown_format() {
        assert!(Args::try_parse_from(["brlconv", "convert", "-f", "braille", "-t", "ascii"]).is_err());
    }
}
