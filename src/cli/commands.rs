//! Subcommand handlers.

use std::io::Read;

use super::args::{Args, Command, ConfigAction, DotArgs, PolicyArgs};
use super::enums::FormatArg;
use crate::braille::{BrailleError, Cell, Converter, DotParseOptions, DotStyle, Format};
use crate::config::{default_path as get_config_path, Config, ConfigError, DEFAULT_CONFIG};

/// Errors reported by the `brlconv` binary.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Braille(#[from] BrailleError),

    #[error("Failed to read input: {0}")]
    Input(#[source] std::io::Error),

    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(std::path::PathBuf),

    #[error("Failed to write config file: {0}")]
    ConfigWrite(#[source] std::io::Error),
}

/// Dispatch a parsed command line.
pub fn run(args: Args) -> Result<(), CommandError> {
    let config = || Config::load(args.config.as_deref());

    match args.command {
        Command::Convert {
            from,
            to,
            text,
            six_dot,
            policy,
            dots,
        } => {
            let config = config()?;
            let input = read_input(text, from)?;
            let converter = build_converter(&config, &policy)?;
            let (style, options) = dot_settings(&config, &dots);
            let eight_dot = config.pseudo.eight_dot && !six_dot;
            let output = converter.convert(
                &input,
                Format::from(from).source(&options),
                Format::from(to).target(&style, eight_dot),
            )?;
            emit(&output, to);
        }
        Command::Check {
            from,
            text,
            policy,
            dots,
        } => {
            let config = config()?;
            let input = read_input(text, from)?;
            let converter = build_converter(&config, &policy)?;
            let (_, options) = dot_settings(&config, &dots);
            let six = converter.is_six_dot(&input, Format::from(from).source(&options))?;
            println!("{}", if six { "6-dot" } else { "8-dot" });
        }
        Command::Strip {
            from,
            to,
            text,
            policy,
            dots,
        } => {
            let config = config()?;
            let to = to.unwrap_or(from);
            let input = read_input(text, from)?;
            let converter = build_converter(&config, &policy)?;
            let (style, options) = dot_settings(&config, &dots);
            let output = converter.strip_dots78(
                &input,
                Format::from(from).source(&options),
                Format::from(to).target(&style, config.pseudo.eight_dot),
            )?;
            emit(&output, to);
        }
        Command::Table { eight_dot } => {
            for row in table_rows(eight_dot) {
                println!("{}", row);
            }
        }
        Command::Config { action } => handle_config_action(action, &config()?)?,
    }
    Ok(())
}

fn build_converter(config: &Config, policy: &PolicyArgs) -> Result<Converter, ConfigError> {
    let converter = config.converter(policy.on_error.map(Into::into), policy.replacement)?;
    if policy.strict_case {
        Ok(converter.with_liberal_input(false))
    } else {
        Ok(converter)
    }
}

/// Dot notation settings: CLI flags over config file over defaults.
fn dot_settings(config: &Config, args: &DotArgs) -> (DotStyle, DotParseOptions) {
    let pick = |flag: &Option<String>, file: &String| flag.clone().unwrap_or_else(|| file.clone());
    let style = DotStyle {
        prefix: pick(&args.prefix, &config.dots.style.prefix),
        delimiter: pick(&args.delimiter, &config.dots.style.delimiter),
        suffix: pick(&args.suffix, &config.dots.style.suffix),
    };
    let options = DotParseOptions {
        cell_delimiter: pick(&args.cell_delimiter, &config.dots.parse.cell_delimiter),
        valid_chars: pick(&args.valid_chars, &config.dots.parse.valid_chars),
    };
    (style, options)
}

/// Take the input from the argument or stdin.
///
/// A single trailing newline from stdin is dropped except for
/// pseudo-braille, where line structure matters.
fn read_input(text: Option<String>, from: FormatArg) -> Result<String, CommandError> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(CommandError::Input)?;
    if from != FormatArg::Pseudo {
        if let Some(stripped) = buf.strip_suffix('\n') {
            let len = stripped.strip_suffix('\r').unwrap_or(stripped).len();
            buf.truncate(len);
        }
    }
    Ok(buf)
}

fn emit(output: &str, to: FormatArg) {
    if to == FormatArg::Pseudo {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

/// One line per cell: Unicode, braille ASCII (`-` if none), `p` style, `(,)` style.
pub fn table_rows(eight_dot: bool) -> Vec<String> {
    let last: u8 = if eight_dot { 0xFF } else { 0x3F };
    let compact = DotStyle::default();
    let parens = DotStyle::parenthesized();
    (0..=last)
        .map(Cell::from_mask)
        .map(|cell| {
            let ascii = cell.to_ascii().map_or_else(|_| "-".to_string(), String::from);
            format!(
                "{}  {:<2} {:<10} {}",
                cell.to_unicode(),
                ascii,
                compact.format_cell(cell),
                parens.format_cell(cell)
            )
        })
        .collect()
}

/// Handle config subcommand actions.
fn handle_config_action(action: ConfigAction, config: &Config) -> Result<(), CommandError> {
    match action {
        ConfigAction::Show => {
            let converter = config.converter(None, None)?;
            println!("Current configuration:");
            println!("  On error: {}", converter.policy());
            println!("  Replacement: {}", converter.replacement());
            println!(
                "  Liberal input: {}",
                if converter.liberal_input() { "yes" } else { "no" }
            );
            println!(
                "  Dot style: prefix {:?}, delimiter {:?}, suffix {:?}",
                config.dots.style.prefix, config.dots.style.delimiter, config.dots.style.suffix
            );
            println!(
                "  Dot parsing: cell delimiter {:?}, valid chars {:?}",
                config.dots.parse.cell_delimiter, config.dots.parse.valid_chars
            );
            println!(
                "  Pseudo-braille rows: {}",
                if config.pseudo.eight_dot { 4 } else { 3 }
            );
            println!();

            let config_path = get_config_path();
            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            let config_path = get_config_path();
            if config_path.exists() {
                return Err(CommandError::ConfigExists(config_path));
            }

            // Create parent directories if needed
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).map_err(CommandError::ConfigWrite)?;
            }
            std::fs::write(&config_path, DEFAULT_CONFIG).map_err(CommandError::ConfigWrite)?;
            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}
