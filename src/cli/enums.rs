//! CLI enum types for representation and error policy options.

use clap::ValueEnum;

use crate::braille::{ErrorPolicy, Format};

/// Braille text representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Unicode braille patterns (⠗)
    Unicode,
    /// North American braille ASCII (R)
    Ascii,
    /// Dot numbers (p1235)
    Dots,
    /// Grid of o/. markers
    Pseudo,
}

impl From<FormatArg> for Format {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Unicode => Format::Unicode,
            FormatArg::Ascii => Format::Ascii,
            FormatArg::Dots => Format::Dots,
            FormatArg::Pseudo => Format::Pseudo,
        }
    }
}

/// What to do with input that cannot be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    Raise,
    Passthrough,
    Replace,
}

impl From<PolicyArg> for ErrorPolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::Raise => ErrorPolicy::Raise,
            PolicyArg::Passthrough => ErrorPolicy::Passthrough,
            PolicyArg::Replace => ErrorPolicy::Replace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_arg_to_format() {
        assert_eq!(Format::from(FormatArg::Unicode), Format::Unicode);
        assert_eq!(Format::from(FormatArg::Ascii), Format::Ascii);
        assert_eq!(Format::from(FormatArg::Dots), Format::Dots);
        assert_eq!(Format::from(FormatArg::Pseudo), Format::Pseudo);
    }

    #[test]
    fn test_policy_arg_to_policy() {
        assert_eq!(ErrorPolicy::from(PolicyArg::Raise), ErrorPolicy::Raise);
        assert_eq!(
            ErrorPolicy::from(PolicyArg::Passthrough),
            ErrorPolicy::Passthrough
        );
        assert_eq!(ErrorPolicy::from(PolicyArg::Replace), ErrorPolicy::Replace);
    }
}
