//! What to do with input that cannot be converted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Handling of untranslatable units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Return the error to the caller
    Raise,
    /// Copy the unit to the output unchanged
    #[default]
    Passthrough,
    /// Emit the replacement character in place of the unit
    Replace,
}

/// An unrecognized policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error policy '{0}' (expected raise, passthrough or replace)")]
pub struct UnknownPolicy(pub String);

impl FromStr for ErrorPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raise" | "strict" => Ok(ErrorPolicy::Raise),
            "passthrough" | "pass" => Ok(ErrorPolicy::Passthrough),
            "replace" => Ok(ErrorPolicy::Replace),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

impl ErrorPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorPolicy::Raise => "raise",
            ErrorPolicy::Passthrough => "passthrough",
            ErrorPolicy::Replace => "replace",
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
