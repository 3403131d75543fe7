//! Cell templates and standard error wrapping.
//!
//! A `CellTemplate` is the text that surrounds a formatted value inside a
//! cell: optionally the `siunitx` `\num{}` macro, optionally parentheses or
//! brackets around the whole thing.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::OutregError;

/// How to mark standard errors (or any other wrapped cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeStyle {
    /// Leave the cell unwrapped
    #[default]
    None,
    /// Wrap in `(` `)`
    Parens,
    /// Wrap in `[` `]`
    Brackets,
}

impl SeStyle {
    /// Opening and closing markers, if any
    pub fn markers(&self) -> Option<(&'static str, &'static str)> {
        match self {
            SeStyle::None => None,
            SeStyle::Parens => Some(("(", ")")),
            SeStyle::Brackets => Some(("[", "]")),
        }
    }
}

impl From<bool> for SeStyle {
    fn from(wrap: bool) -> Self {
        if wrap {
            SeStyle::Parens
        } else {
            SeStyle::None
        }
    }
}

impl FromStr for SeStyle {
    type Err = OutregError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "(" | "true" => Ok(SeStyle::Parens),
            "[" => Ok(SeStyle::Brackets),
            "false" | "none" => Ok(SeStyle::None),
            _ => Err(OutregError::InvalidStyle(s.to_string())),
        }
    }
}

/// Text placed before and after a value in a cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellTemplate {
    prefix: String,
    suffix: String,
}

impl CellTemplate {
    /// The bare value
    pub fn plain() -> Self {
        Self::default()
    }

    /// The value wrapped in `\num{}` (requires `siunitx`)
    pub fn num() -> Self {
        Self {
            prefix: "\\num{".to_string(),
            suffix: "}".to_string(),
        }
    }

    /// Wrap the whole template with the markers of `style`.
    pub fn wrapped(self, style: SeStyle) -> Self {
        match style.markers() {
            Some((open, close)) => Self {
                prefix: format!("{}{}", open, self.prefix),
                suffix: format!("{}{}", self.suffix, close),
            },
            None => self,
        }
    }

    /// Put `value` in the template.
    pub fn fill(&self, value: &str) -> String {
        format!("{}{}{}", self.prefix, value, self.suffix)
    }
}

impl std::fmt::Display for CellTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{{}}{}", self.prefix, self.suffix)
    }
}
