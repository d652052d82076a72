//! Numeric literal parsing
//!
//! Parses the literal text directly so fractional digits are kept exactly as
//! written. Nothing goes through a floating-point type.

use crate::core::tables::{GROUP_SIZE, MAX_INTEGER_DIGITS};
use crate::error::{NumberError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::LazyLock};
use tracing::debug;

static LITERAL_RE: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^([+-])?([0-9]*)(?:\.([0-9]+))?$"));

/// A parsed numeric literal split into sign, integer digits and fraction digits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NumberLiteral {
    /// Whether a leading minus sign was present
    pub negative: bool,
    /// Integer digits without leading zeros; empty means zero
    pub integer: String,
    /// Fraction digits as written, if a decimal point was present
    pub fraction: Option<String>,
}

impl NumberLiteral {
    /// Parse a literal such as `-42`, `213.412` or `.5`
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(NumberError::malformed(input, "empty input"));
        }

        let regex = LITERAL_RE.as_ref().map_err(|e| NumberError::Config {
            message: format!("Failed to compile regex: {}", e),
            source: Some(Box::new(e.clone())),
        })?;

        let captures = regex
            .captures(trimmed)
            .ok_or_else(|| NumberError::malformed(input, Self::describe_problem(trimmed)))?;

        let negative = captures.get(1).is_some_and(|m| m.as_str() == "-");
        let digits = captures.get(2).map_or("", |m| m.as_str());
        let fraction = captures.get(3).map(|m| m.as_str().to_string());

        if digits.is_empty() && fraction.is_none() {
            return Err(NumberError::malformed(input, "no digits"));
        }

        let literal = Self {
            negative,
            integer: digits.trim_start_matches('0').to_string(),
            fraction,
        };
        debug!("Parsed literal {:?} from '{}'", literal, trimmed);
        Ok(literal)
    }

    /// Pick a human-readable reason for a literal the grammar rejected
    fn describe_problem(text: &str) -> String {
        if text.matches('.').count() > 1 {
            return "more than one decimal point".to_string();
        }
        if text.ends_with('.') {
            return "decimal point must be followed by digits".to_string();
        }
        match text
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '+' || c == '-'))))
        {
            Some((_, c)) => format!("unexpected character '{}'", c),
            None => "not a decimal number".to_string(),
        }
    }

    /// True when every digit of the literal is zero
    pub fn is_zero(&self) -> bool {
        self.integer.is_empty()
            && self
                .fraction
                .as_deref()
                .is_none_or(|f| f.bytes().all(|b| b == b'0'))
    }

    /// Number of significant integer digits
    pub fn integer_digits(&self) -> usize {
        self.integer.len()
    }

    /// Reject integers that need more groups than the scale table names
    pub fn check_magnitude(&self) -> Result<()> {
        if self.integer_digits() > MAX_INTEGER_DIGITS {
            return Err(NumberError::magnitude_overflow(
                self.integer_digits(),
                MAX_INTEGER_DIGITS,
            ));
        }
        Ok(())
    }

    /// Values of the three-digit groups, most significant first.
    /// The leftmost group may be shorter than three digits.
    pub fn groups(&self) -> Vec<u16> {
        let bytes = self.integer.as_bytes();
        let head = bytes.len() % GROUP_SIZE;
        let (first, rest) = bytes.split_at(head);

        std::iter::once(first)
            .filter(|g| !g.is_empty())
            .chain(rest.chunks(GROUP_SIZE))
            .map(|group| {
                group
                    .iter()
                    .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'))
            })
            .collect()
    }
}

impl FromStr for NumberLiteral {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for NumberLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative && !self.is_zero() {
            write!(f, "-")?;
        }
        if self.integer.is_empty() {
            write!(f, "0")?;
        } else {
            write!(f, "{}", self.integer)?;
        }
        if let Some(fraction) = &self.fraction {
            write!(f, ".{}", fraction)?;
        }
        Ok(())
    }
}
