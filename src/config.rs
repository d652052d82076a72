//! Configuration management for the converter CLI
//!
//! Centralizes rendering and sampling options and provides validation.

use crate::{
    cli::Args,
    core::{GroupSeparator, Style, tables::MAX_INTEGER_DIGITS},
    error::NumberError,
};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// How numbers are spelled out
    pub style: StyleConfig,
    /// Random number generation when no number is given
    pub sample: SampleConfig,
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Insert "and" after hundreds
    pub use_and: bool,
    /// Separate scale groups with commas
    pub commas: bool,
    /// Word used for negative numbers
    pub negative_word: String,
}

/// Random sample configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Upper bound on integer digits of a random number
    pub max_integer_digits: usize,
    /// Upper bound on fraction digits of a random number
    pub max_fraction_digits: usize,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            use_and: true,
            commas: false,
            negative_word: "negative".to_string(),
        }
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            max_integer_digits: 100,
            max_fraction_digits: 10,
        }
    }
}

impl StyleConfig {
    /// Build the converter style
    pub fn to_style(&self) -> Style {
        Style {
            use_and: self.use_and,
            separator: if self.commas {
                GroupSeparator::Comma
            } else {
                GroupSeparator::Space
            },
            negative_word: self.negative_word.clone(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, NumberError> {
        let mut config = Self {
            debug: args.debug,
            ..Self::default()
        };

        config.style.use_and = !args.no_and;
        config.style.commas = args.commas;
        if args.minus {
            config.style.negative_word = "minus".to_string();
        }

        config.sample.max_integer_digits = args.max_digits;
        config.sample.max_fraction_digits = args.max_decimals;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), NumberError> {
        if !(1..=MAX_INTEGER_DIGITS).contains(&self.sample.max_integer_digits) {
            return Err(NumberError::validation(format!(
                "max integer digits must be between 1 and {}, got {}",
                MAX_INTEGER_DIGITS, self.sample.max_integer_digits
            )));
        }

        if self.sample.max_fraction_digits == 0 {
            return Err(NumberError::validation(
                "max fraction digits must be at least 1",
            ));
        }

        if self.style.negative_word.trim().is_empty() {
            return Err(NumberError::validation("negative word must not be empty"));
        }

        Ok(())
    }
}
