//! Number-to-words conversion
//!
//! Splits the integer part into three-digit groups, names each nonzero group
//! with its scale, and reads the fractional digits out one by one.

use crate::core::literal::NumberLiteral;
use crate::core::tables::{self, DIGITS, TEENS, TENS};
use crate::error::{NumberError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How rendered scale groups are joined together
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum GroupSeparator {
    /// `one million two hundred thousand`
    #[default]
    Space,
    /// `one million, two hundred thousand`
    Comma,
}

impl GroupSeparator {
    fn as_str(self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Comma => ", ",
        }
    }
}

/// Rendering options for the converter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Style {
    /// Say "and" between the hundreds and the rest of a group
    pub use_and: bool,
    /// Separator between scale groups
    pub separator: GroupSeparator,
    /// Word placed before negative numbers
    pub negative_word: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            use_and: true,
            separator: GroupSeparator::Space,
            negative_word: "negative".to_string(),
        }
    }
}

/// Converts numeric literals into English words
#[derive(Debug, Clone, Default)]
pub struct NumberToWords {
    style: Style,
}

impl NumberToWords {
    /// Create a converter with the given style
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    /// Rendering style in use
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Convert a literal given as text, e.g. `"213.412"`
    #[instrument(skip(self))]
    pub fn convert(&self, input: &str) -> Result<String> {
        let literal = NumberLiteral::parse(input)?;
        self.convert_literal(&literal)
    }

    /// Convert an already parsed literal
    pub fn convert_literal(&self, literal: &NumberLiteral) -> Result<String> {
        literal.check_magnitude()?;

        let mut words = Vec::new();

        if literal.negative && !literal.is_zero() {
            words.push(self.style.negative_word.clone());
        }

        words.push(self.integer_words(literal)?);

        if let Some(fraction) = &literal.fraction {
            words.push("point".to_string());
            for digit in fraction.chars() {
                let word = tables::digit_word(digit).ok_or_else(|| {
                    NumberError::malformed(fraction.as_str(), format!("'{}' is not a digit", digit))
                })?;
                words.push(word.to_string());
            }
        }

        let result = words.join(" ");
        debug!("Converted {} -> {}", literal, result);
        Ok(result)
    }

    /// Render the integer part, skipping zero groups along with their scale names
    fn integer_words(&self, literal: &NumberLiteral) -> Result<String> {
        let groups = literal.groups();
        if groups.iter().all(|&g| g == 0) {
            return Ok(DIGITS[0].to_string());
        }

        let count = groups.len();
        let mut rendered = Vec::with_capacity(count);

        for (position, &value) in groups.iter().enumerate() {
            if value == 0 {
                continue;
            }

            let index = count - 1 - position;
            let scale = tables::scale_name(index).ok_or_else(|| {
                NumberError::magnitude_overflow(literal.integer_digits(), tables::MAX_INTEGER_DIGITS)
            })?;

            let mut group = self.group_words(value);
            if !scale.is_empty() {
                group.push(' ');
                group.push_str(scale);
            }
            rendered.push(group);
        }

        Ok(rendered.join(self.style.separator.as_str()))
    }

    /// Render a single group value in 1..=999
    fn group_words(&self, value: u16) -> String {
        let hundreds = usize::from(value / 100);
        let rest = value % 100;

        let mut words = Vec::new();
        if hundreds > 0 {
            words.push(DIGITS[hundreds].to_string());
            words.push("hundred".to_string());
            if self.style.use_and && rest > 0 {
                words.push("and".to_string());
            }
        }
        if rest > 0 {
            words.push(Self::tens_words(rest));
        }
        words.join(" ")
    }

    /// Render a value in 1..=99
    fn tens_words(value: u16) -> String {
        let tens = usize::from(value / 10);
        let ones = usize::from(value % 10);
        match (tens, ones) {
            (0, _) => DIGITS[ones].to_string(),
            (1, _) => TEENS[ones].to_string(),
            (_, 0) => TENS[tens].to_string(),
            _ => format!("{}-{}", TENS[tens], DIGITS[ones]),
        }
    }
}

/// Convert a literal using the default style
pub fn convert(input: &str) -> Result<String> {
    NumberToWords::default().convert(input)
}
