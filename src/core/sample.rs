//! Sample literals for the command line
//!
//! Produces the largest number the scale table can spell out and random
//! literals for trying the converter without an argument.

use crate::core::tables::MAX_INTEGER_DIGITS;
use rand::Rng;

/// The largest integer that can be converted: every digit a nine
pub fn max_literal() -> String {
    "9".repeat(MAX_INTEGER_DIGITS)
}

/// A random string of `1..=max_digits` digits with a nonzero leading digit
pub fn random_digits<R: Rng>(rng: &mut R, max_digits: usize) -> String {
    let len = rng.gen_range(1..=max_digits.max(1));
    let mut digits = String::with_capacity(len);
    digits.push(char::from(b'0' + rng.gen_range(1..=9u8)));
    for _ in 1..len {
        digits.push(char::from(b'0' + rng.gen_range(0..=9u8)));
    }
    digits
}

/// A random literal: an integer, or with even odds an integer with a fraction
pub fn random_literal<R: Rng>(
    rng: &mut R,
    max_integer_digits: usize,
    max_fraction_digits: usize,
) -> String {
    let integer = random_digits(rng, max_integer_digits);
    if rng.gen_bool(0.5) {
        integer
    } else {
        format!("{}.{}", integer, random_digits(rng, max_fraction_digits))
    }
}
