//! Word tables for English number names
//!
//! All tables are fixed at compile time and never change.

/// Names of the single digits 0-9
pub const DIGITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Names of 10-19
pub const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Names of the multiples of ten, indexed by the tens digit (0 and 1 unused)
pub const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Scale names indexed by group position, counted from the least significant group.
/// The units group has no name.
pub const SCALES: [&str; 34] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
    "duodecillion",
    "tredecillion",
    "quattuordecillion",
    "quindecillion",
    "sexdecillion",
    "septendecillion",
    "octodecillion",
    "novemdecillion",
    "vigintillion",
    "unvigintillion",
    "duovigintillion",
    "trevigintillion",
    "quattuorvigintillion",
    "quinvigintillion",
    "sexvigintillion",
    "septenvigintillion",
    "octovigintillion",
    "novemvigintillion",
    "trigintillion",
    "untrigintillion",
    "duotrigintillion",
];

/// Digits per scale group
pub const GROUP_SIZE: usize = 3;

/// Number of scale groups the tables can name
pub const MAX_GROUPS: usize = SCALES.len();

/// Largest number of significant integer digits that can be spelled out
pub const MAX_INTEGER_DIGITS: usize = MAX_GROUPS * GROUP_SIZE;

/// Look up the word for a single digit character
pub fn digit_word(digit: char) -> Option<&'static str> {
    digit
        .to_digit(10)
        .and_then(|d| DIGITS.get(d as usize))
        .copied()
}

/// Look up the scale name of a group
pub fn scale_name(index: usize) -> Option<&'static str> {
    SCALES.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_word() {
        assert_eq!(digit_word('0'), Some("zero"));
        assert_eq!(digit_word('7'), Some("seven"));
        assert_eq!(digit_word('x'), None);
    }

    #[test]
    fn test_scale_table_bounds() {
        assert_eq!(scale_name(0), Some(""));
        assert_eq!(scale_name(1), Some("thousand"));
        assert_eq!(scale_name(2), Some("million"));
        assert_eq!(scale_name(33), Some("duotrigintillion"));
        assert_eq!(scale_name(34), None);
        assert_eq!(MAX_INTEGER_DIGITS, 102);
    }

    #[test]
    fn test_scale_names_are_distinct() {
        let mut names = SCALES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SCALES.len());
    }
}
