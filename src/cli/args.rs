//! Command-line argument parsing and validation

use clap::Parser;

/// Spell out a number in plain English words
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "numwords")]
pub struct Args {
    /// Number to convert, e.g. 213.412, -42 or -.5. A random number is used when omitted
    #[arg(allow_hyphen_values = true, conflicts_with = "max")]
    pub number: Option<String>,

    /// Convert the largest supported number
    #[arg(long)]
    pub max: bool,

    /// Maximum integer digits of a random number
    #[arg(long = "max-digits", default_value_t = 100)]
    pub max_digits: usize,

    /// Maximum fraction digits of a random number
    #[arg(long = "max-decimals", default_value_t = 10)]
    pub max_decimals: usize,

    /// Do not say "and" after hundreds
    #[arg(long = "no-and")]
    pub no_and: bool,

    /// Separate scale groups with commas
    #[arg(long)]
    pub commas: bool,

    /// Say "minus" instead of "negative"
    #[arg(long)]
    pub minus: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_args() {
        let args = Args::try_parse_from(["numwords", "213.412"]).unwrap();
        assert!(!args.debug);
        assert_eq!(args.number.as_deref(), Some("213.412"));
        assert!(!args.max);
    }

    #[test]
    fn test_parse_negative_number() {
        let args = Args::try_parse_from(["numwords", "-42"]).unwrap();
        assert_eq!(args.number.as_deref(), Some("-42"));

        let args = Args::try_parse_from(["numwords", "-.5"]).unwrap();
        assert_eq!(args.number.as_deref(), Some("-.5"));
    }

    #[test]
    fn test_flags_before_negative_number() {
        let args = Args::try_parse_from(["numwords", "--minus", "--debug", "-0.25"]).unwrap();
        assert!(args.minus);
        assert!(args.debug);
        assert_eq!(args.number.as_deref(), Some("-0.25"));
    }

    #[test]
    fn test_parse_debug_flag() {
        let args = Args::try_parse_from(["numwords", "--debug", "1"]).unwrap();
        assert!(args.debug);
    }

    #[test]
    fn test_max_conflicts_with_number() {
        assert!(Args::try_parse_from(["numwords", "--max", "12"]).is_err());
        let args = Args::try_parse_from(["numwords", "--max"]).unwrap();
        assert!(args.max);
        assert!(args.number.is_none());
    }

    #[test]
    fn test_single_positional_only() {
        assert!(Args::try_parse_from(["numwords", "1", "2"]).is_err());
    }
}
