//! # numwords
//!
//! Spells out numeric literals in plain English, e.g. `213.412` becomes
//! "two hundred and thirteen point four one two".
//!
//! ## Features
//!
//! - Exact parsing of the literal text, no floating-point rounding
//! - Scale names up to duotrigintillion, larger inputs are rejected
//! - Fractional digits read out one at a time
//! - Optional "and", comma separated groups and "minus" wording
//!
//! ## Example
//!
//! ```
//! use numwords::convert;
//!
//! let words = convert("213.412")?;
//! assert_eq!(words, "two hundred and thirteen point four one two");
//! # Ok::<(), numwords::error::NumberError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub use crate::core::{NumberLiteral, NumberToWords, Style, convert};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter, e.g. `NUMWORDS_LOG=debug`
pub const LOG_ENV: &str = "NUMWORDS_LOG";

/// Install a compact stderr logger.
///
/// `--debug` forces the `debug` level; otherwise the filter comes from
/// [`LOG_ENV`], falling back to `warn`. Stdout is left to the result line.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = match (debug, EnvFilter::try_from_env(LOG_ENV)) {
        (true, _) => EnvFilter::new("debug"),
        (false, Ok(filter)) => filter,
        (false, Err(_)) => EnvFilter::new("warn"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
