//! Command implementations for the CLI

use crate::{
    cli::Args,
    config::Config,
    core::{NumberToWords, sample},
};
use anyhow::Context;
use tracing::{debug, info, instrument};

/// Where the number to convert comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A literal given on the command line
    Literal(String),
    /// The largest supported number
    Max,
    /// A randomly generated number
    Random,
}

impl Source {
    /// Pick the source from parsed arguments
    pub fn from_args(args: &Args) -> Self {
        match (&args.number, args.max) {
            (Some(number), _) => Self::Literal(number.clone()),
            (None, true) => Self::Max,
            (None, false) => Self::Random,
        }
    }

    /// Produce the literal text to convert
    fn resolve(&self, config: &Config) -> String {
        match self {
            Self::Literal(number) => number.clone(),
            Self::Max => sample::max_literal(),
            Self::Random => sample::random_literal(
                &mut rand::thread_rng(),
                config.sample.max_integer_digits,
                config.sample.max_fraction_digits,
            ),
        }
    }
}

/// Convert the requested number and return the output line
#[instrument(skip(config))]
pub fn render_line(config: &Config, source: &Source) -> anyhow::Result<String> {
    let input = source.resolve(config);
    debug!("Converting input: {}", input);

    let converter = NumberToWords::new(config.style.to_style());
    let words = converter
        .convert(&input)
        .with_context(|| format!("Failed to convert '{}'", input))?;

    Ok(format!("{}: {}", input, words))
}

/// Execute the conversion and print the result
#[instrument(skip(config))]
pub fn execute_command(config: &Config, source: &Source) -> anyhow::Result<()> {
    let line = render_line(config, source)?;
    println!("{}", line);
    info!("Conversion completed successfully");
    Ok(())
}
