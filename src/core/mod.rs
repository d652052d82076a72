//! Core number conversion functionality
//!
//! Contains the word tables, literal parsing, the converter itself and
//! sample literal generation.

pub mod converter;
pub mod literal;
pub mod sample;
pub mod tables;

pub use converter::{GroupSeparator, NumberToWords, Style, convert};
pub use literal::NumberLiteral;
