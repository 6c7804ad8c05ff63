//! Grid parameters from a `key=value&...` string.
//!
//! This is the configuration layer in front of the geometry: it parses raw
//! user input, clamps every value to the ranges of the plugin dialog, and
//! normalizes the width bounds the way [`sample`](crate::sample()) expects.
//! Nothing here fails; problems come back as [`ParamWarning`]s and the
//! offending value falls back to its default.
//!
//! # Example
//!
//! ```
//! use hexfit::params;
//!
//! let result = params::parse("min=31&max=90&orientation=vertical&stroke=3");
//! assert!(result.warnings.is_empty());
//!
//! let request = result.params.resolve();
//! assert_eq!(request.min_width, 32);
//! assert!(request.half_pixel);
//!
//! let output = request.plan(1000, 800).expect("room for hexagons");
//! assert!(output.as_grid().is_some());
//! ```

mod color;
mod parse;
pub mod request;
mod resolve;

pub use request::{GridRequest, OutputKind, Params, StrokeColor};
pub use resolve::Output;

use alloc::string::String;
use alloc::vec::Vec;

/// Result of parsing a parameter string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed parameters.
    pub params: Params,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParamWarning>,
}

/// Non-fatal warning from parameter parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key was not recognized.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
    /// A numeric value lay outside its range and was clamped.
    ValueOutOfRange {
        key: &'static str,
        value: i64,
        clamped: i32,
    },
}

/// Parse a parameter string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (params, warnings) = parse::parse_query(query);
    for w in &warnings {
        log::warn!("grid parameter: {w:?}");
    }
    ParseResult { params, warnings }
}
