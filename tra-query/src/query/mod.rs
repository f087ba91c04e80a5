//! Free-text query extraction.
//!
//! Turns a query such as `2024-12-08 彰化到臺南` into a date and two
//! station names, ready for station lookup.

mod error;
mod extract;

pub use error::ExtractionError;
pub use extract::{CONNECTIVE, ParsedQuery, extract};
