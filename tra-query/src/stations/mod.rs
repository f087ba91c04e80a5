//! TRA station directory.
//!
//! Provides station name → station code resolution against a fixed
//! reference table. The built-in table is compiled into the binary; a
//! replacement can be loaded from a JSON asset at startup.

mod directory;
mod error;
mod table;

pub use directory::{Station, StationDirectory};
pub use error::{DirectoryError, StationTableError};
