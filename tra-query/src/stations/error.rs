//! Station directory error types.

use crate::domain::InvalidStationCode;

/// Errors from looking up a station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// The name has no entry in the station table
    #[error("unknown station: {0}")]
    UnknownStation(String),
}

/// Errors from building a station table.
#[derive(Debug, thiserror::Error)]
pub enum StationTableError {
    /// A code in the table is malformed
    #[error("station {name}: {source}")]
    InvalidCode {
        name: String,
        #[source]
        source: InvalidStationCode,
    },

    /// An empty station name
    #[error("station with code {code} has an empty name")]
    EmptyName { code: String },

    /// The same name appears twice
    #[error("duplicate station name: {0}")]
    DuplicateName(String),

    /// Two names share one code
    #[error("stations {first} and {second} share code {code}")]
    DuplicateCode {
        code: String,
        first: String,
        second: String,
    },

    /// Failed to read the table asset
    #[error("failed to read station table: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the table asset
    #[error("station table JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
