//! Station name → code lookup.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::domain::StationCode;

use super::error::{DirectoryError, StationTableError};
use super::table::STATIONS;

static BUILTIN: LazyLock<StationDirectory> = LazyLock::new(|| {
    StationDirectory::from_entries(STATIONS.iter().copied())
        .expect("built-in station table must have unique, well-formed entries")
});

/// A station as listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub name: String,
    pub code: StationCode,
}

/// Record shape of a JSON station table asset.
#[derive(Debug, Deserialize)]
struct StationRecord {
    name: String,
    code: String,
}

/// Immutable station name → code mapping.
///
/// Names match exactly (codepoint equality, no case folding or width
/// normalization), so `臺北` and `台北` are different keys. Both names and
/// codes are unique within a directory.
///
/// The directory is never mutated after construction and can be read from
/// any number of threads without locking.
#[derive(Debug, Clone)]
pub struct StationDirectory {
    stations: Vec<Station>,
    by_name: HashMap<String, usize>,
}

impl StationDirectory {
    /// The compiled-in TRA station table, built on first use.
    pub fn builtin() -> &'static StationDirectory {
        &BUILTIN
    }

    /// Build a directory from `(name, code)` pairs.
    ///
    /// Fails on malformed codes, empty names, repeated names, or a code
    /// shared by two names.
    pub fn from_entries<I, N, C>(entries: I) -> Result<Self, StationTableError>
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: AsRef<str>,
    {
        let mut stations = Vec::new();
        let mut by_name = HashMap::new();
        let mut by_code: HashMap<StationCode, usize> = HashMap::new();

        for (name, code) in entries {
            let name = name.into();
            let code = code.as_ref();

            if name.trim().is_empty() {
                return Err(StationTableError::EmptyName {
                    code: code.to_string(),
                });
            }

            let code = StationCode::parse(code).map_err(|source| {
                StationTableError::InvalidCode {
                    name: name.clone(),
                    source,
                }
            })?;

            let index = stations.len();

            match by_code.entry(code.clone()) {
                Entry::Occupied(existing) => {
                    let first: &Station = &stations[*existing.get()];
                    return Err(StationTableError::DuplicateCode {
                        code: code.to_string(),
                        first: first.name.clone(),
                        second: name,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }

            if by_name.insert(name.clone(), index).is_some() {
                return Err(StationTableError::DuplicateName(name));
            }

            stations.push(Station { name, code });
        }

        Ok(Self { stations, by_name })
    }

    /// Parse a JSON asset: an array of `{"name": ..., "code": ...}` objects.
    pub fn from_json_str(json: &str) -> Result<Self, StationTableError> {
        let records: Vec<StationRecord> = serde_json::from_str(json)?;
        Self::from_entries(records.into_iter().map(|r| (r.name, r.code)))
    }

    /// Load a JSON asset from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StationTableError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Look up the code for a station name.
    ///
    /// The returned code is the exact text from the table.
    pub fn lookup(&self, name: &str) -> Result<StationCode, DirectoryError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| DirectoryError::UnknownStation(name.to_string()))
    }

    /// Look up a code without building an error on a miss.
    pub fn get(&self, name: &str) -> Option<&StationCode> {
        self.by_name.get(name).map(|&i| &self.stations[i].code)
    }

    /// Check whether a name is in the directory.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Stations in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    /// Get the number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
