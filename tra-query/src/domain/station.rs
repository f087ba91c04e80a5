//! Station code types.

use std::fmt;

use serde::Serialize;

/// Shortest code the provider issues.
const MIN_LEN: usize = 4;

/// Longest code accepted (branch-line halts use longer codes).
const MAX_LEN: usize = 8;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code {code:?}: {reason}")]
pub struct InvalidStationCode {
    code: String,
    reason: &'static str,
}

/// A TRA station code as issued by the timetable provider.
///
/// Station codes look numeric but are identifiers: `0900` (Keelung) is a
/// different token from `900`, and the provider rejects the latter. The code
/// is therefore kept as text and never converted through an integer type.
///
/// # Examples
///
/// ```
/// use tra_query::domain::StationCode;
///
/// let keelung = StationCode::parse("0900").unwrap();
/// assert_eq!(keelung.as_str(), "0900");
/// assert_eq!(keelung.to_string(), "0900");
///
/// // Too short
/// assert!(StationCode::parse("900").is_err());
///
/// // Not ASCII alphanumeric
/// assert!(StationCode::parse("09-0").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must be 4 to 8 ASCII letters or digits. The text is stored
    /// exactly as given.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let invalid = |reason| InvalidStationCode {
            code: s.to_string(),
            reason,
        };

        if s.len() < MIN_LEN || s.len() > MAX_LEN {
            return Err(invalid("must be 4 to 8 characters"));
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(invalid("must be ASCII letters or digits"));
        }

        Ok(StationCode(s.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(StationCode::parse("0900").is_ok());
        assert!(StationCode::parse("3360").is_ok());
        assert!(StationCode::parse("4220").is_ok());
        assert!(StationCode::parse("7331").is_ok());
        assert!(StationCode::parse("12345678").is_ok());
        assert!(StationCode::parse("A100").is_ok());
    }

    #[test]
    fn leading_zero_preserved() {
        let code = StationCode::parse("0900").unwrap();
        assert_eq!(code.as_str(), "0900");
        assert_eq!(format!("{}", code), "0900");
    }

    #[test]
    fn reject_wrong_length() {
        assert!(StationCode::parse("").is_err());
        assert!(StationCode::parse("900").is_err());
        assert!(StationCode::parse("123456789").is_err());
    }

    #[test]
    fn reject_non_alphanumeric() {
        assert!(StationCode::parse("09 0").is_err());
        assert!(StationCode::parse("0-90").is_err());
        assert!(StationCode::parse("０９００").is_err());
        assert!(StationCode::parse("基隆站站").is_err());
    }

    #[test]
    fn error_mentions_code() {
        let err = StationCode::parse("900").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid station code \"900\": must be 4 to 8 characters"
        );
    }

    #[test]
    fn debug() {
        let code = StationCode::parse("1000").unwrap();
        assert_eq!(format!("{:?}", code), "StationCode(1000)");
    }

    #[test]
    fn serializes_as_string() {
        let code = StationCode::parse("0900").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"0900\"");
    }

    #[test]
    fn ordering_is_textual() {
        let a = StationCode::parse("0900").unwrap();
        let b = StationCode::parse("1000").unwrap();
        assert!(a < b);
    }
}
