//! Travel date type.

use std::fmt;

use chrono::NaiveDate;

/// Error returned when a date is not in `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid travel date {0:?}: expected YYYY-MM-DD")]
pub struct InvalidTravelDate(String);

/// A travel date in `YYYY-MM-DD` form.
///
/// Only the shape is checked. Month and day ranges are left to the
/// timetable provider, so `2024-13-40` is accepted here and rejected
/// upstream. Use [`TravelDate::to_naive_date`] when a real calendar date
/// is needed.
///
/// # Examples
///
/// ```
/// use tra_query::domain::TravelDate;
///
/// let date = TravelDate::parse("2024-12-08").unwrap();
/// assert_eq!(date.as_str(), "2024-12-08");
/// assert!(date.to_naive_date().is_some());
///
/// // Shape only: out-of-range components pass through
/// let odd = TravelDate::parse("2024-13-40").unwrap();
/// assert!(odd.to_naive_date().is_none());
///
/// assert!(TravelDate::parse("2024/12/08").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TravelDate(String);

impl TravelDate {
    /// Parse a date of the exact form `YYYY-MM-DD` (ASCII digits).
    pub fn parse(s: &str) -> Result<Self, InvalidTravelDate> {
        let bytes = s.as_bytes();

        if bytes.len() != 10 {
            return Err(InvalidTravelDate(s.to_string()));
        }

        let shape_ok = bytes.iter().enumerate().all(|(i, &b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });

        if !shape_ok {
            return Err(InvalidTravelDate(s.to_string()));
        }

        Ok(TravelDate(s.to_string()))
    }

    /// Returns the date as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret as a calendar date, if it is one.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }
}

impl fmt::Debug for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TravelDate({})", self.0)
    }
}

impl fmt::Display for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any digit string of the right shape parses and roundtrips
        #[test]
        fn roundtrip(s in "[0-9]{4}-[0-9]{2}-[0-9]{2}") {
            let date = TravelDate::parse(&s).unwrap();
            prop_assert_eq!(date.as_str(), s.as_str());
        }

        /// Real dates always convert to chrono
        #[test]
        fn real_dates_convert(y in 1900i32..2100, m in 1u32..=12, d in 1u32..=28) {
            let s = format!("{y:04}-{m:02}-{d:02}");
            let date = TravelDate::parse(&s).unwrap();
            prop_assert_eq!(date.to_naive_date(), NaiveDate::from_ymd_opt(y, m, d));
        }
    }
}
