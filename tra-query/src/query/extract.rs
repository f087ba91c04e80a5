//! Free-text query extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::TravelDate;

use super::error::ExtractionError;

/// The word "to" separating origin and destination.
pub const CONNECTIVE: char = '到';

/// `<date> <origin>到<destination>`.
///
/// The origin is lazy so it stops at the first connective; the destination
/// takes the rest of the non-whitespace run.
static QUERY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"([0-9]{{4}}-[0-9]{{2}}-[0-9]{{2}})\s+(\S+?){CONNECTIVE}(\S+)"
    ))
    .expect("query pattern must compile")
});

/// A travel query pulled out of free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    date: TravelDate,
    origin_name: String,
    destination_name: String,
}

impl ParsedQuery {
    /// The requested travel date.
    pub fn date(&self) -> &TravelDate {
        &self.date
    }

    /// Origin station name, as written in the query.
    pub fn origin_name(&self) -> &str {
        &self.origin_name
    }

    /// Destination station name, as written in the query.
    pub fn destination_name(&self) -> &str {
        &self.destination_name
    }
}

/// Extract `(date, origin, destination)` from a free-text query.
///
/// The input must contain exactly one `YYYY-MM-DD` date followed by
/// whitespace and `<origin>到<destination>`. Names are trimmed but otherwise
/// kept as written.
///
/// # Examples
///
/// ```
/// use tra_query::query::extract;
///
/// let q = extract("2024-12-08 彰化到臺南").unwrap();
/// assert_eq!(q.date().as_str(), "2024-12-08");
/// assert_eq!(q.origin_name(), "彰化");
/// assert_eq!(q.destination_name(), "臺南");
///
/// assert!(extract("彰化到臺南").is_err());
/// ```
pub fn extract(raw: &str) -> Result<ParsedQuery, ExtractionError> {
    let malformed = || ExtractionError::Malformed(raw.to_string());

    let mut matches = QUERY_PATTERN.captures_iter(raw);
    let caps = matches.next().ok_or_else(malformed)?;
    if matches.next().is_some() {
        return Err(malformed());
    }

    let group = |i| caps.get(i).map_or("", |m| m.as_str().trim());
    let (date, origin, destination) = (group(1), group(2), group(3));

    if date.is_empty() || origin.is_empty() || destination.is_empty() {
        return Err(malformed());
    }

    let date = TravelDate::parse(date).map_err(|_| malformed())?;

    Ok(ParsedQuery {
        date,
        origin_name: origin.to_string(),
        destination_name: destination.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(q: &ParsedQuery) -> (&str, &str, &str) {
        (q.date().as_str(), q.origin_name(), q.destination_name())
    }

    #[test]
    fn basic_query() {
        let q = extract("2024-12-08 彰化到臺南").unwrap();
        assert_eq!(parts(&q), ("2024-12-08", "彰化", "臺南"));
    }

    #[test]
    fn surrounding_text_ignored() {
        let q = extract("請幫我查 2024-12-08 彰化到臺南 的車次").unwrap();
        assert_eq!(parts(&q), ("2024-12-08", "彰化", "臺南"));
    }

    #[test]
    fn date_glued_to_preceding_text() {
        let q = extract("查詢2024-12-08 基隆到臺北").unwrap();
        assert_eq!(parts(&q), ("2024-12-08", "基隆", "臺北"));
    }

    #[test]
    fn any_whitespace_after_date() {
        let q = extract("2024-12-08\t\t臺北到高雄").unwrap();
        assert_eq!(parts(&q), ("2024-12-08", "臺北", "高雄"));

        // Ideographic space
        let q = extract("2024-12-08\u{3000}臺北到高雄").unwrap();
        assert_eq!(parts(&q), ("2024-12-08", "臺北", "高雄"));
    }

    #[test]
    fn origin_stops_at_first_connective() {
        let q = extract("2024-12-08 彰化到臺南到高雄").unwrap();
        assert_eq!(parts(&q), ("2024-12-08", "彰化", "臺南到高雄"));
    }

    #[test]
    fn missing_date() {
        assert_eq!(
            extract("彰化到臺南"),
            Err(ExtractionError::Malformed("彰化到臺南".to_string()))
        );
    }

    #[test]
    fn missing_destination() {
        assert_eq!(
            extract("2024-12-08 彰化"),
            Err(ExtractionError::Malformed("2024-12-08 彰化".to_string()))
        );
    }

    #[test]
    fn missing_origin() {
        assert!(extract("2024-12-08 到臺南").is_err());
    }

    #[test]
    fn connective_followed_by_space() {
        assert!(extract("2024-12-08 彰化到 臺南").is_err());
    }

    #[test]
    fn date_must_be_separated_by_whitespace() {
        assert!(extract("2024-12-08彰化到臺南").is_err());
    }

    #[test]
    fn wrong_date_shape() {
        assert!(extract("2024/12/08 彰化到臺南").is_err());
        assert!(extract("2024-1-8 彰化到臺南").is_err());
    }

    #[test]
    fn two_queries_is_ambiguous() {
        assert!(extract("2024-12-08 彰化到臺南 2024-12-09 臺北到高雄").is_err());
    }

    #[test]
    fn empty_input() {
        assert!(extract("").is_err());
        assert!(extract("   ").is_err());
    }

    #[test]
    fn calendar_not_validated() {
        let q = extract("2024-13-32 彰化到臺南").unwrap();
        assert_eq!(q.date().as_str(), "2024-13-32");
    }

    #[test]
    fn names_keep_their_form() {
        let q = extract("2024-12-08 台北到ＡＢＣ").unwrap();
        assert_eq!(q.origin_name(), "台北");
        assert_eq!(q.destination_name(), "ＡＢＣ");
    }

    #[test]
    fn error_carries_input() {
        let err = extract("hello").unwrap_err();
        assert_eq!(err.input(), "hello");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Station-like names: CJK characters other than the connective
    fn name() -> impl Strategy<Value = String> {
        "[\u{4e00}-\u{522f}\u{5231}-\u{9fa5}]{1,4}"
    }

    proptest! {
        /// Well-formed queries always extract their parts unchanged
        #[test]
        fn extracts_parts(
            date in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
            origin in name(),
            destination in name(),
        ) {
            let raw = format!("{date} {origin}{CONNECTIVE}{destination}");
            let q = extract(&raw).unwrap();
            prop_assert_eq!(q.date().as_str(), date.as_str());
            prop_assert_eq!(q.origin_name(), origin.as_str());
            prop_assert_eq!(q.destination_name(), destination.as_str());
        }

        /// Text without a connective never extracts
        #[test]
        fn no_connective_fails(
            date in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
            origin in name(),
        ) {
            let raw = format!("{date} {origin}");
            prop_assert!(extract(&raw).is_err());
        }

        /// Extraction is deterministic
        #[test]
        fn deterministic(s in ".{0,40}") {
            prop_assert_eq!(extract(&s), extract(&s));
        }
    }
}
