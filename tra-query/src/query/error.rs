//! Query extraction error types.

/// Errors from extracting a structured query out of free text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    /// Input did not contain exactly one `<date> <origin>到<destination>`
    #[error("cannot parse query: {0}")]
    Malformed(String),
}

impl ExtractionError {
    /// The raw input that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            ExtractionError::Malformed(text) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ExtractionError::Malformed("彰化到臺南".into());
        assert_eq!(err.to_string(), "cannot parse query: 彰化到臺南");
        assert_eq!(err.input(), "彰化到臺南");
    }
}
