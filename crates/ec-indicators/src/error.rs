//! Indicator errors.

use thiserror::Error;

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Malformed input for one of the text parsers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Text matches neither azimuth range notation.
    #[error("Invalid azimuth range: '{text}'")]
    AzimuthRange { text: String },

    /// Unknown orientation code.
    #[error("Unknown orientation code: '{code}'")]
    OrientationCode { code: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ParseError::AzimuthRange {
            text: "north-ish".into(),
        };
        assert!(err.to_string().contains("north-ish"));

        let err = ParseError::OrientationCode { code: "X".into() };
        assert!(err.to_string().contains("'X'"));
    }
}
