//! Errors returned by entity extraction.
//!
//! A text with no entities is not an error: it produces an empty list.
//! Mention truncation is silent. Both variants below are caller contract
//! violations and fail identically on retry.

/// Errors that can occur while extracting entities from post text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("Extractor text cannot be null")]
    MissingText,

    #[error("Post text is too long: {length} characters (max: {max})")]
    TextTooLong { length: usize, max: usize },
}

impl ExtractError {
    /// Stable machine-readable code for the error.
    pub fn code(&self) -> &'static str {
        match self {
            ExtractError::MissingText => "invalid_argument",
            ExtractError::TextTooLong { .. } => "text_too_long",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ExtractError::MissingText.to_string(),
            "Extractor text cannot be null"
        );
        assert_eq!(
            ExtractError::TextTooLong {
                length: 300,
                max: 280
            }
            .to_string(),
            "Post text is too long: 300 characters (max: 280)"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ExtractError::MissingText.code(), "invalid_argument");
        assert_eq!(
            ExtractError::TextTooLong { length: 2, max: 1 }.code(),
            "text_too_long"
        );
    }
}
