//! Error types for pagewise library.

use thiserror::Error;

/// Result type alias for pagewise operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading or editing a paginated tree.
///
/// Layout resolution itself never fails; these describe why a tree lookup
/// or an attribute write was refused.
#[derive(Error, Debug)]
pub enum Error {
    /// No node starts at the given document position.
    #[error("No node found at position {0}")]
    NoNodeAtPosition(usize),

    /// A guarded setter was called on a node of the wrong kind.
    #[error("Expected a {expected} node, found {found}")]
    NodeKindMismatch {
        /// Node kind the setter accepts
        expected: &'static str,
        /// Node type that was supplied
        found: String,
    },

    /// Margins with a negative or non-finite side.
    #[error("Invalid margins: {0}")]
    InvalidMargins(String),

    /// Border widths with a negative or non-finite side.
    #[error("Invalid page borders: {0}")]
    InvalidBorders(String),

    /// Paper colour that is not a recognised colour value.
    #[error("Invalid paper colour: {0}")]
    InvalidColour(String),

    /// Header/footer node whose tag is neither header nor footer.
    #[error("Unknown region kind: {0}")]
    UnknownRegionKind(String),

    /// Attribute value could not be converted to or from its typed form.
    #[error("Attribute '{key}' could not be converted: {reason}")]
    Attribute {
        /// Attribute name
        key: String,
        /// Conversion failure
        reason: String,
    },

    /// Text nodes carry no attributes.
    #[error("Text node at position {0} has no attributes")]
    TextNodeAttribute(usize),

    /// JSON (de)serialization of a document failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoNodeAtPosition(12);
        assert_eq!(err.to_string(), "No node found at position 12");

        let err = Error::NodeKindMismatch {
            expected: "body",
            found: "paragraph".to_string(),
        };
        assert_eq!(err.to_string(), "Expected a body node, found paragraph");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
