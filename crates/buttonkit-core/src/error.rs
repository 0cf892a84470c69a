//! Error types for buttonkit

use thiserror::Error;

/// Errors raised when button configuration is read from text.
///
/// Rendering never fails: sizes and tags are closed enums, so these only
/// surface from `FromStr` and serde at the configuration boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ButtonKitError {
    /// Token is not one of the six button sizes
    #[error("Unknown button size: {0}")]
    UnknownSize(String),

    /// Token names neither the control nor the link element
    #[error("Unknown button tag: {0}")]
    UnknownTag(String),
}

/// Result type alias for buttonkit operations
pub type Result<T> = std::result::Result<T, ButtonKitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_token() {
        assert_eq!(
            ButtonKitError::UnknownSize("huge".into()).to_string(),
            "Unknown button size: huge"
        );
        assert_eq!(
            ButtonKitError::UnknownTag("div".into()).to_string(),
            "Unknown button tag: div"
        );
    }
}
