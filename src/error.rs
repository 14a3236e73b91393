//! Error kinds reported by the buffer engine.
//!
//! Every failure is an expected outcome of hitting a fixed capacity limit.
//! The `Display` text is the reason shown on the status bar.

use thiserror::Error;

/// Failure of a document, selection or clipboard operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// A row-local character capacity violation
    #[error("Maximum line length exceeded")]
    RowFull,

    /// A merge or append would exceed the row capacity
    #[error("Joined line would be too long")]
    RowOverflow,

    /// No row slots remain for a split or insert
    #[error("Maximum number of lines reached")]
    DocumentFull,

    /// The captured selection does not fit in the clipboard
    #[error("Selection too large for clipboard")]
    ClipboardOverflow,

    /// A row index, column or selection lies outside the document
    #[error("Position outside of document")]
    InvalidRange,

    /// Copy or cut requested without a fixed selection
    #[error("Nothing selected")]
    NoSelection,

    /// The character is not accepted in this field
    #[error("Character not allowed here")]
    InvalidChar,
}

pub type EditResult<T> = Result<T, EditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_strings() {
        assert_eq!(EditError::RowFull.to_string(), "Maximum line length exceeded");
        assert_eq!(
            EditError::DocumentFull.to_string(),
            "Maximum number of lines reached"
        );
    }
}
