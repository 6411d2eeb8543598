//! Error types for sheetref-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetref-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Reference text does not match the `ST_Ref` grammar or lies outside the sheet
    #[error("Invalid reference: {0}")]
    Format(#[from] FormatError),

    /// A geometric derivation has no valid result for this area
    #[error("Cannot compute {operation}: {reason}")]
    InvalidOperation {
        operation: &'static str,
        reason: &'static str,
    },

    /// A parameter is outside the range accepted by the operation
    #[error("Invalid {argument} for {operation}: {reason}")]
    InvalidArgument {
        operation: &'static str,
        argument: &'static str,
        reason: &'static str,
    },

    /// Sheet limits are inconsistent
    #[error("Invalid sheet limits: {0}")]
    InvalidLimits(String),
}

impl Error {
    pub(crate) fn invalid_operation(operation: &'static str, reason: &'static str) -> Self {
        tracing::debug!(operation, reason, "refused area derivation");
        Error::InvalidOperation { operation, reason }
    }

    pub(crate) fn invalid_argument(
        operation: &'static str,
        argument: &'static str,
        reason: &'static str,
    ) -> Self {
        tracing::debug!(operation, argument, reason, "rejected argument");
        Error::InvalidArgument {
            operation,
            argument,
            reason,
        }
    }

    /// Returns the grammar error if this is a [`Error::Format`]
    pub fn as_format(&self) -> Option<FormatError> {
        match self {
            Error::Format(e) => Some(*e),
            _ => None,
        }
    }
}

/// The grammar rule a reference failed
///
/// Carries no heap data so parsing stays allocation-free on the error path too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Nothing to parse
    #[error("empty reference")]
    Empty,

    /// The reference does not start with column letters
    #[error("no column letters")]
    MissingColumn,

    /// The column letters are not followed by a row number
    #[error("no row number")]
    MissingRow,

    /// A byte outside `A-Z`/`0-9` (or a letter after the row digits)
    #[error("unexpected character at byte {position}")]
    UnexpectedCharacter { position: usize },

    /// Row number outside `[min, max]`; saturates at `u32::MAX` on overflow
    #[error("row {row} out of bounds ({min}..={max})")]
    RowOutOfBounds { row: u32, min: u32, max: u32 },

    /// Column number outside `[min, max]`; saturates at `u32::MAX` on overflow
    #[error("column {column} out of bounds ({min}..={max})")]
    ColumnOutOfBounds { column: u32, min: u16, max: u16 },

    /// The first corner of a range is not the top-left one
    #[error("range corners are not in top-left/bottom-right order")]
    Unordered,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_converts() {
        let err: Error = FormatError::MissingRow.into();
        assert_eq!(err.as_format(), Some(FormatError::MissingRow));
        assert_eq!(err.to_string(), "Invalid reference: no row number");
    }

    #[test]
    fn test_messages() {
        let err = Error::invalid_operation("below range", "area touches the last row");
        assert_eq!(
            err.to_string(),
            "Cannot compute below range: area touches the last row"
        );
        assert_eq!(err.as_format(), None);

        let err = Error::invalid_argument("slice from bottom", "rows", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid rows for slice from bottom: must be at least 1"
        );
    }
}
