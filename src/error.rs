//! Error types for the ergo-desk library

use thiserror::Error;

/// Result type alias using ErgoError
pub type Result<T> = std::result::Result<T, ErgoError>;

/// Errors that can occur when computing or rendering recommendations
#[derive(Debug, Error)]
pub enum ErgoError {
    /// A body measurement was zero, negative, NaN or infinite
    #[error("Invalid input: {field} must be a positive finite number of centimetres, got {value}")]
    InvalidInput { field: &'static str, value: f64 },

    /// Error from the underlying lopdf library
    #[error("PDF operation failed: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Failure writing a rendered report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Font data could not be parsed
    #[error("Font error: {0}")]
    Font(String),

    /// The document structure did not allow drawing
    #[error("Drawing failed: {0}")]
    Drawing(String),

    /// Page not found
    #[error("Page with ID {0:?} not found")]
    PageNotFound(lopdf::ObjectId),
}

impl ErgoError {
    /// Create an invalid input error for the named measurement.
    pub fn invalid_input(field: &'static str, value: f64) -> Self {
        Self::InvalidInput { field, value }
    }

    /// Whether this error was caused by the caller's measurements.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = ErgoError::invalid_input("standing height", -3.0);
        let message = err.to_string();
        assert!(message.contains("standing height"));
        assert!(message.contains("-3"));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_drawing_error_is_not_input_error() {
        let err = ErgoError::Drawing("no parent".to_string());
        assert!(!err.is_invalid_input());
        assert!(err.to_string().contains("no parent"));
    }
}
