//! Error taxonomy of the color engine.
//!
//! None of these errors is fatal: invalid colors are filtered out, an empty
//! gradient simply resolves to nothing, and out-of-range input is clamped.
//! The variants exist so callers can report *why* something was skipped.

use std::fmt;

/// Recoverable failures of the color engine.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    /// The input is not a 3- or 6-digit hex color.
    InvalidColor(String),
    /// No active key color is available to build a gradient from.
    EmptyGradient,
    /// A lightness or position fell outside its valid range.
    OutOfRange {
        /// The offending value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
}

impl ColorError {
    /// Checks a value against an inclusive range.
    pub fn check_range(value: f64, min: f64, max: f64) -> Result<f64, Self> {
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(Self::OutOfRange { value, min, max })
        }
    }
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(input) => write!(
                f,
                "Invalid hex color '{input}'. Expected 3 or 6 hex digits (RGB or RRGGBB)"
            ),
            Self::EmptyGradient => write!(f, "No active key colors to build a gradient from"),
            Self::OutOfRange { value, min, max } => {
                write!(f, "Value {value} is outside the range {min}..={max}")
            }
        }
    }
}

impl std::error::Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert_eq!(ColorError::check_range(50.0, 0.0, 100.0), Ok(50.0));
        assert_eq!(ColorError::check_range(0.0, 0.0, 100.0), Ok(0.0));
        assert!(matches!(
            ColorError::check_range(101.0, 0.0, 100.0),
            Err(ColorError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_display_messages() {
        let err = ColorError::InvalidColor("XYZ".to_string());
        assert!(err.to_string().contains("'XYZ'"));
        assert!(ColorError::EmptyGradient.to_string().contains("No active key colors"));
    }
}
