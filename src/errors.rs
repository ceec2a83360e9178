/// Error types for the thermal field engine.
///
/// All fallible entry points return `Result<_, ThermalFieldError>`. Nothing in
/// this crate retries or recovers internally; every failure is terminal for
/// that call and surfaces to the caller.

use std::fmt;

/// Structural problems with input fields, caught before any arithmetic runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two position-aligned fields have different lengths.
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    /// A field has no elements; derivatives and distributions need at least one.
    EmptyField { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::LengthMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "field '{}' has length {} but {} was expected",
                field, actual, expected
            ),
            ValidationError::EmptyField { field } => {
                write!(f, "field '{}' is empty", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A non-finite element (NaN or infinity) found in an input field.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidFieldError {
    pub field: &'static str,
    pub index: usize,
    pub value: f64,
}

impl fmt::Display for InvalidFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}' contains non-finite value {} at index {}",
            self.field, self.value, self.index
        )
    }
}

impl std::error::Error for InvalidFieldError {}

/// The unified error type for the crate.
#[derive(Debug, Clone, PartialEq)]
pub enum ThermalFieldError {
    Validation(ValidationError),
    InvalidField(InvalidFieldError),
}

impl fmt::Display for ThermalFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThermalFieldError::Validation(e) => write!(f, "validation error: {}", e),
            ThermalFieldError::InvalidField(e) => write!(f, "invalid field: {}", e),
        }
    }
}

impl std::error::Error for ThermalFieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ThermalFieldError::Validation(e) => Some(e),
            ThermalFieldError::InvalidField(e) => Some(e),
        }
    }
}

impl From<ValidationError> for ThermalFieldError {
    fn from(err: ValidationError) -> Self {
        ThermalFieldError::Validation(err)
    }
}

impl From<InvalidFieldError> for ThermalFieldError {
    fn from(err: InvalidFieldError) -> Self {
        ThermalFieldError::InvalidField(err)
    }
}

/// Check that a position-aligned companion field matches the reference length
/// and that neither is empty.
pub fn ensure_same_length(
    field: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), ValidationError> {
    if expected == 0 || actual == 0 {
        return Err(ValidationError::EmptyField { field });
    }
    if expected != actual {
        return Err(ValidationError::LengthMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Reject the first NaN or infinite element in a field.
pub fn ensure_finite(field: &'static str, values: &[f64]) -> Result<(), InvalidFieldError> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(InvalidFieldError {
                field,
                index,
                value,
            });
        }
    }
    Ok(())
}
