//! Arithmetic operators and result classification
//!
//! Submodules:
//! - `binary` — the seven two-operand operators
//! - `unary` — square root, factorial, reciprocal
//!
//! Domain faults are caught per operator before evaluation; overflow and the
//! like are caught here afterwards, from the formatted result text.

pub mod binary;
pub mod unary;

use crate::calc::errors::ResultError;

/// Classify a formatted result. Magnitude faults are detected from the text
/// the formatter produced, not the raw double, so the check stays in step
/// with what the display would show.
pub fn classify_result(text: &str) -> Result<(), ResultError> {
    match text {
        "inf" => Err(ResultError::Overflow),
        "-inf" => Err(ResultError::Underflow),
        "nan" => Err(ResultError::NotANumber),
        _ => Ok(()),
    }
}
