//! Unary operators

use crate::calc::errors::DomainError;

/// The three unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    SquareRoot,
    Factorial,
    Reciprocal,
}

impl UnaryOp {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'r' => Some(UnaryOp::SquareRoot),
            '!' => Some(UnaryOp::Factorial),
            'i' => Some(UnaryOp::Reciprocal),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            UnaryOp::SquareRoot => 'r',
            UnaryOp::Factorial => '!',
            UnaryOp::Reciprocal => 'i',
        }
    }

    /// Check the operand before evaluating. Factorial is integer-only and
    /// capped at 20 (the largest factorial a u64 holds); the non-integer
    /// check wins over the size check, which wins over the sign check.
    pub fn classify_domain(self, value: f64) -> Result<(), DomainError> {
        match self {
            UnaryOp::Factorial if value.fract() != 0.0 => {
                Err(DomainError::NonIntegerFactorial)
            }
            UnaryOp::Factorial if value > 20.0 => Err(DomainError::FactorialTooLarge),
            UnaryOp::Factorial if value < 0.0 => Err(DomainError::NegativeFactorial),
            UnaryOp::SquareRoot if value < 0.0 => Err(DomainError::NegativeRoot),
            UnaryOp::Reciprocal if value == 0.0 => Err(DomainError::ReciprocalOfZero),
            _ => Ok(()),
        }
    }

    /// Evaluate on an operand already past `classify_domain`.
    pub fn evaluate(self, value: f64) -> f64 {
        match self {
            UnaryOp::SquareRoot => value.sqrt(),
            UnaryOp::Factorial => (1..=value as u64).product::<u64>() as f64,
            UnaryOp::Reciprocal => 1.0 / value,
        }
    }
}
