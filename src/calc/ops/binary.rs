//! Binary operators

use crate::calc::errors::DomainError;

/// The seven binary operators, identified on the wire by one-character codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Log,
    Modulo,
}

impl BinaryOp {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '+' => Some(BinaryOp::Add),
            '-' => Some(BinaryOp::Subtract),
            'x' => Some(BinaryOp::Multiply),
            'd' => Some(BinaryOp::Divide),
            '^' => Some(BinaryOp::Power),
            'l' => Some(BinaryOp::Log),
            'm' => Some(BinaryOp::Modulo),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => 'x',
            BinaryOp::Divide => 'd',
            BinaryOp::Power => '^',
            BinaryOp::Log => 'l',
            BinaryOp::Modulo => 'm',
        }
    }

    /// Display token shown between the operand lines.
    pub fn token(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "−",
            BinaryOp::Multiply => "×",
            BinaryOp::Divide => "÷",
            BinaryOp::Power => "^",
            BinaryOp::Log => "log",
            BinaryOp::Modulo => "mod",
        }
    }

    /// Check the operand pair before evaluating. `upper` is the left operand
    /// (the log base for `Log`).
    pub fn classify_domain(self, upper: f64, lower: f64) -> Result<(), DomainError> {
        match self {
            BinaryOp::Power if upper == 0.0 && lower == 0.0 => {
                Err(DomainError::ZeroToZeroPower)
            }
            BinaryOp::Power if upper < 0.0 && lower.fract() != 0.0 => {
                Err(DomainError::NegativeBaseFractionalPower)
            }
            BinaryOp::Divide if lower == 0.0 => Err(DomainError::DivideByZero),
            BinaryOp::Log if upper <= 0.0 || lower <= 0.0 => {
                Err(DomainError::LogOfNonPositive)
            }
            BinaryOp::Modulo if lower == 0.0 => Err(DomainError::ModuloByZero),
            _ => Ok(()),
        }
    }

    /// Evaluate on operands already past `classify_domain`.
    pub fn evaluate(self, upper: f64, lower: f64) -> f64 {
        match self {
            BinaryOp::Add => upper + lower,
            BinaryOp::Subtract => upper - lower,
            BinaryOp::Multiply => upper * lower,
            BinaryOp::Divide => upper / lower,
            BinaryOp::Power => upper.powf(lower),
            BinaryOp::Log => lower.ln() / upper.ln(),
            BinaryOp::Modulo => upper % lower,
        }
    }
}
