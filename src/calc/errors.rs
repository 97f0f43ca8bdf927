//! Error taxonomy for calculator arithmetic

use std::error::Error;
use std::fmt;

/// Faults detectable from the operand values before evaluating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    ZeroToZeroPower,
    NegativeBaseFractionalPower,
    DivideByZero,
    LogOfNonPositive,
    ModuloByZero,
    NegativeRoot,
    NegativeFactorial,
    FactorialTooLarge,
    NonIntegerFactorial,
    ReciprocalOfZero,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            DomainError::ZeroToZeroPower => "0^0 error",
            DomainError::NegativeBaseFractionalPower => "neg power error",
            DomainError::DivideByZero => "divide by 0 error",
            DomainError::LogOfNonPositive => "log domain error",
            DomainError::ModuloByZero => "mod 0 error",
            DomainError::NegativeRoot => "neg root error",
            DomainError::NegativeFactorial => "neg factorial error",
            DomainError::FactorialTooLarge => "factorial size error",
            DomainError::NonIntegerFactorial => "dec factorial error",
            DomainError::ReciprocalOfZero => "inverse 0 error",
        };
        write!(f, "{}", msg)
    }
}

impl Error for DomainError {}

/// Faults detected from the formatted result text after evaluating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultError {
    Overflow,
    Underflow,
    NotANumber,
}

impl fmt::Display for ResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ResultError::Overflow => "maximum size error",
            ResultError::Underflow => "minimum size error",
            ResultError::NotANumber => "nan error",
        };
        write!(f, "{}", msg)
    }
}

impl Error for ResultError {}

/// Any arithmetic fault a single event can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    Domain(DomainError),
    Result(ResultError),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Domain(e) => write!(f, "{}", e),
            CalcError::Result(e) => write!(f, "{}", e),
        }
    }
}

impl Error for CalcError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CalcError::Domain(e) => Some(e),
            CalcError::Result(e) => Some(e),
        }
    }
}

impl From<DomainError> for CalcError {
    fn from(e: DomainError) -> Self {
        CalcError::Domain(e)
    }
}

impl From<ResultError> for CalcError {
    fn from(e: ResultError) -> Self {
        CalcError::Result(e)
    }
}

/// How the calculator disposed of an event.
///
/// `Rejected` events are dropped silently and never logged; `Errored` events
/// are logged and leave their message on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Applied,
    Errored(CalcError),
    Rejected,
}

/// Whether `text` is one of the enumerated error messages. Frame baselines
/// can carry error text, so replay uses this to re-derive the error flag.
pub fn is_error_message(text: &str) -> bool {
    matches!(
        text,
        "0^0 error"
            | "neg power error"
            | "divide by 0 error"
            | "log domain error"
            | "mod 0 error"
            | "neg root error"
            | "neg factorial error"
            | "factorial size error"
            | "dec factorial error"
            | "inverse 0 error"
            | "maximum size error"
            | "minimum size error"
            | "nan error"
    )
}
