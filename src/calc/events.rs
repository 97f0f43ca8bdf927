//! Event-code decoding
//!
//! Every interaction reaches the calculator as a single character. Decoding
//! happens exactly once, here; the transition logic and the replay engine
//! both dispatch on [`EventKind`], never on raw characters.

use crate::calc::ops::binary::BinaryOp;
use crate::calc::ops::unary::UnaryOp;

/// The two memory registers, coded `M` and `W`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemorySlot {
    One,
    Two,
}

impl MemorySlot {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'M' => Some(MemorySlot::One),
            'W' => Some(MemorySlot::Two),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            MemorySlot::One => 'M',
            MemorySlot::Two => 'W',
        }
    }
}

/// One decoded calculator event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Digit(char),
    Binary(BinaryOp),
    Unary(UnaryOp),
    Memory(MemorySlot),
    Scientific,
    Sign,
    Equals,
    Clear,
    Undo,
}

impl EventKind {
    /// Decode an event code. Unknown characters yield `None` and are dropped
    /// by the caller without side effects.
    pub fn decode(code: char) -> Option<Self> {
        if code.is_ascii_digit() || code == '.' {
            return Some(EventKind::Digit(code));
        }
        if let Some(op) = BinaryOp::from_code(code) {
            return Some(EventKind::Binary(op));
        }
        if let Some(op) = UnaryOp::from_code(code) {
            return Some(EventKind::Unary(op));
        }
        if let Some(slot) = MemorySlot::from_code(code) {
            return Some(EventKind::Memory(slot));
        }
        match code {
            'e' => Some(EventKind::Scientific),
            's' => Some(EventKind::Sign),
            'q' => Some(EventKind::Equals),
            'c' => Some(EventKind::Clear),
            'u' => Some(EventKind::Undo),
            _ => None,
        }
    }
}
