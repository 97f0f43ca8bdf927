//! Calculator core
//!
//! Submodules:
//! - `events` — single-character event codes and their decoding
//! - `ops` — binary/unary operators and result classification
//! - `errors` — the arithmetic error taxonomy and event outcomes
//! - `engine` — the session state and per-event transitions
//! - `undo` — replay-based reconstruction of prior states

pub mod engine;
pub mod errors;
pub mod events;
pub mod ops;

mod undo;
