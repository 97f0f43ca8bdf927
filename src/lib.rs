//! # Introduction
//!
//! recalc is a desk calculator with replay-based undo.  Every accepted
//! interaction is a single-character event appended to a compact log; undo
//! rebuilds the prior session by replaying the log through the ordinary
//! transition logic, seeded from small caches for the few values replay
//! cannot recompute.  A terminal UI built with
//! [ratatui](https://docs.rs/ratatui) sits on top.
//!
//! ## Event pipeline
//!
//! ```text
//! Key → event code → EventKind → Calculator transition → EventLog → TUI
//! ```
//!
//! 1. [`number`] — operand text: parsing, %g-style formatting, digit budgets.
//! 2. [`calc`] — the session state machine, arithmetic operators with an
//!    enumerated error taxonomy, and the undo engine.
//! 3. [`history`] — the frame-structured event log and the value caches.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Event codes
//!
//! Digits `0`-`9` and `.`; binary operators `+ - x d ^ l m`; unary operators
//! `r i !`; memory registers `M W`; `e` opens an exponent, `s` toggles sign;
//! `q` equals, `c` clear, `u` undo.

pub mod calc;
pub mod history;
pub mod number;
pub mod ui;
