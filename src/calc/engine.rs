//! The calculator session and its per-event transitions

use crate::calc::errors::EventOutcome;
use crate::calc::events::{EventKind, MemorySlot};
use crate::calc::ops;
use crate::calc::ops::binary::BinaryOp;
use crate::calc::ops::unary::UnaryOp;
use crate::history::{EventFrame, EventLog, ValueCaches};
use crate::number::{self, Precision};

/// Which operand line events currently edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Upper,
    Lower,
}

/// A calculator session.
///
/// All mutation goes through [`Calculator::submit_event`] (or
/// [`Calculator::apply_event`] with a pre-decoded kind); everything else is
/// read-only accessors for a presentation layer. Undo lives in a sibling
/// file and rebuilds this state by replaying the event log.
#[derive(Debug)]
pub struct Calculator {
    pub(crate) upper: String,
    pub(crate) lower: String,
    pub(crate) active: Slot,
    pub(crate) pending_op: Option<BinaryOp>,
    pub(crate) memory1: Option<String>,
    pub(crate) memory2: Option<String>,
    /// Next digit replaces the active text instead of extending it. Set at
    /// every frame boundary and after unary results and recalls.
    pub(crate) overwrite_pending: bool,
    pub(crate) has_error: bool,
    pub(crate) precision: Precision,
    pub(crate) log: EventLog,
    pub(crate) caches: ValueCaches,
    /// Set while undo replays a frame; suppresses recording and cache pushes.
    pub(crate) replaying: bool,
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_precision(Precision::default())
    }

    pub fn with_precision(precision: Precision) -> Self {
        Calculator {
            upper: String::new(),
            lower: String::new(),
            active: Slot::Upper,
            pending_op: None,
            memory1: None,
            memory2: None,
            overwrite_pending: true,
            has_error: false,
            precision,
            log: EventLog::new(),
            caches: ValueCaches::default(),
            replaying: false,
        }
    }

    /// Decode and apply one event code. Returns whether the code was
    /// recognized at all; unrecognized codes have no effect.
    pub fn submit_event(&mut self, code: char) -> bool {
        match EventKind::decode(code) {
            Some(kind) => {
                self.apply_event(kind);
                true
            }
            None => false,
        }
    }

    /// Apply one decoded event.
    pub fn apply_event(&mut self, kind: EventKind) -> EventOutcome {
        match kind {
            EventKind::Digit(digit) => self.on_digit(digit),
            EventKind::Binary(op) => self.on_binary(op),
            EventKind::Unary(op) => self.on_unary(op),
            EventKind::Memory(slot) => self.on_memory(slot),
            EventKind::Scientific => self.on_scientific(),
            EventKind::Sign => self.on_sign(),
            EventKind::Equals => self.on_equals(),
            EventKind::Clear => self.on_clear(),
            EventKind::Undo => self.on_undo(),
        }
    }

    fn on_digit(&mut self, digit: char) -> EventOutcome {
        if self.overwrite_pending {
            self.has_error = false;
            self.overwrite_pending = digit == '0';
            let text = if digit == '.' {
                String::from("0.")
            } else {
                String::from(digit)
            };
            self.set_active_text(text);
            self.record(digit);
            return EventOutcome::Applied;
        }

        let text = self.active_text();
        let rejected = number::at_max_precision(text, &self.precision)
            || (digit == '0' && (text.ends_with("e+") || text.ends_with("e-")))
            || (digit == '.' && (text.contains('.') || text.contains('e')));
        if rejected {
            return EventOutcome::Rejected;
        }

        match self.active {
            Slot::Upper => self.upper.push(digit),
            Slot::Lower => self.lower.push(digit),
        }
        self.record(digit);
        EventOutcome::Applied
    }

    pub(crate) fn on_binary(&mut self, op: BinaryOp) -> EventOutcome {
        if self.has_error || self.upper.is_empty() {
            return EventOutcome::Rejected;
        }
        if self.active == Slot::Upper {
            self.active = Slot::Lower;
            self.lower = String::from("0");
            self.overwrite_pending = true;
        }
        self.pending_op = Some(op);
        self.record(op.code());
        EventOutcome::Applied
    }

    fn on_unary(&mut self, op: UnaryOp) -> EventOutcome {
        if self.has_error || self.active_text().is_empty() {
            return EventOutcome::Rejected;
        }
        let value = number::to_double(self.active_text());
        if let Err(e) = op.classify_domain(value) {
            self.install_error(e.to_string());
            self.record(op.code());
            return EventOutcome::Errored(e.into());
        }
        let text = number::to_text(op.evaluate(value), &self.precision);
        if let Err(e) = ops::classify_result(&text) {
            self.install_error(e.to_string());
            self.record(op.code());
            return EventOutcome::Errored(e.into());
        }
        self.set_active_text(text);
        self.overwrite_pending = true;
        self.record(op.code());
        EventOutcome::Applied
    }

    /// Store when the active text holds a value, recall when it does not.
    fn on_memory(&mut self, slot: MemorySlot) -> EventOutcome {
        let storable = !self.has_error && !number::is_zero_sentinel(self.active_text());
        if storable {
            let value = self.active_text().to_string();
            match slot {
                MemorySlot::One => self.memory1 = Some(value),
                MemorySlot::Two => self.memory2 = Some(value),
            }
        } else {
            let stored = match slot {
                MemorySlot::One => self.memory1.clone(),
                MemorySlot::Two => self.memory2.clone(),
            };
            match stored {
                Some(value) => {
                    self.has_error = false;
                    self.overwrite_pending = true;
                    self.set_active_text(value);
                }
                None => return EventOutcome::Rejected,
            }
        }
        self.record(slot.code());
        EventOutcome::Applied
    }

    fn on_scientific(&mut self) -> EventOutcome {
        let text = self.active_text();
        if self.has_error || text.contains('e') || number::to_double(text) == 0.0 {
            return EventOutcome::Rejected;
        }
        match self.active {
            Slot::Upper => self.upper.push_str("e+"),
            Slot::Lower => self.lower.push_str("e+"),
        }
        self.overwrite_pending = false;
        self.record('e');
        EventOutcome::Applied
    }

    fn on_sign(&mut self) -> EventOutcome {
        let text = self.active_text();
        if self.has_error || number::is_zero_sentinel(text) {
            return EventOutcome::Rejected;
        }
        let toggled = if text.contains("e+") {
            text.replacen("e+", "e-", 1)
        } else if text.contains("e-") {
            text.replacen("e-", "e+", 1)
        } else if let Some(stripped) = text.strip_prefix('-') {
            stripped.to_string()
        } else {
            format!("-{}", text)
        };
        self.set_active_text(toggled);
        self.record('s');
        EventOutcome::Applied
    }

    fn on_equals(&mut self) -> EventOutcome {
        if self.has_error || self.upper.is_empty() {
            return EventOutcome::Rejected;
        }
        let result = match self.pending_op {
            // Bare equals reformats the upper value and still starts a frame.
            None => number::to_text(number::to_double(&self.upper), &self.precision),
            Some(op) => {
                let upper = number::to_double(&self.upper);
                let lower = number::to_double(&self.lower);
                if let Err(e) = op.classify_domain(upper, lower) {
                    self.has_error = true;
                    self.open_frame(e.to_string());
                    return EventOutcome::Errored(e.into());
                }
                number::to_text(op.evaluate(upper, lower), &self.precision)
            }
        };
        if let Err(e) = ops::classify_result(&result) {
            self.has_error = true;
            self.open_frame(e.to_string());
            return EventOutcome::Errored(e.into());
        }
        self.open_frame(result);
        EventOutcome::Applied
    }

    fn on_clear(&mut self) -> EventOutcome {
        self.has_error = false;
        self.open_frame(String::from("0"));
        EventOutcome::Applied
    }

    /// Reset the session onto `baseline` and, outside replay, start a new
    /// log frame there. Leaves the error flag to the caller.
    fn open_frame(&mut self, baseline: String) {
        if !self.replaying {
            self.log.open_frame(baseline.clone());
        }
        self.upper = baseline;
        self.lower.clear();
        self.pending_op = None;
        self.active = Slot::Upper;
        self.overwrite_pending = true;
    }

    /// Log an accepted event code, pushing the matching cache entry first.
    fn record(&mut self, code: char) {
        if self.replaying {
            return;
        }
        match code {
            'M' => {
                if let Some(value) = &self.memory1 {
                    self.caches.memory1.push(value.clone());
                }
            }
            'W' => {
                if let Some(value) = &self.memory2 {
                    self.caches.memory2.push(value.clone());
                }
            }
            'r' | '!' | 'i' => {
                let result = self.active_text().to_string();
                self.caches.unary_results.push(result);
            }
            _ => {}
        }
        self.log.record(code);
    }

    fn install_error(&mut self, message: String) {
        self.set_active_text(message);
        self.has_error = true;
        self.overwrite_pending = true;
    }

    pub(crate) fn active_text(&self) -> &str {
        match self.active {
            Slot::Upper => &self.upper,
            Slot::Lower => &self.lower,
        }
    }

    pub(crate) fn set_active_text(&mut self, text: String) {
        match self.active {
            Slot::Upper => self.upper = text,
            Slot::Lower => self.lower = text,
        }
    }
}

// Read-only accessors for the presentation layer.
impl Calculator {
    pub fn upper_text(&self) -> &str {
        &self.upper
    }

    pub fn lower_text(&self) -> &str {
        &self.lower
    }

    /// Display token of the pending operator, empty when none is pending.
    pub fn operator_token(&self) -> &'static str {
        self.pending_op.map(BinaryOp::token).unwrap_or("")
    }

    pub fn memory1_text(&self) -> Option<&str> {
        self.memory1.as_deref()
    }

    pub fn memory2_text(&self) -> Option<&str> {
        self.memory2.as_deref()
    }

    pub fn memory1_occupied(&self) -> bool {
        self.memory1.is_some()
    }

    pub fn memory2_occupied(&self) -> bool {
        self.memory2.is_some()
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn overwrite_pending(&self) -> bool {
        self.overwrite_pending
    }

    pub fn active_slot(&self) -> Slot {
        self.active
    }

    pub fn frames(&self) -> &[EventFrame] {
        self.log.frames()
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
