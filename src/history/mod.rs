//! Event history for replay-based undo
//!
//! Rather than snapshotting whole sessions, the calculator records the
//! minimum needed to rebuild any prior state by replay:
//!
//! - [`EventLog`] — ordered [`EventFrame`]s, one per clear/equals span, each
//!   holding the upper-operand text at the moment the frame opened plus the
//!   single-character codes of every event accepted since.
//! - [`ValueCaches`] — side histories for the two operations whose effect is
//!   not a pure function of the visible text: unary results (formatted and
//!   clamped, so not invertible) and memory register values (readable after
//!   later edits).
//!
//! Both are append-only during forward operation; undo pops from the tail.

/// A contiguous span of events since the last clear/equals, anchored to the
/// upper-operand text at the moment the frame was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFrame {
    /// Upper display text when the frame opened.
    pub baseline: String,
    /// Accepted event codes applied since, in arrival order. Clear, equals,
    /// and undo are frame boundaries, never frame contents.
    pub events: String,
}

impl EventFrame {
    fn new(baseline: String) -> Self {
        EventFrame {
            baseline,
            events: String::new(),
        }
    }
}

/// Append-only record of event frames.
///
/// The log is never empty: it is seeded with one empty frame at startup and
/// `pop_frame` refuses to remove the last one. The trailing frame is always
/// the live one.
#[derive(Debug)]
pub struct EventLog {
    frames: Vec<EventFrame>,
}

impl EventLog {
    pub fn new() -> Self {
        EventLog {
            frames: vec![EventFrame::new(String::new())],
        }
    }

    /// The live (trailing) frame.
    pub fn current(&self) -> &EventFrame {
        match self.frames.last() {
            Some(frame) => frame,
            None => unreachable!("event log is never empty"),
        }
    }

    fn current_mut(&mut self) -> &mut EventFrame {
        match self.frames.last_mut() {
            Some(frame) => frame,
            None => unreachable!("event log is never empty"),
        }
    }

    /// Append an accepted event code to the live frame.
    pub fn record(&mut self, code: char) {
        self.current_mut().events.push(code);
    }

    /// Open a fresh frame anchored to `baseline`.
    pub fn open_frame(&mut self, baseline: String) {
        self.frames.push(EventFrame::new(baseline));
    }

    /// Remove and return the live frame's trailing event code.
    pub fn pop_event(&mut self) -> Option<char> {
        self.current_mut().events.pop()
    }

    /// Drop the live frame, making the previous one live. Refused (returning
    /// `false`) when only the seeded frame remains.
    pub fn pop_frame(&mut self) -> bool {
        if self.frames.len() < 2 {
            return false;
        }
        self.frames.pop();
        true
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[EventFrame] {
        &self.frames
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Side histories of values replay cannot recompute from event codes alone.
///
/// One `unary_results` entry per accepted unary event (the text it installed,
/// error messages included); one `memory1`/`memory2` entry per accepted
/// memory event for that register (the register's value, pushed on store and
/// recall alike so undo can pop one entry per code without telling the two
/// apart).
#[derive(Debug, Default)]
pub struct ValueCaches {
    pub(crate) unary_results: Vec<String>,
    pub(crate) memory1: Vec<String>,
    pub(crate) memory2: Vec<String>,
}
