//! Replay-based undo
//!
//! Undo never stores whole sessions. It drops the trailing event code from
//! the live frame (or the whole frame when it is empty), then rebuilds the
//! session by replaying the surviving frame from its baseline through the
//! ordinary transition logic, with recording suppressed.
//!
//! Two effects are not recomputable from event codes and get seeded from the
//! side caches instead: a unary result (formatting already clamped away the
//! input) and a segment-initial memory value (the register's history is not
//! in the frame). Everything after such a seed point replays normally; the
//! memory registers are positioned from the caches just before each replayed
//! stretch, so replayed stores and recalls walk them forward exactly as they
//! did live and end at the cache tails.

use crate::calc::engine::{Calculator, Slot};
use crate::calc::errors::{is_error_message, EventOutcome};
use crate::calc::events::{EventKind, MemorySlot};
use crate::calc::ops::binary::BinaryOp;
use crate::calc::ops::unary::UnaryOp;

/// Per-kind event counts for a segment, used to index the caches from their
/// tails when seeding an earlier segment.
#[derive(Debug, Default, Clone, Copy)]
struct SegmentCounts {
    unary: usize,
    memory1: usize,
    memory2: usize,
}

impl SegmentCounts {
    fn of(segment: &str) -> Self {
        SegmentCounts {
            unary: segment
                .chars()
                .filter(|c| UnaryOp::from_code(*c).is_some())
                .count(),
            memory1: segment.matches('M').count(),
            memory2: segment.matches('W').count(),
        }
    }
}

/// The register's value just before `upcoming` more events of its slot
/// replay: the cache entry that many slots back from the tail, or `None`
/// when the whole cache belongs to the upcoming events.
fn register_before(cache: &[String], upcoming: usize) -> Option<String> {
    cache.len().checked_sub(upcoming + 1).map(|i| cache[i].clone())
}

impl Calculator {
    pub(crate) fn on_undo(&mut self) -> EventOutcome {
        if self.log.current().events.is_empty() {
            if !self.log.pop_frame() {
                return EventOutcome::Rejected;
            }
        } else if let Some(code) = self.log.pop_event() {
            // Each unary/memory code owns one cache entry; drop it with the code.
            match code {
                'r' | '!' | 'i' => {
                    self.caches.unary_results.pop();
                }
                'M' => {
                    self.caches.memory1.pop();
                }
                'W' => {
                    self.caches.memory2.pop();
                }
                _ => {}
            }
        }
        self.rebuild_from_log();
        EventOutcome::Applied
    }

    /// Rebuild the whole session from the live frame.
    fn rebuild_from_log(&mut self) {
        let baseline = self.log.current().baseline.clone();
        let events = self.log.current().events.clone();

        self.has_error = is_error_message(&baseline);
        self.upper = baseline;
        self.lower.clear();
        self.pending_op = None;
        self.active = Slot::Upper;
        self.overwrite_pending = true;

        // The first binary code splits the frame into an upper and a lower
        // segment. Later binary codes only changed the pending operator, so
        // the lower segment replays without them and the last one is
        // re-issued to restore it.
        let (upper_seg, lower_raw) = match events.find(|c: char| BinaryOp::from_code(c).is_some())
        {
            Some(pos) => (&events[..pos], &events[pos..]),
            None => (events.as_str(), ""),
        };
        let lower_seg: String = lower_raw
            .chars()
            .filter(|c| BinaryOp::from_code(*c).is_none())
            .collect();

        self.replaying = true;
        self.replay_segment(upper_seg, SegmentCounts::of(&lower_seg));
        if !lower_raw.is_empty() {
            if let Some(op) = lower_raw.chars().rev().find_map(BinaryOp::from_code) {
                self.on_binary(op);
            }
            self.replay_segment(&lower_seg, SegmentCounts::default());
        }
        self.replaying = false;
    }

    /// Replay one segment, seeding from a cache where the segment's text is
    /// not recomputable. `later` counts the cache-owning events in segments
    /// that replay after this one; the caches are indexed from their tails.
    fn replay_segment(&mut self, segment: &str, later: SegmentCounts) {
        if let Some(pos) = segment.rfind(|c: char| UnaryOp::from_code(c).is_some()) {
            // Everything before the last unary result was overwritten by it.
            let idx = self.caches.unary_results.len() - later.unary - 1;
            let value = self.caches.unary_results[idx].clone();
            self.seed_active(value);
            self.replay_remainder(&segment[pos + 1..], later);
            return;
        }
        if let Some(slot) = segment.chars().next().and_then(MemorySlot::from_code) {
            let rest = &segment[1..];
            let trailing = rest.matches(slot.code()).count()
                + match slot {
                    MemorySlot::One => later.memory1,
                    MemorySlot::Two => later.memory2,
                };
            let cache = match slot {
                MemorySlot::One => &self.caches.memory1,
                MemorySlot::Two => &self.caches.memory2,
            };
            let value = cache[cache.len() - trailing - 1].clone();
            self.seed_active(value);
            self.replay_remainder(rest, later);
            return;
        }
        self.replay_remainder(segment, later);
    }

    /// Replay the recomputable tail of a segment. The registers are first
    /// positioned to their values just before the remainder, so a replayed
    /// memory event takes the same store-or-recall branch it took live and a
    /// replayed recall reads the value it read live.
    fn replay_remainder(&mut self, remainder: &str, later: SegmentCounts) {
        let upcoming1 = remainder.matches('M').count() + later.memory1;
        let upcoming2 = remainder.matches('W').count() + later.memory2;
        self.memory1 = register_before(&self.caches.memory1, upcoming1);
        self.memory2 = register_before(&self.caches.memory2, upcoming2);
        self.replay_events(remainder);
    }

    fn replay_events(&mut self, codes: &str) {
        for code in codes.chars() {
            if let Some(kind) = EventKind::decode(code) {
                self.apply_event(kind);
            }
        }
    }

    fn seed_active(&mut self, value: String) {
        self.has_error = is_error_message(&value);
        self.overwrite_pending = true;
        self.set_active_text(value);
    }
}
