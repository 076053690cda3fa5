//! Short-lived "+N" indicators and their removal schedule.
//!
//! Each entry gets a removal deadline when it is pushed. Deadlines are kept
//! in a queue ordered by insertion (all entries share one lifetime, so that
//! is also deadline order) and drained by [`FloatingNumbers::expire`] on
//! every tick. A deadline only ever removes the entry with its own id.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::motion;

/// How long an indicator stays on screen.
pub const NUMBER_LIFETIME: Duration = Duration::from_millis(1000);
/// Where the indicator starts, above the tap point.
const RISE_START_PX: f64 = 50.0;
/// Where the indicator ends, above the tap point.
const RISE_END_PX: f64 = 200.0;

/// Unique within one widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingNumber {
    pub id: EntryId,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub created_at: Instant,
}

impl FloatingNumber {
    /// Animated position and opacity at `now`: `(x, y, opacity)`.
    pub fn animated(&self, now: Instant) -> (f64, f64, f64) {
        let elapsed = now.saturating_duration_since(self.created_at);
        let t = (elapsed.as_secs_f64() / NUMBER_LIFETIME.as_secs_f64()).clamp(0.0, 1.0);
        let eased = motion::ease_out(t);
        let rise = RISE_START_PX + (RISE_END_PX - RISE_START_PX) * eased;
        (self.x, self.y - rise, 1.0 - eased)
    }

    /// Signed value; whole numbers print without a fraction (`+15`).
    pub fn label(&self) -> String {
        format!("{:+}", self.value)
    }
}

#[derive(Debug, Default)]
pub struct FloatingNumbers {
    entries: Vec<FloatingNumber>,
    removals: VecDeque<(Instant, EntryId)>,
    next_id: u64,
}

impl FloatingNumbers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and schedule its removal.
    pub fn push(&mut self, value: f64, x: f64, y: f64, now: Instant) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(FloatingNumber {
            id,
            value,
            x,
            y,
            created_at: now,
        });
        self.removals.push_back((now + NUMBER_LIFETIME, id));
        id
    }

    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Run every removal whose deadline has passed. Returns how many entries
    /// were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let mut removed = 0;
        while let Some(&(deadline, id)) = self.removals.front() {
            if deadline > now {
                break;
            }
            self.removals.pop_front();
            if self.remove(id) {
                tracing::trace!(id = id.0, "floating number expired");
                removed += 1;
            }
        }
        removed
    }

    /// Drop all entries and every pending removal.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
        self.removals.clear();
    }

    pub fn pending_removals(&self) -> usize {
        self.removals.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FloatingNumber> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_unique_within_same_instant() {
        let mut nums = FloatingNumbers::new();
        let now = Instant::now();
        let a = nums.push(5.0, 10.0, 10.0, now);
        let b = nums.push(5.0, 10.0, 10.0, now);
        assert_ne!(a, b);
        assert_eq!(nums.len(), 2);
    }

    #[test]
    fn test_expire_respects_lifetime() {
        let mut nums = FloatingNumbers::new();
        let t0 = Instant::now();
        nums.push(5.0, 0.0, 0.0, t0);
        assert_eq!(nums.expire(t0 + Duration::from_millis(999)), 0);
        assert_eq!(nums.len(), 1);
        assert_eq!(nums.expire(t0 + NUMBER_LIFETIME), 1);
        assert!(nums.is_empty());
        assert_eq!(nums.pending_removals(), 0);
    }

    #[test]
    fn test_overlapping_removals_only_touch_their_entry() {
        let mut nums = FloatingNumbers::new();
        let t0 = Instant::now();
        let first = nums.push(5.0, 0.0, 0.0, t0);
        let second = nums.push(10.0, 0.0, 0.0, t0 + Duration::from_millis(400));

        nums.expire(t0 + Duration::from_millis(1100));
        let live: Vec<_> = nums.iter().map(|e| e.id).collect();
        assert_eq!(live, vec![second]);
        assert!(!live.contains(&first));

        nums.expire(t0 + Duration::from_millis(1400));
        assert!(nums.is_empty());
    }

    #[test]
    fn test_removal_of_already_gone_entry_is_harmless() {
        let mut nums = FloatingNumbers::new();
        let t0 = Instant::now();
        let id = nums.push(5.0, 0.0, 0.0, t0);
        let other = nums.push(5.0, 0.0, 0.0, t0 + Duration::from_millis(500));
        assert!(nums.remove(id));
        assert_eq!(nums.expire(t0 + NUMBER_LIFETIME), 0);
        assert_eq!(nums.iter().next().map(|e| e.id), Some(other));
    }

    #[test]
    fn test_cancel_all_clears_schedule() {
        let mut nums = FloatingNumbers::new();
        let t0 = Instant::now();
        nums.push(5.0, 0.0, 0.0, t0);
        nums.push(5.0, 0.0, 0.0, t0);
        nums.cancel_all();
        assert!(nums.is_empty());
        assert_eq!(nums.pending_removals(), 0);
    }

    #[test]
    fn test_animation_rises_and_fades() {
        let mut nums = FloatingNumbers::new();
        let t0 = Instant::now();
        nums.push(5.0, 100.0, 300.0, t0);
        let entry = nums.iter().next().cloned().unwrap();

        let (x, y, opacity) = entry.animated(t0);
        assert_eq!(x, 100.0);
        assert!((y - 250.0).abs() < 1e-9);
        assert!((opacity - 1.0).abs() < 1e-9);

        let (_, y, opacity) = entry.animated(t0 + NUMBER_LIFETIME);
        assert!((y - 100.0).abs() < 1e-6);
        assert!(opacity.abs() < 1e-6);
    }

    #[test]
    fn test_label_sign() {
        let mut nums = FloatingNumbers::new();
        let t0 = Instant::now();
        nums.push(15.0, 0.0, 0.0, t0);
        nums.push(-5.0, 0.0, 0.0, t0);
        nums.push(2.5, 0.0, 0.0, t0);
        let labels: Vec<_> = nums.iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["+15", "-5", "+2.5"]);
    }
}
