//! Enter/exit bookkeeping for the clickable and cooldown views.
//!
//! When the mode flips, the old view is kept as `leaving` and plays its exit
//! while the new view plays its entrance over the same space.

use std::time::Instant;

use super::motion::{Appearance, Visual};
use super::props::Mode;

fn appearance(mode: Mode) -> Appearance {
    match mode {
        Mode::Clickable => Appearance::coin(),
        Mode::Cooldown => Appearance::cooldown(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub mode: Mode,
    pub visual: Visual,
}

#[derive(Debug, Clone)]
pub struct Presence {
    current: Mode,
    entered_at: Instant,
    leaving: Option<(Mode, Instant)>,
}

impl Presence {
    pub fn new(mode: Mode, now: Instant) -> Self {
        Self {
            current: mode,
            entered_at: now,
            leaving: None,
        }
    }

    pub fn current(&self) -> Mode {
        self.current
    }

    /// Returns `true` when the mode changed.
    pub fn update(&mut self, mode: Mode, now: Instant) -> bool {
        if mode == self.current {
            return false;
        }
        self.leaving = Some((self.current, now));
        self.current = mode;
        self.entered_at = now;
        true
    }

    /// Layers to draw, back to front: the leaving view (if still animating)
    /// then the current one.
    pub fn layers(&self, now: Instant) -> Vec<Layer> {
        let mut layers = Vec::with_capacity(2);
        if let Some((mode, since)) = self.leaving {
            let profile = appearance(mode);
            let elapsed = now.saturating_duration_since(since);
            if elapsed < profile.exit_length() {
                layers.push(Layer {
                    mode,
                    visual: profile.exiting(elapsed),
                });
            }
        }
        layers.push(Layer {
            mode: self.current,
            visual: self.visual(now),
        });
        layers
    }

    /// Opacity and scale of the current view.
    pub fn visual(&self, now: Instant) -> Visual {
        let elapsed = now.saturating_duration_since(self.entered_at);
        appearance(self.current).entering(elapsed)
    }

    /// Whether anything is still moving.
    pub fn is_animating(&self, now: Instant) -> bool {
        let entering = now.saturating_duration_since(self.entered_at)
            < appearance(self.current).enter_length();
        let leaving = self.leaving.is_some_and(|(mode, since)| {
            now.saturating_duration_since(since) < appearance(mode).exit_length()
        });
        entering || leaving
    }

    /// Forget a finished exit so it is not re-sampled every frame.
    pub fn settle(&mut self, now: Instant) {
        if let Some((mode, since)) = self.leaving {
            if now.saturating_duration_since(since) >= appearance(mode).exit_length() {
                self.leaving = None;
            }
        }
    }
}
