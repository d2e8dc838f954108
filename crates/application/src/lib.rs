//! Navigation and presentation state for the story cards viewer.
//!
//! Nothing here owns a timer. Operations that schedule a continuation take
//! the current `Instant`; the event loop calls `tick` with the clock and
//! sizes its poll timeout from `next_deadline`.

use std::time::{Duration, Instant};

use cards_core::{LayoutDirection, Settings};

pub mod controls;
pub mod gesture;
pub mod shell;

pub use controls::{Affordance, Controls, Indicator, controls};
pub use gesture::{SwipeIntent, SwipeTracker, VisualSide, resolve_swipe};
pub use shell::{OneShotGate, Shell};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeTiming {
    pub fade_out: Duration,
    pub settle: Duration,
    pub fade_in: Duration,
}

impl Default for FadeTiming {
    fn default() -> Self {
        Self {
            fade_out: Duration::from_millis(300),
            settle: Duration::from_millis(50),
            fade_in: Duration::from_millis(300),
        }
    }
}

impl FadeTiming {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            fade_out: Duration::from_millis(settings.fade_out_ms),
            settle: Duration::from_millis(settings.settle_ms),
            fade_in: Duration::from_millis(settings.fade_in_ms),
        }
    }
}

/// Transition phase. `index` is always the card on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Idle {
        index: usize,
    },
    FadingOut {
        index: usize,
        target: usize,
        swap_at: Instant,
    },
    Swapped {
        index: usize,
        settle_at: Instant,
    },
    /// Visual only: input is accepted again.
    FadingIn {
        index: usize,
        until: Instant,
    },
}

impl Phase {
    pub fn index(&self) -> Option<usize> {
        match *self {
            Phase::Empty => None,
            Phase::Idle { index }
            | Phase::FadingOut { index, .. }
            | Phase::Swapped { index, .. }
            | Phase::FadingIn { index, .. } => Some(index),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        match *self {
            Phase::Empty | Phase::Idle { .. } => None,
            Phase::FadingOut { swap_at, .. } => Some(swap_at),
            Phase::Swapped { settle_at, .. } => Some(settle_at),
            Phase::FadingIn { until, .. } => Some(until),
        }
    }
}

/// Owns the current card index and the fade sequence between cards.
///
/// Rejected requests (empty deck, out of range, redundant, or arriving
/// mid-transition) are dropped without any signal.
#[derive(Debug, Clone)]
pub struct Navigator {
    len: usize,
    phase: Phase,
    timing: FadeTiming,
    direction: LayoutDirection,
    swipe_threshold: u32,
    swipe: SwipeTracker,
}

impl Navigator {
    pub fn new(len: usize, settings: &Settings) -> Self {
        Self {
            len,
            phase: if len == 0 {
                Phase::Empty
            } else {
                Phase::Idle { index: 0 }
            },
            timing: FadeTiming::from_settings(settings),
            direction: settings.direction,
            swipe_threshold: settings.swipe_threshold_px,
            swipe: SwipeTracker::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> Option<usize> {
        self.phase.index()
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::FadingOut { .. } | Phase::Swapped { .. })
    }

    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: LayoutDirection) {
        self.direction = direction;
    }

    pub fn swipe(&self) -> &SwipeTracker {
        &self.swipe
    }

    pub fn controls(&self) -> Option<Controls> {
        let current = self.current_index()?;
        Some(controls(current, self.len, self.is_transitioning()))
    }

    pub fn go_to(&mut self, target: usize, now: Instant) {
        if target >= self.len || self.is_transitioning() {
            return;
        }
        let Some(index) = self.current_index() else {
            return;
        };
        if target == index {
            return;
        }
        // Mid fade-in the card is partly drawn; fade out from there.
        let fade_out = match self.phase {
            Phase::FadingIn { .. } => self.timing.fade_out.mul_f32(self.opacity(now)),
            _ => self.timing.fade_out,
        };
        self.phase = Phase::FadingOut {
            index,
            target,
            swap_at: now + fade_out,
        };
    }

    pub fn go_to_previous(&mut self, now: Instant) {
        let Some(index) = self.current_index() else {
            return;
        };
        let target = if index > 0 { index - 1 } else { self.len - 1 };
        self.go_to(target, now);
    }

    pub fn go_to_next(&mut self, now: Instant) {
        let Some(index) = self.current_index() else {
            return;
        };
        let target = if index + 1 < self.len { index + 1 } else { 0 };
        self.go_to(target, now);
    }

    pub fn apply(&mut self, intent: SwipeIntent, now: Instant) {
        match intent {
            SwipeIntent::Previous => self.go_to_previous(now),
            SwipeIntent::Next => self.go_to_next(now),
        }
    }

    /// Runs every continuation due at `now`, one phase at a time.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        loop {
            self.phase = match self.phase {
                Phase::FadingOut {
                    target, swap_at, ..
                } if now >= swap_at => Phase::Swapped {
                    index: target,
                    settle_at: swap_at + self.timing.settle,
                },
                Phase::Swapped { index, settle_at } if now >= settle_at => Phase::FadingIn {
                    index,
                    until: settle_at + self.timing.fade_in,
                },
                Phase::FadingIn { index, until } if now >= until => Phase::Idle { index },
                _ => break,
            };
            changed = true;
        }
        changed
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.phase.deadline()
    }

    /// Card opacity in `0.0..=1.0`, derived from the phase.
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Empty | Phase::Idle { .. } => 1.0,
            Phase::FadingOut { swap_at, .. } => {
                ramp(swap_at.saturating_duration_since(now), self.timing.fade_out)
            }
            Phase::Swapped { .. } => 0.0,
            Phase::FadingIn { until, .. } => {
                1.0 - ramp(until.saturating_duration_since(now), self.timing.fade_in)
            }
        }
    }

    pub fn touch_start(&mut self, x: i32) {
        if self.is_transitioning() || self.is_empty() {
            return;
        }
        self.swipe.begin(x);
    }

    pub fn touch_move(&mut self, x: i32) {
        if self.is_transitioning() || self.is_empty() {
            return;
        }
        self.swipe.update(x);
    }

    pub fn touch_end(&mut self, now: Instant) {
        let intent = self.swipe.finish(self.direction, self.swipe_threshold);
        if let Some(intent) = intent {
            self.apply(intent, now);
        }
    }
}

fn ramp(remaining: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 0.0;
    }
    (remaining.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}
