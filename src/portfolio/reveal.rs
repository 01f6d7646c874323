// SPDX-License-Identifier: MPL-2.0
//! Staggered card entrance.
//!
//! Cards carry a [`Reveal`] state instead of inline style values; the view
//! maps each state to an opacity and a vertical offset. The schedule is
//! started once when the page is built and again after every filter change.

use crate::config::{REVEAL_ENTER_MS, REVEAL_STAGGER_MS};
use std::time::{Duration, Instant};

/// Distance a card slides up while entering (logical pixels).
pub const REVEAL_SLIDE_DISTANCE: f32 = 30.0;

/// Entrance state of a single card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reveal {
    Hidden,
    /// Entering, with progress in `0.0..1.0`.
    Entering(f32),
    Visible,
}

impl Reveal {
    #[must_use]
    pub fn opacity(self) -> f32 {
        match self {
            Reveal::Hidden => 0.0,
            Reveal::Entering(progress) => progress,
            Reveal::Visible => 1.0,
        }
    }

    /// Remaining downward offset of the card.
    #[must_use]
    pub fn slide_offset(self) -> f32 {
        (1.0 - self.opacity()) * REVEAL_SLIDE_DISTANCE
    }
}

/// Entrance states for an ordered set of cards.
#[derive(Debug, Clone)]
pub struct RevealSchedule {
    started_at: Instant,
    states: Vec<Reveal>,
}

impl RevealSchedule {
    /// Starts a schedule with every card hidden.
    #[must_use]
    pub fn new(count: usize, now: Instant) -> Self {
        Self {
            started_at: now,
            states: vec![Reveal::Hidden; count],
        }
    }

    /// Restarts the entrance for a new set of cards.
    pub fn restart(&mut self, count: usize, now: Instant) {
        *self = Self::new(count, now);
    }

    /// Recomputes every card's state for `now`. Returns `true` if any changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.started_at);
        let stagger = Duration::from_millis(REVEAL_STAGGER_MS);
        let enter = Duration::from_millis(REVEAL_ENTER_MS);

        let mut changed = false;
        for (index, state) in self.states.iter_mut().enumerate() {
            let start = stagger * u32::try_from(index).unwrap_or(u32::MAX);
            let next = if elapsed < start {
                Reveal::Hidden
            } else if elapsed - start < enter {
                Reveal::Entering((elapsed - start).as_secs_f32() / enter.as_secs_f32())
            } else {
                Reveal::Visible
            };
            if *state != next {
                *state = next;
                changed = true;
            }
        }
        changed
    }

    /// State of the card at `index`; cards outside the schedule are visible.
    #[must_use]
    pub fn state(&self, index: usize) -> Reveal {
        self.states.get(index).copied().unwrap_or(Reveal::Visible)
    }

    /// Returns `true` once every card is fully visible.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.states.iter().all(|state| *state == Reveal::Visible)
    }
}
