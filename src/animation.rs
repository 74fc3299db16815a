//! Drives the falling-piece animation from outside the state machine.
//!
//! The game state only knows how to advance one row per tick. A host (the
//! terminal UI, the replay tool) decides when ticks happen: either on a fixed
//! interval with [`FallTimer`], or all at once with [`settle`].

use std::time::{Duration, Instant};

use crate::game::GameState;

/// Fixed-interval tick clock for a falling piece.
#[derive(Debug, Clone, Copy)]
pub struct FallTimer {
    interval: Duration,
    last_tick: Instant,
}

impl FallTimer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        FallTimer {
            interval,
            last_tick: now,
        }
    }

    /// Restart the interval from `now`. Call when a piece starts falling so
    /// its first step is a full interval away.
    pub fn mark(&mut self, now: Instant) {
        self.last_tick = now;
    }

    pub fn due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_tick) >= self.interval
    }

    /// How long until the next tick is due; zero if it is overdue.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Tick `state` once if a piece is falling and the interval has elapsed.
    pub fn advance(&mut self, state: &GameState, now: Instant) -> GameState {
        if !state.is_piece_falling() || !self.due(now) {
            return *state;
        }
        self.mark(now);
        state.tick()
    }
}

/// Tick until the falling piece comes to rest. Returns the settled state and
/// the number of ticks taken, which is at most the board height.
pub fn settle(state: &GameState) -> (GameState, usize) {
    let mut state = *state;
    let mut ticks = 0;
    while state.is_piece_falling() {
        state = state.tick();
        ticks += 1;
    }
    (state, ticks)
}
