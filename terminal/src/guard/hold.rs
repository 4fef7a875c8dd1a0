//! # Hold-to-Confirm Gesture
//!
//! State machine behind the confirmation modal's press-and-hold button.
//!
//! ```text
//!            press (unblocked)              progress >= 100
//!   ┌──────┐ ─────────────────> ┌─────────┐ ───────────────> ┌───────────┐
//!   │ Idle │                    │ Holding │                  │ Completed │
//!   └──────┘ <───────────────── └─────────┘                  └─────┬─────┘
//!      ▲      release / blocker flips true                         │
//!      └───────────────────────────────────────────────────────────┘
//!                      immediate reset, progress = 0
//! ```
//!
//! The gesture owns its [`Ticker`]. The ticker runs only while `Holding` and is
//! cancelled on every exit: release, blocker flip, completion and drop.
//!
//! Ticks are stamped with the generation returned by [`Ticker::start`]; a tick
//! from an earlier generation is ignored, so a quick release/re-press never
//! advances the new hold with the old timer's ticks.

use std::time::Duration;
use tracing::{debug, info};

/// Period between progress ticks.
pub const HOLD_TICK_INTERVAL: Duration = Duration::from_millis(20);

/// Progress added per tick, in percent.
pub const HOLD_STEP: u8 = 2;

/// Progress at which the gesture confirms.
pub const HOLD_COMPLETE: u8 = 100;

/// Periodic tick source owned by a [`HoldGesture`].
pub trait Ticker {
    /// Start periodic ticks, replacing any running timer. Returns the
    /// generation that every tick from this timer will carry.
    fn start(&mut self, period: Duration) -> u64;

    /// Stop ticking. Must be idempotent.
    fn cancel(&mut self);

    fn is_running(&self) -> bool;

    /// Whether a tick stamped with `generation` belongs to the running timer.
    fn is_current(&self, generation: u64) -> bool;
}

/// Conditions that forbid starting or continuing a hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blockers {
    pub high_impact: bool,
    pub node_down: bool,
    pub over_balance: bool,
}

impl Blockers {
    pub fn any(&self) -> bool {
        self.high_impact || self.node_down || self.over_balance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldState {
    Idle,
    Holding,
    /// Momentary; the machine resets to `Idle` in the same transition.
    Completed,
}

/// Result of delivering one tick to the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale or out-of-state tick
    Ignored,
    /// Progress advanced to the contained percentage
    Advanced(u8),
    /// A blocker was active; the hold was cancelled
    Cancelled,
    /// Progress reached 100; fire the confirm callback
    Confirmed,
}

pub struct HoldGesture<T: Ticker> {
    state: HoldState,
    progress: u8,
    blockers: Blockers,
    ticker: T,
}

impl<T: Ticker> HoldGesture<T> {
    pub fn new(ticker: T) -> Self {
        Self {
            state: HoldState::Idle,
            progress: 0,
            blockers: Blockers::default(),
            ticker,
        }
    }

    pub fn state(&self) -> HoldState {
        self.state
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn blockers(&self) -> Blockers {
        self.blockers
    }

    pub fn is_holding(&self) -> bool {
        self.state == HoldState::Holding
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    /// Pointer or touch went down on the button.
    ///
    /// Returns `true` when a new hold started. A press while already holding,
    /// or while any blocker is active, changes nothing.
    pub fn press(&mut self) -> bool {
        if self.state == HoldState::Holding {
            return false;
        }
        if self.blockers.any() {
            debug!(blockers = ?self.blockers, "Hold press ignored: blocked");
            return false;
        }

        self.state = HoldState::Holding;
        self.progress = 0;
        let generation = self.ticker.start(HOLD_TICK_INTERVAL);
        debug!(generation, "Hold started");
        true
    }

    /// Pointer released or left the button before completion.
    pub fn release(&mut self) {
        if self.state == HoldState::Holding {
            debug!(progress = self.progress, "Hold released before completion");
        }
        self.reset();
    }

    /// Replace the blocking conditions.
    ///
    /// Any blocker true while holding cancels the gesture. Returns `true` when
    /// a hold was cancelled.
    pub fn update_blockers(&mut self, blockers: Blockers) -> bool {
        self.blockers = blockers;
        if self.state == HoldState::Holding && blockers.any() {
            info!(blockers = ?blockers, progress = self.progress, "Hold cancelled by blocking condition");
            self.reset();
            return true;
        }
        false
    }

    /// Deliver a tick stamped with `generation`.
    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if self.state != HoldState::Holding || !self.ticker.is_current(generation) {
            return TickOutcome::Ignored;
        }

        if self.blockers.any() {
            self.reset();
            return TickOutcome::Cancelled;
        }

        self.progress = self.progress.saturating_add(HOLD_STEP).min(HOLD_COMPLETE);
        if self.progress < HOLD_COMPLETE {
            return TickOutcome::Advanced(self.progress);
        }

        self.state = HoldState::Completed;
        info!("Hold completed, confirming");
        self.reset();
        TickOutcome::Confirmed
    }

    fn reset(&mut self) {
        self.ticker.cancel();
        self.state = HoldState::Idle;
        self.progress = 0;
    }
}

impl<T: Ticker> Drop for HoldGesture<T> {
    fn drop(&mut self) {
        self.ticker.cancel();
    }
}
