//! Tokio-backed [`Ticker`] for the hold-to-confirm gesture.

use crate::app::events::AppEvent;
use crate::guard::Ticker;
use async_channel::Sender;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Sends [`AppEvent::HoldTick`] on the event channel every period.
///
/// The spawned task's `JoinHandle` is the only way to stop it; it is aborted
/// on `cancel`, on restart and on drop.
pub struct IntervalTicker {
    event_tx: Sender<AppEvent>,
    handle: Option<JoinHandle<()>>,
    generation: u64,
}

impl IntervalTicker {
    pub fn new(event_tx: Sender<AppEvent>) -> Self {
        Self {
            event_tx,
            handle: None,
            generation: 0,
        }
    }
}

impl Ticker for IntervalTicker {
    fn start(&mut self, period: Duration) -> u64 {
        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let event_tx = self.event_tx.clone();
        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if event_tx.send(AppEvent::HoldTick { generation }).await.is_err() {
                    break;
                }
            }
        }));

        tracing::trace!(generation, period_ms = period.as_millis() as u64, "Hold ticker started");
        generation
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::trace!(generation = self.generation, "Hold ticker cancelled");
        }
    }

    fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    fn is_current(&self, generation: u64) -> bool {
        self.handle.is_some() && generation == self.generation
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}
