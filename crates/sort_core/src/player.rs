//! Timed, cancelable replay of a recorded plan.

use std::{collections::VecDeque, time::Duration};

use shared::domain::{SwapStep, TimerHandle};

/// Host-provided repeating timer. Every armed handle is expected to be fed
/// back into the session on each interval until it is disarmed.
pub trait StepScheduler {
    fn arm(&mut self, interval: Duration) -> TimerHandle;
    fn disarm(&mut self, handle: TimerHandle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One step was applied; the two slots stay highlighted for `highlight`.
    Applied {
        step: SwapStep,
        highlight: Duration,
    },
    /// The queue ran dry and the timer was disarmed.
    Completed,
    /// The tick belongs to a cancelled or finished playback.
    Stale,
}

pub struct StepPlayer<S> {
    scheduler: S,
    queue: VecDeque<SwapStep>,
    active: Option<TimerHandle>,
    interval: Duration,
}

impl<S: StepScheduler> StepPlayer<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            queue: VecDeque::new(),
            active: None,
            interval: Duration::ZERO,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.active.is_some()
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Queues `steps` and arms the timer. A playback that is still running
    /// is cancelled first so no residual step survives.
    pub fn play(&mut self, steps: Vec<SwapStep>, interval: Duration) -> TimerHandle {
        if self.active.is_some() {
            tracing::warn!("play requested while a playback is active; cancelling it");
            self.cancel();
        }
        self.queue = steps.into();
        self.interval = interval;
        let handle = self.scheduler.arm(interval);
        self.active = Some(handle);
        tracing::debug!(?handle, steps = self.queue.len(), "playback armed");
        handle
    }

    /// Stops the timer and drops any queued steps. Completion is not
    /// reported. No-op when idle.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.active.take() {
            self.scheduler.disarm(handle);
            tracing::debug!(?handle, dropped = self.queue.len(), "playback cancelled");
        }
        self.queue.clear();
    }

    /// Releases the next queued step to `apply`, or finishes the playback
    /// when nothing is left.
    pub fn on_tick(&mut self, handle: TimerHandle, apply: impl FnOnce(SwapStep)) -> TickOutcome {
        if self.active != Some(handle) {
            return TickOutcome::Stale;
        }

        match self.queue.pop_front() {
            Some(step) => {
                apply(step);
                TickOutcome::Applied {
                    step,
                    highlight: self.interval / 2,
                }
            }
            None => {
                self.active = None;
                self.scheduler.disarm(handle);
                TickOutcome::Completed
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ArmedTimer {
    handle: TimerHandle,
    interval: Duration,
    next_fire: Duration,
}

/// Virtual clock for tests and headless runs: nothing fires until the
/// caller advances time.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u32,
    armed: Vec<ArmedTimer>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn is_armed(&self, handle: TimerHandle) -> bool {
        self.armed.iter().any(|timer| timer.handle == handle)
    }

    pub fn armed_count(&self) -> usize {
        self.armed.len()
    }

    /// Jumps to the earliest pending fire time and returns its handle.
    pub fn fire_next(&mut self) -> Option<TimerHandle> {
        let timer = self.armed.iter_mut().min_by_key(|timer| timer.next_fire)?;
        self.now = timer.next_fire;
        timer.next_fire += timer.interval;
        Some(timer.handle)
    }

    /// Moves the clock forward by `by` and returns every fire in that window,
    /// oldest first.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerHandle> {
        let target = self.now + by;
        let mut fired = Vec::new();
        while let Some(timer) = self
            .armed
            .iter_mut()
            .filter(|timer| timer.next_fire <= target)
            .min_by_key(|timer| timer.next_fire)
        {
            fired.push(timer.handle);
            timer.next_fire += timer.interval;
        }
        self.now = target;
        fired
    }
}

impl StepScheduler for ManualScheduler {
    fn arm(&mut self, interval: Duration) -> TimerHandle {
        let interval = interval.max(Duration::from_millis(1));
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.armed.push(ArmedTimer {
            handle,
            interval,
            next_fire: self.now + interval,
        });
        handle
    }

    fn disarm(&mut self, handle: TimerHandle) {
        self.armed.retain(|timer| timer.handle != handle);
    }
}

#[cfg(test)]
#[path = "tests/player_tests.rs"]
mod tests;
