//! Session state machine tying generation, planning and playback together.

use std::time::Duration;

use shared::{
    domain::{Phase, SlotId, SortDirection, TimerHandle, SPECIAL_THRESHOLD, STEP_INTERVAL_MS},
    error::SessionError,
    protocol::{InboundEvent, UiNotice},
};
use tracing::{debug, info, warn};

use crate::{
    generator::{parse_count, validate_count, RandomSetGenerator},
    planner::plan,
    player::{StepPlayer, StepScheduler, TickOutcome},
};

/// Receives every render payload and notice a session produces.
pub trait RenderSink {
    fn notify(&mut self, notice: UiNotice);
}

impl RenderSink for Vec<UiNotice> {
    fn notify(&mut self, notice: UiNotice) {
        self.push(notice);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub values: Vec<u32>,
    pub slots: Vec<SlotId>,
    pub direction: SortDirection,
    pub phase: Phase,
}

impl SessionState {
    fn fresh(values: Vec<u32>, direction: SortDirection) -> Self {
        let slots = SlotId::identity(values.len());
        Self {
            values,
            slots,
            direction,
            phase: Phase::Idle,
        }
    }

    fn full_render(&self) -> UiNotice {
        UiNotice::FullRender {
            values: self.values.clone(),
            slots: self.slots.clone(),
        }
    }
}

/// Owns the single live session. `None` state means the host is on the
/// entry screen.
pub struct SortSessionController<S, R> {
    generator: RandomSetGenerator,
    player: StepPlayer<S>,
    sink: R,
    state: Option<SessionState>,
    step_interval: Duration,
}

impl<S: StepScheduler, R: RenderSink> SortSessionController<S, R> {
    pub fn new(generator: RandomSetGenerator, scheduler: S, sink: R) -> Self {
        Self {
            generator,
            player: StepPlayer::new(scheduler),
            sink,
            state: None,
            step_interval: Duration::from_millis(STEP_INTERVAL_MS),
        }
    }

    pub fn with_step_interval(mut self, step_interval: Duration) -> Self {
        self.step_interval = step_interval;
        self
    }

    pub fn handle(&mut self, event: InboundEvent) -> Result<(), SessionError> {
        match event {
            InboundEvent::StartRequested { count } => self.start(count),
            InboundEvent::SortToggleRequested => self.toggle_sort(),
            InboundEvent::ValueClicked { value } => self.on_value_clicked(value),
            InboundEvent::ResetRequested => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Parses raw entry-screen text and starts a session from it.
    pub fn start_from_input(&mut self, raw: &str) -> Result<(), SessionError> {
        let count = parse_count(raw).map_err(|err| self.reject(err))?;
        self.start(count)
    }

    pub fn start(&mut self, count: usize) -> Result<(), SessionError> {
        self.ensure_idle()?;
        let count = validate_count(count).map_err(|err| self.reject(err))?;

        // The direction flag starts ascending and flips before use, so the
        // first sort runs descending.
        let values = self.generator.generate(count);
        let state = SessionState::fresh(values, SortDirection::Ascending);
        info!(count, "session started");
        self.sink.notify(state.full_render());
        self.state = Some(state);
        Ok(())
    }

    pub fn toggle_sort(&mut self) -> Result<(), SessionError> {
        self.ensure_idle()?;
        let Some(state) = self.state.as_mut() else {
            debug!("sort requested without a session; ignoring");
            return Ok(());
        };
        if state.values.is_empty() {
            return Ok(());
        }

        state.direction = state.direction.flipped();
        let direction = state.direction;
        let steps = plan(&state.values, direction);
        info!(?direction, steps = steps.len(), "sort started");

        if steps.is_empty() {
            self.sink.notify(UiNotice::SortComplete { direction });
            return Ok(());
        }

        state.phase = Phase::Animating;
        self.player.play(steps, self.step_interval);
        Ok(())
    }

    /// Feeds one timer fire into the active playback.
    pub fn on_timer(&mut self, handle: TimerHandle) -> TickOutcome {
        let state = &mut self.state;
        let outcome = self.player.on_tick(handle, |step| {
            if let Some(state) = state.as_mut() {
                step.apply(&mut state.values);
                step.apply(&mut state.slots);
            }
        });

        match outcome {
            TickOutcome::Applied { step, highlight } => {
                debug!(i = step.i, j = step.j, remaining = self.player.remaining(), "step applied");
                if let Some(state) = self.state.as_ref() {
                    self.sink.notify(UiNotice::StepRender {
                        i: step.i,
                        j: step.j,
                        values: state.values.clone(),
                        slots: state.slots.clone(),
                        highlight_ms: highlight.as_millis() as u64,
                    });
                }
            }
            TickOutcome::Completed => {
                if let Some(state) = self.state.as_mut() {
                    state.phase = Phase::Idle;
                    info!(direction = ?state.direction, "sort complete");
                    self.sink.notify(UiNotice::SortComplete {
                        direction: state.direction,
                    });
                }
            }
            TickOutcome::Stale => debug!(?handle, "ignoring stale timer tick"),
        }
        outcome
    }

    pub fn on_value_clicked(&mut self, value: u32) -> Result<(), SessionError> {
        self.ensure_idle()?;
        let Some(direction) = self.state.as_ref().map(|state| state.direction) else {
            debug!(value, "click without a session; ignoring");
            return Ok(());
        };

        if value > SPECIAL_THRESHOLD {
            return Err(self.reject(SessionError::ValueAboveThreshold {
                value,
                threshold: SPECIAL_THRESHOLD,
            }));
        }

        let count = validate_count(value as usize).map_err(|err| self.reject(err))?;
        let values = self.generator.generate(count);
        let state = SessionState::fresh(values, direction);
        info!(count, "values reshuffled from click");
        self.sink.notify(state.full_render());
        self.state = Some(state);
        Ok(())
    }

    /// Cancels playback before clearing state so no late tick can land on
    /// cleared data.
    pub fn reset(&mut self) {
        self.player.cancel();
        if self.state.take().is_some() {
            info!("session reset");
        }
        self.sink.notify(UiNotice::EntryScreen);
    }

    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.state
            .as_ref()
            .map(|state| state.phase)
            .unwrap_or_default()
    }

    pub fn is_animating(&self) -> bool {
        self.phase() == Phase::Animating
    }

    pub fn values(&self) -> &[u32] {
        self.state
            .as_ref()
            .map(|state| state.values.as_slice())
            .unwrap_or_default()
    }

    pub fn slots(&self) -> &[SlotId] {
        self.state
            .as_ref()
            .map(|state| state.slots.as_slice())
            .unwrap_or_default()
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.state.as_ref().map(|state| state.direction)
    }

    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    pub fn scheduler(&self) -> &S {
        self.player.scheduler()
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        self.player.scheduler_mut()
    }

    fn ensure_idle(&mut self) -> Result<(), SessionError> {
        if self.is_animating() {
            return Err(self.reject(SessionError::AnimationBusy));
        }
        Ok(())
    }

    fn reject(&mut self, err: SessionError) -> SessionError {
        warn!(code = ?err.code(), %err, "request rejected");
        self.sink.notify(err.to_notice());
        err
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
