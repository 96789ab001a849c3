//! Quicksort animation engine: plans every swap up front, then replays the
//! plan one timed step at a time against a live value/slot model.

pub mod generator;
pub mod planner;
pub mod player;
pub mod session;

pub use generator::{generate, parse_count, validate_count, RandomSetGenerator};
pub use planner::{apply_plan, plan};
pub use player::{ManualScheduler, StepPlayer, StepScheduler, TickOutcome};
pub use session::{RenderSink, SessionState, SortSessionController};

pub type ManualSession = SortSessionController<ManualScheduler, Vec<shared::protocol::UiNotice>>;

/// Headless session driven by a virtual clock, recording every notice.
pub fn manual_session(seed: u64) -> ManualSession {
    SortSessionController::new(
        RandomSetGenerator::seeded(seed),
        ManualScheduler::new(),
        Vec::new(),
    )
}

impl ManualSession {
    /// Fires timer ticks until the current playback finishes or nothing is
    /// armed. Returns how many steps were applied.
    pub fn run_until_idle(&mut self) -> usize {
        let mut applied = 0;
        while let Some(handle) = self.scheduler_mut().fire_next() {
            match self.on_timer(handle) {
                TickOutcome::Applied { .. } => applied += 1,
                TickOutcome::Completed => break,
                TickOutcome::Stale => {}
            }
        }
        applied
    }
}
