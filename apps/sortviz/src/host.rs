//! Binds a sort session to tokio timers and terminal input.

use std::{collections::HashMap, io::Write, time::Duration};

use anyhow::Result;
use shared::domain::TimerHandle;
use sort_core::{RandomSetGenerator, SortSessionController, StepScheduler};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::{
    commands::{parse_line, HostCommand, HELP},
    config::Settings,
    render::{OutputFormat, TerminalRenderer},
};

/// Repeating timers backed by tokio tasks. Every fire is posted to a channel
/// drained by the task that owns the session, so the session is only ever
/// touched from one place.
pub struct TokioScheduler {
    tick_tx: mpsc::UnboundedSender<TimerHandle>,
    next_id: u32,
    tasks: HashMap<TimerHandle, JoinHandle<()>>,
}

impl TokioScheduler {
    pub fn new(tick_tx: mpsc::UnboundedSender<TimerHandle>) -> Self {
        Self {
            tick_tx,
            next_id: 0,
            tasks: HashMap::new(),
        }
    }

    #[cfg(test)]
    pub fn armed_count(&self) -> usize {
        self.tasks.len()
    }
}

impl StepScheduler for TokioScheduler {
    fn arm(&mut self, interval: Duration) -> TimerHandle {
        let interval = interval.max(Duration::from_millis(1));
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;

        let tick_tx = self.tick_tx.clone();
        let task = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tick_tx.send(handle).is_err() {
                    break;
                }
            }
        });
        self.tasks.insert(handle, task);
        handle
    }

    fn disarm(&mut self, handle: TimerHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}

pub type TerminalSession<W> = SortSessionController<TokioScheduler, TerminalRenderer<W>>;

pub struct Host<W: Write> {
    session: TerminalSession<W>,
    ticks: mpsc::UnboundedReceiver<TimerHandle>,
}

impl<W: Write> Host<W> {
    pub fn new(settings: &Settings, out: W, format: OutputFormat) -> Self {
        let (tick_tx, ticks) = mpsc::unbounded_channel();
        let generator = settings
            .seed
            .map(RandomSetGenerator::seeded)
            .unwrap_or_default();
        let renderer = TerminalRenderer::new(out, settings.column_height, format);
        let session = SortSessionController::new(generator, TokioScheduler::new(tick_tx), renderer)
            .with_step_interval(Duration::from_millis(settings.step_interval_ms));
        Self { session, ticks }
    }

    pub fn session(&self) -> &TerminalSession<W> {
        &self.session
    }

    /// Drains timer fires until the running animation finishes.
    pub async fn wait_idle(&mut self) {
        while self.session.is_animating() {
            match self.ticks.recv().await {
                Some(handle) => {
                    self.session.on_timer(handle);
                }
                None => break,
            }
        }
    }

    /// Starts a session from `raw_count` and runs `sorts` back-to-back sorts.
    pub async fn run_sorts(&mut self, raw_count: &str, sorts: usize) -> Result<()> {
        self.session.start_from_input(raw_count)?;
        for round in 0..sorts {
            self.session.toggle_sort()?;
            self.wait_idle().await;
            debug!(round, "sort round finished");
        }
        Ok(())
    }

    /// Reads commands from `input` until it ends or `quit` is typed, while
    /// animation ticks keep flowing between lines.
    pub async fn interactive<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        self.session.reset();
        self.message(HELP);

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    match parse_line(&line) {
                        Ok(Some(HostCommand::Quit)) => break,
                        Ok(Some(command)) => self.dispatch(command),
                        Ok(None) => {}
                        Err(message) => self.message(&message),
                    }
                }
                Some(handle) = self.ticks.recv() => {
                    self.session.on_timer(handle);
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("interrupted");
                    break;
                }
            }
        }

        self.session.reset();
        Ok(())
    }

    fn dispatch(&mut self, command: HostCommand) {
        let result = match command {
            HostCommand::Start(raw) => self.session.start_from_input(&raw),
            HostCommand::Event(event) => self.session.handle(event),
            HostCommand::Help => {
                self.message(HELP);
                Ok(())
            }
            HostCommand::Quit => Ok(()),
        };
        if let Err(err) = result {
            debug!(%err, "command rejected");
        }
    }

    fn message(&mut self, text: &str) {
        self.session.sink_mut().message(text);
    }
}

#[cfg(test)]
#[path = "tests/host_tests.rs"]
mod tests;
