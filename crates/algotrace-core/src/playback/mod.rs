//! Replay of a finished [`StepTrace`].
//!
//! Rendering is driven entirely by each step's accepted snapshot, so any
//! step can be shown directly without replaying the ones before it.
//! Advancing while playing goes through a single-slot [`Scheduler`];
//! every manual transition cancels the pending continuation first.

mod scheduler;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::trace::{Step, StepTrace};

pub use scheduler::{Clock, Scheduler, SystemClock};

/// Longest single sleep in [`PlaybackController::drive`] between checks
/// of its stop flag
pub const STOP_CHECK_INTERVAL: Duration = Duration::from_millis(25);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Stopped,
    Playing,
}

/// What a renderer receives for one applied step
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub index: usize,
    pub step: &'a Step,
    /// Permanently accepted elements
    pub accepted_nodes: &'a [String],
    pub accepted_edges: &'a [String],
    /// Elements under consideration at this step only
    pub highlight_nodes: &'a [String],
    pub highlight_edges: &'a [String],
}

impl<'a> Frame<'a> {
    fn new(index: usize, step: &'a Step) -> Self {
        Self {
            index,
            step,
            accepted_nodes: &step.accepted_nodes,
            accepted_edges: &step.accepted_edges,
            highlight_nodes: &step.highlight.nodes,
            highlight_edges: &step.highlight.edges,
        }
    }
}

/// Render callback
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>);

    /// Playback restarted from the beginning; clear any drawn state
    fn reset(&mut self) {}
}

impl<F> Renderer for F
where
    F: FnMut(&Frame<'_>),
{
    fn render(&mut self, frame: &Frame<'_>) {
        self(frame)
    }
}

/// Drives a trace through a renderer
pub struct PlaybackController<R> {
    trace: StepTrace,
    renderer: R,
    current: Option<usize>,
    mode: RunMode,
    delay: Duration,
    scheduler: Scheduler,
}

impl<R: Renderer> PlaybackController<R> {
    pub fn new(trace: StepTrace, renderer: R, delay: Duration) -> Self {
        Self {
            trace,
            renderer,
            current: None,
            mode: RunMode::Stopped,
            delay,
            scheduler: Scheduler::new(),
        }
    }

    pub fn trace(&self) -> &StepTrace {
        &self.trace
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// Index of the last applied step; `None` before anything is applied
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn is_playing(&self) -> bool {
        self.mode == RunMode::Playing
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Deadline of the pending continuation, if playing
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.deadline()
    }

    fn at_end(&self) -> bool {
        self.current.is_some_and(|i| i + 1 >= self.trace.len())
    }

    /// Start playing. The next step is applied immediately and the one
    /// after it is scheduled `delay` later.
    ///
    /// From the last step, playback restarts at the beginning.
    pub fn play(&mut self, now: Instant) {
        if self.trace.is_empty() || self.is_playing() {
            return;
        }
        if self.at_end() {
            self.current = None;
            self.renderer.reset();
        }
        self.mode = RunMode::Playing;
        tracing::debug!(from = ?self.current, "play");
        self.advance(now);
    }

    fn advance(&mut self, now: Instant) {
        let next = self.current.map_or(0, |i| i + 1);
        self.apply_step(next);
        if self.at_end() {
            self.scheduler.cancel();
            self.mode = RunMode::Stopped;
            tracing::debug!(index = next, "playback_finished");
        } else {
            self.scheduler.schedule(now + self.delay);
        }
    }

    /// Run the pending continuation if it is due. Returns whether a step
    /// was applied.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.is_playing() && self.scheduler.take_due(now) {
            self.advance(now);
            return true;
        }
        false
    }

    /// Block on `clock` until playback stops on its own or `stop` is set.
    ///
    /// Sleeps at most [`STOP_CHECK_INTERVAL`] at a time, so a raised flag
    /// pauses playback without waiting out the step delay.
    pub fn drive(&mut self, clock: &impl Clock, stop: &AtomicBool) {
        while self.is_playing() {
            if stop.load(Ordering::SeqCst) {
                self.pause();
                break;
            }
            let Some(deadline) = self.scheduler.deadline() else {
                break;
            };
            let now = clock.now();
            if now < deadline {
                clock.sleep_until(deadline.min(now + STOP_CHECK_INTERVAL));
                continue;
            }
            self.poll(now);
        }
    }

    pub fn pause(&mut self) {
        let cancelled = self.scheduler.cancel();
        self.mode = RunMode::Stopped;
        tracing::debug!(index = ?self.current, cancelled, "pause");
    }

    /// Same as [`PlaybackController::pause`]; the position is kept
    pub fn stop(&mut self) {
        self.pause();
    }

    /// Jump to step `index` (clamped) and show it
    pub fn seek(&mut self, index: usize) {
        if self.trace.is_empty() {
            return;
        }
        self.pause();
        let index = index.min(self.trace.len() - 1);
        tracing::debug!(index, "seek");
        self.apply_step(index);
    }

    pub fn step_forward(&mut self) {
        if self.trace.is_empty() {
            return;
        }
        self.pause();
        let last = self.trace.len() - 1;
        let next = self.current.map_or(0, |i| (i + 1).min(last));
        self.apply_step(next);
    }

    pub fn step_back(&mut self) {
        if self.trace.is_empty() {
            return;
        }
        self.pause();
        let prev = self.current.map_or(0, |i| i.saturating_sub(1));
        self.apply_step(prev);
    }

    /// Render step `index` from its snapshot. Out-of-range indices are
    /// ignored.
    pub fn apply_step(&mut self, index: usize) {
        let Some(step) = self.trace.get(index) else {
            return;
        };
        self.current = Some(index);
        self.renderer.render(&Frame::new(index, step));
    }
}
