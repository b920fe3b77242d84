//! Frame-loop scheduling: the half-rate gate, the run/stop machine, and the
//! resize debouncer. All of it is plain state polled by the host's loop, so
//! it behaves the same under requestAnimationFrame and a winit event loop.

use std::cell::Cell;

use crate::input::Viewport;

/// Lets work through on every `divisor`-th scheduled callback.
#[derive(Debug)]
pub struct FrameGate {
    divisor: u64,
    counter: u64,
}

impl FrameGate {
    pub fn new(divisor: u64) -> Self {
        Self {
            divisor: divisor.max(1),
            counter: 0,
        }
    }

    /// Count one scheduled callback; true when this one should do work.
    /// The very first callback is always skipped for divisors above one.
    pub fn tick(&mut self) -> bool {
        self.counter += 1;
        self.counter % self.divisor == 0
    }

    /// Total callbacks seen, executed or not.
    pub fn scheduled(&self) -> u64 {
        self.counter
    }
}

/// Lifecycle of a frame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    Idle,
    Running,
    Stopped,
}

/// Run/stop state shared with the host's frame callbacks.
///
/// `Stopped` is terminal: a stopped loop never reschedules and cannot be
/// restarted. `Cell` keeps it shareable through `Rc` on the single-threaded
/// hosts that drive it.
#[derive(Debug, Default)]
pub struct LoopState {
    phase: Cell<RunPhase>,
}

impl LoopState {
    pub fn new() -> Self {
        Self {
            phase: Cell::new(RunPhase::Idle),
        }
    }

    /// Idle -> Running. False when the loop already ran or was stopped.
    pub fn begin(&self) -> bool {
        if self.phase.get() == RunPhase::Idle {
            self.phase.set(RunPhase::Running);
            true
        } else {
            false
        }
    }

    /// Request cancellation. The loop checks this before every reschedule.
    pub fn stop(&self) {
        self.phase.set(RunPhase::Stopped);
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase.get() == RunPhase::Running
    }

    #[inline]
    pub fn phase(&self) -> RunPhase {
        self.phase.get()
    }
}

/// Debounced viewport resize. Submissions during the quiet period replace
/// the pending entry, so a drag-resize burst applies once, with the final
/// dimensions, after `quiet_ms` of silence.
#[derive(Debug)]
pub struct ResizeDebouncer {
    quiet_ms: f64,
    pending: Option<Pending>,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    viewport: Viewport,
    due_at_ms: f64,
}

impl ResizeDebouncer {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms,
            pending: None,
        }
    }

    /// Record a resize observed at `now_ms`; restarts the quiet period.
    pub fn submit(&mut self, viewport: Viewport, now_ms: f64) {
        self.pending = Some(Pending {
            viewport,
            due_at_ms: now_ms + self.quiet_ms,
        });
    }

    /// Take the pending viewport once the quiet period has passed.
    pub fn fire(&mut self, now_ms: f64) -> Option<Viewport> {
        match self.pending {
            Some(p) if now_ms >= p.due_at_ms => {
                self.pending = None;
                Some(p.viewport)
            }
            _ => None,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
