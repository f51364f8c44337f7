//! Grid load state.
//!
//! The `Loading -> Loaded` transition is modeled explicitly so renderers
//! can observe it exactly once (entrance animation, skeleton teardown)
//! instead of inferring it by diffing successive render inputs.

use std::time::{Duration, Instant};

/// Whether the grid's row data has arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Rows are being fetched; renderers show placeholders.
    Loading,
    /// Rows are present.
    #[default]
    Loaded,
}

/// Load lifecycle for a grid instance.
///
/// `finish_loading` arms a one-shot entrance observation and a highlight
/// window that expires on its own; callers poll
/// [`is_highlighting`](LoadState::is_highlighting) with the current time.
#[derive(Debug, Clone, Default)]
pub struct LoadState {
    phase: LoadPhase,
    entrance_pending: bool,
    highlight_deadline: Option<Instant>,
}

impl LoadState {
    /// Current phase.
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Enter the loading phase.
    pub fn begin_loading(&mut self) {
        self.phase = LoadPhase::Loading;
        self.entrance_pending = false;
        self.highlight_deadline = None;
    }

    /// Transition to loaded, arming the one-shot entrance and a highlight
    /// window of the given duration.
    pub fn finish_loading(&mut self, highlight: Duration) {
        self.phase = LoadPhase::Loaded;
        self.entrance_pending = true;
        self.highlight_deadline = Some(Instant::now() + highlight);
    }

    /// Observe the `Loading -> Loaded` transition. Returns `true` exactly
    /// once per transition.
    pub fn take_entrance(&mut self) -> bool {
        std::mem::take(&mut self.entrance_pending)
    }

    /// Check whether the post-load highlight window is still open.
    ///
    /// The window clears itself once `now` passes the deadline.
    pub fn is_highlighting(&mut self, now: Instant) -> bool {
        match self.highlight_deadline {
            Some(deadline) if now < deadline => true,
            Some(_) => {
                self.highlight_deadline = None;
                false
            }
            None => false,
        }
    }
}
