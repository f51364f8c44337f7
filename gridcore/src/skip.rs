//! Skip-reset controller.
//!
//! Replacing the row collection normally resets the page index back to
//! zero. When the replacement comes from an in-place cell edit that reset
//! would yank the user away from the page they are editing, so the
//! mutation gateway arms this controller and the next auto-reset cycle
//! consumes the flag instead of resetting.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses the automatic page reset for exactly one update cycle.
///
/// `request_skip` arms the flag; the next auto-reset cycle consults and
/// disarms it, after which resets apply again. Arming twice before a
/// cycle runs collapses into a single skip.
#[derive(Debug, Clone, Default)]
pub struct SkipReset {
    armed: Arc<AtomicBool>,
}

impl SkipReset {
    /// Create a disarmed controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the skip flag. Idempotent.
    pub fn request_skip(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    /// Check whether the next auto-reset cycle will be skipped.
    pub fn should_skip(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }

    /// Read and disarm the flag. Called once per auto-reset cycle.
    pub(crate) fn consume(&self) -> bool {
        self.armed.swap(false, Ordering::SeqCst)
    }
}
