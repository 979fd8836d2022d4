//! Display adapter
//!
//! Renders engine output onto a [`Screen`] and owns the only timed behavior:
//! after a power toggle the status text is shown for a while, then the
//! regular display comes back.
//!
//! At most one revert is ever scheduled. Showing new text or flashing a new
//! status cancels the previous revert first, so overlapping toggles cannot
//! race each other to the screen.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Anything that can show a line of text
pub trait Screen: Send + Sync {
    fn render(&self, text: &str);
}

/// Drives a [`Screen`] and manages the status revert timer
pub struct DisplayAdapter {
    screen: Arc<dyn Screen>,
    /// Bumped whenever the screen is taken over. Every render happens while
    /// this lock is held, and a revert only renders if its generation is
    /// still current.
    generation: Arc<Mutex<u64>>,
    pending: Option<JoinHandle<()>>,
}

impl DisplayAdapter {
    pub fn new(screen: Arc<dyn Screen>) -> Self {
        Self {
            screen,
            generation: Arc::new(Mutex::new(0)),
            pending: None,
        }
    }

    /// Show `text` verbatim, replacing any status that is still up
    pub fn show(&mut self, text: &str) {
        self.abort_pending();
        let mut generation = lock(&self.generation);
        *generation += 1;
        self.screen.render(text);
    }

    /// Show a transient status, then `revert_to` once `duration` has elapsed
    ///
    /// Must be called from within a tokio runtime for the revert to be
    /// scheduled. Without one the status stays until the next [`show`](Self::show).
    pub fn flash(&mut self, status: &str, duration: Duration, revert_to: String) {
        self.abort_pending();
        let scheduled = {
            let mut generation = lock(&self.generation);
            *generation += 1;
            self.screen.render(status);
            *generation
        };

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            log::warn!("No async runtime available, status {status:?} will not revert");
            return;
        };

        let screen = Arc::clone(&self.screen);
        let current = Arc::clone(&self.generation);
        self.pending = Some(handle.spawn(async move {
            tokio::time::sleep(duration).await;
            let generation = lock(&current);
            if *generation == scheduled {
                log::debug!("Status expired, reverting display");
                screen.render(&revert_to);
            }
        }));
    }

    /// Whether a status revert is still waiting to fire
    pub fn has_pending_revert(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn abort_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for DisplayAdapter {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

/// A panicking screen must not wedge the display for good
fn lock(generation: &Mutex<u64>) -> MutexGuard<'_, u64> {
    generation.lock().unwrap_or_else(PoisonError::into_inner)
}
