//! Creation cooldown
//!
//! `CreationGate` is the two-state machine in front of note creation:
//! `CanCreate` until a note is added, then `CreationCooldown` until a
//! deferred Tokio task re-opens it. The pending task cannot be cancelled
//! or shortened while the gate lives. Dropping the gate aborts it, so a
//! store torn down during a cooldown leaves nothing behind.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

/// Length of the cooldown that follows every successful note creation
pub const CREATION_COOLDOWN: Duration = Duration::from_secs(3);

/// Coarse creation state exposed to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationState {
    CanCreate,
    CreationCooldown,
}

pub struct CreationGate {
    open: Arc<AtomicBool>,
    cooldown: Duration,
    runtime: Handle,
    pending: Option<AbortHandle>,
}

impl CreationGate {
    /// Create an open gate bound to the current Tokio runtime
    ///
    /// # Errors
    /// Fails when called outside a Tokio runtime, since the re-open task
    /// has nowhere to run.
    pub fn new(cooldown: Duration) -> Result<Self> {
        let runtime = Handle::try_current()
            .context("creation cooldown needs a running Tokio runtime")?;
        Ok(Self {
            open: Arc::new(AtomicBool::new(true)),
            cooldown,
            runtime,
            pending: None,
        })
    }

    pub fn state(&self) -> CreationState {
        if self.open.load(Ordering::SeqCst) {
            CreationState::CanCreate
        } else {
            CreationState::CreationCooldown
        }
    }

    pub fn is_open(&self) -> bool {
        self.state() == CreationState::CanCreate
    }

    /// Pass through the gate if it is open and start the cooldown
    ///
    /// # Returns
    /// `true` if the caller may create a note, `false` during a cooldown
    pub fn try_enter(&mut self) -> bool {
        if self
            .open
            .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return false;
        }

        let open = Arc::clone(&self.open);
        let cooldown = self.cooldown;
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(cooldown).await;
            open.store(true, Ordering::SeqCst);
            log::debug!("Creation cooldown elapsed");
        });
        self.pending = Some(task.abort_handle());
        true
    }
}

impl Drop for CreationGate {
    fn drop(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}
