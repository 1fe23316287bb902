//! Confirmation banners with owned hide timers.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::state::{BannerKind, ViewState};

/// One confirmation banner and its pending hide.
///
/// Showing the banner again restarts the window. Dropping the banner
/// cancels the pending hide.
#[derive(Debug)]
pub struct ConfirmationBanner {
    kind: BannerKind,
    duration: Duration,
    pending: Option<JoinHandle<()>>,
}

impl ConfirmationBanner {
    /// Create a hidden banner.
    pub fn new(kind: BannerKind, duration: Duration) -> Self {
        Self {
            kind,
            duration,
            pending: None,
        }
    }

    /// Show the banner and schedule it to hide after the configured duration.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn show(&mut self, state: &Arc<watch::Sender<ViewState>>) {
        self.cancel();

        let kind = self.kind;
        state.send_modify(|s| s.set_message(kind, true));

        let state = Arc::clone(state);
        let duration = self.duration;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            state.send_modify(|s| s.set_message(kind, false));
        }));
    }

    /// Cancel the pending hide, if any. The visible flag is left as is.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }

    /// Whether a hide is still scheduled.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for ConfirmationBanner {
    fn drop(&mut self) {
        self.cancel();
    }
}
