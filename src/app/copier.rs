use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::clipboard::{ClipboardError, ClipboardWriter};
use crate::config::ToastConfig;
use crate::notify::{DiagnosticSink, Notifier, Toast};

pub const NOTHING_TO_COPY: &str = "nothing to copy";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    /// At least one clipboard write has not completed yet.
    Pending,
}

/// What to tell the user once a copy completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
    pub success_text: String,
    pub notify_on_failure: bool,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::from(&ToastConfig::default())
    }
}

impl From<&ToastConfig> for CopyFeedback {
    fn from(config: &ToastConfig) -> Self {
        Self {
            success_text: config.text.clone(),
            notify_on_failure: config.notify_on_failure,
        }
    }
}

/// Copies text to the clipboard in the background and reports the outcome.
///
/// Success shows a confirmation toast. Failure goes to the diagnostic sink and,
/// unless `notify_on_failure` is set, nowhere else. The notifier is held weakly:
/// if the UI that owns it is gone when a write completes, the outcome is dropped.
pub struct ClipboardNotifier {
    runtime: Handle,
    clipboard: Arc<dyn ClipboardWriter>,
    notifier: Weak<dyn Notifier>,
    diagnostics: Arc<dyn DiagnosticSink>,
    feedback: CopyFeedback,
    in_flight: Arc<AtomicUsize>,
}

impl ClipboardNotifier {
    pub fn new<N: Notifier + 'static>(
        runtime: Handle,
        clipboard: Arc<dyn ClipboardWriter>,
        notifier: &Arc<N>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        let notifier: Weak<N> = Arc::downgrade(notifier);
        Self {
            runtime,
            clipboard,
            notifier: notifier as Weak<dyn Notifier>,
            diagnostics,
            feedback: CopyFeedback::default(),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_feedback(mut self, feedback: CopyFeedback) -> Self {
        self.feedback = feedback;
        self
    }

    pub fn state(&self) -> CopyState {
        if self.in_flight.load(Ordering::SeqCst) == 0 {
            CopyState::Idle
        } else {
            CopyState::Pending
        }
    }

    /// Start copying `text`. Returns immediately.
    ///
    /// Every call is an independent attempt: no retries, no coalescing. The
    /// handle only lets callers wait for the outcome; dropping it does not
    /// cancel the write.
    pub fn copy_and_notify(&self, text: impl Into<String>) -> JoinHandle<()> {
        let text = text.into();
        let clipboard = Arc::clone(&self.clipboard);
        let notifier = self.notifier.clone();
        let diagnostics = Arc::clone(&self.diagnostics);
        let feedback = self.feedback.clone();
        let pending = PendingGuard::enter(&self.in_flight);

        self.runtime.spawn(async move {
            let _pending = pending;
            let result = if text.is_empty() {
                Err(ClipboardError::write_failed(NOTHING_TO_COPY))
            } else {
                clipboard.write_text(text).await
            };
            report(result, &notifier, diagnostics.as_ref(), &feedback);
        })
    }
}

fn report(
    result: Result<(), ClipboardError>,
    notifier: &Weak<dyn Notifier>,
    diagnostics: &dyn DiagnosticSink,
    feedback: &CopyFeedback,
) {
    let toast = match result {
        Ok(()) => {
            debug!("copied to clipboard");
            Toast::copied(feedback.success_text.as_str())
        }
        Err(err) => {
            diagnostics.error(&err.to_string());
            if !feedback.notify_on_failure {
                return;
            }
            Toast::copy_failed()
        }
    };

    match notifier.upgrade() {
        Some(notifier) => notifier.show(toast),
        None => debug!("notifier dropped before copy completed"),
    }
}

/// Counts a write as in flight until dropped, including when the task panics.
struct PendingGuard(Arc<AtomicUsize>);

impl PendingGuard {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
