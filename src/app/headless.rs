use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::error;

use super::copier::{ClipboardNotifier, CopyFeedback};
use crate::clipboard::ClipboardWriter;
use crate::notify::{DiagnosticSink, Notifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl From<CopyOutcome> for ExitCode {
    fn from(outcome: CopyOutcome) -> Self {
        match outcome {
            CopyOutcome::Copied => ExitCode::SUCCESS,
            CopyOutcome::Failed => ExitCode::FAILURE,
        }
    }
}

/// Forwards diagnostics to `inner` and remembers that something failed.
pub struct FailureFlag {
    inner: Arc<dyn DiagnosticSink>,
    failed: AtomicBool,
}

impl FailureFlag {
    pub fn new(inner: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            inner,
            failed: AtomicBool::new(false),
        }
    }

    pub fn failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }
}

impl DiagnosticSink for FailureFlag {
    fn error(&self, message: &str) {
        self.failed.store(true, Ordering::SeqCst);
        self.inner.error(message);
    }
}

/// Copy `text` once and wait for the outcome.
///
/// The toast, if any, goes to `notifier`; the failure detail goes to `diagnostics`.
pub async fn copy_headless<N: Notifier + 'static>(
    clipboard: Arc<dyn ClipboardWriter>,
    notifier: &Arc<N>,
    diagnostics: Arc<dyn DiagnosticSink>,
    feedback: CopyFeedback,
    text: String,
) -> CopyOutcome {
    let failures = Arc::new(FailureFlag::new(diagnostics));
    let copier = ClipboardNotifier::new(Handle::current(), clipboard, notifier, failures.clone())
        .with_feedback(feedback);

    if let Err(e) = copier.copy_and_notify(text).await {
        error!("copy task did not complete: {e}");
        return CopyOutcome::Failed;
    }

    if failures.failed() {
        CopyOutcome::Failed
    } else {
        CopyOutcome::Copied
    }
}
