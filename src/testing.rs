//! Fakes for the clipboard and notification seams.

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::clipboard::{ClipboardError, ClipboardWriter};
use crate::notify::{DiagnosticSink, Notifier, Toast};

enum Behavior {
    Succeed,
    Fail(String),
    WaitForRelease,
}

pub struct FakeClipboard {
    behavior: Behavior,
    gate: Notify,
    writes: Mutex<Vec<String>>,
}

impl FakeClipboard {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            gate: Notify::new(),
            writes: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::with_behavior(Behavior::Succeed)
    }

    pub fn failing(reason: &str) -> Self {
        Self::with_behavior(Behavior::Fail(reason.to_string()))
    }

    /// Each write succeeds only after a matching `release`.
    pub fn gated() -> Self {
        Self::with_behavior(Behavior::WaitForRelease)
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClipboardWriter for FakeClipboard {
    async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
        match &self.behavior {
            Behavior::Succeed => {}
            Behavior::Fail(reason) => return Err(ClipboardError::write_failed(reason.clone())),
            Behavior::WaitForRelease => self.gate.notified().await,
        }
        self.writes.lock().unwrap().push(text);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}

#[derive(Default)]
pub struct RecordingDiagnostics {
    messages: Mutex<Vec<String>>,
}

impl RecordingDiagnostics {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
