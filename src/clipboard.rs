use arboard::Clipboard;
use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a clipboard write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The platform rejected the write. `reason` is the platform's message, passed through as-is.
    #[error("failed to copy text: {reason}")]
    WriteFailed { reason: String },
}

impl ClipboardError {
    pub fn write_failed(reason: impl Into<String>) -> Self {
        Self::WriteFailed {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::WriteFailed { reason } => reason,
        }
    }
}

/// Something that can place text on a clipboard.
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write_text(&self, text: String) -> Result<(), ClipboardError>;
}

/// The host system clipboard, backed by arboard.
///
/// arboard is synchronous, so each write runs on tokio's blocking pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
        tokio::task::spawn_blocking(move || copy_to_clipboard(&text))
            .await
            .map_err(|e| ClipboardError::write_failed(format!("clipboard task aborted: {e}")))?
    }
}

/// Copy text to the system clipboard.
///
/// On Linux, clipboard contents persist only while the process that set them is running.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| ClipboardError::write_failed(format!("clipboard unavailable: {e}")))?;
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::write_failed(e.to_string()))?;
    Ok(())
}
