//! User-facing toasts and the developer-facing diagnostic channel.

pub mod console;
pub mod queue;
pub mod toast;

pub use console::ConsoleNotifier;
pub use queue::ToastQueue;
pub use toast::{Toast, ToastColor, ToastIcon};

/// Displays toasts to the end user. Timing and stacking belong to the implementor.
pub trait Notifier: Send + Sync {
    fn show(&self, toast: Toast);
}

/// Operator-facing error channel. Never shown to end users.
pub trait DiagnosticSink: Send + Sync {
    fn error(&self, message: &str);
}

/// Forwards diagnostics to `tracing` at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
