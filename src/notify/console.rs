use std::io::{self, Write};
use std::sync::Mutex;

use super::{Notifier, Toast};

/// Prints each toast as one line, for headless use.
pub struct ConsoleNotifier<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleNotifier<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> Notifier for ConsoleNotifier<W> {
    fn show(&self, toast: Toast) {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = writeln!(out, "{toast}").and_then(|_| out.flush()) {
            tracing::warn!("failed to print toast: {e}");
        }
    }
}
