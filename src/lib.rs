//! Terminal rendition of the GQty homepage hero and its copy-to-clipboard action.
//!
//! The core piece is [`app::ClipboardNotifier`]: it writes text to a
//! [`clipboard::ClipboardWriter`] in the background, then reports success to a
//! [`notify::Notifier`] and failure to a [`notify::DiagnosticSink`].

pub mod app;
pub mod clipboard;
pub mod config;
pub mod content;
pub mod notify;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod testing;
