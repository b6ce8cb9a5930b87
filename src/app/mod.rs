pub mod copier;
pub mod event;
pub mod headless;
pub mod state;

pub use copier::{ClipboardNotifier, CopyFeedback, CopyState};
pub use headless::{copy_headless, CopyOutcome, FailureFlag};
pub use state::AppState;
