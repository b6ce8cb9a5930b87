use super::copier::{ClipboardNotifier, CopyState};
use crate::content::HomepageContent;
use crate::notify::{Toast, ToastQueue};
use crate::ui::theme::Theme;
use std::sync::Arc;

pub struct AppState {
    pub content: HomepageContent,
    pub theme: Theme,
    pub toasts: Arc<ToastQueue>,
    pub copier: ClipboardNotifier,
    pub selected_feature: usize,
    pub should_quit: bool,
    pub show_help: bool,
}

impl AppState {
    pub fn new(
        content: HomepageContent,
        theme: Theme,
        toasts: Arc<ToastQueue>,
        copier: ClipboardNotifier,
    ) -> Self {
        Self {
            content,
            theme,
            toasts,
            copier,
            selected_feature: 0,
            should_quit: false,
            show_help: false,
        }
    }

    /// Copy the install command. The outcome arrives later as a toast.
    pub fn copy_install_command(&self) {
        // Completion is observed through the toast queue, not the handle.
        drop(self.copier.copy_and_notify(self.content.install_command.clone()));
    }

    pub fn is_copying(&self) -> bool {
        self.copier.state() == CopyState::Pending
    }

    pub fn visible_toasts(&self) -> Vec<Toast> {
        self.toasts.visible()
    }

    pub fn clear_expired_toasts(&self) {
        self.toasts.clear_expired();
    }

    pub fn next_feature(&mut self) {
        let count = self.content.features.len();
        if count > 0 {
            self.selected_feature = (self.selected_feature + 1) % count;
        }
    }

    pub fn prev_feature(&mut self) {
        let count = self.content.features.len();
        if count > 0 {
            self.selected_feature = (self.selected_feature + count - 1) % count;
        }
    }
}
