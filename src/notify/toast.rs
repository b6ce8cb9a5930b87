use std::fmt;

pub const COPY_FAILED_TEXT: &str = "Failed to copy to clipboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastColor {
    #[default]
    Neutral,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastIcon {
    Check,
    Cross,
}

impl ToastIcon {
    pub fn symbol(&self) -> &'static str {
        match self {
            ToastIcon::Check => "✓",
            ToastIcon::Cross => "✗",
        }
    }
}

/// A short, auto-dismissing message for the end user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    pub color: ToastColor,
    pub icon: Option<ToastIcon>,
}

impl Toast {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: ToastColor::default(),
            icon: None,
        }
    }

    pub fn with_color(mut self, color: ToastColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_icon(mut self, icon: ToastIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Confirmation shown after a successful copy.
    pub fn copied(text: impl Into<String>) -> Self {
        Self::new(text)
            .with_color(ToastColor::Neutral)
            .with_icon(ToastIcon::Check)
    }

    pub fn copy_failed() -> Self {
        Self::new(COPY_FAILED_TEXT)
            .with_color(ToastColor::Critical)
            .with_icon(ToastIcon::Cross)
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.icon {
            Some(icon) => write!(f, "{} {}", icon.symbol(), self.text),
            None => write!(f, "{}", self.text),
        }
    }
}
