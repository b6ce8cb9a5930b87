use crate::config::Config;
use crate::notify::ToastColor;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub primary: Color,
    pub primary_highlighted: Color,
    pub muted: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub toast_neutral_bg: Color,
    pub toast_critical_bg: Color,
}

impl Theme {
    pub fn gqty() -> Self {
        Self {
            background: Color::Rgb(0x15, 0x12, 0x15),
            foreground: Color::White,
            primary: Color::Rgb(0xE7, 0x67, 0xC0),
            primary_highlighted: Color::Rgb(0xE3, 0x4A, 0xB4),
            muted: Color::Gray,
            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
            toast_neutral_bg: Color::Rgb(0x2A, 0x24, 0x2A),
            toast_critical_bg: Color::Red,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            primary: Color::Magenta,
            primary_highlighted: Color::LightMagenta,
            muted: Color::DarkGray,
            status_bar_bg: Color::LightBlue,
            status_bar_fg: Color::Black,
            toast_neutral_bg: Color::Gray,
            toast_critical_bg: Color::LightRed,
        }
    }

    /// Terminal defaults only, for limited-color terminals.
    pub fn mono() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Reset,
            primary: Color::Reset,
            primary_highlighted: Color::Reset,
            muted: Color::Reset,
            status_bar_bg: Color::Reset,
            status_bar_fg: Color::Reset,
            toast_neutral_bg: Color::Reset,
            toast_critical_bg: Color::Reset,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.theme.as_str() {
            "light" => Self::light(),
            "mono" => Self::mono(),
            _ => Self::gqty(),
        }
    }

    /// Foreground/background pair for a toast.
    pub fn toast_colors(&self, color: ToastColor) -> (Color, Color) {
        match color {
            ToastColor::Neutral => (self.foreground, self.toast_neutral_bg),
            ToastColor::Critical => (self.foreground, self.toast_critical_bg),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::gqty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_falls_back_to_gqty() {
        let config = Config {
            theme: "unknown".to_string(),
            ..Config::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.primary, Color::Rgb(0xE7, 0x67, 0xC0));
    }

    #[test]
    fn test_critical_toast_uses_critical_background() {
        let theme = Theme::light();
        assert_eq!(
            theme.toast_colors(ToastColor::Critical),
            (Color::Black, Color::LightRed)
        );
    }

    #[test]
    fn test_neutral_toast_uses_neutral_background() {
        let theme = Theme::gqty();
        assert_eq!(
            theme.toast_colors(ToastColor::Neutral),
            (Color::White, Color::Rgb(0x2A, 0x24, 0x2A))
        );
    }
}
