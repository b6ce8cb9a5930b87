use crate::app::AppState;
use crate::utils::unicode::{display_width, truncate_to_width};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Clear, Paragraph},
};

const MARGIN: u16 = 1;

/// Stack visible toasts in the top-right corner, newest at the bottom.
pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let toasts = state.visible_toasts();
    let max_width = area.width.saturating_sub(MARGIN * 2) as usize;
    if max_width < 3 {
        return;
    }

    for (row, toast) in toasts.iter().enumerate() {
        let y = area.y + MARGIN + row as u16;
        if y >= area.y + area.height {
            break;
        }

        // One column of padding either side
        let text = format!(" {} ", truncate_to_width(&toast.to_string(), max_width - 2));
        let width = display_width(&text) as u16;
        let rect = Rect {
            x: area.x + area.width - MARGIN - width,
            y,
            width,
            height: 1,
        };

        let (fg, bg) = state.theme.toast_colors(toast.color);
        f.render_widget(Clear, rect);
        f.render_widget(Paragraph::new(text).style(Style::default().fg(fg).bg(bg)), rect);
    }
}
