use crate::app::AppState;
use crate::utils::unicode::display_width;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let copy_indicator = if state.is_copying() { " [copying]" } else { "" };

    let left_content = format!(
        " GQTY | {}{}",
        state.content.install_command, copy_indicator
    );
    let key_hint = "c copy  ? help  q quit";
    let version_text = format!("v{VERSION}");

    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let style = if state.is_copying() {
        base_style.add_modifier(Modifier::BOLD)
    } else {
        base_style
    };

    let status_line = compose_status_line(&left_content, key_hint, &version_text, area.width);

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));

    f.render_widget(status, area);
}

/// Left text, key hint, then the version pushed to the right edge.
fn compose_status_line(left: &str, hint: &str, version: &str, width: u16) -> String {
    let used = display_width(left) + display_width(hint) + display_width(version) + 3;
    let padding = (width as usize).saturating_sub(used);

    format!("{left} {hint} {:>padding$} {version}", "")
}
