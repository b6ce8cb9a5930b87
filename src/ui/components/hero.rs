use crate::app::AppState;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let theme = &state.theme;
    let content = &state.content;

    let command_style = if state.is_copying() {
        Style::default().fg(theme.primary_highlighted)
    } else {
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::UNDERLINED)
    };

    let lines = vec![
        Line::from(Span::styled(
            content.headline,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(content.tagline, Style::default().fg(theme.muted))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Get Started ", Style::default().fg(theme.foreground)),
            Span::styled(
                format!("→ {}", content.get_started_href),
                Style::default().fg(theme.muted),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("⧉ ", Style::default().fg(theme.primary)),
            Span::styled(content.install_command.as_str(), command_style),
        ]),
    ];

    let top_padding = area.height.saturating_sub(lines.len() as u16) / 2;
    let inner = Rect {
        y: area.y + top_padding,
        height: area.height - top_padding,
        ..area
    };

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme.background));

    f.render_widget(hero, inner);
}
