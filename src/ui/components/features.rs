use crate::app::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let theme = &state.theme;
    let features = state.content.features;
    let Some(selected) = features.get(state.selected_feature) else {
        return;
    };

    let mut titles = Vec::with_capacity(features.len() * 2);
    for (idx, feature) in features.iter().enumerate() {
        if idx > 0 {
            titles.push(Span::styled(" · ", Style::default().fg(theme.muted)));
        }
        let style = if idx == state.selected_feature {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        titles.push(Span::styled(feature.title, style));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .title(Line::from(titles))
        .style(Style::default().bg(theme.background));

    let paragraph = Paragraph::new(selected.content)
        .block(block)
        .style(Style::default().fg(theme.foreground))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
