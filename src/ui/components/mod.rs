pub mod features;
pub mod hero;
pub mod status_bar;
pub mod toast;

use crate::app::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Hero
            Constraint::Length(4), // Feature blurbs
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    hero::render(f, state, chunks[0]);
    features::render(f, state, chunks[1]);
    status_bar::render(f, state, chunks[2]);

    if state.show_help {
        render_help_overlay(f, state);
    }

    // Toasts sit above everything, help included
    toast::render(f, state, f.area());
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let help_text = r#"
    GQty Help

      c / y / Enter         Copy install command
      ↑/↓ or j/k, Tab       Switch feature
      ?                     Toggle help
      q / Esc               Quit
    "#;

    let area = centered_rect(60, 50, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(state.theme.foreground))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
