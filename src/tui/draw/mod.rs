//! TUI rendering: header, selector panel, hint bar.

mod selector;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::app;

use super::app::App;
use super::constants::ACCENT;

pub(super) fn draw(f: &mut Frame, app_state: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, app_state, chunks[0]);
    selector::draw_selector(f, app_state, chunks[1]);
    draw_hint_bar(f, app_state, chunks[2]);
}

fn draw_header(f: &mut Frame, app_state: &App, area: Rect) {
    let selection = if app_state.selected_model.is_empty() {
        Span::styled("(none)", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            app_state.selected_model.as_str(),
            Style::default().fg(ACCENT),
        )
    };
    let mut spans = vec![
        Span::styled("◆ ", Style::default().fg(ACCENT)),
        Span::raw(app::NAME),
        Span::raw("  "),
        Span::raw("Model: "),
        selection,
    ];
    if app_state.disabled {
        spans.push(Span::styled(
            "  [read-only]",
            Style::default().fg(Color::DarkGray),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_hint_bar(f: &mut Frame, app_state: &App, area: Rect) {
    let mut spans = Vec::new();
    if !app_state.disabled {
        spans.extend([
            Span::styled("↑↓ ", Style::default().fg(Color::DarkGray)),
            Span::raw("select  "),
            Span::styled("Enter ", Style::default().fg(Color::DarkGray)),
            Span::raw("confirm  "),
            Span::styled("type ", Style::default().fg(Color::DarkGray)),
            Span::raw("filter  "),
        ]);
    }
    spans.extend([
        Span::styled("Ctrl+R ", Style::default().fg(Color::DarkGray)),
        Span::raw("refresh  "),
        Span::styled("Esc ", Style::default().fg(Color::DarkGray)),
        Span::raw("quit"),
    ]);
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
