//! Selector panel: loading, error, or the grouped model list.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::core::catalog::{model_display_name, provider_display_name};

use super::super::app::{App, CatalogPhase};
use super::super::constants::{ACCENT, ACCENT_SECONDARY, SPINNER, SPINNER_FRAME_MS};

pub(crate) fn draw_selector(f: &mut Frame, app_state: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" AI Model ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    match app_state.phase {
        CatalogPhase::Pending => draw_loading(f, app_state, inner),
        CatalogPhase::Failed(_) => {
            // The carried message is logged when the phase is set; the UI
            // shows a fixed indicator only.
            let para = Paragraph::new(Line::from(Span::styled(
                "Failed to load models",
                Style::default().fg(Color::Red),
            )));
            f.render_widget(para, inner);
        }
        CatalogPhase::Ready(_) => draw_catalog_list(f, app_state, inner),
    }
}

fn draw_loading(f: &mut Frame, app_state: &App, area: Rect) {
    let frame_index = app_state
        .fetch_started_at
        .map(|t| (t.elapsed().as_millis() / SPINNER_FRAME_MS) as usize % SPINNER.len())
        .unwrap_or(0);
    let para = Paragraph::new(Line::from(vec![
        Span::styled(SPINNER[frame_index], Style::default().fg(ACCENT)),
        Span::styled(
            " Loading models...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
    ]));
    f.render_widget(para, area);
}

/// One renderable list row, flattened out of the grouped catalog.
struct Row {
    label: String,
    is_header: bool,
    is_selected: bool,
    is_cursor: bool,
}

fn draw_catalog_list(f: &mut Frame, app_state: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);
    let filter_area = chunks[0];
    let list_area = chunks[1];

    draw_filter_box(f, app_state, filter_area);

    app_state.clamp_cursor();
    let dimmed = app_state.disabled;

    // Flatten to owned rows first; list_state is mutated below.
    let mut rows: Vec<Row> = Vec::new();
    let mut cursor_row: Option<usize> = None;
    {
        let groups = app_state.visible_groups();
        let mut model_index = 0usize;
        for (provider, models) in &groups {
            rows.push(Row {
                label: provider_display_name(provider).to_string(),
                is_header: true,
                is_selected: false,
                is_cursor: false,
            });
            for model in models {
                let is_cursor = !dimmed && model_index == app_state.cursor;
                if is_cursor {
                    cursor_row = Some(rows.len());
                }
                rows.push(Row {
                    label: model_display_name(model),
                    is_header: false,
                    is_selected: model.id == app_state.selected_model,
                    is_cursor,
                });
                model_index += 1;
            }
        }
    }

    if rows.is_empty() {
        let msg = if app_state.filter.is_empty() {
            "No models"
        } else {
            "No models match filter"
        };
        let para = Paragraph::new(Line::from(Span::styled(
            msg,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
        f.render_widget(para, list_area);
        return;
    }

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let mut style = if row.is_header {
                Style::default()
                    .fg(ACCENT_SECONDARY)
                    .add_modifier(Modifier::BOLD)
            } else if row.is_cursor {
                Style::default().fg(Color::Black).bg(ACCENT)
            } else if row.is_selected {
                Style::default().fg(ACCENT)
            } else {
                Style::default()
            };
            if dimmed {
                style = style.add_modifier(Modifier::DIM);
            }
            let text = if row.is_header {
                format!(" {}", row.label)
            } else if row.is_selected {
                format!("   ● {}", row.label)
            } else {
                format!("     {}", row.label)
            };
            ListItem::new(text).style(style)
        })
        .collect();

    app_state.list_state.select(cursor_row);
    let list = List::new(items);
    f.render_stateful_widget(list, list_area, &mut app_state.list_state);
}

fn draw_filter_box(f: &mut Frame, app_state: &App, area: Rect) {
    let filter_content = if app_state.filter.is_empty() {
        Span::styled("Filter... ", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(app_state.filter.as_str())
    };
    let filter_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let filter_inner = filter_block.inner(area);
    let filter_para = Paragraph::new(Line::from(filter_content))
        .block(filter_block)
        .style(Style::default().fg(Color::White));
    f.render_widget(filter_para, area);

    if !app_state.disabled {
        let cx = filter_inner.x
            + app_state
                .filter
                .chars()
                .count()
                .min(filter_inner.width as usize) as u16;
        let cy = area.y + 1;
        f.set_cursor_position(ratatui::layout::Position::new(cx, cy));
    }
}
