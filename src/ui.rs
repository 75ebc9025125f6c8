//! The UI renders the viewer state: the document on the left, its panel on the right.
//!
//! Panel entries are indented two columns per tier, matching the tier-times-unit indent the
//! HTML panel uses.

use crate::app_state::{AppState, FileMode};
use crate::render::NavRenderer;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Columns of indent per panel tier.
const TIER_WIDTH: usize = 2;

/// Renders the document pane, the navigation panel and the help bar.
pub fn draw(f: &mut Frame, app: &AppState, renderer: &NavRenderer) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());
    // No headings, no panel.
    let panel_width = if app.entries.is_empty() { 0 } else { 40 };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(panel_width)])
        .split(rows[0]);

    let title = match app.file_mode {
        FileMode::Single => app.document_name().to_string(),
        FileMode::Multi => format!(
            "{} ({}/{})",
            app.document_name(),
            app.current_file_index + 1,
            app.files.len()
        ),
    };
    let document = Paragraph::new(app.document_text())
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((app.scroll, 0));
    f.render_widget(document, columns[0]);

    let items: Vec<ListItem> = app
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let indent = " ".repeat(usize::from(entry.tier) * TIER_WIDTH);
            let style = if i == app.current_entry_index {
                Style::default().add_modifier(Modifier::REVERSED)
            } else if entry.tier == 0 {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(vec![
                Span::raw(indent),
                Span::raw(entry.title.clone()),
            ]))
            .style(style)
        })
        .collect();

    if !items.is_empty() {
        let panel = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(renderer.panel_title().to_string()),
        );
        f.render_widget(panel, columns[1]);
    }

    let help = if let Some(ref msg) = app.message {
        msg.clone()
    } else if app.file_mode == FileMode::Multi {
        "↑/↓: Select | Enter: Jump | PgUp/PgDn: Scroll | Tab/Shift+Tab: Document | q: Quit"
            .to_string()
    } else {
        "↑/↓: Select | Enter: Jump | PgUp/PgDn: Scroll | q: Quit".to_string()
    };
    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, rows[1]);
}
