//! Logs panel component
//!
//! Shows the newest system log entries that fit, color-coded by level.

use crate::logging::LogLevel;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let visible = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.recent(visible);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let color = match entry.level {
                LogLevel::Error => theme.error,
                LogLevel::Warn => theme.highlight,
                LogLevel::Info => theme.success,
                LogLevel::Debug | LogLevel::Trace => theme.muted,
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(format!("{:<5} ", entry.level.as_str()), Style::default().fg(color)),
                Span::styled(entry.message.clone(), Style::default().fg(theme.foreground)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" System Logs ({}) ", app.log_buffer.len()))
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(list, area);
}
