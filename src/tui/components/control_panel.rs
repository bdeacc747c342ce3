//! Control panel component
//!
//! Name and type inputs, the inline error from the last add attempt, the
//! Add button, and a live JSON dump of the form's state map.

use crate::form::{ControlPanel, WidgetKind};
use crate::tui::app::{App, Focus};
use crate::tui::widgets::{select_choices, FieldInput};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(3)])
        .split(area);

    render_inputs(f, chunks[0], app);
    render_state_dump(f, chunks[1], app);
}

fn render_inputs(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let panel = &app.control_panel;
    let focused_style = Style::default()
        .fg(theme.selection_fg)
        .bg(theme.selection)
        .add_modifier(Modifier::BOLD);
    let style_for = |focus: Focus, normal: Style| {
        if app.focus == focus {
            focused_style
        } else {
            normal
        }
    };
    let plain = Style::default().fg(theme.foreground);

    let name = FieldInput::new(WidgetKind::Text, Vec::new(), panel.name_input()).display();
    let kind = FieldInput::new(
        WidgetKind::Select,
        select_choices(ControlPanel::type_options()),
        panel.type_input(),
    )
    .display();

    let error_line = match panel.error() {
        Some(e) => Line::from(Span::styled(e.to_string(), Style::default().fg(theme.error))),
        None => Line::default(),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Name  ", Style::default().fg(theme.label)),
            Span::styled(name, style_for(Focus::PanelName, plain)),
        ]),
        Line::from(vec![
            Span::styled("Type  ", Style::default().fg(theme.label)),
            Span::styled(kind, style_for(Focus::PanelType, plain)),
        ]),
        error_line,
        Line::from(Span::styled(
            "[ Add field ]",
            style_for(Focus::PanelAdd, Style::default().fg(theme.success)),
        )),
    ];

    let focused = matches!(app.focus, Focus::PanelName | Focus::PanelType | Focus::PanelAdd);
    let block = Block::default()
        .title(" Add Field ")
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.panel_border(focused)));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_state_dump(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let dump = ControlPanel::state_dump(&app.form);

    let block = Block::default()
        .title(" Form State ")
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border));

    let paragraph = Paragraph::new(dump)
        .style(Style::default().fg(theme.muted))
        .wrap(Wrap { trim: false })
        .block(block);

    f.render_widget(paragraph, area);
}
