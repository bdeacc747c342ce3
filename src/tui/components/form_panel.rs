//! Form panel component
//!
//! One wrapper per configured field: label, control, and the error line
//! when the field has been touched and is invalid. The control shows the
//! controller's local value; the error comes from the form's state map.

use crate::tui::app::{App, Focus};
use crate::tui::widgets::FieldInput;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows per field: label, control, error
const FIELD_ROWS: usize = 3;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused_style = Style::default()
        .fg(theme.selection_fg)
        .bg(theme.selection)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    let mut focused_line = 0;

    for (idx, controller) in app.field_list.controllers().iter().enumerate() {
        let Some(def) = app.form.field(controller.name()) else {
            continue;
        };
        let focused = app.focus == Focus::Field(idx);
        if focused {
            focused_line = lines.len();
        }

        let marker = if def.validator.is_some() { " *" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(
                def.display_label().to_string(),
                Style::default().fg(theme.label).add_modifier(Modifier::BOLD),
            ),
            Span::styled(marker, Style::default().fg(theme.muted)),
        ]));

        let control = FieldInput::for_definition(def, controller).display();
        let control_style = if focused {
            focused_style
        } else {
            Style::default().fg(theme.foreground)
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(control, control_style),
            Span::styled(if focused { "  [Del]" } else { "" }, Style::default().fg(theme.muted)),
        ]));

        let error = app
            .form
            .field_state(controller.name())
            .filter(|state| state.shows_error())
            .and_then(|state| state.error_message.clone());
        lines.push(match error {
            Some(message) => Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(theme.error),
            )),
            None => Line::default(),
        });
    }

    if app.focus == Focus::Submit {
        focused_line = lines.len();
    }
    let submit_style = if app.focus == Focus::Submit {
        focused_style
    } else {
        Style::default().fg(theme.success)
    };
    lines.push(Line::from(Span::styled("[ Submit ]", submit_style)));

    // Keep the focused field in view
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = (focused_line + FIELD_ROWS).saturating_sub(inner_height);

    let border_color = theme.panel_border(matches!(app.focus, Focus::Field(_) | Focus::Submit));
    let panel = Paragraph::new(lines)
        .scroll((scroll as u16, 0))
        .block(
            Block::default()
                .title(format!(" {} ", app.title))
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(border_color)),
        );

    f.render_widget(panel, area);
}
