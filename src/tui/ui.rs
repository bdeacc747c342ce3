// UI rendering
//
// Layout, top to bottom: title bar, body (form | control panel), system
// logs, status bar. Modals and the toast draw over everything.

use super::app::App;
use super::components::{control_panel, form_panel, logs_panel, status_bar, title_bar};
use super::modal::Modal;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(
        Block::default().style(
            Style::default()
                .bg(app.theme.background)
                .fg(app.theme.foreground),
        ),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    title_bar::render(f, rows[0], app);
    form_panel::render(f, body[0], app);
    control_panel::render(f, body[1], app);
    logs_panel::render(f, rows[2], app);
    status_bar::render(f, rows[3], app);

    if let Some(modal) = &app.modal {
        render_modal(f, area, app, modal);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }
}

fn render_modal(f: &mut Frame, area: Rect, app: &App, modal: &Modal) {
    let theme = &app.theme;
    let lines: Vec<Line> = match modal {
        Modal::Help => HELP_LINES
            .iter()
            .map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(format!("{:<14}", keys), Style::default().fg(theme.highlight)),
                    Span::raw(*action),
                ])
            })
            .collect(),
        Modal::Submitted(summary) => std::iter::once(Line::from(Span::styled(
            "Form successfully submitted!",
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )))
        .chain(std::iter::once(Line::default()))
        .chain(summary.iter().map(|line| Line::raw(line.clone())))
        .collect(),
    };

    let height = (lines.len() as u16 + 2).min(area.height);
    let modal_area = centered_rect(60, height, area);

    let block = Block::default()
        .title(modal.title())
        .title_bottom(Line::from(" Esc:close ").right_aligned())
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.highlight))
        .style(Style::default().bg(theme.background).fg(theme.foreground));

    f.render_widget(Clear, modal_area);
    f.render_widget(Paragraph::new(lines).block(block), modal_area);
}

const HELP_LINES: &[(&str, &str)] = &[
    ("Tab / ↓", "Next field"),
    ("Shift-Tab / ↑", "Previous field"),
    ("Enter", "Submit / add / next"),
    ("←→ Space", "Choose option, toggle checkbox"),
    ("Del", "Delete focused field"),
    ("F2", "Submit form"),
    ("F1", "This help"),
    ("Ctrl-Q", "Quit"),
];

/// Rect of `percent_x` width and fixed height, centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::form::default_fields;
    use crate::logging::LogBuffer;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal.draw(|f| draw(f, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_default_form() {
        let mut app = App::new(&Config::default(), default_fields(), LogBuffer::new());
        app.form.settle();

        let screen = render(&app);
        assert!(screen.contains("Text 1"));
        assert!(screen.contains("[ Submit ]"));
        assert!(screen.contains("[ ] Checkbox"));
        assert!(screen.contains("Add Field"));
        assert!(screen.contains(" 4 fields "));
        assert!(screen.contains("F1 help"));
        // Untouched fields show no error line (the state dump still lists it)
        assert!(!screen.contains("  Required"));
    }

    #[test]
    fn renders_error_after_blur() {
        let mut app = App::new(&Config::default(), default_fields(), LogBuffer::new());
        app.focus_next();
        app.form.settle();

        assert!(render(&app).contains("  Required"));
    }

    #[test]
    fn toast_renders_under_title_bar() {
        let mut app = App::new(&Config::default(), default_fields(), LogBuffer::new());
        app.submit();
        app.form.settle();

        let screen = render(&app);
        assert!(screen.contains("✗ Invalid: "));
    }

    #[test]
    fn renders_submit_summary_modal() {
        let mut app = App::new(&Config::default(), default_fields(), LogBuffer::new());
        app.modal = Some(Modal::submitted(vec!["Text 1: hi".to_string()]));

        let screen = render(&app);
        assert!(screen.contains("Form successfully submitted!"));
        assert!(screen.contains("Text 1: hi"));
    }
}
