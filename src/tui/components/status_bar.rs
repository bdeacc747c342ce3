// Status bar component
//
// Uptime, form size, registered validators and the keybinds that apply to
// the focused element.

use crate::tui::app::{App, Focus};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let delete_hint = if matches!(app.focus, Focus::Field(_)) {
        "  Del:delete"
    } else {
        ""
    };

    let status_text = format!(
        " {} │ {} fields │ {} validators │ {}{}  Tab:next  F2:submit  ^Q:quit",
        app.uptime(),
        app.form.fields().len(),
        app.form.registered_count(),
        app.focus_hint(),
        delete_hint,
    );

    let status = Paragraph::new(status_text).style(Style::default().fg(app.theme.status_bar));
    f.render_widget(status, area);
}
