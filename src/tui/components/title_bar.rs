// Title bar component
//
// Left: app name and form title. Right: field count and the key for help.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let count = app.form.fields().len();
    let noun = if count == 1 { "field" } else { "fields" };

    let heading = Line::from(vec![
        Span::styled(
            " formdeck ",
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            app.title.as_str(),
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .title_top(
            Line::from(vec![
                Span::styled(format!(" {} {} ", count, noun), Style::default().fg(theme.muted)),
                Span::styled("· F1 help ", Style::default().fg(theme.muted)),
            ])
            .right_aligned(),
        );

    f.render_widget(Paragraph::new(heading).block(block), area);
}
