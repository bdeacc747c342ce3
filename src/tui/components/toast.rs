//! Toast notifications for form actions
//!
//! One line, anchored to the top-right corner just below the title bar, so it
//! never covers the Submit button or the control panel's inline error.

use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

const LIFETIME: Duration = Duration::from_millis(2500);

/// Outcome a toast reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

impl ToastKind {
    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Failure => "✗",
        }
    }
}

#[derive(Debug)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    expires_at: Instant,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::with_kind(ToastKind::Success, message)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::with_kind(ToastKind::Failure, message)
    }

    fn with_kind(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            expires_at: Instant::now() + LIFETIME,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Where the toast goes inside `area`; `None` if it does not fit
    fn placement(&self, area: Rect) -> Option<Rect> {
        // icon, space, message, plus one cell of padding and a border each side
        let wanted = self.message.width() as u16 + 6;
        let width = wanted.min(area.width.saturating_sub(2));
        if width < 8 || area.height < 6 {
            return None;
        }
        // Row 3 is the first row under the title bar
        Some(Rect::new(area.right() - width - 1, area.y + 3, width, 3))
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(toast_area) = self.placement(area) else {
            return;
        };
        let accent = match self.kind {
            ToastKind::Success => theme.success,
            ToastKind::Failure => theme.error,
        };

        let line = Line::from(vec![
            Span::styled(
                format!("{} ", self.kind.icon()),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.message.as_str(), Style::default().fg(theme.foreground)),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(theme.background));

        f.render_widget(Clear, toast_area);
        f.render_widget(Paragraph::new(line).block(block), toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_toast_is_not_expired() {
        let toast = Toast::success("Field added");
        assert!(!toast.is_expired());
    }

    #[test]
    fn past_deadline_is_expired() {
        let mut toast = Toast::failure("Invalid: a");
        toast.expires_at = Instant::now() - Duration::from_millis(1);
        assert!(toast.is_expired());
    }

    #[test]
    fn placement_hugs_the_right_edge_below_the_title() {
        let toast = Toast::success("Field added");
        let area = toast.placement(Rect::new(0, 0, 80, 24)).unwrap();

        assert_eq!(area.y, 3);
        assert_eq!(area.right(), 79);
        assert_eq!(area.width, "Field added".len() as u16 + 6);
    }

    #[test]
    fn long_message_is_clamped_and_tiny_area_skips() {
        let toast = Toast::failure("x".repeat(200));
        assert_eq!(toast.placement(Rect::new(0, 0, 40, 24)).unwrap().width, 38);
        assert!(toast.placement(Rect::new(0, 0, 40, 4)).is_none());
    }
}
