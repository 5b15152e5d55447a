use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::host::NoticeLevel;

use super::state::NotificationState;

/// Render the current notification as a one-line bar
pub fn render_notification(state: &NotificationState, frame: &mut Frame, area: Rect) {
    let Some(notice) = state.current() else {
        return;
    };

    let (label, color) = match notice.level {
        NoticeLevel::Info => ("", Color::Green),
        NoticeLevel::Warning => ("warning: ", Color::Yellow),
        NoticeLevel::Error => ("error: ", Color::Red),
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            format!("{label}{}", notice.message),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(action) = &notice.action {
        spans.push(Span::styled(
            format!("  ({action})"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
