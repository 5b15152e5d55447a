//! Two-pane rendering of a diff view

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::compute::{DiffRow, RowKind};
use super::presenter::DiffView;

/// Which pane currently has focus (affects border highlighting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneSide {
    Original,
    Proposed,
}

fn truncate_to_width(text: &str, max: usize) -> String {
    if UnicodeWidthStr::width(text) <= max {
        return text.to_string();
    }
    let budget = max.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out.push_str("...");
    out
}

fn side_line(
    cell: Option<&(usize, String)>,
    kind: RowKind,
    is_left: bool,
    content_width: usize,
) -> Line<'static> {
    let Some((number, text)) = cell else {
        return Line::from(Span::styled(
            "   ~",
            Style::default().fg(Color::DarkGray),
        ));
    };

    let style = match kind {
        RowKind::Equal => Style::default(),
        RowKind::Delete => Style::default().fg(Color::Red),
        RowKind::Insert => Style::default().fg(Color::Green),
        RowKind::Replace => {
            if is_left {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            }
        }
    };

    let gutter = Span::styled(
        format!("{number:>4} "),
        Style::default().fg(Color::DarkGray),
    );
    let body = Span::styled(
        truncate_to_width(text, content_width.saturating_sub(5)),
        style,
    );
    Line::from(vec![gutter, body])
}

fn pane_lines(rows: &[DiffRow], is_left: bool, content_width: usize) -> Vec<Line<'static>> {
    rows.iter()
        .map(|row| {
            let cell = if is_left {
                row.left.as_ref()
            } else {
                row.right.as_ref()
            };
            side_line(cell, row.kind, is_left, content_width)
        })
        .collect()
}

/// Render the side-by-side comparison into the given area
pub fn render_diff_view(
    view: &DiffView,
    frame: &mut Frame,
    area: Rect,
    scroll: u16,
    focused: PaneSide,
) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                view.title.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]))
        .border_style(Style::default().fg(Color::Green));

    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let sides = [
        (PaneSide::Original, " Original ", &view.original_uri, true),
        (PaneSide::Proposed, " Proposed ", &view.proposed_uri, false),
    ];

    for (index, (side, label, uri, is_left)) in sides.into_iter().enumerate() {
        let pane_area = panes[index];
        let border_style = if side == focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(label)
            .title_top(
                Line::from(Span::styled(
                    format!(" {} ", uri.path()),
                    Style::default().fg(Color::Blue),
                ))
                .alignment(ratatui::layout::Alignment::Right),
            )
            .border_style(border_style);

        let content_width = block.inner(pane_area).width as usize;
        let lines = pane_lines(&view.rows, is_left, content_width);
        let paragraph = Paragraph::new(lines).block(block).scroll((scroll, 0));
        frame.render_widget(paragraph, pane_area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
