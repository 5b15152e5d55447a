//! Application rendering
//!
//! Left pane is always the live document with the review highlight. The
//! right pane shows whichever surface is active: the explanation view, the
//! side-by-side comparison, or the log channel.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::diff::render_diff_view;
use crate::notification::render_notification;

pub fn render(app: &mut App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let has_side_pane =
        app.host.explanation.is_some() || app.host.diff.is_some() || app.host.show_log;

    if has_side_pane {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[0]);
        render_document(app, frame, panes[0]);
        render_side_pane(app, frame, panes[1]);
    } else {
        render_document(app, frame, chunks[0]);
    }

    render_status(app, frame, chunks[1]);
    render_notification(&app.host.notifications, frame, chunks[2]);
}

fn document_lines(app: &App) -> Vec<Line<'static>> {
    let document = &app.host.document;
    let text = document.text();
    let starts = document.line_starts();
    let highlight = app
        .host
        .highlight
        .as_ref()
        .filter(|(uri, _, _)| uri == document.uri())
        .map(|(_, range, style)| (*range, *style));

    let mut lines = Vec::with_capacity(starts.len());
    for (index, &line_start) in starts.iter().enumerate() {
        let line_end = starts
            .get(index + 1)
            .map(|&next| next - 1)
            .unwrap_or(text.len());

        let gutter = Span::styled(
            format!("{:>4} ", index + 1),
            Style::default().fg(Color::DarkGray),
        );
        let mut spans = vec![gutter];

        match highlight {
            Some((range, style))
                if !range.is_empty() && range.start < line_end && range.end > line_start =>
            {
                let hl_start = range.start.max(line_start);
                let hl_end = range.end.min(line_end);
                if line_start < hl_start {
                    spans.push(Span::raw(text[line_start..hl_start].to_string()));
                }
                spans.push(Span::styled(text[hl_start..hl_end].to_string(), style));
                if hl_end < line_end {
                    spans.push(Span::raw(text[hl_end..line_end].to_string()));
                }
            }
            _ => spans.push(Span::raw(text[line_start..line_end].to_string())),
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn render_document(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(Span::styled(
            format!(" {} ", app.host.document.uri().path()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )))
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(document_lines(app))
        .block(block)
        .scroll((app.doc_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_side_pane(app: &App, frame: &mut Frame, area: Rect) {
    if let Some((title, body)) = &app.host.explanation {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(Span::styled(
                format!(" {title} "),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )))
            .title_bottom(
                Line::from(Span::styled(
                    " x to close ",
                    Style::default().fg(Color::DarkGray),
                ))
                .alignment(ratatui::layout::Alignment::Center),
            )
            .border_style(Style::default().fg(Color::Cyan));
        let paragraph = Paragraph::new(body.clone())
            .wrap(Wrap { trim: false })
            .block(block)
            .scroll((app.side_scroll, 0));
        frame.render_widget(paragraph, area);
    } else if let Some(view) = &app.host.diff {
        render_diff_view(view, frame, area, app.side_scroll, app.focus);
    } else if app.host.show_log {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Log ")
            .border_style(Style::default().fg(Color::DarkGray));
        let lines: Vec<Line> = app
            .host
            .log_lines
            .iter()
            .map(|line| Line::from(line.clone()))
            .collect();
        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((app.side_scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

fn render_status(app: &App, frame: &mut Frame, area: Rect) {
    let position = if app.controller.is_active() {
        format!(" proposal {}/{}", app.queue.reviewed(), app.queue.total())
    } else if app.queue.remaining() == 0 {
        format!(" {}/{} reviewed", app.queue.reviewed(), app.queue.total())
    } else {
        String::from(" ")
    };

    let hints = if app.controller.is_active() {
        "a accept | r reject | x explain | y copy | l log | Tab focus | q quit"
    } else {
        "j/k scroll | l log | q quit"
    };

    let line = Line::from(vec![
        Span::styled(
            position,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
