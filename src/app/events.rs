//! Event handling
//!
//! Global keys are checked first, then review keys when a suggestion is
//! active. Accept and reject are gated on the controller's active flag, so
//! they can never fire against an empty slot.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::diff::PaneSide;
use crate::host::Notice;

/// Poll for one batch of terminal events and advance timers
pub fn handle_events(app: &mut App) -> std::io::Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key_event(app, key);
            }
        }
    }
    app.host.notifications.tick();
    Ok(())
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if handle_global_keys(app, key) {
        return;
    }
    if app.controller.is_active() {
        handle_review_keys(app, key);
    } else {
        handle_idle_keys(app, key);
    }
}

/// Keys that work regardless of review state. Returns true when consumed.
fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
            true
        }
        _ => false,
    }
}

fn handle_review_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') => app.accept_current(),
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.accept_current()
        }
        KeyCode::Char('r') | KeyCode::Esc => app.reject_current(),
        KeyCode::Char('x') => toggle_explanation(app),
        KeyCode::Char('y') => copy_proposed(app),
        KeyCode::Char('l') => app.host.show_log = !app.host.show_log,
        KeyCode::Tab => {
            app.focus = match app.focus {
                PaneSide::Original => PaneSide::Proposed,
                PaneSide::Proposed => PaneSide::Original,
            };
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.side_scroll = app.side_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.side_scroll = app.side_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_idle_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.doc_scroll = app.doc_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.doc_scroll = app.doc_scroll.saturating_sub(1);
        }
        KeyCode::Char('l') => app.host.show_log = !app.host.show_log,
        _ => {}
    }
}

fn toggle_explanation(app: &mut App) {
    if app.host.explanation.is_some() {
        app.host.explanation = None;
    } else {
        app.controller.show_explanation(&mut app.host);
    }
}

fn copy_proposed(app: &mut App) {
    let Some(text) = app
        .controller
        .active_suggestion()
        .map(|s| s.replacement.clone())
    else {
        return;
    };
    match crate::clipboard::copy_text(&text) {
        Ok(()) => app
            .host
            .notifications
            .show(Notice::info("Proposed text copied to clipboard")),
        Err(err) => {
            log::warn!("Clipboard copy failed: {err}");
            app.host
                .notifications
                .show(Notice::warning("Could not access the system clipboard"));
        }
    }
}
