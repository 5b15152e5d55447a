use std::path::Path;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use redline::app::{App, handle_events, render};
use redline::cli::Cli;
use redline::config;
use redline::document::{DocUri, TextDocument};
use redline::error::RedlineError;
use redline::logging;
use redline::proposals;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    logging::init();

    let cli = Cli::parse();

    let mut config = config::load();
    if cli.no_auto_save {
        config.review.auto_save = false;
    }
    if cli.no_decorations {
        config.review.inline_decorations = false;
    }

    // Load and validate everything before touching the terminal, so errors
    // print on a normal screen
    let document = load_document(&cli.file)?;
    let proposals = proposals::load(&cli.proposals, &document)?;
    log::info!(
        "Reviewing {} proposal(s) against {}",
        proposals.len(),
        cli.file.display()
    );

    let mut app = App::new(document, cli.file, proposals, &config);
    app.advance();

    let terminal = ratatui::init();
    let result = run(terminal, &mut app);
    ratatui::restore();

    result
}

fn load_document(path: &Path) -> Result<TextDocument, RedlineError> {
    let text = std::fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            RedlineError::TargetNotFound(path.display().to_string())
        } else {
            RedlineError::Io(err)
        }
    })?;
    Ok(TextDocument::new(
        DocUri::file(&path.to_string_lossy()),
        text,
    ))
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;
        handle_events(app)?;
        if app.should_quit {
            break;
        }
    }
    Ok(())
}
