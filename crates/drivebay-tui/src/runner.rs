//! Main TUI runner - entry point and event loop

use drivebay_app::actions::spawn_revision_forwarder;
use drivebay_app::config::Settings;
use drivebay_app::message::Message;
use drivebay_app::process::process_message;
use drivebay_app::signals::spawn_signal_handler;
use drivebay_app::{AppState, ConfigHandle};
use drivebay_core::prelude::*;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Run the drive editor on `config` until the user quits
pub async fn run(config: ConfigHandle, settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut state = AppState::new(config.clone(), settings);
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    spawn_signal_handler(msg_tx.clone());
    let forwarder = spawn_revision_forwarder(config.subscribe(), msg_tx.clone());

    info!(
        "Editing '{}' ({} drives)",
        config.read(|c| c.name.clone())?,
        state.drive_count()
    );

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    // Pasted paths arrive as one event instead of a burst of keys
    if let Err(e) = execute!(std::io::stdout(), EnableBracketedPaste) {
        warn!("Bracketed paste unavailable: {}", e);
    }
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx);
    let _ = execute!(std::io::stdout(), DisableBracketedPaste);
    ratatui::restore();

    forwarder.abort();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Busy completions, revision changes and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx);
        }
    }
    Ok(())
}
