//! Main TUI runner - entry points and event loop
//!
//! The shell runs in two nested loops: the outer one rebuilds the whole
//! shell (state, monitor, document registry) on reload, the inner one is
//! the usual message/draw/poll cycle. Coming back online requests a
//! reload, so recovery is a rebuild rather than a resync; only the
//! current location survives it.

use std::time::Duration;

use tokio::sync::mpsc;

use parley_api::ApiClient;
use parley_app::config::{self, Settings};
use parley_app::{
    update, AppState, ConnectivityMonitor, Message, Task, ThemeController, UpdateAction,
};
use parley_core::prelude::*;
use parley_core::{Connectivity, Session};

use crate::{event, render};

/// How one shell pass ended
enum Outcome {
    Quit,
    Reload { location: String },
}

/// Leave the terminal usable when a draw path panics
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Run the shell until the user quits.
pub async fn run(settings: Settings, session: Session, start_location: String) -> Result<()> {
    install_panic_hook();
    let mut term = ratatui::init();

    let result = run_shell(&mut term, &settings, &session, start_location).await;

    ratatui::restore();
    result
}

async fn run_shell(
    terminal: &mut ratatui::DefaultTerminal,
    settings: &Settings,
    session: &Session,
    start_location: String,
) -> Result<()> {
    let mut location = start_location;
    loop {
        match run_pass(terminal, settings, session, location).await? {
            Outcome::Quit => return Ok(()),
            Outcome::Reload { location: kept } => {
                info!(location = %kept, "Reloading shell");
                location = kept;
            }
        }
    }
}

/// One full shell lifetime: build everything, run the loop, tear down.
async fn run_pass(
    terminal: &mut ratatui::DefaultTerminal,
    settings: &Settings,
    session: &Session,
    location: String,
) -> Result<Outcome> {
    let client = ApiClient::new(&settings.server.base_url)?;

    // Probe once up front so the first frame already knows the state
    let initial = Connectivity::from_reachable(client.probe().await);
    info!(?initial, server = %settings.server.base_url, "Shell starting");

    let theme = ThemeController::load(config::default_config_dir());
    let mut state = AppState::new(session.clone(), initial, theme, location);

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);

    // Held for the lifetime of this pass; dropping it stops the probes
    let _monitor = ConnectivityMonitor::spawn(
        client.clone(),
        initial,
        Duration::from_secs(settings.connectivity.probe_interval_secs),
        msg_tx.clone(),
    );

    // Populate the registry for the active chat, if any
    process_message(&mut state, Message::RefreshDocuments, &msg_tx, &client);

    while state.is_running() {
        // Drain task and monitor messages (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(&mut state, msg, &msg_tx, &client);
        }

        // Render
        terminal.draw(|frame| render::view(frame, &state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(&mut state, message, &msg_tx, &client);
        }
    }

    if state.should_quit() {
        Ok(Outcome::Quit)
    } else {
        Ok(Outcome::Reload {
            location: state.location.clone(),
        })
    }
}

/// Feed a message through `update`, chasing follow-ups and running actions.
fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &ApiClient,
) {
    let mut current = Some(message);
    while let Some(msg) = current.take() {
        let result = update(state, msg);
        current = result.message;

        if let Some(action) = result.action {
            match action {
                UpdateAction::SpawnTask(Task::FetchDocuments { chat_id, seq }) => {
                    spawn_fetch(client.clone(), chat_id, seq, msg_tx.clone());
                }
                UpdateAction::Reload => {
                    // Phase already flipped; the loop exits on its own
                    debug!("Reload requested");
                }
            }
        }
    }
}

fn spawn_fetch(client: ApiClient, chat_id: String, seq: u64, tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let result = client
            .list_documents(&chat_id)
            .await
            .map_err(|e| e.to_string());
        if let Err(e) = &result {
            warn!(chat_id = %chat_id, "Document fetch failed: {}", e);
        }
        // Receiver gone means the shell pass ended; nothing to do
        let _ = tx.send(Message::DocumentsFetched { seq, result }).await;
    });
}
