//! Event polling, dispatching, and UI rendering loop.
//!
//! Terminal input is read on a blocking task and forwarded over a channel.
//! The loop selects over that channel, the reply channel, and a redraw tick
//! that only runs while a reply is outstanding so the loading bubble animates.

pub mod keybindings;
pub mod lifecycle;

use std::{error::Error, time::Duration};

use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::core::app::{apply_actions, App, AppAction, AppCommand, AppInitConfig};
use crate::core::reply::{ReplyMessage, ReplyService};
use crate::ui::renderer::{transcript_height, ui};

use keybindings::actions_for_key;
use lifecycle::{restore_terminal, setup_terminal, ChatTerminal};

const INPUT_POLL: Duration = Duration::from_millis(100);
const ANIMATION_TICK: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
}

fn spawn_event_reader(
    event_tx: mpsc::UnboundedSender<UiEvent>,
    shutdown: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !shutdown.is_cancelled() {
            match event::poll(INPUT_POLL) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, "failed to read terminal event");
                    }
                },
                Ok(false) => {}
                Err(err) => {
                    warn!(error = %err, "terminal event polling stopped");
                    break;
                }
            }
        }
    })
}

/// Translate one terminal event into actions.
fn actions_for_event(app: &App, ev: UiEvent, page_height: u16) -> Vec<AppAction> {
    match ev {
        UiEvent::Crossterm(Event::Key(key)) if key.kind == KeyEventKind::Press => {
            actions_for_key(app, &key, page_height)
        }
        UiEvent::Crossterm(Event::Paste(text)) => {
            let text = text.replace("\r\n", "\n").replace('\r', "\n");
            vec![AppAction::InsertIntoInput { text }]
        }
        UiEvent::Crossterm(_) => Vec::new(),
    }
}

/// Apply actions and run whatever background work they request.
fn dispatch(
    app: &mut App,
    reply_service: &ReplyService,
    actions: impl IntoIterator<Item = AppAction>,
) {
    for command in apply_actions(app, actions) {
        match command {
            AppCommand::SpawnReply(params) => {
                debug!(request_id = params.request_id, "spawning reply request");
                reply_service.spawn_request(params);
            }
        }
    }
}

async fn run_event_loop(
    app: &mut App,
    terminal: &mut ChatTerminal,
    reply_service: &ReplyService,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
    reply_rx: &mut mpsc::UnboundedReceiver<(ReplyMessage, u64)>,
) -> Result<(), Box<dyn Error>> {
    let mut ticker = tokio::time::interval(ANIMATION_TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|f| ui(f, app))?;
        if app.ui.exit_requested {
            return Ok(());
        }

        let page_height = transcript_height(terminal.size()?.height);
        let busy = app.is_busy();

        tokio::select! {
            ev = event_rx.recv() => match ev {
                Some(ev) => {
                    let actions = actions_for_event(app, ev, page_height);
                    dispatch(app, reply_service, actions);
                }
                None => return Ok(()),
            },
            Some((message, request_id)) = reply_rx.recv() => {
                dispatch(app, reply_service, [AppAction::from_reply(message, request_id)]);
            }
            _ = ticker.tick(), if busy => {}
        }
    }
}

pub async fn run_chat(init_config: AppInitConfig) -> Result<(), Box<dyn Error>> {
    info!(base_url = %init_config.base_url, "starting chat");
    let mut app = App::new(init_config);

    let mut terminal = setup_terminal()?;

    let (reply_service, mut reply_rx) = ReplyService::new();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let event_reader_handle = spawn_event_reader(event_tx, app.shutdown_token());

    let result = run_event_loop(
        &mut app,
        &mut terminal,
        &reply_service,
        &mut event_rx,
        &mut reply_rx,
    )
    .await;

    app.shutdown();
    let _ = event_reader_handle.await;
    restore_terminal(&mut terminal)?;
    info!("chat closed");

    result
}
