//! Root controller.
//!
//! [`App`] decides which screen is mounted: the setup wizard until it
//! yields a [`SessionConfig`], then the chat session. Reset discards the
//! session and remounts a fresh wizard.

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::core::reply::ReplyParams;
use crate::core::session::{ChatSession, OutgoingMessage};
use crate::core::setup::{SessionConfig, SetupWizard};
use crate::ui::theme::Theme;

pub mod actions;
pub mod ui_state;

pub use actions::{apply_action, apply_actions, AppAction, AppCommand};
pub use ui_state::UiState;

pub enum Screen {
    Setup(SetupWizard),
    Chat(ChatSession),
}

/// Configuration parameters for initializing an App
pub struct AppInitConfig {
    pub base_url: String,
    pub theme: Theme,
}

pub struct App {
    pub screen: Screen,
    pub ui: UiState,
    client: reqwest::Client,
    base_url: String,
    last_request_id: u64,
    shutdown: CancellationToken,
}

impl App {
    pub fn new(init_config: AppInitConfig) -> Self {
        Self {
            screen: Screen::Setup(SetupWizard::new()),
            ui: UiState::new(init_config.theme),
            client: reqwest::Client::new(),
            base_url: init_config.base_url,
            last_request_id: 0,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn wizard(&self) -> Option<&SetupWizard> {
        match &self.screen {
            Screen::Setup(wizard) => Some(wizard),
            Screen::Chat(_) => None,
        }
    }

    pub fn wizard_mut(&mut self) -> Option<&mut SetupWizard> {
        match &mut self.screen {
            Screen::Setup(wizard) => Some(wizard),
            Screen::Chat(_) => None,
        }
    }

    pub fn session(&self) -> Option<&ChatSession> {
        match &self.screen {
            Screen::Chat(session) => Some(session),
            Screen::Setup(_) => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut ChatSession> {
        match &mut self.screen {
            Screen::Chat(session) => Some(session),
            Screen::Setup(_) => None,
        }
    }

    /// Collected configuration, present only while a chat is mounted.
    pub fn session_config(&self) -> Option<SessionConfig> {
        self.session().map(ChatSession::config)
    }

    pub fn is_busy(&self) -> bool {
        self.session().is_some_and(ChatSession::is_busy)
    }

    /// Unmount the wizard and start a chat with the collected values.
    pub fn complete_setup(&mut self, config: SessionConfig) {
        info!(
            family_count = config.family_count,
            chaos_level = %config.chaos_level,
            "setup complete"
        );
        self.screen = Screen::Chat(ChatSession::new(config));
        self.ui.scroll_to_bottom();
    }

    /// Discard the session, history included, and return to the wizard.
    pub fn reset(&mut self) {
        if let Some(session) = self.session() {
            info!(
                messages = session.messages().len(),
                in_flight = ?session.in_flight(),
                "session reset"
            );
        }
        self.screen = Screen::Setup(SetupWizard::new());
        self.ui.scroll_to_bottom();
    }

    pub fn next_request_id(&mut self) -> u64 {
        self.last_request_id += 1;
        self.last_request_id
    }

    pub fn reply_params(&self, outgoing: OutgoingMessage) -> ReplyParams {
        ReplyParams {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            message: outgoing.message,
            cancel_token: self.shutdown.child_token(),
            request_id: outgoing.request_id,
        }
    }

    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Stop background work tied to this app (outstanding requests, input reader).
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}
