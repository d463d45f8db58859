use tracing::debug;
use tui_textarea::{Input, TextArea};

use super::App;
use crate::api::chat::ReplyError;
use crate::core::reply::{ReplyMessage, ReplyParams};
use crate::core::setup::{SessionConfig, SetupWizard};

pub enum AppAction {
    WizardMoveUp,
    WizardMoveDown,
    WizardConfirm,
    WizardSelect { index: usize },
    WizardBack,
    EditInput { input: Input },
    InsertIntoInput { text: String },
    SubmitMessage,
    ReplyDelivered { reply: String, request_id: u64 },
    ReplyFailed { error: ReplyError, request_id: u64 },
    ScrollUp { lines: u16 },
    ScrollDown { lines: u16 },
    ScrollToTop,
    ScrollToBottom,
    Reset,
    Quit,
}

impl AppAction {
    pub fn from_reply(message: ReplyMessage, request_id: u64) -> Self {
        match message {
            ReplyMessage::Delivered(reply) => AppAction::ReplyDelivered { reply, request_id },
            ReplyMessage::Failed(error) => AppAction::ReplyFailed { error, request_id },
        }
    }
}

pub enum AppCommand {
    SpawnReply(ReplyParams),
}

pub fn apply_actions(app: &mut App, actions: impl IntoIterator<Item = AppAction>) -> Vec<AppCommand> {
    let mut commands = Vec::new();
    for action in actions {
        if let Some(cmd) = apply_action(app, action) {
            commands.push(cmd);
        }
    }
    commands
}

pub fn apply_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::WizardMoveUp => {
            if let Some(wizard) = app.wizard_mut() {
                wizard.move_up();
            }
            None
        }
        AppAction::WizardMoveDown => {
            if let Some(wizard) = app.wizard_mut() {
                wizard.move_down();
            }
            None
        }
        AppAction::WizardConfirm => {
            let completed = app.wizard_mut().and_then(SetupWizard::confirm_highlighted);
            finish_setup(app, completed);
            None
        }
        AppAction::WizardSelect { index } => {
            let completed = app
                .wizard_mut()
                .and_then(|wizard| wizard.select_index(index));
            finish_setup(app, completed);
            None
        }
        AppAction::WizardBack => {
            if let Some(wizard) = app.wizard_mut() {
                wizard.back();
            }
            None
        }

        AppAction::EditInput { input } => {
            edit_input(app, |ta| {
                ta.input(input);
            });
            None
        }
        AppAction::InsertIntoInput { text } => {
            edit_input(app, |ta| {
                ta.insert_str(text);
            });
            None
        }

        AppAction::SubmitMessage => submit_message(app),

        AppAction::ReplyDelivered { reply, request_id } => {
            settle_reply(app, request_id, Ok(reply));
            None
        }
        AppAction::ReplyFailed { error, request_id } => {
            settle_reply(app, request_id, Err(error));
            None
        }

        AppAction::ScrollUp { lines } => {
            app.ui.scroll_up(lines);
            None
        }
        AppAction::ScrollDown { lines } => {
            app.ui.scroll_down(lines);
            None
        }
        AppAction::ScrollToTop => {
            app.ui.scroll_to_top();
            None
        }
        AppAction::ScrollToBottom => {
            app.ui.scroll_to_bottom();
            None
        }

        AppAction::Reset => {
            app.reset();
            None
        }
        AppAction::Quit => {
            app.ui.exit_requested = true;
            None
        }
    }
}

fn finish_setup(app: &mut App, completed: Option<SessionConfig>) {
    if let Some(config) = completed {
        app.complete_setup(config);
    }
}

fn edit_input<F>(app: &mut App, edit: F)
where
    F: FnOnce(&mut TextArea<'static>),
{
    let Some(session) = app.session_mut() else {
        return;
    };
    // The input is disabled while a reply is outstanding.
    if session.is_busy() {
        return;
    }
    session.apply_input_edit(edit);
}

fn submit_message(app: &mut App) -> Option<AppCommand> {
    let session = app.session()?;
    if !session.can_send() {
        return None;
    }

    let request_id = app.next_request_id();
    let outgoing = app.session_mut()?.begin_send(request_id)?;
    app.ui.scroll_to_bottom();
    app.ui.restart_pulse();
    Some(AppCommand::SpawnReply(app.reply_params(outgoing)))
}

fn settle_reply(app: &mut App, request_id: u64, outcome: Result<String, ReplyError>) {
    let Some(session) = app.session_mut() else {
        debug!(request_id, "reply arrived with no chat mounted");
        return;
    };
    session.complete_send(request_id, outcome);
}
