//! Chat session state: the visible conversation plus the single in-flight
//! request slot.

use tracing::{debug, warn};
use tui_textarea::{CursorMove, TextArea};

use crate::api::chat::ReplyError;
use crate::core::greeting::{greeting, FALLBACK_REPLY};
use crate::core::message::{Message, MessageId};
use crate::core::setup::SessionConfig;

pub const INPUT_PLACEHOLDER: &str = "Tell the coach about your Thanksgiving chaos...";

/// Prefix the raw user text with the session context, as the backend expects.
pub fn contextual_message(config: &SessionConfig, text: &str) -> String {
    format!(
        "[{} family members, {} chaos] {}",
        config.family_count, config.chaos_level, text
    )
}

/// A send accepted by [`ChatSession::begin_send`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub request_id: u64,
    pub message: String,
}

pub struct ChatSession {
    config: SessionConfig,
    messages: Vec<Message>,
    next_id: MessageId,
    input: String,
    textarea: TextArea<'static>,
    in_flight: Option<u64>,
    initialized: bool,
}

impl ChatSession {
    pub fn new(config: SessionConfig) -> Self {
        let mut session = Self {
            config,
            messages: Vec::new(),
            next_id: MessageId::first(),
            input: String::new(),
            textarea: TextArea::default(),
            in_flight: None,
            initialized: false,
        };
        session.configure_textarea();
        session.initialize();
        session
    }

    fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        let text = greeting(self.config.family_count, self.config.chaos_level);
        self.push_coach(text);
        self.initialized = true;
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    fn push_coach(&mut self, text: impl Into<String>) {
        let id = self.allocate_id();
        self.messages.push(Message::coach(id, text));
    }

    // Input buffer

    pub fn input_text(&self) -> &str {
        &self.input
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }

    pub fn set_input_text(&mut self, text: String) {
        let lines: Vec<String> = if text.is_empty() {
            Vec::new()
        } else {
            text.split('\n').map(str::to_string).collect()
        };
        self.input = text;
        self.textarea = TextArea::from(lines);
        if !self.input.is_empty() {
            self.textarea.move_cursor(CursorMove::Bottom);
            self.textarea.move_cursor(CursorMove::End);
        }
        self.configure_textarea();
    }

    pub fn clear_input(&mut self) {
        self.set_input_text(String::new());
    }

    /// Apply an edit to the textarea and mirror the result into the input buffer.
    pub fn apply_input_edit<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut TextArea<'static>),
    {
        edit(&mut self.textarea);
        self.input = self.textarea.lines().join("\n");
    }

    fn configure_textarea(&mut self) {
        self.textarea.set_placeholder_text(INPUT_PLACEHOLDER);
        self.textarea
            .set_cursor_line_style(ratatui::style::Style::default());
    }

    // Send cycle

    pub fn can_send(&self) -> bool {
        !self.is_busy() && !self.input.trim().is_empty()
    }

    /// Accept the current input as a user message and occupy the in-flight
    /// slot with `request_id`. Returns `None`, leaving every piece of state
    /// untouched, when the input is blank or a send is already in flight.
    pub fn begin_send(&mut self, request_id: u64) -> Option<OutgoingMessage> {
        if !self.can_send() {
            return None;
        }

        let text = std::mem::take(&mut self.input);
        let message = contextual_message(&self.config, &text);
        let id = self.allocate_id();
        self.messages.push(Message::user(id, text));
        self.clear_input();
        self.in_flight = Some(request_id);
        debug!(request_id, message_id = %id, "send accepted");

        Some(OutgoingMessage {
            request_id,
            message,
        })
    }

    /// Settle the in-flight send. Completions for any other request id are
    /// ignored and `false` is returned.
    pub fn complete_send(&mut self, request_id: u64, outcome: Result<String, ReplyError>) -> bool {
        if self.in_flight != Some(request_id) {
            debug!(request_id, "ignoring stale reply");
            return false;
        }

        self.in_flight = None;
        match outcome {
            Ok(reply) => self.push_coach(reply),
            Err(err) => {
                warn!(request_id, error = %err, "coach reply failed; using fallback");
                self.push_coach(FALLBACK_REPLY);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::Sender;
    use crate::core::setup::ChaosLevel;

    fn session(family_count: u32, chaos_level: ChaosLevel) -> ChatSession {
        ChatSession::new(SessionConfig {
            family_count,
            chaos_level,
        })
    }

    fn status_error() -> ReplyError {
        ReplyError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            body: String::new(),
        }
    }

    #[test]
    fn mount_synthesizes_single_greeting() {
        let session = session(12, ChaosLevel::Medium);
        let messages = session.messages();
        assert_eq!(messages.len(), 1);
        let first = &messages[0];
        assert_eq!(first.sender, Sender::Coach);
        assert_eq!(first.id.to_string(), "1");
        assert!(first.text.contains("😅"));
        assert!(first.text.contains("12"));
        assert!(first.text.contains("medium"));
        assert!(!session.is_busy());
    }

    #[test]
    fn blank_input_is_not_sent() {
        let mut session = session(5, ChaosLevel::Zen);
        session.set_input_text("   \n  ".to_string());

        assert_eq!(session.begin_send(1), None);
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_busy());
        assert_eq!(session.input_text(), "   \n  ");
    }

    #[test]
    fn send_appends_user_message_and_occupies_slot() {
        let mut session = session(21, ChaosLevel::Chaotic);
        session.set_input_text("Uncle Bob brought a smoker".to_string());

        let outgoing = session.begin_send(4).expect("send accepted");

        assert_eq!(outgoing.request_id, 4);
        assert_eq!(
            outgoing.message,
            "[21 family members, chaotic chaos] Uncle Bob brought a smoker"
        );
        let last = session.messages().last().expect("user message");
        assert!(last.is_user());
        assert_eq!(last.text, "Uncle Bob brought a smoker");
        assert_eq!(session.input_text(), "");
        assert!(session.textarea().is_empty());
        assert!(session.is_busy());
    }

    #[test]
    fn user_text_is_sent_raw_not_trimmed() {
        let mut session = session(5, ChaosLevel::Zen);
        session.set_input_text("  pie?  ".to_string());

        let outgoing = session.begin_send(1).expect("send accepted");

        assert_eq!(outgoing.message, "[5 family members, zen chaos]   pie?  ");
        assert_eq!(session.messages()[1].text, "  pie?  ");
    }

    #[test]
    fn send_while_busy_changes_nothing() {
        let mut session = session(5, ChaosLevel::Zen);
        session.set_input_text("first".to_string());
        session.begin_send(1).expect("first send");
        session.set_input_text("second".to_string());

        assert_eq!(session.begin_send(2), None);
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.in_flight(), Some(1));
        assert_eq!(session.input_text(), "second");
    }

    #[test]
    fn successful_reply_appends_one_coach_message() {
        let mut session = session(5, ChaosLevel::Zen);
        session.set_input_text("help".to_string());
        session.begin_send(9).expect("send");

        assert!(session.complete_send(9, Ok("Baste the turkey.".to_string())));

        assert_eq!(session.messages().len(), 3);
        let last = session.messages().last().expect("reply");
        assert!(last.is_coach());
        assert_eq!(last.text, "Baste the turkey.");
        assert!(!session.is_busy());
    }

    #[test]
    fn failed_reply_appends_fallback() {
        let mut session = session(5, ChaosLevel::Zen);
        session.set_input_text("help".to_string());
        session.begin_send(2).expect("send");

        assert!(session.complete_send(2, Err(status_error())));

        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[2].text, FALLBACK_REPLY);
        assert!(!session.is_busy());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut session = session(5, ChaosLevel::Zen);
        session.set_input_text("help".to_string());
        session.begin_send(2).expect("send");

        assert!(!session.complete_send(1, Ok("old news".to_string())));
        assert_eq!(session.messages().len(), 2);
        assert!(session.is_busy());

        let mut idle = self::session(5, ChaosLevel::Zen);
        assert!(!idle.complete_send(2, Ok("nobody asked".to_string())));
        assert_eq!(idle.messages().len(), 1);
    }

    #[test]
    fn message_ids_increase_in_creation_order() {
        let mut session = session(11, ChaosLevel::Medium);
        for request_id in 1..=3 {
            session.set_input_text(format!("question {request_id}"));
            session.begin_send(request_id).expect("send");
            session.complete_send(request_id, Ok("answer".to_string()));
        }

        let ids: Vec<u64> = session.messages().iter().map(|m| m.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn textarea_edits_mirror_into_input() {
        let mut session = session(5, ChaosLevel::Zen);
        session.apply_input_edit(|ta| {
            ta.insert_str("gravy");
        });
        session.apply_input_edit(|ta| {
            ta.insert_newline();
            ta.insert_str("boat");
        });
        assert_eq!(session.input_text(), "gravy\nboat");
        assert!(session.can_send());
    }
}
