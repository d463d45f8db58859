//! TUI-less "ask" command

use std::error::Error;
use std::io::{self, Write};

use tokio_util::sync::CancellationToken;

use crate::core::message::Message;
use crate::core::reply::{ReplyParams, ReplyService};
use crate::core::session::ChatSession;
use crate::core::setup::{ChaosLevel, FamilyBucket, SessionConfig};

const ASK_REQUEST_ID: u64 = 1;

pub async fn run_ask(
    base_url: String,
    family: FamilyBucket,
    chaos: ChaosLevel,
    prompt: Vec<String>,
) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.join(" ");
    if prompt.trim().is_empty() {
        eprintln!("Usage: hotmess-coach ask [--family <bucket>] [--chaos <level>] <question>");
        std::process::exit(1);
    }

    let client = reqwest::Client::new();
    let config = SessionConfig::from_selection(family, chaos);
    let session = ask_once(&client, &base_url, config, prompt).await;

    let mut stdout = io::stdout().lock();
    write_coach_messages(&mut stdout, session.messages())?;
    stdout.flush()?;
    Ok(())
}

/// Run a session through exactly one send and settle it. A failed reply
/// leaves the fallback text in the transcript, as in the chat screen.
pub async fn ask_once(
    client: &reqwest::Client,
    base_url: &str,
    config: SessionConfig,
    prompt: String,
) -> ChatSession {
    let mut session = ChatSession::new(config);
    session.set_input_text(prompt);

    let Some(outgoing) = session.begin_send(ASK_REQUEST_ID) else {
        return session;
    };

    let (reply_service, mut rx) = ReplyService::new();
    reply_service.spawn_request(ReplyParams {
        client: client.clone(),
        base_url: base_url.to_string(),
        message: outgoing.message,
        cancel_token: CancellationToken::new(),
        request_id: outgoing.request_id,
    });

    if let Some((message, request_id)) = rx.recv().await {
        session.complete_send(request_id, message.into_result());
    }
    session
}

/// Print the coach's side of the conversation, one paragraph per message.
pub fn write_coach_messages<W: Write>(out: &mut W, messages: &[Message]) -> io::Result<()> {
    let mut first = true;
    for message in messages.iter().filter(|m| m.is_coach()) {
        if !first {
            writeln!(out)?;
        }
        writeln!(out, "{}", message.text)?;
        first = false;
    }
    Ok(())
}
