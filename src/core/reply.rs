use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::api::chat::{post_chat, ReplyError};

#[derive(Debug)]
pub enum ReplyMessage {
    Delivered(String),
    Failed(ReplyError),
}

impl ReplyMessage {
    fn from_result(result: Result<String, ReplyError>) -> Self {
        match result {
            Ok(reply) => ReplyMessage::Delivered(reply),
            Err(err) => ReplyMessage::Failed(err),
        }
    }

    pub fn into_result(self) -> Result<String, ReplyError> {
        match self {
            ReplyMessage::Delivered(reply) => Ok(reply),
            ReplyMessage::Failed(err) => Err(err),
        }
    }
}

pub struct ReplyParams {
    pub client: reqwest::Client,
    pub base_url: String,
    pub message: String,
    pub cancel_token: CancellationToken,
    pub request_id: u64,
}

/// Runs reply requests off the event loop and reports each outcome, tagged
/// with its request id, on a single channel.
#[derive(Clone)]
pub struct ReplyService {
    tx: mpsc::UnboundedSender<(ReplyMessage, u64)>,
}

impl ReplyService {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(ReplyMessage, u64)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn spawn_request(&self, params: ReplyParams) {
        let tx_clone = self.tx.clone();
        tokio::spawn(async move {
            let ReplyParams {
                client,
                base_url,
                message,
                cancel_token,
                request_id,
            } = params;

            tokio::select! {
                result = post_chat(&client, &base_url, message) => {
                    let _ = tx_clone.send((ReplyMessage::from_result(result), request_id));
                }
                _ = cancel_token.cancelled() => {
                    debug!(request_id, "reply request dropped on shutdown");
                }
            }
        });
    }

    #[cfg(test)]
    pub fn send_for_test(&self, message: ReplyMessage, request_id: u64) {
        let _ = self.tx.send((message, request_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::chat::test_server::serve;

    fn params(base_url: String, request_id: u64, cancel_token: CancellationToken) -> ReplyParams {
        ReplyParams {
            client: reqwest::Client::new(),
            base_url,
            message: "[5 family members, zen chaos] where is the gravy boat".to_string(),
            cancel_token,
            request_id,
        }
    }

    #[tokio::test]
    async fn delivered_reply_is_tagged_with_request_id() {
        let (base_url, _) = serve(vec![(200, r#"{"reply":"Top shelf."}"#.to_string())]).await;
        let (service, mut rx) = ReplyService::new();

        service.spawn_request(params(base_url, 7, CancellationToken::new()));

        let (message, request_id) = rx.recv().await.expect("reply outcome");
        assert_eq!(request_id, 7);
        match message {
            ReplyMessage::Delivered(text) => assert_eq!(text, "Top shelf."),
            other => panic!("expected delivered reply, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_reply_is_reported_not_dropped() {
        let (base_url, _) = serve(vec![(503, String::new())]).await;
        let (service, mut rx) = ReplyService::new();

        service.spawn_request(params(base_url, 3, CancellationToken::new()));

        let (message, request_id) = rx.recv().await.expect("reply outcome");
        assert_eq!(request_id, 3);
        assert!(matches!(
            message,
            ReplyMessage::Failed(ReplyError::Status { .. })
        ));
    }

    #[tokio::test]
    async fn cancelled_request_reports_nothing() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let base_url = format!("http://{}", listener.local_addr().expect("addr"));
        let (service, mut rx) = ReplyService::new();
        let token = CancellationToken::new();
        token.cancel();

        service.spawn_request(params(base_url, 1, token));
        drop(service);

        assert!(rx.recv().await.is_none());
        drop(listener);
    }
}
