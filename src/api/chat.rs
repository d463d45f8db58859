use std::error::Error as StdError;
use std::fmt;

use crate::api::{ChatReply, ChatRequest, CHAT_ENDPOINT_PATH};
use crate::utils::url::construct_api_url;

/// A reply that could not be delivered.
///
/// The variants only feed the diagnostic log; callers treat them all the same.
#[derive(Debug)]
pub enum ReplyError {
    /// The request never produced a response (connection refused, reset, ...).
    Transport(reqwest::Error),

    /// The backend answered with a non-success status.
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not `{ "reply": string }`.
    Decode(reqwest::Error),
}

impl fmt::Display for ReplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyError::Transport(source) => write!(f, "request failed: {source}"),
            ReplyError::Status { status, body } => {
                let body = body.trim();
                if body.is_empty() {
                    write!(f, "coach endpoint returned {status}")
                } else {
                    write!(f, "coach endpoint returned {status}: {body}")
                }
            }
            ReplyError::Decode(source) => write!(f, "malformed reply body: {source}"),
        }
    }
}

impl StdError for ReplyError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ReplyError::Transport(source) | ReplyError::Decode(source) => Some(source),
            ReplyError::Status { .. } => None,
        }
    }
}

/// POST one message to the coach endpoint and return the reply text.
pub async fn post_chat(
    client: &reqwest::Client,
    base_url: &str,
    message: String,
) -> Result<String, ReplyError> {
    let chat_url = construct_api_url(base_url, CHAT_ENDPOINT_PATH);
    let response = client
        .post(chat_url)
        .header("Content-Type", "application/json")
        .json(&ChatRequest { message })
        .send()
        .await
        .map_err(ReplyError::Transport)?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<no body>".to_string());
        return Err(ReplyError::Status { status, body });
    }

    let reply = response
        .json::<ChatReply>()
        .await
        .map_err(ReplyError::Decode)?;
    Ok(reply.reply)
}


#[cfg(test)]
mod tests {
    use super::test_server::serve;
    use super::*;

    #[tokio::test]
    async fn posts_message_and_returns_reply() {
        let (base_url, captured) =
            serve(vec![(200, r#"{"reply":"Baste the turkey."}"#.to_string())]).await;
        let client = reqwest::Client::new();

        let reply = post_chat(
            &client,
            &base_url,
            "[12 family members, medium chaos] help".to_string(),
        )
        .await
        .expect("reply");

        assert_eq!(reply, "Baste the turkey.");
        let requests = captured.lock().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "POST /api/chat HTTP/1.1");
        let body: serde_json::Value = serde_json::from_str(&requests[0].1).expect("json body");
        assert_eq!(
            body,
            serde_json::json!({ "message": "[12 family members, medium chaos] help" })
        );
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_normalized() {
        let (base_url, captured) = serve(vec![(200, r#"{"reply":"ok"}"#.to_string())]).await;
        let client = reqwest::Client::new();

        post_chat(&client, &format!("{base_url}/"), "hi".to_string())
            .await
            .expect("reply");

        assert_eq!(captured.lock().await[0].0, "POST /api/chat HTTP/1.1");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (base_url, _) = serve(vec![(500, r#"{"error":"oven fire"}"#.to_string())]).await;
        let client = reqwest::Client::new();

        let err = post_chat(&client, &base_url, "hi".to_string())
            .await
            .expect_err("status error");

        match &err {
            ReplyError::Status { status, body } => {
                assert_eq!(status.as_u16(), 500);
                assert!(body.contains("oven fire"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let (base_url, _) = serve(vec![(200, r#"{"answer":"wrong shape"}"#.to_string())]).await;
        let client = reqwest::Client::new();

        let err = post_chat(&client, &base_url, "hi".to_string())
            .await
            .expect_err("decode error");

        assert!(matches!(err, ReplyError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);
        let client = reqwest::Client::new();

        let err = post_chat(&client, &format!("http://{addr}"), "hi".to_string())
            .await
            .expect_err("transport error");

        assert!(matches!(err, ReplyError::Transport(_)));
    }
}
