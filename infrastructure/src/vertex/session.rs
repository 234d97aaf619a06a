//! Vertex AI session management.
//!
//! Provides [`VertexSession`] which implements [`AgentSession`] for a
//! single streamed exchange with an agent on the Vertex AI runtime.
//! The REST protocol is stateless, so a session is an ephemeral client
//! handle: it carries the resolved endpoint, credentials, and agent
//! configuration for exactly one query.

use crate::vertex::error::{Result, VertexError};
use crate::vertex::protocol::{GenerateContentChunk, GenerateContentRequest, ToolDecl};
use async_trait::async_trait;
use deepdesk_application::ports::agent_gateway::{AgentSession, GatewayError, StreamHandle};
use deepdesk_domain::{AgentProfile, SessionId, StreamEvent};
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// An ephemeral session with an agent on the Vertex AI runtime.
///
/// Holds no conversation state. `stream_query` posts one request and
/// hands back a [`StreamHandle`] fed by a background pump task.
pub struct VertexSession {
    id: SessionId,
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
    instruction: String,
    tools: Vec<ToolDecl>,
}

impl VertexSession {
    pub(crate) fn new(
        client: reqwest::Client,
        endpoint: String,
        access_token: String,
        profile: &AgentProfile,
        tools: Vec<ToolDecl>,
    ) -> Self {
        let id = SessionId::new();
        debug!(session = %id, agent = %profile.name, "Opened agent session");

        Self {
            id,
            client,
            endpoint,
            access_token,
            instruction: profile.instruction.clone(),
            tools,
        }
    }

    async fn open_stream(&self, message: &str) -> Result<StreamHandle> {
        debug!(session = %self.id, chars = message.chars().count(), "Sending query");

        let request = GenerateContentRequest::user_query(
            message,
            Some(self.instruction.as_str()),
            self.tools.clone(),
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VertexError::ApiError {
                status: status.as_u16(),
                message: summarize_error_body(&body),
            });
        }

        let (tx, rx) = mpsc::channel(32);
        let stream = response.bytes_stream();
        tokio::spawn(async move {
            pump_sse(stream, &tx).await;
        });

        Ok(StreamHandle::new(rx))
    }
}

#[async_trait]
impl AgentSession for VertexSession {
    fn id(&self) -> &SessionId {
        &self.id
    }

    async fn stream_query(&self, message: &str) -> std::result::Result<StreamHandle, GatewayError> {
        self.open_stream(message)
            .await
            .map_err(|e| GatewayError::RequestFailed(e.to_string()))
    }
}

/// Extract the API error message from a JSON error body, falling back to
/// the raw text.
fn summarize_error_body(body: &str) -> String {
    if let Ok(chunk) = serde_json::from_str::<GenerateContentChunk>(body) {
        if let Some(error) = chunk.error {
            return error.message;
        }
    }
    body.trim().to_string()
}

/// Pump an SSE byte stream into `StreamEvent`s.
///
/// Reassembles `data:` lines across chunk boundaries, forwards text
/// parts as `Fragment`s, and ends with `Completed` when the stream is
/// exhausted. A transport failure or an in-stream API error emits
/// `Error` and stops the pump.
pub(crate) async fn pump_sse<S, B, E>(mut stream: S, tx: &mpsc::Sender<StreamEvent>)
where
    S: Stream<Item = std::result::Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let mut buffer = String::new();

    while let Some(chunk) = stream.next().await {
        let bytes = match chunk {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Response stream failed: {}", e);
                let _ = tx.send(StreamEvent::Error(e.to_string())).await;
                return;
            }
        };

        buffer.push_str(&String::from_utf8_lossy(bytes.as_ref()));
        while let Some(pos) = buffer.find('\n') {
            let line: String = buffer.drain(..=pos).collect();
            if !forward_sse_line(line.trim_end(), tx).await {
                return;
            }
        }
    }

    // A final data line is valid even without a trailing newline
    if !buffer.trim().is_empty() && !forward_sse_line(buffer.trim_end(), tx).await {
        return;
    }

    let _ = tx.send(StreamEvent::Completed(String::new())).await;
}

/// Handle one SSE line. Returns false when pumping must stop, either
/// because an error event was emitted or the receiver is gone.
async fn forward_sse_line(line: &str, tx: &mpsc::Sender<StreamEvent>) -> bool {
    // Lines without a data prefix are keep-alives, comments, or event
    // names; all are ignored.
    let Some(payload) = line.strip_prefix("data:") else {
        return true;
    };
    let payload = payload.trim_start();
    if payload.is_empty() || payload == "[DONE]" {
        return true;
    }

    let chunk: GenerateContentChunk = match serde_json::from_str(payload) {
        Ok(chunk) => chunk,
        Err(e) => {
            warn!(error = %e, "Skipping unparseable stream chunk");
            return true;
        }
    };

    if let Some(error) = chunk.error {
        let _ = tx
            .send(StreamEvent::Error(format!(
                "API error {}: {}",
                error.code, error.message
            )))
            .await;
        return false;
    }

    for candidate in chunk.candidates {
        let Some(content) = candidate.content else {
            continue;
        };
        for part in content.parts {
            if let Some(call) = part.function_call {
                // Tool execution happens on the runtime side; the call
                // surfacing here is informational only.
                debug!(tool = %call.name, "Model requested a tool invocation");
            }
            if !part.text.is_empty() && tx.send(StreamEvent::Fragment(part.text)).await.is_err() {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn pump(chunks: Vec<std::result::Result<&str, String>>) -> Vec<StreamEvent> {
        let (tx, mut rx) = mpsc::channel(64);
        let stream =
            futures::stream::iter(chunks.into_iter().map(|r| r.map(|s| s.as_bytes().to_vec())));
        pump_sse(stream, &tx).await;
        drop(tx);

        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        events
    }

    fn data_line(text: &str) -> String {
        format!(
            "data: {}\n",
            serde_json::json!({
                "candidates": [{"content": {"parts": [{"text": text}]}}]
            })
        )
    }

    #[tokio::test]
    async fn test_pump_forwards_fragments_in_order() {
        let first = data_line("Exec summary. ");
        let second = data_line("Findings.");
        let events = pump(vec![Ok(first.as_str()), Ok(second.as_str())]).await;

        assert_eq!(
            events,
            vec![
                StreamEvent::Fragment("Exec summary. ".to_string()),
                StreamEvent::Fragment("Findings.".to_string()),
                StreamEvent::Completed(String::new()),
            ]
        );
    }

    #[tokio::test]
    async fn test_pump_reassembles_line_split_across_chunks() {
        let line = data_line("split across the wire");
        let (head, tail) = line.split_at(17);
        let events = pump(vec![Ok(head), Ok(tail)]).await;

        assert_eq!(
            events,
            vec![
                StreamEvent::Fragment("split across the wire".to_string()),
                StreamEvent::Completed(String::new()),
            ]
        );
    }

    #[tokio::test]
    async fn test_pump_flushes_trailing_line_without_newline() {
        let line = data_line("no newline");
        let events = pump(vec![Ok(line.trim_end())]).await;

        assert_eq!(
            events,
            vec![
                StreamEvent::Fragment("no newline".to_string()),
                StreamEvent::Completed(String::new()),
            ]
        );
    }

    #[tokio::test]
    async fn test_pump_skips_function_call_parts() {
        let line = format!(
            "data: {}\n",
            serde_json::json!({
                "candidates": [{"content": {"parts": [
                    {"functionCall": {"name": "web_search", "args": {"query": "rust"}}},
                    {"text": "after the call"}
                ]}}]
            })
        );
        let events = pump(vec![Ok(line.as_str())]).await;

        assert_eq!(
            events,
            vec![
                StreamEvent::Fragment("after the call".to_string()),
                StreamEvent::Completed(String::new()),
            ]
        );
    }

    #[tokio::test]
    async fn test_pump_api_error_emits_error_event() {
        let line = r#"data: {"error": {"code": 429, "message": "Quota exceeded"}}
"#;
        let events = pump(vec![Ok(line)]).await;

        assert_eq!(
            events,
            vec![StreamEvent::Error(
                "API error 429: Quota exceeded".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_pump_transport_error_emits_error_event() {
        let line = data_line("partial");
        let events = pump(vec![Ok(line.as_str()), Err("connection reset".to_string())]).await;

        assert_eq!(
            events,
            vec![
                StreamEvent::Fragment("partial".to_string()),
                StreamEvent::Error("connection reset".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_pump_skips_noise_lines() {
        let line = data_line("real content");
        let noisy = format!(": comment\n\ndata: [DONE]\ndata: not json\n{}", line);
        let events = pump(vec![Ok(noisy.as_str())]).await;

        assert_eq!(
            events,
            vec![
                StreamEvent::Fragment("real content".to_string()),
                StreamEvent::Completed(String::new()),
            ]
        );
    }

    #[test]
    fn test_summarize_error_body_extracts_message() {
        let body = r#"{"error": {"code": 403, "message": "Permission denied", "status": "PERMISSION_DENIED"}}"#;
        assert_eq!(summarize_error_body(body), "Permission denied");
    }

    #[test]
    fn test_summarize_error_body_falls_back_to_raw() {
        assert_eq!(summarize_error_body(" not json \n"), "not json");
    }
}
