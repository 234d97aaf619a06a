//! Streaming events for agent session communication.
//!
//! [`StreamEvent`] represents individual events in a streamed agent
//! response, enabling incremental consumption of model output as it is
//! generated.

/// An event in a streamed agent response.
///
/// Used to bridge infrastructure-level streaming (e.g., SSE chunks from
/// the Vertex AI endpoint) to the application layer. A well-formed stream
/// is zero or more `Fragment`s followed by at most one terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A text chunk of the response, in arrival order.
    Fragment(String),
    /// The complete response text (signals stream end).
    Completed(String),
    /// An error that occurred during streaming (signals stream end).
    Error(String),
}

impl StreamEvent {
    /// Returns the text content if this is a Fragment or Completed event.
    pub fn text(&self) -> Option<&str> {
        match self {
            StreamEvent::Fragment(s) | StreamEvent::Completed(s) => Some(s),
            StreamEvent::Error(_) => None,
        }
    }

    /// Returns true if this event signals the end of the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Completed(_) | StreamEvent::Error(_))
    }
}
