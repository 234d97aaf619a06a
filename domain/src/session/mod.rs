//! Agent session domain.
//!
//! - [`entities::SessionId`]: identity of an ephemeral agent session
//! - [`stream::StreamEvent`]: events in a streamed agent response

pub mod entities;
pub mod stream;
