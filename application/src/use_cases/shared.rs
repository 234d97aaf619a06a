//! Shared helpers for use cases.
//!
//! All three dispatchers follow the same session lifecycle: create an
//! ephemeral session, send one query, collect the streamed response.
//! The helpers here own that lifecycle so the use cases only differ in
//! prompt construction and failure wording.

use crate::ports::agent_gateway::{AgentGateway, GatewayError};
use deepdesk_domain::AgentProfile;
use tracing::debug;

/// Dispatch a prompt to the default research assistant agent.
///
/// One session per call. The session is dropped as soon as the stream
/// has been collected.
pub(crate) async fn dispatch(
    gateway: &dyn AgentGateway,
    prompt: &str,
) -> Result<String, GatewayError> {
    let session = gateway.create_session().await?;
    debug!(session_id = %session.id(), "dispatching query");
    let handle = session.stream_query(prompt).await?;
    handle.collect_text().await
}

/// Dispatch a prompt to an agent described by `profile`.
pub(crate) async fn dispatch_with_profile(
    gateway: &dyn AgentGateway,
    profile: &AgentProfile,
    prompt: &str,
) -> Result<String, GatewayError> {
    let session = gateway.create_session_with_profile(profile).await?;
    debug!(session_id = %session.id(), agent = %profile.name, "dispatching query");
    let handle = session.stream_query(prompt).await?;
    handle.collect_text().await
}
