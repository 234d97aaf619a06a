//! Tool domain module
//!
//! Defines the abstractions behind the assistant's **Tool System**, the
//! mock research capabilities declared to the agent runtime.
//!
//! # Overview
//!
//! Every tool is defined by a [`ToolDefinition`] (name, description,
//! parameters), invoked via a [`ToolCall`], and returns a [`ToolResult`].
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (registry)   │    │ (invocation) │    │ (output)     │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! Individual tools are lenient about arguments: a missing or mistyped
//! argument falls back to a default rather than failing. The only
//! failure the system models is invoking a name nobody registered,
//! surfaced as a [`ToolError`] by the registry.
//!
//! # Key Types
//!
//! - [`ToolSpec`]: Registry of available tool definitions
//! - [`ToolDefinition`]: Schema for a single tool (name, params)
//! - [`ToolCall`]: An invocation request with arguments
//! - [`ToolResult`]: Invocation outcome
//!
//! # Architecture
//!
//! - **Domain** (this module): Pure definitions, no I/O
//! - **Infrastructure** (`ToolRegistry`): Concrete mock handlers

pub mod entities;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use value_objects::{ToolError, ToolResult};
