//! Tool Registry
//!
//! The [`ToolRegistry`] holds the merged [`ToolSpec`] declared to the
//! agent and routes invocations to the matching implementation by name.
//!
//! # Usage
//!
//! ```ignore
//! use deepdesk_infrastructure::tools::ToolRegistry;
//!
//! let registry = ToolRegistry::new();
//! assert!(registry.has_tool("web_search"));
//!
//! let call = ToolCall::new("web_search").with_arg("query", "rust");
//! let result = registry.invoke(&call);
//! assert!(result.is_success());
//! ```

use deepdesk_domain::tool::{
    entities::{ToolCall, ToolSpec},
    value_objects::{ToolError, ToolResult},
};

use crate::tools::{analyze, search, summary};

/// Registry of the built-in research tools
///
/// Dispatch is synchronous: every built-in tool computes its output
/// locally without touching the network or the file system.
pub struct ToolRegistry {
    /// Merged tool specification
    tool_spec: ToolSpec,
}

impl ToolRegistry {
    /// Create a registry with all research tools
    pub fn new() -> Self {
        Self {
            tool_spec: crate::tools::research_tool_spec(),
        }
    }

    /// Get the tool specification declared to the agent
    pub fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    /// Check whether a tool is registered
    pub fn has_tool(&self, name: &str) -> bool {
        self.tool_spec.get(name).is_some()
    }

    /// Invoke a tool by name
    ///
    /// Unknown names produce a `NOT_FOUND` failure result instead of an
    /// error so callers can report every invocation uniformly.
    pub fn invoke(&self, call: &ToolCall) -> ToolResult {
        match call.tool_name.as_str() {
            search::WEB_SEARCH => search::execute_web_search(call),
            analyze::ANALYZE_CONTENT => analyze::execute_analyze_content(call),
            summary::GENERATE_SUMMARY => summary::execute_generate_summary(call),
            _ => {
                tracing::warn!(tool = %call.tool_name, "Unknown tool requested");
                ToolResult::failure(&call.tool_name, ToolError::not_found(&call.tool_name))
            }
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_declares_all_tools() {
        let registry = ToolRegistry::new();

        assert_eq!(registry.tool_spec().len(), 3);
        assert!(registry.has_tool("web_search"));
        assert!(registry.has_tool("analyze_content"));
        assert!(registry.has_tool("generate_summary"));
    }

    #[test]
    fn test_registry_routes_by_name() {
        let registry = ToolRegistry::new();

        let call = ToolCall::new("web_search").with_arg("query", "topic");
        let result = registry.invoke(&call);

        assert!(result.is_success());
        assert!(result.output().unwrap().contains("'topic'"));
    }

    #[test]
    fn test_registry_unknown_tool() {
        let registry = ToolRegistry::new();

        let call = ToolCall::new("fetch_page");
        let result = registry.invoke(&call);

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "NOT_FOUND");
        assert_eq!(result.tool_name, "fetch_page");
    }
}
