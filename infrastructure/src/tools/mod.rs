//! Built-in research tools declared to the agent
//!
//! The assistant carries three tools through its research workflow:
//! web search, content analysis, and summary generation. Each tool lives
//! in its own module with a definition function and an execute function;
//! the [`ToolRegistry`] merges the definitions into the [`ToolSpec`]
//! declared on every default session and routes invocations by name.
//!
//! The implementations return canned template output. They stand in for
//! live integrations while keeping the declaration and invocation
//! plumbing production-shaped.

pub mod analyze;
pub mod search;
pub mod summary;

mod registry;

pub use registry::ToolRegistry;

use deepdesk_domain::tool::entities::ToolSpec;

/// Create the tool specification with all research tools
pub fn research_tool_spec() -> ToolSpec {
    ToolSpec::new()
        .register(search::web_search_definition())
        .register(analyze::analyze_content_definition())
        .register(summary::generate_summary_definition())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_research_tool_spec_names() {
        let spec = research_tool_spec();

        let mut names: Vec<_> = spec.names().collect();
        names.sort_unstable();
        assert_eq!(names, ["analyze_content", "generate_summary", "web_search"]);
    }
}
