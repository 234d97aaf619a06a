//! Web search tool: web_search

use deepdesk_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    value_objects::ToolResult,
};

/// Tool name constant
pub const WEB_SEARCH: &str = "web_search";

/// Get the tool definition for web_search
pub fn web_search_definition() -> ToolDefinition {
    ToolDefinition::new(
        WEB_SEARCH,
        "Search the web for current information about a topic",
    )
    .with_parameter(ToolParameter::new(
        "query",
        "The search query to look up",
        true,
    ))
}

/// Execute the web_search tool
///
/// Returns canned results. A live deployment would route this through a
/// search backend; the declaration and invocation plumbing is identical.
pub fn execute_web_search(call: &ToolCall) -> ToolResult {
    let query = call.get_string("query").unwrap_or_default();

    ToolResult::success(
        WEB_SEARCH,
        format!(
            "Search results for '{}': Latest information shows this is a trending topic with multiple recent developments in the field.",
            query
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_search_definition() {
        let def = web_search_definition();

        assert_eq!(def.name, "web_search");
        assert_eq!(def.parameters.len(), 1);
        assert_eq!(def.parameters[0].name, "query");
        assert!(def.parameters[0].required);
    }

    #[test]
    fn test_web_search_embeds_query() {
        let call = ToolCall::new(WEB_SEARCH).with_arg("query", "rust async runtimes");
        let result = execute_web_search(&call);

        assert!(result.is_success());
        assert_eq!(
            result.output().unwrap(),
            "Search results for 'rust async runtimes': Latest information shows this is a trending topic with multiple recent developments in the field."
        );
    }

    #[test]
    fn test_web_search_missing_query_defaults_empty() {
        let call = ToolCall::new(WEB_SEARCH);
        let result = execute_web_search(&call);

        assert!(result.is_success());
        assert!(result.output().unwrap().starts_with("Search results for '':"));
    }
}
