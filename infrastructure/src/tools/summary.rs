//! Summary generation tool: generate_summary

use deepdesk_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    value_objects::ToolResult,
};

/// Tool name constant
pub const GENERATE_SUMMARY: &str = "generate_summary";

/// Get the tool definition for generate_summary
pub fn generate_summary_definition() -> ToolDefinition {
    ToolDefinition::new(
        GENERATE_SUMMARY,
        "Generate a concise summary of content with optional bullet points",
    )
    .with_parameter(ToolParameter::new(
        "content",
        "The content to summarize",
        true,
    ))
    .with_parameter(
        ToolParameter::new(
            "bullet_points",
            "Whether to use bullet points format",
            false,
        )
        .with_type("boolean"),
    )
}

/// Execute the generate_summary tool
///
/// bullet_points defaults to true when absent or not a boolean.
pub fn execute_generate_summary(call: &ToolCall) -> ToolResult {
    let content = call.get_string("content").unwrap_or_default();
    let bullet_points = call.get_bool("bullet_points").unwrap_or(true);

    let output = if bullet_points {
        format!(
            "Summary of {} characters:\n\u{2022} Key point 1: Main concept\n\u{2022} Key point 2: Important details\n\u{2022} Key point 3: Future implications",
            content.chars().count()
        )
    } else {
        "Summary: The content discusses important developments in the field, highlighting key innovations and their potential impact.".to_string()
    };

    ToolResult::success(GENERATE_SUMMARY, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_summary_definition() {
        let def = generate_summary_definition();

        assert_eq!(def.name, "generate_summary");
        assert_eq!(def.parameters[1].param_type, "boolean");
    }

    #[test]
    fn test_generate_summary_bullets_by_default() {
        let call = ToolCall::new(GENERATE_SUMMARY).with_arg("content", "0123456789");
        let result = execute_generate_summary(&call);

        let output = result.output().unwrap();
        assert!(output.starts_with("Summary of 10 characters:"));
        assert_eq!(output.matches('\u{2022}').count(), 3);
    }

    #[test]
    fn test_generate_summary_prose_form() {
        let call = ToolCall::new(GENERATE_SUMMARY)
            .with_arg("content", "0123456789")
            .with_arg("bullet_points", false);
        let result = execute_generate_summary(&call);

        assert_eq!(
            result.output().unwrap(),
            "Summary: The content discusses important developments in the field, highlighting key innovations and their potential impact."
        );
    }
}
