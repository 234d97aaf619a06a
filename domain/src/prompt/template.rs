//! Prompt templates for research and analysis dispatches

use crate::research::depth::ResearchDepth;
use crate::research::focus::AnalysisFocus;
use crate::util::clip_chars;

/// Maximum number of characters of document content forwarded to the agent.
///
/// Anything beyond this is clipped before the prompt is built; the clip is
/// silent and the caller keeps the original length for reporting.
pub const ANALYSIS_CONTENT_LIMIT: usize = 2000;

/// Templates for generating the prompts behind each dispatch
pub struct PromptTemplate;

impl PromptTemplate {
    /// Standing instruction for the research assistant agent
    pub fn assistant_instruction() -> &'static str {
        r#"You are a Professional Research Assistant specializing in technical and business analysis.

YOUR CAPABILITIES:
- Search for current information using web search
- Analyze content for key insights and technical details
- Generate comprehensive summaries with actionable insights
- Provide research recommendations and next steps

RESEARCH METHODOLOGY:
1. Always start by understanding the research topic thoroughly
2. Use web search to gather current information when needed
3. Analyze findings for credibility and relevance
4. Structure your responses with clear sections
5. Provide actionable recommendations

RESPONSE FORMAT:
- Start with an executive summary
- Break down into logical sections
- Use bullet points for key findings
- End with recommendations and next steps

Always be thorough, accurate, and professional in your analysis."#
    }

    /// Query prompt for a research dispatch
    pub fn research_query(topic: &str, depth: ResearchDepth) -> String {
        format!(
            r#"Please conduct {} research on: {}

Please provide:
1. Executive summary
2. Key findings and current developments
3. Technical analysis
4. Business implications
5. Recommendations and next steps

Use all available tools to gather and analyze information."#,
            depth, topic
        )
    }

    /// Query prompt for a document analysis dispatch.
    ///
    /// Content is clipped to [`ANALYSIS_CONTENT_LIMIT`] characters before
    /// interpolation.
    pub fn analysis_query(content: &str, focus: AnalysisFocus) -> String {
        format!(
            r#"Please analyze the following document content with {} analysis:

{}

Provide:
- Key insights and main arguments
- Technical/business implications
- Strengths and weaknesses
- Recommendations"#,
            focus,
            clip_chars(content, ANALYSIS_CONTENT_LIMIT)
        )
    }

    /// Query prompt for merging specialist findings into a single report
    pub fn synthesis_query(topic: &str, sections: &[(String, String)]) -> String {
        let mut prompt = format!(
            r#"Research topic: {}

Specialist findings:
"#,
            topic
        );

        for (specialist, findings) in sections {
            prompt.push_str(&format!("\n--- {} ---\n{}\n", specialist, findings));
        }

        prompt.push_str(
            r#"
Based on all findings above, please provide:

1. **Combined Insights**: The strongest conclusions across specialists

2. **Key Recommendations**: Concrete next steps (bullet list)

3. **Open Questions**: Gaps the specialists could not settle (bullet list)

Format your response with clear markdown headers."#,
        );

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_research_query_format() {
        let prompt = PromptTemplate::research_query("AI Agents in Healthcare", ResearchDepth::Deep);
        assert!(prompt.starts_with("Please conduct deep research on: AI Agents in Healthcare"));
        assert!(prompt.contains("1. Executive summary"));
        assert!(prompt.contains("Use all available tools"));
    }

    #[test]
    fn test_analysis_query_format() {
        let prompt = PromptTemplate::analysis_query("Some document text.", AnalysisFocus::Business);
        assert!(prompt.contains("with business analysis:"));
        assert!(prompt.contains("Some document text."));
        assert!(prompt.contains("Strengths and weaknesses"));
    }

    #[test]
    fn test_analysis_query_clips_long_content() {
        let content = "x".repeat(ANALYSIS_CONTENT_LIMIT + 500);
        let prompt = PromptTemplate::analysis_query(&content, AnalysisFocus::Comprehensive);
        assert!(prompt.contains(&"x".repeat(ANALYSIS_CONTENT_LIMIT)));
        assert!(!prompt.contains(&"x".repeat(ANALYSIS_CONTENT_LIMIT + 1)));
    }

    #[test]
    fn test_synthesis_query_format() {
        let sections = vec![
            (
                "Technical Researcher".to_string(),
                "Architecture looks sound.".to_string(),
            ),
            (
                "Business Analyst".to_string(),
                "Market is growing.".to_string(),
            ),
        ];
        let prompt = PromptTemplate::synthesis_query("quantum computing", &sections);
        assert!(prompt.contains("Research topic: quantum computing"));
        assert!(prompt.contains("--- Technical Researcher ---"));
        assert!(prompt.contains("Market is growing."));
        assert!(prompt.contains("Combined Insights"));
    }

    #[test]
    fn test_assistant_instruction_mentions_methodology() {
        let instruction = PromptTemplate::assistant_instruction();
        assert!(instruction.contains("Professional Research Assistant"));
        assert!(instruction.contains("RESEARCH METHODOLOGY"));
    }
}
