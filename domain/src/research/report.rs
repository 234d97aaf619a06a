//! Report entities produced by research and analysis dispatches

use crate::core::model::Model;
use crate::prompt::specialist::SpecialistRole;
use crate::research::depth::ResearchDepth;
use crate::research::focus::AnalysisFocus;
use serde::Serialize;

/// The outcome of a research dispatch (Entity)
///
/// The body is whatever the agent produced. When the dispatch failed,
/// the body carries the failure notice instead; callers never see an
/// error for a research run.
#[derive(Debug, Clone, Serialize)]
pub struct ResearchReport {
    pub topic: String,
    pub depth: ResearchDepth,
    pub model: Model,
    pub body: String,
}

impl ResearchReport {
    pub fn new(
        topic: impl Into<String>,
        depth: ResearchDepth,
        model: Model,
        body: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            depth,
            model,
            body: body.into(),
        }
    }
}

/// The outcome of a document analysis dispatch (Entity)
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub focus: AnalysisFocus,
    /// Character count of the original content, before any clipping
    pub content_chars: usize,
    pub model: Model,
    pub body: String,
}

impl AnalysisReport {
    pub fn new(
        focus: AnalysisFocus,
        content_chars: usize,
        model: Model,
        body: impl Into<String>,
    ) -> Self {
        Self {
            focus,
            content_chars,
            model,
            body: body.into(),
        }
    }
}

/// One specialist's contribution to a team research run
#[derive(Debug, Clone, Serialize)]
pub struct TeamSection {
    pub role: SpecialistRole,
    pub body: String,
}

impl TeamSection {
    pub fn new(role: SpecialistRole, body: impl Into<String>) -> Self {
        Self {
            role,
            body: body.into(),
        }
    }
}

/// The outcome of a team research dispatch (Entity)
///
/// Specialist sections are collected in dispatch order and then merged
/// by a synthesis pass. A failed specialist contributes its failure
/// notice as a section body like any other result.
#[derive(Debug, Clone, Serialize)]
pub struct TeamReport {
    pub topic: String,
    pub model: Model,
    pub sections: Vec<TeamSection>,
    pub synthesis: String,
}

impl TeamReport {
    pub fn new(
        topic: impl Into<String>,
        model: Model,
        sections: Vec<TeamSection>,
        synthesis: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            model,
            sections,
            synthesis: synthesis.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_research_report_serializes_depth_lowercase() {
        let report = ResearchReport::new(
            "rust async",
            ResearchDepth::Deep,
            Model::default(),
            "findings",
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["depth"], "deep");
        assert_eq!(json["model"], "gemini-2.0-flash-exp");
    }

    #[test]
    fn test_analysis_report_keeps_original_char_count() {
        let report = AnalysisReport::new(AnalysisFocus::Technical, 5000, Model::default(), "body");
        assert_eq!(report.content_chars, 5000);
    }

    #[test]
    fn test_team_report_preserves_section_order() {
        let report = TeamReport::new(
            "quantum computing",
            Model::default(),
            vec![
                TeamSection::new(SpecialistRole::Technical, "tech findings"),
                TeamSection::new(SpecialistRole::Business, "biz findings"),
            ],
            "merged view",
        );
        assert_eq!(report.sections[0].role, SpecialistRole::Technical);
        assert_eq!(report.sections[1].role, SpecialistRole::Business);
    }
}
