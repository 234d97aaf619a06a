//! Console output formatter for reports

use colored::Colorize;
use deepdesk_domain::{AnalysisReport, ResearchReport, TeamReport};

/// Formats reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a complete research report
    pub fn format_research(report: &ResearchReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Research Report"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Topic:".cyan().bold(), report.topic));
        output.push_str(&format!("{} {}\n", "Depth:".cyan().bold(), report.depth));
        output.push_str(&format!("{} {}\n\n", "Model:".cyan().bold(), report.model));
        output.push_str(&report.body);
        output.push('\n');
        output.push_str(&Self::footer());

        output
    }

    /// Format a complete analysis report
    pub fn format_analysis(report: &AnalysisReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Content Analysis"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Focus:".cyan().bold(), report.focus));
        output.push_str(&format!(
            "{} {} characters\n",
            "Content:".cyan().bold(),
            report.content_chars
        ));
        output.push_str(&format!("{} {}\n\n", "Model:".cyan().bold(), report.model));
        output.push_str(&report.body);
        output.push('\n');
        output.push_str(&Self::footer());

        output
    }

    /// Format a team report with one section per specialist
    pub fn format_team(report: &TeamReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Team Research Report"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Topic:".cyan().bold(), report.topic));
        output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), report.model));

        for section in &report.sections {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} ──", section.role.display_name())
                    .yellow()
                    .bold(),
                section.body
            ));
        }

        output.push_str(&Self::section_header("Synthesis"));
        output.push_str(&format!("\n{}\n", report.synthesis));
        output.push_str(&Self::footer());

        output
    }

    /// Format any report as pretty JSON
    pub fn format_json<T: serde::Serialize>(report: &T) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
