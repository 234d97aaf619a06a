//! Research domain.
//!
//! - [`depth::ResearchDepth`]: how thorough a research pass should be
//! - [`focus::AnalysisFocus`]: the lens for document analysis
//! - [`report::ResearchReport`] and friends: dispatch results

pub mod depth;
pub mod focus;
pub mod report;
