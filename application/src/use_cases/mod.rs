//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod analyze_document;
pub mod research_topic;
pub(crate) mod shared;
pub mod team_research;
