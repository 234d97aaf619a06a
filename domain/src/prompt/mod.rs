//! Prompt domain
//!
//! Templates and specialist definitions for every prompt the assistant
//! sends to the agent runtime.

pub mod specialist;
pub mod template;

pub use specialist::SpecialistRole;
pub use template::{ANALYSIS_CONTENT_LIMIT, PromptTemplate};
