//! Agent domain module
//!
//! Describes the agents the assistant creates on the external runtime.

pub mod profile;

pub use profile::AgentProfile;
