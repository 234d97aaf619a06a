//! Research depth value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// How thorough a research pass should be (Value Object)
///
/// The depth is interpolated verbatim into the research prompt, so the
/// wire form and the display form are the same lowercase word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResearchDepth {
    /// A quick survey of the topic
    Quick,
    /// Balanced coverage, the default
    #[default]
    Comprehensive,
    /// Exhaustive treatment with technical detail
    Deep,
}

impl ResearchDepth {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResearchDepth::Quick => "quick",
            ResearchDepth::Comprehensive => "comprehensive",
            ResearchDepth::Deep => "deep",
        }
    }
}

impl std::fmt::Display for ResearchDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ResearchDepth {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quick" => Ok(ResearchDepth::Quick),
            "comprehensive" => Ok(ResearchDepth::Comprehensive),
            "deep" => Ok(ResearchDepth::Deep),
            other => Err(DomainError::UnknownDepth(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_default_is_comprehensive() {
        assert_eq!(ResearchDepth::default(), ResearchDepth::Comprehensive);
    }

    #[test]
    fn test_depth_parse_is_case_insensitive() {
        let depth: ResearchDepth = "DEEP".parse().unwrap();
        assert_eq!(depth, ResearchDepth::Deep);
    }

    #[test]
    fn test_depth_parse_rejects_unknown() {
        let err = "shallow".parse::<ResearchDepth>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown research depth: shallow");
    }

    #[test]
    fn test_depth_roundtrip() {
        for depth in [
            ResearchDepth::Quick,
            ResearchDepth::Comprehensive,
            ResearchDepth::Deep,
        ] {
            let parsed: ResearchDepth = depth.as_str().parse().unwrap();
            assert_eq!(parsed, depth);
        }
    }
}
