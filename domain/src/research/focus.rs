//! Analysis focus value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The lens applied when analyzing document content (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisFocus {
    /// Cover themes, implications, and quality in one pass
    #[default]
    Comprehensive,
    /// Implementation and scalability concerns
    Technical,
    /// Market and competitive concerns
    Business,
}

impl AnalysisFocus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisFocus::Comprehensive => "comprehensive",
            AnalysisFocus::Technical => "technical",
            AnalysisFocus::Business => "business",
        }
    }
}

impl std::fmt::Display for AnalysisFocus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AnalysisFocus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "comprehensive" => Ok(AnalysisFocus::Comprehensive),
            "technical" => Ok(AnalysisFocus::Technical),
            "business" => Ok(AnalysisFocus::Business),
            other => Err(DomainError::UnknownFocus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_default_is_comprehensive() {
        assert_eq!(AnalysisFocus::default(), AnalysisFocus::Comprehensive);
    }

    #[test]
    fn test_focus_parse_rejects_unknown() {
        let err = "legal".parse::<AnalysisFocus>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown analysis focus: legal");
    }

    #[test]
    fn test_focus_roundtrip() {
        for focus in [
            AnalysisFocus::Comprehensive,
            AnalysisFocus::Technical,
            AnalysisFocus::Business,
        ] {
            let parsed: AnalysisFocus = focus.as_str().parse().unwrap();
            assert_eq!(parsed, focus);
        }
    }
}
