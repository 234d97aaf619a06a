//! Session domain entities

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of an agent session (Value Object)
///
/// Sessions are ephemeral and scoped to a single request. The id exists
/// for log correlation, not for lookup: once the streamed response has
/// been consumed the session is gone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh session id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ids_are_unique() {
        let a = SessionId::new();
        let b = SessionId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_session_id_displays_as_uuid() {
        let id = SessionId::new();
        let s = id.to_string();
        // uuid hyphenated form: 8-4-4-4-12
        assert_eq!(s.len(), 36);
        assert_eq!(s.matches('-').count(), 4);
    }
}
