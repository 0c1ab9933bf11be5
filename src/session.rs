// src/session.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const TOKEN_LEN: usize = 13;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque token tying every exchange of one client run to one backend
/// conversation. Not a secret and not guaranteed unique.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an identifier chosen by the caller.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier composed from a user name and a conversation id.
    pub fn for_conversation(user: &str, conversation: &str) -> Self {
        Self(format!("{} - {}", user.trim(), conversation.trim()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Create a fresh session token. Called once at startup; the result is then
// passed explicitly to whoever needs it.
pub fn initialize_session() -> SessionId {
    let mut value = Uuid::new_v4().as_u128();
    let mut token = String::with_capacity(TOKEN_LEN);
    for _ in 0..TOKEN_LEN {
        token.push(ALPHABET[(value % 36) as usize] as char);
        value /= 36;
    }
    tracing::debug!(session_id = %token, "session initialized");
    SessionId(token)
}

/// Pick the session for a run: an explicit id wins, then a user and
/// conversation pair, otherwise a fresh token.
pub fn resolve_session(
    explicit: Option<&str>,
    user: Option<&str>,
    conversation: Option<&str>,
) -> SessionId {
    fn present(s: Option<&str>) -> Option<&str> {
        s.filter(|v| !v.trim().is_empty())
    }
    match (present(explicit), present(user), present(conversation)) {
        (Some(id), _, _) => SessionId::new(id),
        (None, Some(user), Some(conversation)) => SessionId::for_conversation(user, conversation),
        _ => initialize_session(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_short_base36() {
        let sid = initialize_session();
        assert_eq!(sid.as_str().len(), TOKEN_LEN);
        assert!(
            sid.as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }

    #[test]
    fn tokens_differ_between_runs() {
        assert_ne!(initialize_session(), initialize_session());
    }

    #[test]
    fn conversation_id_joins_user_and_conversation() {
        let sid = SessionId::for_conversation(" maria ", "42");
        assert_eq!(sid.as_str(), "maria - 42");
        assert_eq!(sid.to_string(), "maria - 42");
    }

    #[test]
    fn explicit_id_beats_conversation() {
        let sid = resolve_session(Some("fixed"), Some("maria"), Some("42"));
        assert_eq!(sid.as_str(), "fixed");
    }

    #[test]
    fn user_and_conversation_build_the_id() {
        let sid = resolve_session(None, Some("maria"), Some("42"));
        assert_eq!(sid.as_str(), "maria - 42");

        let sid = resolve_session(Some("  "), Some("maria"), Some("42"));
        assert_eq!(sid.as_str(), "maria - 42");
    }

    #[test]
    fn partial_input_falls_back_to_fresh_token() {
        for sid in [
            resolve_session(None, Some("maria"), None),
            resolve_session(None, None, Some("42")),
            resolve_session(None, Some(""), Some("42")),
            resolve_session(None, None, None),
        ] {
            assert_eq!(sid.as_str().len(), TOKEN_LEN);
            assert!(!sid.as_str().contains(" - "));
        }
    }
}
