use crate::{Capability, SessionSnapshot};

/// Resolution state of the client session.
///
/// `Unknown` is the cold-start state before the first identity check has
/// come back; it answers every permission query with "no" but is distinct
/// from `Anonymous` so the UI can show a loading shell instead of bouncing
/// to the login route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    Anonymous,
    Authenticated(SessionSnapshot),
}

impl AuthState {
    pub fn snapshot(&self) -> Option<&SessionSnapshot> {
        match self {
            AuthState::Authenticated(snap) => Some(snap),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    /// True before the first refresh has resolved.
    pub fn is_unknown(&self) -> bool {
        matches!(self, AuthState::Unknown)
    }

    /// Pure capability query; false in `Unknown` and `Anonymous`.
    pub fn grants(&self, capability: &Capability) -> bool {
        self.snapshot().is_some_and(|snap| snap.grants(capability))
    }
}

impl From<SessionSnapshot> for AuthState {
    fn from(snapshot: SessionSnapshot) -> Self {
        if snapshot.authenticated() {
            AuthState::Authenticated(snapshot)
        } else {
            AuthState::Anonymous
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_state_grants_nothing() {
        let state = AuthState::Unknown;
        assert!(!state.grants(&crate::VIEW_PRODUCTS));
        assert!(!state.is_authenticated());
    }

    #[test]
    fn snapshot_conversion_routes_on_authenticated_flag() {
        let anon: AuthState = SessionSnapshot::anonymous().into();
        assert_eq!(anon, AuthState::Anonymous);

        let authed: AuthState =
            SessionSnapshot::from_identity(&json!({ "authenticated": true })).into();
        assert!(authed.is_authenticated());
    }
}
