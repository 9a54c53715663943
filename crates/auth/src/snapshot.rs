//! The authentication/permission snapshot.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::Capability;

/// Immutable view of "who is signed in and what may they do".
///
/// Snapshots are replaced wholesale on every login/logout/refresh, never
/// mutated in place. An unauthenticated snapshot always has an empty
/// permission set and no username; the constructors enforce this.
///
/// `optimistic` marks the short-lived snapshot installed right after a
/// successful login, before the authoritative permission set has arrived.
/// Consumers that care (e.g. rendering an admin-only view) can treat it as
/// provisional; it is always superseded by the follow-up refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    authenticated: bool,
    username: Option<String>,
    permissions: BTreeSet<String>,
    optimistic: bool,
}

impl SessionSnapshot {
    /// The canonical signed-out value.
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            username: None,
            permissions: BTreeSet::new(),
            optimistic: false,
        }
    }

    /// Provisional snapshot installed between a successful login and the
    /// refresh that confirms it. Permissions are deliberately empty.
    pub fn optimistic_login(username: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            username: Some(username.into()),
            permissions: BTreeSet::new(),
            optimistic: true,
        }
    }

    /// Normalize a raw identity payload into a snapshot.
    ///
    /// The backend has shipped more than one shape for `/auth/me`, so the
    /// rules are deliberately permissive:
    ///
    /// - `authenticated`: the explicit boolean field when present, else
    ///   true iff a non-null `user` object or `user_id` field is present.
    ///   A present-but-non-boolean `authenticated` value (number, string,
    ///   null) does not count as explicit — the presence derivation
    ///   applies, rather than any truthiness coercion.
    /// - `username`: top-level `username`, else `user.username`, else none.
    /// - `permissions`: the `permissions` field when it is an array (string
    ///   entries only), else empty.
    ///
    /// A payload that normalizes to unauthenticated always yields the
    /// canonical anonymous value regardless of what else it carried.
    pub fn from_identity(raw: &Value) -> Self {
        let authenticated = match raw.get("authenticated") {
            Some(Value::Bool(b)) => *b,
            _ => {
                raw.get("user").is_some_and(|v| !v.is_null())
                    || raw.get("user_id").is_some_and(|v| !v.is_null())
            }
        };

        if !authenticated {
            return Self::anonymous();
        }

        let username = raw
            .get("username")
            .and_then(Value::as_str)
            .or_else(|| {
                raw.get("user")
                    .and_then(|u| u.get("username"))
                    .and_then(Value::as_str)
            })
            .map(str::to_owned);

        let permissions = raw
            .get("permissions")
            .and_then(Value::as_array)
            .map(|list| {
                list.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            authenticated: true,
            username,
            permissions,
            optimistic: false,
        }
    }

    pub fn authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn permissions(&self) -> &BTreeSet<String> {
        &self.permissions
    }

    pub fn is_optimistic(&self) -> bool {
        self.optimistic
    }

    /// True iff the set contains the wildcard or the exact token.
    pub fn grants(&self, capability: &Capability) -> bool {
        self.permissions.contains("*") || self.permissions.contains(capability.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn explicit_authenticated_flag_wins_over_user_presence() {
        let snap = SessionSnapshot::from_identity(&json!({
            "authenticated": false,
            "user": { "user_id": 3, "username": "root" },
            "permissions": ["*"]
        }));
        assert_eq!(snap, SessionSnapshot::anonymous());
    }

    #[test]
    fn non_boolean_authenticated_field_defers_to_user_presence() {
        // Not a boolean, no user fields: anonymous.
        let alone = SessionSnapshot::from_identity(&json!({ "authenticated": 1 }));
        assert_eq!(alone, SessionSnapshot::anonymous());

        // Not a boolean, but a user id is present: authenticated.
        let with_user = SessionSnapshot::from_identity(&json!({
            "authenticated": null,
            "user_id": 5,
            "permissions": ["view_products"]
        }));
        assert!(with_user.authenticated());
        assert!(with_user.permissions().contains("view_products"));
    }

    #[test]
    fn user_object_implies_authenticated() {
        let snap = SessionSnapshot::from_identity(&json!({
            "user": { "user_id": 3 },
            "permissions": ["view_products"]
        }));
        assert!(snap.authenticated());
        assert_eq!(snap.username(), None);
        assert!(snap.permissions().contains("view_products"));
    }

    #[test]
    fn null_user_is_anonymous() {
        let snap = SessionSnapshot::from_identity(&json!({ "user": null }));
        assert_eq!(snap, SessionSnapshot::anonymous());
    }

    #[test]
    fn username_falls_back_to_nested_user_object() {
        let top = SessionSnapshot::from_identity(&json!({
            "authenticated": true,
            "username": "alice",
            "user": { "username": "shadowed" }
        }));
        assert_eq!(top.username(), Some("alice"));

        let nested = SessionSnapshot::from_identity(&json!({
            "authenticated": true,
            "user": { "username": "bob" }
        }));
        assert_eq!(nested.username(), Some("bob"));
    }

    #[test]
    fn non_array_permissions_normalize_to_empty() {
        let snap = SessionSnapshot::from_identity(&json!({
            "authenticated": true,
            "permissions": "edit_stock"
        }));
        assert!(snap.permissions().is_empty());
    }

    #[test]
    fn non_string_permission_entries_are_dropped() {
        let snap = SessionSnapshot::from_identity(&json!({
            "authenticated": true,
            "permissions": ["edit_stock", 7, null]
        }));
        assert_eq!(snap.permissions().len(), 1);
    }

    #[test]
    fn unauthenticated_payload_never_keeps_permissions() {
        let snap = SessionSnapshot::from_identity(&json!({
            "permissions": ["*"]
        }));
        assert!(!snap.authenticated());
        assert!(snap.permissions().is_empty());
        assert_eq!(snap.username(), None);
    }

    #[test]
    fn wildcard_grants_any_capability() {
        let snap = SessionSnapshot::from_identity(&json!({
            "authenticated": true,
            "permissions": ["*"]
        }));
        for token in ["view_products", "edit_stock", "grant_permissions", "x"] {
            assert!(snap.grants(&Capability::new(token.to_string())));
        }
    }

    #[test]
    fn optimistic_login_has_no_permissions() {
        let snap = SessionSnapshot::optimistic_login("root");
        assert!(snap.authenticated());
        assert!(snap.is_optimistic());
        assert!(!snap.grants(&crate::EDIT_STOCK));
    }
}
