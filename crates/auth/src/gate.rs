//! Route/action gate: a pure decision over the current auth state.

use crate::{AuthState, Capability};

/// Outcome of gating a route or action.
///
/// Consumers render accordingly: redirect to login, inline forbidden
/// message, or proceed. The denied capability is carried so the message can
/// name it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    Allow,
    DenyUnauthenticated,
    DenyMissingCapability(Capability),
}

impl RouteAccess {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RouteAccess::Allow)
    }
}

/// Decide whether the current state may enter a route or perform an action.
///
/// No side effects, no caching: the decision is a function of the live
/// state and the requested capability only. `required: None` gates on
/// authentication alone.
pub fn authorize(state: &AuthState, required: Option<&Capability>) -> RouteAccess {
    if !state.is_authenticated() {
        return RouteAccess::DenyUnauthenticated;
    }

    match required {
        Some(capability) if !state.grants(capability) => {
            RouteAccess::DenyMissingCapability(capability.clone())
        }
        _ => RouteAccess::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SessionSnapshot;
    use serde_json::json;

    fn authed(perms: serde_json::Value) -> AuthState {
        SessionSnapshot::from_identity(&json!({
            "authenticated": true,
            "permissions": perms
        }))
        .into()
    }

    #[test]
    fn unknown_and_anonymous_deny_as_unauthenticated() {
        for state in [AuthState::Unknown, AuthState::Anonymous] {
            assert_eq!(
                authorize(&state, Some(&crate::VIEW_PRODUCTS)),
                RouteAccess::DenyUnauthenticated
            );
            assert_eq!(authorize(&state, None), RouteAccess::DenyUnauthenticated);
        }
    }

    #[test]
    fn authenticated_without_capability_requirement_is_allowed() {
        let state = authed(json!([]));
        assert_eq!(authorize(&state, None), RouteAccess::Allow);
    }

    #[test]
    fn missing_capability_is_named_in_the_denial() {
        let state = authed(json!(["view_products"]));
        assert_eq!(
            authorize(&state, Some(&crate::EDIT_STOCK)),
            RouteAccess::DenyMissingCapability(crate::EDIT_STOCK)
        );
    }

    #[test]
    fn wildcard_allows_every_gate() {
        let state = authed(json!(["*"]));
        for cap in [crate::VIEW_PRODUCTS, crate::EDIT_STOCK, crate::GRANT_PERMISSIONS] {
            assert!(authorize(&state, Some(&cap)).is_allowed());
        }
    }
}
