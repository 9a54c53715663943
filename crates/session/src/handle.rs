//! Shared handle over the authentication/permission state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockdesk_auth::{AuthState, Capability, RouteAccess, SessionSnapshot, authorize};
use stockdesk_core::AuthError;
use stockdesk_transport::Api;

struct Shared<A> {
    api: A,
    state: RwLock<AuthState>,
    // Session generation. Bumped on logout so responses issued against the
    // old session are discarded instead of resurrecting it.
    epoch: AtomicU64,
}

/// Cheaply clonable handle to one session.
///
/// All clones observe the same state. Operations suspend only at the
/// network boundary; the state lock is never held across an `.await`, so
/// overlapping operations interleave freely and converge by completion
/// order (the last response to complete installs the final snapshot,
/// regardless of issue order).
pub struct SessionHandle<A> {
    inner: Arc<Shared<A>>,
}

impl<A> Clone for SessionHandle<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: Api> SessionHandle<A> {
    /// Create a session in the `Unknown` state. Call [`refresh`] once at
    /// startup to resolve it.
    ///
    /// [`refresh`]: SessionHandle::refresh
    pub fn new(api: A) -> Self {
        Self {
            inner: Arc::new(Shared {
                api,
                state: RwLock::new(AuthState::Unknown),
                epoch: AtomicU64::new(0),
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, AuthState> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, AuthState> {
        self.inner.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current state, cloned.
    pub fn state(&self) -> AuthState {
        self.read().clone()
    }

    /// Pure capability query; false in `Unknown` and `Anonymous`.
    pub fn has(&self, capability: &Capability) -> bool {
        self.read().grants(capability)
    }

    /// Gate a route or action against the current state.
    pub fn guard(&self, required: Option<&Capability>) -> RouteAccess {
        authorize(&self.read(), required)
    }

    /// Re-resolve the session from the identity endpoint.
    ///
    /// Never surfaces an error: a failed identity check (cold start, expired
    /// cookie, network down) resolves to `Anonymous`. The discarded failure
    /// is logged at debug. Safe to call concurrently with itself.
    pub async fn refresh(&self) {
        let issued = self.inner.epoch.load(Ordering::Acquire);

        let next = match self.inner.api.fetch_identity().await {
            Ok(raw) => AuthState::from(SessionSnapshot::from_identity(&raw)),
            Err(err) => {
                tracing::debug!(error = %err, "identity check failed; resolving to anonymous");
                AuthState::Anonymous
            }
        };

        let mut state = self.write();
        if self.inner.epoch.load(Ordering::Acquire) != issued {
            tracing::debug!("discarding identity response from a superseded session");
            return;
        }
        *state = next;
    }

    /// Submit credentials.
    ///
    /// On success, an optimistic snapshot (`authenticated`, permissions
    /// still empty) is installed immediately so permission-gated navigation
    /// is not bounced mid-flight, then a refresh fetches the authoritative
    /// permission set. On rejection the state is untouched and the server's
    /// message is returned for the login form. A login response arriving
    /// after `logout()` is discarded like any other stale response: no
    /// optimistic write, no confirming refresh.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let issued = self.inner.epoch.load(Ordering::Acquire);
        self.inner.api.login(username, password).await?;

        {
            let mut state = self.write();
            if self.inner.epoch.load(Ordering::Acquire) != issued {
                tracing::debug!("discarding login response from a superseded session");
                return Ok(());
            }
            tracing::info!(username, "login accepted");
            *state = AuthState::Authenticated(SessionSnapshot::optimistic_login(username));
        }

        self.refresh().await;
        Ok(())
    }

    /// Sign out. Always locally succeeds.
    ///
    /// The epoch bump discards any in-flight refresh; the server-side
    /// sign-out is best-effort and its failure is intentionally swallowed
    /// (logged at warn) — this is the one call site allowed to do so.
    pub async fn logout(&self) {
        self.inner.epoch.fetch_add(1, Ordering::AcqRel);
        *self.write() = AuthState::Anonymous;

        if let Err(err) = self.inner.api.logout().await {
            tracing::warn!(error = %err, "logout request failed; session cleared locally");
        }
        tracing::info!("signed out");
    }
}
