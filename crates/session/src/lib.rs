//! `stockdesk-session` — the session state machine.
//!
//! Owns the current [`AuthState`] and drives login/logout/refresh against
//! the transport. Constructed explicitly at application start and passed by
//! handle to consumers; there is no global session singleton.

pub mod handle;

pub use handle::SessionHandle;
