//! `stockdesk-auth` — pure session/authorization types.
//!
//! This crate is intentionally decoupled from HTTP and from the state
//! machine that drives transitions: everything here is a value or a pure
//! predicate over values.

pub mod capability;
pub mod gate;
pub mod snapshot;
pub mod state;

pub use capability::{Capability, EDIT_STOCK, GRANT_PERMISSIONS, VIEW_PRODUCTS};
pub use gate::{RouteAccess, authorize};
pub use snapshot::SessionSnapshot;
pub use state::AuthState;
