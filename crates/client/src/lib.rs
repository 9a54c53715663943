//! `stockdesk-client` — composition layer for UI shells.
//!
//! Wires the HTTP transport, the session handle and the product editor
//! together behind one explicitly constructed context object. A UI shell
//! (or the bundled smoke-test binary) holds an [`AppContext`] for its whole
//! lifetime; nothing here is a global.

pub mod context;
pub mod observability;

pub use context::AppContext;
pub use observability::init_tracing;

pub use stockdesk_auth::{
    AuthState, Capability, EDIT_STOCK, GRANT_PERMISSIONS, RouteAccess, SessionSnapshot,
    VIEW_PRODUCTS,
};
pub use stockdesk_core::{AuthError, ProductId, TransportError};
pub use stockdesk_products::{EditorPhase, Field, ProductEditor, SaveOutcome};
pub use stockdesk_session::SessionHandle;
pub use stockdesk_transport::{HttpTransport, Product, ProductPage, ProductQuery};
