//! `stockdesk-transport` — the session transport.
//!
//! One trait ([`Api`]) describes the identity and product endpoints; the
//! [`HttpTransport`] implementation speaks JSON over HTTP with a cookie
//! store, so the opaque session credential travels automatically and no
//! application code ever touches a token.

pub mod api;
pub mod http;
pub mod product;

pub use api::Api;
pub use http::HttpTransport;
pub use product::{Product, ProductPage, ProductQuery, ProductUpdate, SaveReceipt, SortOrder};
