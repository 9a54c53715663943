//! `stockdesk-core` — shared client primitives.
//!
//! This crate contains the error taxonomy and identifier types used across
//! the client; no IO, no shared mutable state.

pub mod error;
pub mod id;

pub use error::{AuthError, TransportError};
pub use id::ProductId;
