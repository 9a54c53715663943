//! The endpoint contract consumed by the session and editor state machines.

use std::future::Future;

use serde_json::Value;

use stockdesk_core::{AuthError, ProductId, TransportError};

use crate::product::{Product, ProductPage, ProductQuery, ProductUpdate, SaveReceipt};

/// Backend endpoints, abstracted so state machines can be driven by an
/// in-memory fake in tests.
///
/// Implementations must be freely callable concurrently: no shared mutable
/// state beyond what was fixed at construction (base address, cookie jar
/// internals). Every method suspends at the network boundary and resumes on
/// completion; callers own all sequencing.
pub trait Api: Send + Sync {
    /// `GET /auth/me`. Returns the raw identity payload; normalization is
    /// the caller's concern because the payload shape varies.
    fn fetch_identity(&self) -> impl Future<Output = Result<Value, TransportError>> + Send;

    /// `POST /auth/login`. Success body is ignored beyond status; any
    /// failure (rejection or network) surfaces as [`AuthError`].
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<(), AuthError>> + Send;

    /// `POST /auth/logout`. Callers decide whether the outcome matters.
    fn logout(&self) -> impl Future<Output = Result<(), TransportError>> + Send;

    /// `GET /products` with pagination/search/sort parameters.
    fn list_products(
        &self,
        query: &ProductQuery,
    ) -> impl Future<Output = Result<ProductPage, TransportError>> + Send;

    /// `GET /products/{id}`.
    fn get_product(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Product, TransportError>> + Send;

    /// `PUT /products/{id}` with the full working-copy payload.
    fn update_product(
        &self,
        id: ProductId,
        update: &ProductUpdate,
    ) -> impl Future<Output = Result<SaveReceipt, TransportError>> + Send;
}
