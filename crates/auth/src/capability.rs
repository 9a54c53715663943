use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Capability identifier.
///
/// Capabilities are modeled as opaque strings (e.g. "edit_stock") issued by
/// the server; the client never interprets them beyond string equality.
/// The special wildcard capability `"*"` means "all capabilities granted".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(Cow<'static, str>);

/// View the product list and product detail routes.
pub const VIEW_PRODUCTS: Capability = Capability::well_known("view_products");

/// Edit stock fields on a product record.
pub const EDIT_STOCK: Capability = Capability::well_known("edit_stock");

/// Manage other users' permission grants (admin routes).
pub const GRANT_PERMISSIONS: Capability = Capability::well_known("grant_permissions");

impl Capability {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub const fn well_known(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.as_str() == "*"
    }
}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Capability {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}
