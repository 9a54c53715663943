//! Wire shapes for the product endpoints.

use serde::{Deserialize, Serialize};

use stockdesk_core::ProductId;

/// A product record as echoed by the server.
///
/// `name`, `brand` and `price` are server-owned display fields; the
/// editable fields are `sku`, the optional barcodes and the two quantity
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub outer_barcode: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    pub stock: i64,
    #[serde(default)]
    pub low_stock_threshold: i64,
}

/// Sort direction for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Query parameters for `GET /products`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub query: Option<String>,
    pub limit: Option<u32>,
    pub offset: u32,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
}

impl ProductQuery {
    pub const DEFAULT_LIMIT: u32 = 20;
    pub const MAX_LIMIT: u32 = 100;

    /// The limit actually sent: default 20, capped at 100 (server cap,
    /// applied client-side too so pagination math stays honest).
    pub fn effective_limit(&self) -> u32 {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT).min(Self::MAX_LIMIT)
    }

    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(5);
        if let Some(query) = &self.query {
            params.push(("query", query.clone()));
        }
        params.push(("limit", self.effective_limit().to_string()));
        params.push(("offset", self.offset.to_string()));
        if let Some(sort) = &self.sort {
            params.push(("sort", sort.clone()));
        }
        if let Some(order) = self.order {
            params.push(("order", order.as_str().to_string()));
        }
        params
    }
}

/// One page of a product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPage {
    pub total: u64,
    pub items: Vec<Product>,
}

/// Full working-copy payload for `PUT /products/{id}`.
///
/// Optional text fields are sent as explicit empty strings, never omitted:
/// the server treats `""` as "clear this optional value".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub sku: String,
    pub barcode: String,
    pub outer_barcode: String,
    pub stock: i64,
    pub low_stock_threshold: i64,
}

/// Server response to a product update.
///
/// `changed` is false for a no-op write (the payload matched what was
/// already stored); callers surface "Saved" vs "No changes" from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReceipt {
    pub product: Product,
    pub changed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_sends_limit_and_offset_only() {
        let params = ProductQuery::default().params();
        assert_eq!(
            params,
            vec![("limit", "20".to_string()), ("offset", "0".to_string())]
        );
    }

    #[test]
    fn limit_is_capped_at_server_maximum() {
        let query = ProductQuery {
            limit: Some(500),
            ..ProductQuery::default()
        };
        assert_eq!(query.effective_limit(), 100);
    }

    #[test]
    fn full_query_serializes_every_param() {
        let query = ProductQuery {
            query: Some("widget".into()),
            limit: Some(50),
            offset: 100,
            sort: Some("name".into()),
            order: Some(SortOrder::Desc),
        };
        let params = query.params();
        assert_eq!(params.len(), 5);
        assert!(params.contains(&("query", "widget".to_string())));
        assert!(params.contains(&("order", "desc".to_string())));
    }

    #[test]
    fn product_decodes_with_missing_optional_fields() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "product_id": 7,
            "name": "Crate of bolts",
            "sku": "12345678",
            "stock": 4
        }))
        .unwrap();
        assert_eq!(product.barcode, None);
        assert_eq!(product.low_stock_threshold, 0);
    }
}
