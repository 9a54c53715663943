//! The working copy of a product under edit.

use serde::{Deserialize, Serialize};

use stockdesk_transport::{Product, ProductUpdate};

use crate::validate::{ValidationReport, is_digit_code, parse_quantity};

/// Editable fields of a product record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Sku,
    Barcode,
    OuterBarcode,
    Stock,
    LowStockThreshold,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Sku,
        Field::Barcode,
        Field::OuterBarcode,
        Field::Stock,
        Field::LowStockThreshold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Sku => "sku",
            Field::Barcode => "barcode",
            Field::OuterBarcode => "outer_barcode",
            Field::Stock => "stock",
            Field::LowStockThreshold => "low_stock_threshold",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-modified draft of the editable fields, held as entered (strings).
///
/// Quantities stay strings until save so that a half-typed value is
/// representable; validation decides whether they parse. Absent optional
/// barcodes are represented as empty strings, matching the server's
/// "empty string means unset" convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    sku: String,
    barcode: String,
    outer_barcode: String,
    stock: String,
    low_stock_threshold: String,
}

impl ProductDraft {
    /// Derive a draft field-by-field from a server-confirmed record.
    pub fn from_record(record: &Product) -> Self {
        Self {
            sku: record.sku.clone(),
            barcode: record.barcode.clone().unwrap_or_default(),
            outer_barcode: record.outer_barcode.clone().unwrap_or_default(),
            stock: record.stock.to_string(),
            low_stock_threshold: record.low_stock_threshold.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Sku => &self.sku,
            Field::Barcode => &self.barcode,
            Field::OuterBarcode => &self.outer_barcode,
            Field::Stock => &self.stock,
            Field::LowStockThreshold => &self.low_stock_threshold,
        }
    }

    /// Replace one field with user input. Values are trimmed on entry, so
    /// dirtiness comparisons see the same trimming the save payload will.
    pub fn set(&mut self, field: Field, raw: &str) {
        let value = raw.trim().to_owned();
        match field {
            Field::Sku => self.sku = value,
            Field::Barcode => self.barcode = value,
            Field::OuterBarcode => self.outer_barcode = value,
            Field::Stock => self.stock = value,
            Field::LowStockThreshold => self.low_stock_threshold = value,
        }
    }

    /// Apply the per-field rules; an empty report gates save.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        if !is_digit_code(&self.sku, 8) {
            report.flag(Field::Sku, "SKU must be exactly 8 digits");
        }
        if !self.barcode.is_empty() && !is_digit_code(&self.barcode, 13) {
            report.flag(Field::Barcode, "Barcode must be 13 digits or blank");
        }
        if !self.outer_barcode.is_empty() && !is_digit_code(&self.outer_barcode, 13) {
            report.flag(Field::OuterBarcode, "Outer barcode must be 13 digits or blank");
        }
        if parse_quantity(&self.stock).is_none() {
            report.flag(Field::Stock, "Stock must be a non-negative integer");
        }
        if parse_quantity(&self.low_stock_threshold).is_none() {
            report.flag(
                Field::LowStockThreshold,
                "Low stock threshold must be a non-negative integer",
            );
        }
        report
    }

    /// Type-aware comparison against the pristine copy: quantities compare
    /// as numbers (an unparseable quantity counts as dirty), text fields as
    /// entered, with the pristine `None` barcode equal to an empty draft.
    pub fn is_dirty(&self, pristine: &Product) -> bool {
        if self.sku != pristine.sku {
            return true;
        }
        if self.barcode != pristine.barcode.as_deref().unwrap_or("") {
            return true;
        }
        if self.outer_barcode != pristine.outer_barcode.as_deref().unwrap_or("") {
            return true;
        }
        if parse_quantity(&self.stock) != Some(pristine.stock).filter(|v| *v >= 0) {
            return true;
        }
        parse_quantity(&self.low_stock_threshold)
            != Some(pristine.low_stock_threshold).filter(|v| *v >= 0)
    }

    /// Build the full save payload. Fails with the validation report when
    /// any rule is violated, so an invalid draft can never reach the wire.
    pub fn to_update(&self) -> Result<ProductUpdate, ValidationReport> {
        let report = self.validate();
        if !report.is_valid() {
            return Err(report);
        }
        let (Some(stock), Some(low_stock_threshold)) = (
            parse_quantity(&self.stock),
            parse_quantity(&self.low_stock_threshold),
        ) else {
            return Err(report);
        };

        Ok(ProductUpdate {
            sku: self.sku.clone(),
            // Blank is the explicit "unset" marker, never omitted.
            barcode: self.barcode.clone(),
            outer_barcode: self.outer_barcode.clone(),
            stock,
            low_stock_threshold,
        })
    }
}
