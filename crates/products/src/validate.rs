//! Per-field validation report.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::draft::Field;

/// Field name → violation message. An absent key means the field is valid;
/// an empty report means the draft may be saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    violations: BTreeMap<Field, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violation(&self, field: Field) -> Option<&str> {
        self.violations.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.violations.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub(crate) fn flag(&mut self, field: Field, message: impl Into<String>) {
        self.violations.insert(field, message.into());
    }
}

/// Exactly `len` ASCII digits, nothing else.
pub(crate) fn is_digit_code(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// Non-negative integer in decimal notation.
pub(crate) fn parse_quantity(value: &str) -> Option<i64> {
    value.parse::<i64>().ok().filter(|v| *v >= 0)
}
