//! Typed cell values extracted from records.
//!
//! Every column extraction funnels through [`CellValue`] so the filter and
//! sort code can compare values without knowing which record kind they came
//! from.

use chrono::NaiveDate;
use std::cmp::Ordering;

/// The wire format for date-valued fields (`2024-05-20`).
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single field value extracted from a record for one column.
///
/// Extraction is total: a field the record cannot supply becomes
/// [`CellValue::Missing`], and a date string that does not parse becomes
/// [`CellValue::Text`] so it can still participate in string comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// A textual field, compared case-insensitively.
    Text(String),
    /// A numeric field (sale amounts).
    Number(f64),
    /// A parsed calendar date.
    Date(NaiveDate),
    /// The record has no value for this column.
    Missing,
}

impl CellValue {
    /// Extract a cell from a stored date string.
    ///
    /// Unparseable input falls back to `Text` (string comparison); empty
    /// input is `Missing`.
    pub fn from_date_str(raw: &str) -> Self {
        if raw.is_empty() {
            return CellValue::Missing;
        }
        match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(date) => CellValue::Date(date),
            Err(_) => CellValue::Text(raw.to_string()),
        }
    }

    /// Extract a cell from a numeric field.
    ///
    /// NaN has no place in an ordering, so it maps to `Missing`.
    pub fn from_number(value: f64) -> Self {
        if value.is_nan() {
            CellValue::Missing
        } else {
            CellValue::Number(value)
        }
    }

    /// The value's natural string rendering, used for exact-match filters.
    ///
    /// `Missing` renders as `None` and therefore never matches anything.
    pub fn render(&self) -> Option<String> {
        match self {
            CellValue::Text(text) => Some(text.clone()),
            CellValue::Number(value) => Some(value.to_string()),
            CellValue::Date(date) => Some(date.format(DATE_FORMAT).to_string()),
            CellValue::Missing => None,
        }
    }

    /// Rank used to order cells of different kinds under one column.
    ///
    /// Mixed kinds only arise through fallback paths (an unparseable date
    /// next to parsed ones); ranking keeps the comparison total. `Missing`
    /// ranks last so absent values sort to the end ascending.
    fn kind_rank(&self) -> u8 {
        match self {
            CellValue::Number(_) => 0,
            CellValue::Date(_) => 1,
            CellValue::Text(_) => 2,
            CellValue::Missing => 3,
        }
    }

    /// Compare two cells in ascending sense.
    ///
    /// Text compares by Unicode lowercase folding then code point; the
    /// original leaned on locale collation, which is out of proportion for
    /// this crate's stack.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Number(a), CellValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (CellValue::Missing, CellValue::Missing) => Ordering::Equal,
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}
