//! Trait surface between record kinds and the view state engine.
//!
//! Column access by a runtime-chosen key is done through a closed enum per
//! record kind rather than reflection: each record implements
//! [`TableRecord`] with a column type that knows its own match policy, and
//! extraction goes through [`TableRecord::cell`].

use std::hash::Hash;

use super::cell::CellValue;
use super::filter::MatchPolicy;

/// A sortable/filterable column of one record kind.
///
/// Implemented by the per-kind column enums (`CustomerColumn`,
/// `TaskColumn`, `SaleColumn`).
pub trait Column: Copy + Eq + Hash {
    /// How filter options on this column are interpreted.
    fn match_policy(self) -> MatchPolicy;
}

/// A record that can be rendered through the view state engine.
pub trait TableRecord: Clone {
    /// The closed set of columns for this record kind.
    type Column: Column;

    /// The record's unique identifier within its collection.
    fn record_id(&self) -> u64;

    /// Extract the value of one column.
    ///
    /// Total over well-formed and malformed records alike; fields that
    /// cannot be supplied come back as [`CellValue::Missing`].
    fn cell(&self, column: Self::Column) -> CellValue;
}
