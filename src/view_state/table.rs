//! Per-table view state: the user's current sort and filter selections.

use chrono::NaiveDate;

use super::filter::{apply_filters, FilterMap};
use super::record::{Column, TableRecord};
use super::sort::{apply_sort, SortDirection};

/// The transient view selections for one record table.
///
/// Held by the UI layer only, never persisted. Exactly one column can be
/// the active sort at a time; toggling it flips direction, picking a new
/// column resets to ascending.
#[derive(Debug, Clone)]
pub struct TableViewState<C: Column> {
    sort: Option<(C, SortDirection)>,
    filters: FilterMap<C>,
}

impl<C: Column> Default for TableViewState<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Column> TableViewState<C> {
    /// Fresh view state: no sort, no filters.
    pub fn new() -> Self {
        Self {
            sort: None,
            filters: FilterMap::new(),
        }
    }

    /// The active sort column and direction, if any.
    pub fn sort(&self) -> Option<(C, SortDirection)> {
        self.sort
    }

    /// The current filter selections.
    pub fn filters(&self) -> &FilterMap<C> {
        &self.filters
    }

    /// Activate a sort column.
    ///
    /// Toggling the already-active column flips its direction; any other
    /// column becomes the new ascending sort.
    pub fn toggle_sort(&mut self, column: C) {
        self.sort = match self.sort {
            Some((active, direction)) if active == column => {
                Some((column, direction.toggled()))
            }
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    /// Replace the selected options for one column.
    ///
    /// An empty selection is equivalent to clearing the column's filter.
    pub fn set_filter<I>(&mut self, column: C, selected: I)
    where
        I: IntoIterator<Item = String>,
    {
        let selected: std::collections::HashSet<String> = selected.into_iter().collect();
        if selected.is_empty() {
            self.filters.remove(&column);
        } else {
            self.filters.insert(column, selected);
        }
    }

    /// Drop the filter on one column.
    pub fn clear_filter(&mut self, column: C) {
        self.filters.remove(&column);
    }

    /// Drop every filter.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Whether any column currently restricts the view.
    pub fn has_filters(&self) -> bool {
        self.filters.values().any(|selected| !selected.is_empty())
    }

    /// Run the full pipeline: filter, then sort if a column is active.
    ///
    /// `now` is the snapshot relative-date predicates evaluate against.
    pub fn apply<R>(&self, records: &[R], now: NaiveDate) -> Vec<R>
    where
        R: TableRecord<Column = C>,
    {
        let filtered = apply_filters(records, &self.filters, now);
        match self.sort {
            Some((column, direction)) => apply_sort(&filtered, column, direction),
            None => filtered,
        }
    }
}
