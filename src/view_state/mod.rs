//! View state engine for record tables.
//!
//! A pure, synchronous pipeline that turns a raw record collection plus the
//! user's current view selections (per-column filters, sort column and
//! direction) into the exact sequence of rows to render. Nothing in here
//! performs IO or suspends; data sources hand the engine already-resolved
//! collections.
//!
//! The pipeline always runs filter-then-sort, but the two steps commute on
//! set membership: sorting never adds or removes rows, filtering never
//! reorders them beyond dropping entries.
//!
//! # Example
//!
//! ```ignore
//! use clientele::models::{Sale, SaleColumn};
//! use clientele::view_state::TableViewState;
//!
//! let mut view = TableViewState::<SaleColumn>::new();
//! view.set_filter(SaleColumn::Amount, ["0-1000".to_string(), "10001+".to_string()]);
//! view.toggle_sort(SaleColumn::Amount);
//! let rows = view.apply(&sales, chrono::Utc::now().date_naive());
//! ```

mod cell;
mod filter;
mod record;
mod sort;
mod table;

pub use cell::CellValue;
pub use filter::{apply_filters, AmountBand, DatePredicate, FilterMap, MatchPolicy};
pub use record::{Column, TableRecord};
pub use sort::{apply_sort, navigate_adjacent, NavDirection, SortDirection};
pub use table::TableViewState;
