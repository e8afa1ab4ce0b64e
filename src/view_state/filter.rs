//! Per-column filtering.
//!
//! A filter selection is a set of string-encoded options per column. Options
//! on the same column combine with OR, columns combine with AND. Three
//! option encodings exist, fixed per column by its [`MatchPolicy`]:
//!
//! - exact values (`"Active"`, `"High"`) matched against the cell's natural
//!   string rendering,
//! - inclusive amount bands (`"1001-5000"`, `"10001+"`),
//! - named relative-date predicates (`"last7days"`, `"overdue"`).
//!
//! Filtering is total: malformed options and malformed record fields match
//! nothing rather than erroring.

use chrono::{Datelike, NaiveDate};
use std::collections::{HashMap, HashSet};

use super::cell::CellValue;
use super::record::TableRecord;

/// How a column's filter options are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Case-sensitive equality against the cell's string rendering.
    Exact,
    /// Inclusive `min-max` bands, `min+` for the open-ended top bucket.
    AmountBand,
    /// Named predicates evaluated against a single "now" snapshot.
    DateRange,
}

/// Selected filter options per column. An absent column or an empty set
/// means "no restriction" for that column.
pub type FilterMap<C> = HashMap<C, HashSet<String>>;

/// An inclusive numeric band, open-ended when `max` is `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountBand {
    pub min: f64,
    pub max: Option<f64>,
}

impl AmountBand {
    /// Parse a band option: `"0-1000"` or `"10001+"`.
    ///
    /// Returns `None` for anything else; an unparseable option matches no
    /// records.
    pub fn parse(option: &str) -> Option<Self> {
        if let Some(min) = option.strip_suffix('+') {
            let min = min.trim().parse::<f64>().ok()?;
            return Some(Self { min, max: None });
        }
        let (min, max) = option.split_once('-')?;
        let min = min.trim().parse::<f64>().ok()?;
        let max = max.trim().parse::<f64>().ok()?;
        Some(Self {
            min,
            max: Some(max),
        })
    }

    /// Whether `value` falls inside the band (inclusive on both ends).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

/// A named relative-date rule evaluated against the current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePredicate {
    Last7Days,
    Last30Days,
    Last90Days,
    ThisMonth,
    ThisYear,
    /// Strictly before "now"; the due-date reading of late.
    Overdue,
    /// On or after "now".
    Upcoming,
}

impl DatePredicate {
    /// Parse a predicate option name. Unknown names return `None` and
    /// match no records.
    pub fn parse(option: &str) -> Option<Self> {
        match option {
            "last7days" => Some(DatePredicate::Last7Days),
            "last30days" => Some(DatePredicate::Last30Days),
            "last90days" => Some(DatePredicate::Last90Days),
            "thismonth" => Some(DatePredicate::ThisMonth),
            "thisyear" => Some(DatePredicate::ThisYear),
            "overdue" => Some(DatePredicate::Overdue),
            "upcoming" => Some(DatePredicate::Upcoming),
            _ => None,
        }
    }

    /// Evaluate the predicate for `date`.
    ///
    /// Every predicate measures from the same `now` snapshot; the snapshot
    /// is taken once per filter application and never advanced between
    /// evaluations.
    pub fn matches(self, date: NaiveDate, now: NaiveDate) -> bool {
        let days_ago = now.signed_duration_since(date).num_days();
        match self {
            DatePredicate::Last7Days => (0..7).contains(&days_ago),
            DatePredicate::Last30Days => (0..30).contains(&days_ago),
            DatePredicate::Last90Days => (0..90).contains(&days_ago),
            DatePredicate::ThisMonth => {
                date.year() == now.year() && date.month() == now.month()
            }
            DatePredicate::ThisYear => date.year() == now.year(),
            DatePredicate::Overdue => date < now,
            DatePredicate::Upcoming => date >= now,
        }
    }
}

/// Whether one cell satisfies the selected options of its column.
fn cell_matches(
    cell: &CellValue,
    policy: MatchPolicy,
    selected: &HashSet<String>,
    now: NaiveDate,
) -> bool {
    match policy {
        MatchPolicy::Exact => cell
            .render()
            .map_or(false, |rendered| selected.contains(&rendered)),
        MatchPolicy::AmountBand => match cell {
            CellValue::Number(value) => selected.iter().any(|option| {
                AmountBand::parse(option).map_or(false, |band| band.contains(*value))
            }),
            _ => false,
        },
        MatchPolicy::DateRange => match cell {
            CellValue::Date(date) => selected.iter().any(|option| {
                DatePredicate::parse(option)
                    .map_or(false, |predicate| predicate.matches(*date, now))
            }),
            _ => false,
        },
    }
}

/// Keep the records that satisfy every column's filter selection.
///
/// `now` is the wall-clock snapshot used by relative-date predicates; the
/// caller captures it once per application.
pub fn apply_filters<R: TableRecord>(
    records: &[R],
    filters: &FilterMap<R::Column>,
    now: NaiveDate,
) -> Vec<R> {
    use super::record::Column;

    records
        .iter()
        .filter(|record| {
            filters.iter().all(|(column, selected)| {
                selected.is_empty()
                    || cell_matches(
                        &record.cell(*column),
                        column.match_policy(),
                        selected,
                        now,
                    )
            })
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_band_parse_closed() {
        let band = AmountBand::parse("0-1000").unwrap();
        assert_eq!(band.min, 0.0);
        assert_eq!(band.max, Some(1000.0));
        assert!(band.contains(0.0));
        assert!(band.contains(1000.0));
        assert!(!band.contains(1000.01));
    }

    #[test]
    fn test_amount_band_parse_open_ended() {
        let band = AmountBand::parse("10001+").unwrap();
        assert_eq!(band.min, 10001.0);
        assert_eq!(band.max, None);
        assert!(band.contains(10001.0));
        assert!(band.contains(1_000_000.0));
        assert!(!band.contains(10000.99));
    }

    #[test]
    fn test_amount_band_parse_rejects_garbage() {
        assert_eq!(AmountBand::parse("cheap"), None);
        assert_eq!(AmountBand::parse("10-"), None);
        assert_eq!(AmountBand::parse("+"), None);
    }

    #[test]
    fn test_date_predicate_parse() {
        assert_eq!(
            DatePredicate::parse("last7days"),
            Some(DatePredicate::Last7Days)
        );
        assert_eq!(DatePredicate::parse("overdue"), Some(DatePredicate::Overdue));
        assert_eq!(DatePredicate::parse("yesterday"), None);
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_last7days_window() {
        let now = day(2026, 8, 7);
        assert!(DatePredicate::Last7Days.matches(now, now));
        assert!(DatePredicate::Last7Days.matches(day(2026, 8, 1), now));
        assert!(!DatePredicate::Last7Days.matches(day(2026, 7, 31), now));
        // Future dates are not "last N days".
        assert!(!DatePredicate::Last7Days.matches(day(2026, 8, 8), now));
    }

    #[test]
    fn test_this_month_and_year() {
        let now = day(2026, 8, 7);
        assert!(DatePredicate::ThisMonth.matches(day(2026, 8, 31), now));
        assert!(!DatePredicate::ThisMonth.matches(day(2026, 7, 31), now));
        assert!(DatePredicate::ThisYear.matches(day(2026, 1, 1), now));
        assert!(!DatePredicate::ThisYear.matches(day(2025, 12, 31), now));
    }

    #[test]
    fn test_overdue_is_strictly_before_now() {
        let now = day(2026, 8, 7);
        assert!(DatePredicate::Overdue.matches(day(2026, 8, 6), now));
        assert!(!DatePredicate::Overdue.matches(now, now));
        assert!(!DatePredicate::Overdue.matches(day(2026, 8, 8), now));
        assert!(DatePredicate::Upcoming.matches(now, now));
    }

    #[test]
    fn test_independent_snapshots_between_predicates() {
        // Evaluating one predicate must not shift the reference point of
        // the next: both windows measure from the same snapshot.
        let now = day(2026, 8, 7);
        let date = day(2026, 7, 20);
        let first = DatePredicate::Last30Days.matches(date, now);
        let _ = DatePredicate::Last7Days.matches(date, now);
        let second = DatePredicate::Last30Days.matches(date, now);
        assert_eq!(first, second);
        assert!(first);
    }
}
