//! Boundary validation for submitted record data.
//!
//! Mirrors the constraints the HTTP surface enforces before anything is
//! persisted: minimum lengths, a well-formed email, parseable dates, and a
//! non-negative amount. Failures are reported per field and never coerced.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::models::{CustomerDraft, SaleDraft, TaskDraft};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// One field that failed validation, with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

/// A submitted record failed its schema constraints.
///
/// Carries every failing field so callers can surface per-field detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Whether a particular field is among the failures.
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for (index, issue) in self.issues.iter().enumerate() {
            let separator = if index == 0 { ": " } else { "; " };
            write!(f, "{}{}: {}", separator, issue.field, issue.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collects field issues and converts into a result.
#[derive(Debug, Default)]
struct Issues {
    issues: Vec<FieldIssue>,
}

impl Issues {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.issues.push(FieldIssue {
            field: field.to_string(),
            message: message.into(),
        });
    }

    fn min_len(&mut self, field: &str, value: &str, min: usize, label: &str) {
        if value.trim().len() < min {
            self.push(
                field,
                format!("{} must be at least {} characters", label, min),
            );
        }
    }

    fn date(&mut self, field: &str, value: &str, label: &str) {
        if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
            self.push(field, format!("{} must be a valid date (YYYY-MM-DD)", label));
        }
    }

    fn finish(self) -> Result<(), ValidationError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                issues: self.issues,
            })
        }
    }
}

/// Validate a customer creation/update payload.
pub fn validate_customer(draft: &CustomerDraft) -> Result<(), ValidationError> {
    let mut issues = Issues::default();
    issues.min_len("name", &draft.name, 2, "Name");
    if !EMAIL_RE.is_match(draft.email.trim()) {
        issues.push("email", "Invalid email address");
    }
    issues.min_len("phone", &draft.phone, 10, "Phone number");
    issues.min_len("company", &draft.company, 2, "Company name");
    issues.finish()
}

/// Validate a task creation/update payload.
pub fn validate_task(draft: &TaskDraft) -> Result<(), ValidationError> {
    let mut issues = Issues::default();
    issues.min_len("title", &draft.title, 3, "Title");
    issues.min_len("description", &draft.description, 10, "Description");
    issues.min_len("assignedTo", &draft.assigned_to, 2, "Assignee name");
    issues.date("dueDate", &draft.due_date, "Due date");
    issues.finish()
}

/// Validate a sale creation/update payload.
pub fn validate_sale(draft: &SaleDraft) -> Result<(), ValidationError> {
    let mut issues = Issues::default();
    issues.min_len("customer", &draft.customer, 2, "Customer name");
    issues.min_len("product", &draft.product, 2, "Product name");
    if !draft.amount.is_finite() || draft.amount < 0.0 {
        issues.push("amount", "Amount must be positive");
    }
    issues.min_len("category", &draft.category, 2, "Category");
    issues.date("date", &draft.date, "Date");
    issues.finish()
}
