//! Task records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::schema::{self, ValidationError};
use crate::view_state::{CellValue, Column, MatchPolicy, TableRecord};

use super::CrmRecord;

/// Workflow state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Blocked,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Blocked => "Blocked",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
            TaskPriority::Critical => "Critical",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One task on the team board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: String,
    /// Set once at creation, never changed by updates.
    pub created_at: String,
}

/// Creation payload for a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: String,
}

/// Partial update for a task; absent fields keep their values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl CrmRecord for Task {
    const COLLECTION: &'static str = "tasks";
    type Draft = TaskDraft;
    type Patch = TaskPatch;

    fn id(&self) -> u64 {
        self.id
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn validate_draft(draft: &Self::Draft) -> Result<(), ValidationError> {
        schema::validate_task(draft)
    }

    fn from_draft(id: u64, draft: Self::Draft, created_at: String) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            assigned_to: draft.assigned_to,
            status: draft.status,
            priority: draft.priority,
            due_date: draft.due_date,
            created_at,
        }
    }

    fn merged(&self, patch: Self::Patch) -> Self {
        Self {
            id: self.id,
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            description: patch
                .description
                .unwrap_or_else(|| self.description.clone()),
            assigned_to: patch
                .assigned_to
                .unwrap_or_else(|| self.assigned_to.clone()),
            status: patch.status.unwrap_or(self.status),
            priority: patch.priority.unwrap_or(self.priority),
            due_date: patch.due_date.unwrap_or_else(|| self.due_date.clone()),
            created_at: self.created_at.clone(),
        }
    }

    fn as_draft(&self) -> Self::Draft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            assigned_to: self.assigned_to.clone(),
            status: self.status,
            priority: self.priority,
            due_date: self.due_date.clone(),
        }
    }
}

/// Columns of the tasks table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskColumn {
    Title,
    Description,
    AssignedTo,
    Status,
    Priority,
    DueDate,
    CreatedAt,
}

impl Column for TaskColumn {
    fn match_policy(self) -> MatchPolicy {
        match self {
            TaskColumn::DueDate | TaskColumn::CreatedAt => MatchPolicy::DateRange,
            _ => MatchPolicy::Exact,
        }
    }
}

impl TableRecord for Task {
    type Column = TaskColumn;

    fn record_id(&self) -> u64 {
        self.id
    }

    fn cell(&self, column: TaskColumn) -> CellValue {
        match column {
            TaskColumn::Title => CellValue::Text(self.title.clone()),
            TaskColumn::Description => CellValue::Text(self.description.clone()),
            TaskColumn::AssignedTo => CellValue::Text(self.assigned_to.clone()),
            TaskColumn::Status => CellValue::Text(self.status.to_string()),
            TaskColumn::Priority => CellValue::Text(self.priority.to_string()),
            TaskColumn::DueDate => CellValue::from_date_str(&self.due_date),
            TaskColumn::CreatedAt => CellValue::from_date_str(&self.created_at),
        }
    }
}
