//! Common test utilities for integration tests.
//!
//! Reusable record fixtures shared by the view-engine and server suites.

use clientele::models::{
    Customer, CustomerDraft, CustomerStatus, Sale, SaleStatus, Task, TaskPriority,
    TaskStatus,
};

/// A customer with the given id, name, status, and creation date.
pub fn customer(id: u64, name: &str, status: CustomerStatus, created_at: &str) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        email: format!(
            "{}@example.com",
            name.to_lowercase().replace(' ', ".")
        ),
        phone: "+1 (555) 123-4567".to_string(),
        company: "Example Co".to_string(),
        status,
        avatar: None,
        created_at: created_at.to_string(),
    }
}

/// A valid customer creation payload.
pub fn customer_draft(name: &str) -> CustomerDraft {
    CustomerDraft {
        name: name.to_string(),
        email: format!(
            "{}@example.com",
            name.to_lowercase().replace(' ', ".")
        ),
        phone: "+1 (555) 987-6543".to_string(),
        company: "Example Co".to_string(),
        status: CustomerStatus::Active,
    }
}

/// A task with the given id, status, priority, and due date.
pub fn task(id: u64, status: TaskStatus, priority: TaskPriority, due_date: &str) -> Task {
    Task {
        id,
        title: format!("Task number {}", id),
        description: "A description long enough to validate".to_string(),
        assigned_to: "Alice Cooper".to_string(),
        status,
        priority,
        due_date: due_date.to_string(),
        created_at: "2026-01-01".to_string(),
    }
}

/// A sale with the given id and amount.
pub fn sale(id: u64, amount: f64) -> Sale {
    Sale {
        id,
        customer: "John Smith".to_string(),
        product: "Enterprise Software License".to_string(),
        amount,
        status: SaleStatus::Completed,
        category: "Software".to_string(),
        date: "2026-07-15".to_string(),
        created_at: "2026-07-15".to_string(),
    }
}
