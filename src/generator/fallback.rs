//! Fixed records substituted when synthetic generation faults.
//!
//! Small, hardcoded, and valid against the collection schemas. These are
//! never surfaced as an error condition; the substitution is only logged.

use crate::models::{
    Customer, CustomerStatus, Sale, SaleStatus, Task, TaskPriority, TaskStatus,
};

/// Three known-good customers.
pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: 1,
            name: "John Smith".to_string(),
            email: "john.smith@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            company: "Tech Solutions Inc".to_string(),
            status: CustomerStatus::Active,
            avatar: None,
            created_at: "2024-05-01".to_string(),
        },
        Customer {
            id: 2,
            name: "Sarah Johnson".to_string(),
            email: "sarah.j@businesscorp.com".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            company: "Business Corp".to_string(),
            status: CustomerStatus::Active,
            avatar: None,
            created_at: "2024-05-02".to_string(),
        },
        Customer {
            id: 3,
            name: "Mike Davis".to_string(),
            email: "mike.davis@startup.io".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            company: "Startup IO".to_string(),
            status: CustomerStatus::Inactive,
            avatar: None,
            created_at: "2024-04-28".to_string(),
        },
    ]
}

/// Two known-good tasks.
pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            title: "Follow up with new leads".to_string(),
            description: "Contact potential customers from the trade show".to_string(),
            assigned_to: "Alice Cooper".to_string(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            due_date: "2024-05-25".to_string(),
            created_at: "2024-05-20".to_string(),
        },
        Task {
            id: 2,
            title: "Prepare quarterly report".to_string(),
            description: "Compile sales data for Q2 presentation".to_string(),
            assigned_to: "Bob Wilson".to_string(),
            status: TaskStatus::ToDo,
            priority: TaskPriority::Medium,
            due_date: "2024-05-30".to_string(),
            created_at: "2024-05-18".to_string(),
        },
    ]
}

/// Two known-good sales.
pub fn sales() -> Vec<Sale> {
    vec![
        Sale {
            id: 1,
            customer: "John Smith".to_string(),
            product: "Enterprise Software License".to_string(),
            amount: 2500.0,
            status: SaleStatus::Completed,
            category: "Software".to_string(),
            date: "2024-05-20".to_string(),
            created_at: "2024-05-20".to_string(),
        },
        Sale {
            id: 2,
            customer: "Sarah Johnson".to_string(),
            product: "Consulting Services".to_string(),
            amount: 1200.0,
            status: SaleStatus::Completed,
            category: "Services".to_string(),
            date: "2024-05-18".to_string(),
            created_at: "2024-05-18".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CrmRecord;

    #[test]
    fn test_fallback_records_pass_their_schemas() {
        for customer in customers() {
            assert!(Customer::validate_draft(&customer.as_draft()).is_ok());
        }
        for task in tasks() {
            assert!(Task::validate_draft(&task.as_draft()).is_ok());
        }
        for sale in sales() {
            assert!(Sale::validate_draft(&sale.as_draft()).is_ok());
        }
    }

    #[test]
    fn test_fallback_ids_are_sequential() {
        let ids: Vec<u64> = customers().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
