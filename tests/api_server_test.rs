//! Integration tests for the HTTP surface.
//!
//! Each test binds the server on a random port over a temporary data
//! directory and drives it with a real HTTP client.

mod common;

use std::net::SocketAddr;
use std::sync::Arc;

use clientele::models::{Customer, CustomerStatus, Task};
use clientele::server::start_server;
use clientele::store::JsonFileStore;
use common::customer;
use serde_json::{json, Value};
use tempfile::TempDir;

async fn spawn_server() -> (TempDir, SocketAddr, tokio::task::JoinHandle<()>) {
    let dir = TempDir::new().expect("create temp data dir");
    let store = Arc::new(JsonFileStore::new(dir.path()));
    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let (handle, local_addr) = start_server(addr, store)
        .await
        .expect("failed to start api server");
    (dir, local_addr, handle)
}

fn customer_body(name: &str) -> Value {
    json!({
        "name": name,
        "email": "grace.hopper@example.com",
        "phone": "+1 (555) 444-1234",
        "company": "Navy Research",
        "status": "Active"
    })
}

#[tokio::test]
async fn test_list_starts_empty() {
    let (_dir, addr, handle) = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/customers", addr))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), 200);
    let body: Vec<Customer> = response.json().await.unwrap();
    assert!(body.is_empty());

    handle.abort();
}

#[tokio::test]
async fn test_create_read_update_delete_round_trip() {
    let (_dir, addr, handle) = spawn_server().await;
    let client = reqwest::Client::new();
    let base = format!("http://{}", addr);

    // Create.
    let response = client
        .post(format!("{}/customers", base))
        .json(&customer_body("Grace Hopper"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let created: Customer = response.json().await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Grace Hopper");
    assert!(!created.created_at.is_empty());

    // Read back by id.
    let fetched: Customer = client
        .get(format!("{}/customers/1", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    // Partial update: only the company moves.
    let response = client
        .put(format!("{}/customers/1", base))
        .json(&json!({ "company": "Smithsonian" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated: Customer = response.json().await.unwrap();
    assert_eq!(updated.company, "Smithsonian");
    assert_eq!(updated.name, "Grace Hopper");
    assert_eq!(updated.created_at, created.created_at);

    // Delete.
    let response = client
        .delete(format!("{}/customers/1", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);

    // Gone.
    let response = client
        .get(format!("{}/customers/1", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    handle.abort();
}

#[tokio::test]
async fn test_id_assignment_continues_from_max() {
    let (dir, addr, handle) = spawn_server().await;
    // Pre-populate ids 1, 2, 5 directly through the store.
    let store = JsonFileStore::new(dir.path());
    store
        .replace_all::<Customer>(&[
            customer(1, "One", CustomerStatus::Active, "2026-01-01"),
            customer(2, "Two", CustomerStatus::Active, "2026-01-01"),
            customer(5, "Five", CustomerStatus::Active, "2026-01-01"),
        ])
        .unwrap();

    let client = reqwest::Client::new();
    let created: Customer = client
        .post(format!("http://{}/customers", addr))
        .json(&customer_body("Number Six"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created.id, 6);

    handle.abort();
}

#[tokio::test]
async fn test_validation_failure_reports_field_details() {
    let (_dir, addr, handle) = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/customers", addr))
        .json(&json!({
            "name": "X",
            "email": "not-an-email",
            "phone": "123",
            "company": "Y",
            "status": "Active"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid customer data");
    let details = body["details"].as_array().unwrap();
    assert_eq!(details.len(), 4);
    let fields: Vec<&str> = details
        .iter()
        .filter_map(|issue| issue["field"].as_str())
        .collect();
    assert!(fields.contains(&"email"));

    handle.abort();
}

#[tokio::test]
async fn test_update_missing_record_is_404() {
    let (_dir, addr, handle) = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .put(format!("http://{}/tasks/42", addr))
        .json(&json!({ "status": "Completed" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Task not found");

    handle.abort();
}

#[tokio::test]
async fn test_update_rejects_merged_record_that_fails_validation() {
    let (_dir, addr, handle) = spawn_server().await;
    let client = reqwest::Client::new();
    let base = format!("http://{}", addr);

    client
        .post(format!("{}/tasks", base))
        .json(&json!({
            "title": "Quarterly planning",
            "description": "Block out goals for the next quarter",
            "assignedTo": "Bob Wilson",
            "status": "To Do",
            "priority": "Medium",
            "dueDate": "2026-09-30"
        }))
        .send()
        .await
        .unwrap();

    let response = client
        .put(format!("{}/tasks/1", base))
        .json(&json!({ "dueDate": "whenever" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    // The stored record is unchanged.
    let stored: Task = client
        .get(format!("{}/tasks/1", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stored.due_date, "2026-09-30");

    handle.abort();
}

#[tokio::test]
async fn test_collections_are_isolated() {
    let (_dir, addr, handle) = spawn_server().await;
    let client = reqwest::Client::new();
    let base = format!("http://{}", addr);

    client
        .post(format!("{}/customers", base))
        .json(&customer_body("Grace Hopper"))
        .send()
        .await
        .unwrap();

    let tasks: Vec<Task> = client
        .get(format!("{}/tasks", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(tasks.is_empty());

    handle.abort();
}
