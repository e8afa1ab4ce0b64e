//! Seeded synthetic record generation.
//!
//! Generation is randomized but reproducible: the same seed and count yield
//! the same records for a given day, because field values are drawn from a
//! `ChaCha8Rng` seeded per call and date fields are offsets from the current
//! day. The [`fallback`] module holds the fixed records substituted when
//! generation faults.

use chrono::{Datelike, Duration, NaiveDate, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::models::{
    Customer, CustomerStatus, MonthlyMetric, Sale, SaleStatus, Task, TaskPriority,
    TaskStatus,
};

pub mod fallback;
mod vocab;

/// The seed the demo provider and the seed command default to.
pub const DEFAULT_SEED: u64 = 123;

const MONTH_LABELS: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
    "Dec",
];

fn pick<'a>(rng: &mut ChaCha8Rng, items: &'a [&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn full_name(rng: &mut ChaCha8Rng) -> String {
    format!(
        "{} {}",
        pick(rng, vocab::FIRST_NAMES),
        pick(rng, vocab::LAST_NAMES)
    )
}

fn email_for(rng: &mut ChaCha8Rng, name: &str) -> String {
    let local = name.to_lowercase().replace(' ', ".");
    format!("{}@{}", local, pick(rng, vocab::EMAIL_DOMAINS))
}

fn phone(rng: &mut ChaCha8Rng) -> String {
    format!(
        "+1 ({}) {}-{:04}",
        rng.gen_range(200..1000),
        rng.gen_range(100..1000),
        rng.gen_range(0..10000)
    )
}

fn company(rng: &mut ChaCha8Rng) -> String {
    format!(
        "{} {}",
        pick(rng, vocab::COMPANY_STEMS),
        pick(rng, vocab::COMPANY_SUFFIXES)
    )
}

fn product(rng: &mut ChaCha8Rng) -> String {
    format!(
        "{} {}",
        pick(rng, vocab::PRODUCT_ADJECTIVES),
        pick(rng, vocab::PRODUCT_NOUNS)
    )
}

fn words(rng: &mut ChaCha8Rng, count: usize) -> String {
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(pick(rng, vocab::LOREM_WORDS));
    }
    out.join(" ")
}

fn sentence(rng: &mut ChaCha8Rng, min: usize, max: usize) -> String {
    let count = rng.gen_range(min..=max);
    let body = words(rng, count);
    let mut chars = body.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => body,
    }
}

fn paragraph(rng: &mut ChaCha8Rng) -> String {
    let sentences = rng.gen_range(2..=4);
    (0..sentences)
        .map(|_| sentence(rng, 5, 12))
        .collect::<Vec<_>>()
        .join(" ")
}

fn amount(rng: &mut ChaCha8Rng) -> f64 {
    (rng.gen_range(100.0..10000.0_f64) * 100.0).round() / 100.0
}

fn recent_date(rng: &mut ChaCha8Rng, today: NaiveDate, within_days: i64) -> String {
    (today - Duration::days(rng.gen_range(0..within_days))).to_string()
}

fn future_date(rng: &mut ChaCha8Rng, today: NaiveDate, within_days: i64) -> String {
    (today + Duration::days(rng.gen_range(1..=within_days))).to_string()
}

/// Generate `count` customers from `seed`. Ids are sequential from 1.
pub fn generate_customers(seed: u64, count: usize) -> Vec<Customer> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let today = Utc::now().date_naive();
    (0..count)
        .map(|index| {
            let name = full_name(&mut rng);
            let email = email_for(&mut rng, &name);
            let avatar_id: u32 = rng.gen_range(1..100);
            Customer {
                id: index as u64 + 1,
                email,
                phone: phone(&mut rng),
                company: company(&mut rng),
                status: [
                    CustomerStatus::Active,
                    CustomerStatus::Inactive,
                    CustomerStatus::Pending,
                ][rng.gen_range(0..3)],
                avatar: Some(format!("https://avatars.example.com/u/{}", avatar_id)),
                created_at: recent_date(&mut rng, today, 30),
                name,
            }
        })
        .collect()
}

/// Generate `count` tasks from `seed`. Ids are sequential from 1.
pub fn generate_tasks(seed: u64, count: usize) -> Vec<Task> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let today = Utc::now().date_naive();
    (0..count)
        .map(|index| Task {
            id: index as u64 + 1,
            title: sentence(&mut rng, 3, 8),
            description: paragraph(&mut rng),
            assigned_to: full_name(&mut rng),
            status: [
                TaskStatus::ToDo,
                TaskStatus::InProgress,
                TaskStatus::Completed,
                TaskStatus::Blocked,
            ][rng.gen_range(0..4)],
            priority: [
                TaskPriority::Low,
                TaskPriority::Medium,
                TaskPriority::High,
                TaskPriority::Critical,
            ][rng.gen_range(0..4)],
            due_date: future_date(&mut rng, today, 180),
            created_at: recent_date(&mut rng, today, 14),
        })
        .collect()
}

/// Generate `count` sales from `seed`. Ids are sequential from 1; customer
/// names are drawn from a pool of ten generated customers so repeat buyers
/// appear, like real sales data.
pub fn generate_sales(seed: u64, count: usize) -> Vec<Sale> {
    let pool = generate_customers(seed, 10);
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    let today = Utc::now().date_naive();
    (0..count)
        .map(|index| {
            let customer = &pool[rng.gen_range(0..pool.len())];
            let date = recent_date(&mut rng, today, 60);
            Sale {
                id: index as u64 + 1,
                customer: customer.name.clone(),
                product: product(&mut rng),
                amount: amount(&mut rng),
                status: [
                    SaleStatus::Completed,
                    SaleStatus::Pending,
                    SaleStatus::Cancelled,
                ][rng.gen_range(0..3)],
                category: pick(&mut rng, vocab::SALE_CATEGORIES).to_string(),
                created_at: date.clone(),
                date,
            }
        })
        .collect()
}

/// Monthly sales-performance series for the dashboard: one entry per month
/// of the current year up to and including the current month.
pub fn generate_sales_analytics(seed: u64) -> Vec<MonthlyMetric> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(2));
    let current_month = Utc::now().month() as usize;
    MONTH_LABELS
        .iter()
        .take(current_month)
        .map(|label| MonthlyMetric {
            month: label.to_string(),
            sales: rng.gen_range(5_000..25_000),
            customers: rng.gen_range(20..100),
            revenue: rng.gen_range(50_000..200_000),
        })
        .collect()
}
