//! The `seed` command: fill the store files with generated records.

use color_eyre::Result;
use std::path::PathBuf;

use crate::generator::{generate_customers, generate_sales, generate_tasks};
use crate::store::JsonFileStore;

/// Default per-kind record counts, matching the demo provider.
const CUSTOMER_COUNT: usize = 30;
const TASK_COUNT: usize = 20;
const SALE_COUNT: usize = 30;

/// Overwrite every collection file with freshly generated records.
pub fn handle_seed_command(seed: u64, count: Option<usize>, data_dir: PathBuf) -> Result<()> {
    let store = JsonFileStore::new(&data_dir);

    let customers = generate_customers(seed, count.unwrap_or(CUSTOMER_COUNT));
    let tasks = generate_tasks(seed, count.unwrap_or(TASK_COUNT));
    let sales = generate_sales(seed, count.unwrap_or(SALE_COUNT));

    store.replace_all(&customers)?;
    store.replace_all(&tasks)?;
    store.replace_all(&sales)?;

    println!(
        "seeded {} customers, {} tasks, {} sales into {}",
        customers.len(),
        tasks.len(),
        sales.len(),
        data_dir.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Sale, Task};
    use tempfile::tempdir;

    #[test]
    fn test_seed_writes_all_three_collections() {
        let dir = tempdir().unwrap();
        handle_seed_command(123, Some(4), dir.path().to_path_buf()).unwrap();

        let store = JsonFileStore::new(dir.path());
        assert_eq!(store.list::<Customer>().unwrap().len(), 4);
        assert_eq!(store.list::<Task>().unwrap().len(), 4);
        assert_eq!(store.list::<Sale>().unwrap().len(), 4);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let first_dir = tempdir().unwrap();
        let second_dir = tempdir().unwrap();
        handle_seed_command(9, Some(5), first_dir.path().to_path_buf()).unwrap();
        handle_seed_command(9, Some(5), second_dir.path().to_path_buf()).unwrap();

        let first = JsonFileStore::new(first_dir.path())
            .list::<Customer>()
            .unwrap();
        let second = JsonFileStore::new(second_dir.path())
            .list::<Customer>()
            .unwrap();
        assert_eq!(first, second);
    }
}
