use std::sync::Arc;
use std::thread;

use expense_tracker::core::{Expense, SharedExpenseStore};

#[test]
fn concurrent_adds() {
    let store = Arc::new(SharedExpenseStore::new());
    let mut handles = Vec::new();

    for i in 0..10 {
        let store_cloned = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            store_cloned.add(Expense::new(i as f64, "Food", "2024-01-01", ""));
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.len(), 10);
}

#[test]
fn concurrent_updates_keep_positions() {
    let store = Arc::new(SharedExpenseStore::new());
    let originals: Vec<Expense> = (0..5)
        .map(|i| Expense::new(i as f64, "Food", "2024-01-01", ""))
        .collect();
    for expense in &originals {
        store.add(expense.clone());
    }

    let handles: Vec<_> = originals
        .iter()
        .cloned()
        .map(|mut expense| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                expense.amount += 100.0;
                store.update(expense);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = store.snapshot();
    for (expense, original) in snapshot.iter().zip(&originals) {
        assert_eq!(expense.id, original.id);
        assert_eq!(expense.amount, original.amount + 100.0);
    }
}

#[test]
fn shared_store_wraps_and_unwraps_existing_store() {
    use expense_tracker::core::ExpenseStore;

    let mut store = ExpenseStore::new();
    store.extend([
        Expense::new(1.0, "Food", "2024-01-01", ""),
        Expense::new(2.0, "Rent", "2024-01-02", ""),
    ]);
    let shared = Arc::new(SharedExpenseStore::from(store));

    let writer = Arc::clone(&shared);
    thread::spawn(move || writer.add(Expense::new(3.0, "Food", "2024-01-03", "")))
        .join()
        .unwrap();

    let store = Arc::try_unwrap(shared).unwrap().into_inner();
    let categories: Vec<_> = store.iter().map(|e| e.category.as_str()).collect();
    assert_eq!(categories, vec!["Food", "Rent", "Food"]);
}
