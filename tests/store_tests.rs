use expense_tracker::core::{Expense, ExpenseStore, by_category, total_of};

fn expense(id: &str, amount: f64, category: &str, description: &str) -> Expense {
    Expense {
        id: id.into(),
        amount,
        category: category.into(),
        date: "2024-01-01".into(),
        description: description.into(),
    }
}

#[test]
fn snapshot_keeps_insertion_order() {
    let mut store = ExpenseStore::default();
    for (i, category) in ["Food", "Rent", "Food", "Travel"].iter().enumerate() {
        store.add(expense(&i.to_string(), i as f64, category, ""));
    }
    let ids: Vec<String> = store.snapshot().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["0", "1", "2", "3"]);
}

#[test]
fn update_twice_matches_update_once() {
    let mut store = ExpenseStore::default();
    store.add(expense("1", 12.5, "Food", "lunch"));
    store.add(expense("2", 3.0, "Rent", ""));
    let replacement = expense("1", 20.0, "Food", "dinner");

    store.update(replacement.clone());
    let once = store.snapshot();
    store.update(replacement);
    assert_eq!(store.snapshot(), once);
}

#[test]
fn update_with_missing_id_changes_nothing() {
    let mut store = ExpenseStore::default();
    store.add(expense("1", 12.5, "Food", "lunch"));
    let before = store.snapshot();
    let replaced = store.update(expense("missing", 99.0, "Food", ""));
    assert!(!replaced);
    assert_eq!(store.snapshot(), before);
}

#[test]
fn update_on_empty_store_is_noop() {
    let mut store = ExpenseStore::default();
    store.update(expense("1", 1.0, "Food", ""));
    assert!(store.is_empty());
}

#[test]
fn add_then_update_end_to_end() {
    let mut store = ExpenseStore::default();
    store.add(expense("1", 12.5, "Food", "lunch"));
    assert_eq!(store.snapshot().len(), 1);
    assert_eq!(total_of(&store.snapshot()), 12.5);

    store.update(expense("1", 20.0, "Food", "lunch"));
    let snapshot = store.snapshot();
    assert_eq!(total_of(&snapshot), 20.0);
    let totals = by_category(&snapshot);
    assert_eq!(totals.len(), 1);
    assert_eq!(totals.get("Food"), Some(20.0));
}

#[test]
fn duplicate_ids_are_not_rejected() {
    let mut store = ExpenseStore::default();
    store.add(expense("1", 1.0, "Food", ""));
    store.add(expense("1", 2.0, "Food", ""));
    assert_eq!(store.len(), 2);
}
