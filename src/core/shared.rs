use std::sync::{Mutex, MutexGuard};

use super::{Expense, ExpenseStore};

/// Thread-safe wrapper around [`ExpenseStore`].
///
/// Each operation runs inside a single critical section, so concurrent
/// `add`/`update` calls never interleave half way through.
#[derive(Debug, Default)]
pub struct SharedExpenseStore {
    store: Mutex<ExpenseStore>,
}

impl SharedExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, expense: Expense) {
        self.lock().add(expense);
    }

    pub fn update(&self, expense: Expense) -> bool {
        self.lock().update(expense)
    }

    pub fn snapshot(&self) -> Vec<Expense> {
        self.lock().snapshot()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Consumes the wrapper and returns the inner store.
    pub fn into_inner(self) -> ExpenseStore {
        self.store
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // A panic while holding the lock cannot leave the Vec half-written,
    // so a poisoned store is still consistent.
    fn lock(&self) -> MutexGuard<'_, ExpenseStore> {
        self.store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl From<ExpenseStore> for SharedExpenseStore {
    fn from(store: ExpenseStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }
}
