use tracing::debug;

use super::Expense;

/// In-memory, insertion-ordered store of expenses.
///
/// The store is the only owner of its records. Readers get a cloned
/// snapshot and mutate nothing except through [`add`](Self::add) and
/// [`update`](Self::update). Nothing is persisted.
#[derive(Debug, Default, Clone)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an expense. Id uniqueness is the caller's responsibility.
    pub fn add(&mut self, expense: Expense) {
        debug!(id = %expense.id, category = %expense.category, "Adding expense");
        self.expenses.push(expense);
    }

    /// Replaces the expense with the same id in place.
    ///
    /// Returns whether a record was replaced. An unknown id leaves the
    /// store untouched and is not an error.
    pub fn update(&mut self, expense: Expense) -> bool {
        match self.expenses.iter_mut().find(|e| e.id == expense.id) {
            Some(slot) => {
                debug!(id = %expense.id, "Updating expense");
                *slot = expense;
                true
            }
            None => {
                debug!(id = %expense.id, "Update ignored, no such expense");
                false
            }
        }
    }

    /// Returns a copy of all expenses in insertion order.
    pub fn snapshot(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    /// Looks up an expense by id.
    pub fn get(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Returns an iterator over all expenses.
    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

impl Extend<Expense> for ExpenseStore {
    fn extend<I: IntoIterator<Item = Expense>>(&mut self, iter: I) {
        for expense in iter {
            self.add(expense);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: &str, amount: f64, category: &str) -> Expense {
        Expense {
            id: id.into(),
            amount,
            category: category.into(),
            date: "2024-01-01".into(),
            description: String::new(),
        }
    }

    #[test]
    fn add_preserves_order() {
        let mut store = ExpenseStore::new();
        store.add(expense("a", 1.0, "Food"));
        store.add(expense("b", 2.0, "Rent"));
        store.add(expense("c", 3.0, "Food"));
        let ids: Vec<_> = store.snapshot().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn update_keeps_position() {
        let mut store = ExpenseStore::new();
        store.add(expense("a", 1.0, "Food"));
        store.add(expense("b", 2.0, "Rent"));
        assert!(store.update(expense("a", 9.0, "Travel")));
        let snapshot = store.snapshot();
        assert_eq!(snapshot[0].id, "a");
        assert_eq!(snapshot[0].amount, 9.0);
        assert_eq!(snapshot[0].category, "Travel");
        assert_eq!(snapshot[1].id, "b");
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut store = ExpenseStore::new();
        store.add(expense("a", 1.0, "Food"));
        let before = store.snapshot();
        assert!(!store.update(expense("zzz", 5.0, "Food")));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn snapshot_is_detached() {
        let mut store = ExpenseStore::new();
        store.add(expense("a", 1.0, "Food"));
        let mut snapshot = store.snapshot();
        snapshot[0].amount = 100.0;
        assert_eq!(store.get("a").map(|e| e.amount), Some(1.0));
    }
}
