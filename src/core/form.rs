use super::{AmountPolicy, Expense, ExpenseError, today};

/// Parses amount text the way the add/edit form does.
///
/// Under [`AmountPolicy::Accept`] the longest numeric prefix after leading
/// whitespace is used (`"12.50 cedis"` is `12.5`) and text without one
/// becomes `NaN`. Under [`AmountPolicy::Reject`] the trimmed text must be a
/// finite number in full.
pub fn parse_amount(text: &str, policy: AmountPolicy) -> Result<f64, ExpenseError> {
    match policy {
        AmountPolicy::Accept => Ok(numeric_prefix(text).unwrap_or(f64::NAN)),
        AmountPolicy::Reject => {
            let trimmed = text.trim();
            match numeric_prefix(trimmed) {
                Some(amount) if amount.is_finite() && prefix_len(trimmed) == trimmed.len() => {
                    Ok(amount)
                }
                _ => Err(ExpenseError::InvalidAmount(text.to_string())),
            }
        }
    }
}

const INFINITY: &str = "Infinity";

// Byte length of the leading `[+-]?(Infinity|digits[.digits][e[+-]digits])`
// of `text`, or 0 when there is none.
fn prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    if text[i..].starts_with(INFINITY) {
        return i + INFINITY.len();
    }
    let digits_from = |mut j: usize| {
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        j
    };
    let int_end = digits_from(i);
    let mut end = int_end;
    let mut seen_digit = int_end > i;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        seen_digit |= frac_end > end + 1;
        end = frac_end;
    }
    if !seen_digit {
        return 0;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut j = end + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            end = exp_end;
        }
    }
    end
}

fn numeric_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let len = prefix_len(text);
    if len == 0 {
        return None;
    }
    let prefix = &text[..len];
    match prefix.trim_start_matches(['+', '-']) {
        INFINITY if prefix.starts_with('-') => Some(f64::NEG_INFINITY),
        INFINITY => Some(f64::INFINITY),
        _ => prefix.parse::<f64>().ok(),
    }
}

/// Raw text of the add/edit expense form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseForm {
    pub amount: String,
    pub category: String,
    pub date: String,
    pub description: String,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self {
            amount: String::new(),
            category: String::new(),
            date: today(),
            description: String::new(),
        }
    }
}

impl ExpenseForm {
    /// An empty form dated today.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills the form for editing an existing expense.
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            amount: expense.amount.to_string(),
            category: expense.category.clone(),
            date: expense.date.clone(),
            description: expense.description.clone(),
        }
    }

    /// Builds a brand-new expense with a fresh id.
    pub fn to_new_expense(&self, policy: AmountPolicy) -> Result<Expense, ExpenseError> {
        let amount = parse_amount(&self.amount, policy)?;
        Ok(Expense::new(
            amount,
            self.category.clone(),
            self.date.clone(),
            self.description.clone(),
        ))
    }

    /// Builds the replacement for `existing`, keeping its id.
    pub fn apply_to(
        &self,
        existing: &Expense,
        policy: AmountPolicy,
    ) -> Result<Expense, ExpenseError> {
        Ok(Expense {
            id: existing.id.clone(),
            amount: parse_amount(&self.amount, policy)?,
            category: self.category.clone(),
            date: self.date.clone(),
            description: self.description.clone(),
        })
    }

    /// Clears the form back to its initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
