//! Core logic for the in-memory expense store.

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Errors that can occur when building an [`Expense`] from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseError {
    /// The amount text could not be parsed as a number.
    InvalidAmount(String),
}

impl std::fmt::Display for ExpenseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpenseError::InvalidAmount(text) => write!(f, "invalid amount: {text:?}"),
        }
    }
}

impl std::error::Error for ExpenseError {}

/// What to do with amount text that does not parse as a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountPolicy {
    /// Store `NaN` and carry on.
    #[default]
    Accept,
    /// Refuse the record with [`ExpenseError::InvalidAmount`].
    Reject,
}

/// A single recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Opaque identifier, unique within a store.
    pub id: String,
    /// Amount spent. May be `NaN` when the input was not numeric.
    #[serde(deserialize_with = "amount_or_nan")]
    pub amount: f64,
    /// Free-text category; grouping is case and whitespace sensitive.
    pub category: String,
    /// Calendar date as `YYYY-MM-DD`. Not validated.
    pub date: String,
    /// Free-text description, possibly empty.
    pub description: String,
}

impl Expense {
    /// Creates a new expense with a freshly generated id.
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount,
            category: category.into(),
            date: date.into(),
            description: description.into(),
        }
    }

    /// Serializes the expense to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes an expense from a JSON string.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }
}

// serde_json writes non-finite floats as `null`.
fn amount_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Today's UTC date formatted as `YYYY-MM-DD`.
pub fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

pub mod form;
pub mod report;
pub mod shared;
pub mod store;

pub use form::{ExpenseForm, parse_amount};
pub use report::{
    CategoryTotals, ColorStrategy, Hsl, PieSlice, assign_colors, by_category, format_amount,
    pie_slices, total_of,
};
pub use shared::SharedExpenseStore;
pub use store::ExpenseStore;
