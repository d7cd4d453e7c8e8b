use std::path::Path;

use super::{ImportError, SnapshotFormat};
use crate::core::{AmountPolicy, Expense, ExpenseError};

pub struct JsonFormat;

impl JsonFormat {
    pub fn parse_str(input: &str) -> Result<Vec<Expense>, ImportError> {
        serde_json::from_str(input).map_err(|e| ImportError::Parse(e.to_string()))
    }

    /// Like [`parse_str`](Self::parse_str), refusing NaN (`null`) and infinite
    /// amounts under [`AmountPolicy::Reject`].
    pub fn parse_str_with_policy(
        input: &str,
        policy: AmountPolicy,
    ) -> Result<Vec<Expense>, ImportError> {
        let expenses = Self::parse_str(input)?;
        if policy == AmountPolicy::Reject {
            if let Some(bad) = expenses.iter().find(|e| !e.amount.is_finite()) {
                return Err(ExpenseError::InvalidAmount(bad.amount.to_string()).into());
            }
        }
        Ok(expenses)
    }
}

impl SnapshotFormat for JsonFormat {
    fn parse(path: &Path, policy: AmountPolicy) -> Result<Vec<Expense>, ImportError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_str_with_policy(&content, policy)
    }

    fn export(path: &Path, expenses: &[Expense]) -> Result<(), ImportError> {
        let data = serde_json::to_string_pretty(expenses)
            .map_err(|e| ImportError::Parse(e.to_string()))?;
        std::fs::write(path, data)?;
        Ok(())
    }
}

pub fn parse(path: &Path) -> Result<Vec<Expense>, ImportError> {
    JsonFormat::parse(path, AmountPolicy::Accept)
}

pub fn parse_str(input: &str) -> Result<Vec<Expense>, ImportError> {
    JsonFormat::parse_str(input)
}

pub fn parse_str_with_policy(
    input: &str,
    policy: AmountPolicy,
) -> Result<Vec<Expense>, ImportError> {
    JsonFormat::parse_str_with_policy(input, policy)
}

pub fn export(path: &Path, expenses: &[Expense]) -> Result<(), ImportError> {
    JsonFormat::export(path, expenses)
}
