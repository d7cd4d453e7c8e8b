use std::path::Path;

use csv::{Reader, Writer};
use serde::Deserialize;
use uuid::Uuid;

use super::{ImportError, SnapshotFormat};
use crate::core::{AmountPolicy, Expense, parse_amount};

#[derive(Deserialize)]
struct CsvRow {
    id: Option<String>,
    amount: String,
    category: String,
    date: String,
    #[serde(default)]
    description: String,
}

pub struct CsvFormat;

impl CsvFormat {
    fn parse_internal(path: &Path, policy: AmountPolicy) -> Result<Vec<Expense>, ImportError> {
        let mut rdr = Reader::from_path(path).map_err(|e| ImportError::Parse(e.to_string()))?;
        let mut expenses = Vec::new();
        for result in rdr.deserialize() {
            let row: CsvRow = result.map_err(|e| ImportError::Parse(e.to_string()))?;
            let id = match row.id {
                Some(id) if !id.trim().is_empty() => id,
                _ => Uuid::new_v4().to_string(),
            };
            expenses.push(Expense {
                id,
                amount: parse_amount(&row.amount, policy)?,
                category: row.category,
                date: row.date,
                description: row.description,
            });
        }
        Ok(expenses)
    }
}

impl SnapshotFormat for CsvFormat {
    fn parse(path: &Path, policy: AmountPolicy) -> Result<Vec<Expense>, ImportError> {
        Self::parse_internal(path, policy)
    }

    fn export(path: &Path, expenses: &[Expense]) -> Result<(), ImportError> {
        let mut wtr = Writer::from_path(path).map_err(|e| ImportError::Parse(e.to_string()))?;
        for expense in expenses {
            wtr.serialize(expense)
                .map_err(|e| ImportError::Parse(e.to_string()))?;
        }
        wtr.flush()?;
        Ok(())
    }
}

pub fn parse(path: &Path, policy: AmountPolicy) -> Result<Vec<Expense>, ImportError> {
    CsvFormat::parse(path, policy)
}

pub fn export(path: &Path, expenses: &[Expense]) -> Result<(), ImportError> {
    CsvFormat::export(path, expenses)
}
