use std::path::Path;

use tracing::info;

use crate::core::{AmountPolicy, Expense, ExpenseError};

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Parse(String),
    Expense(ExpenseError),
    UnsupportedFormat(String),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(e) => write!(f, "io error: {e}"),
            ImportError::Parse(e) => write!(f, "parse error: {e}"),
            ImportError::Expense(e) => write!(f, "expense error: {e}"),
            ImportError::UnsupportedFormat(ext) => write!(f, "unsupported file format: {ext}"),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(e) => Some(e),
            ImportError::Expense(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> Self {
        ImportError::Io(e)
    }
}

impl From<ExpenseError> for ImportError {
    fn from(e: ExpenseError) -> Self {
        ImportError::Expense(e)
    }
}

/// A file format a snapshot can be read from and written to.
pub trait SnapshotFormat {
    fn parse(path: &Path, policy: AmountPolicy) -> Result<Vec<Expense>, ImportError>;
    fn export(path: &Path, expenses: &[Expense]) -> Result<(), ImportError>;
}

/// Reads a snapshot, picking the format from the file extension.
pub fn load(path: &Path, policy: AmountPolicy) -> Result<Vec<Expense>, ImportError> {
    let expenses = match extension(path).as_str() {
        "json" => json::JsonFormat::parse(path, policy)?,
        "csv" => csv::CsvFormat::parse(path, policy)?,
        other => return Err(ImportError::UnsupportedFormat(other.to_string())),
    };
    info!(path = %path.display(), count = expenses.len(), "Loaded expenses");
    Ok(expenses)
}

/// Writes a snapshot, picking the format from the file extension.
pub fn save(path: &Path, expenses: &[Expense]) -> Result<(), ImportError> {
    match extension(path).as_str() {
        "json" => json::JsonFormat::export(path, expenses)?,
        "csv" => csv::CsvFormat::export(path, expenses)?,
        other => return Err(ImportError::UnsupportedFormat(other.to_string())),
    }
    info!(path = %path.display(), count = expenses.len(), "Saved expenses");
    Ok(())
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

pub mod csv;
pub mod json;
