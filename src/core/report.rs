//! Aggregations over a snapshot of expenses.
//!
//! Every function here is pure: it reads the slice it is given and keeps no
//! state between calls.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::Expense;

/// Hue step between consecutive positional colors, in degrees.
pub const GOLDEN_ANGLE: f64 = 137.508;
const SATURATION: u8 = 70;
const LIGHTNESS: u8 = 50;

/// Sum of all amounts. An empty snapshot sums to `0`.
pub fn total_of(expenses: &[Expense]) -> f64 {
    expenses.iter().fold(0.0, |acc, e| acc + e.amount)
}

/// Per-category sums, ordered by first occurrence of each category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryTotals {
    entries: Vec<(String, f64)>,
}

impl CategoryTotals {
    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, amount)| *amount)
    }

    /// Category names in chart order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Summed amounts in chart order.
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, amount)| *amount).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Groups expenses by exact category string and sums each group.
pub fn by_category(expenses: &[Expense]) -> CategoryTotals {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<(String, f64)> = Vec::new();
    for expense in expenses {
        match index.get(expense.category.as_str()) {
            Some(&i) => entries[i].1 += expense.amount,
            None => {
                index.insert(&expense.category, entries.len());
                entries.push((expense.category.clone(), expense.amount));
            }
        }
    }
    CategoryTotals { entries }
}

/// A color in HSL space. Saturation and lightness are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    fn with_hue(hue: f64) -> Self {
        Self {
            hue,
            saturation: SATURATION,
            lightness: LIGHTNESS,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// One color per input position, stepping the hue by [`GOLDEN_ANGLE`].
///
/// The result depends only on how many categories there are. Reordering the
/// input hands the same colors to different categories.
pub fn assign_colors<S: AsRef<str>>(categories: &[S]) -> Vec<Hsl> {
    (0..categories.len())
        .map(|i| Hsl::with_hue((i as f64 * GOLDEN_ANGLE) % 360.0))
        .collect()
}

/// How chart colors are tied to categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorStrategy {
    /// Golden-angle rotation by position, see [`assign_colors`].
    #[default]
    Positional,
    /// Hue derived from a digest of the category name; stable when the
    /// category set changes.
    Keyed,
}

impl ColorStrategy {
    pub fn assign<S: AsRef<str>>(self, categories: &[S]) -> Vec<Hsl> {
        match self {
            ColorStrategy::Positional => assign_colors(categories),
            ColorStrategy::Keyed => categories
                .iter()
                .map(|c| Hsl::with_hue(keyed_hue(c.as_ref())))
                .collect(),
        }
    }
}

// Tenth-of-a-degree resolution.
fn keyed_hue(category: &str) -> f64 {
    let digest = Sha256::digest(category.as_bytes());
    let n = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    f64::from(n % 3600) / 10.0
}

/// A labelled, colored wedge of the category pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub amount: f64,
    pub color: Hsl,
}

/// Category totals paired with their chart colors.
pub fn pie_slices(expenses: &[Expense], strategy: ColorStrategy) -> Vec<PieSlice> {
    let totals = by_category(expenses);
    let labels = totals.labels();
    let colors = strategy.assign(&labels[..]);
    totals
        .iter()
        .zip(colors)
        .map(|((name, amount), color)| PieSlice {
            name: name.to_string(),
            amount,
            color,
        })
        .collect()
}

/// Formats an amount for display, rounded to two decimal places.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    format!("{symbol} {amount:.2}")
}
