use crate::model::{Amount, Expense};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate spend over a set of expenses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// The sum of every amount.
    pub total: Amount,
    /// The number of expenses.
    pub count: usize,
    /// Summed amount per category name.
    pub categories: BTreeMap<String, Amount>,
}

impl Stats {
    /// Computes the statistics in a single pass.
    pub fn compute<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> Self {
        let mut stats = Stats::default();
        for expense in expenses {
            stats.total += expense.amount;
            stats.count += 1;
            *stats
                .categories
                .entry(expense.category.clone())
                .or_insert(Amount::ZERO) += expense.amount;
        }
        stats
    }
}
