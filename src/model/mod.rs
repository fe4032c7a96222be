//! Types that represent the core data model, such as `Expense` and `Stats`.
mod amount;
mod expense;
mod stats;

pub use amount::{Amount, AmountError};
pub(crate) use expense::today;
pub use expense::{Expense, ExpenseFields};
pub use stats::Stats;
