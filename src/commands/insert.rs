//! Insert command handler.

use crate::commands::Out;
use crate::model::{Expense, ExpenseFields};
use crate::{Config, Result};

/// Inserts a new expense into the data file.
///
/// The id is generated by the store and the date defaults to today.
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - A message with the generated id.
/// - The inserted `Expense`.
///
/// # Errors
///
/// - Returns an `InputError` if `amount` is missing or `date` is not a `YYYY-MM-DD` date.
/// - Returns an error if the data file cannot be read or written.
pub async fn insert_expense(config: &Config, fields: ExpenseFields) -> Result<Out<Expense>> {
    let expense = config.store().insert(fields).await?;
    let message = format!("Inserted expense with ID: {}", expense.id());
    Ok(Out::new(message, expense))
}
