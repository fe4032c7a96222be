//! Update command handler.

use crate::commands::Out;
use crate::model::{Expense, ExpenseFields};
use crate::{Config, Result};
use tracing::debug;

/// Overwrites the supplied fields of the expense with `id`. Fields that are `None` keep their
/// existing values.
///
/// An unknown `id` is not an error: the data is left unchanged and the structure is `None`.
///
/// # Errors
///
/// - Returns an `InputError` if `date` is supplied but is not a `YYYY-MM-DD` date.
/// - Returns an error if the data file cannot be read or written.
pub async fn update_expense(
    config: &Config,
    id: u64,
    fields: ExpenseFields,
) -> Result<Out<Option<Expense>>> {
    let updated = config.store().update(id, fields).await?;
    if updated.is_none() {
        debug!("Update requested for unknown expense {id}");
    }
    Ok(Out::new("Expense updated successfully", updated))
}
