use crate::commands::{plural, Out};
use crate::model::Expense;
use crate::{Config, Result};

/// Returns every stored expense in file order.
pub async fn list_expenses(config: &Config) -> Result<Out<Vec<Expense>>> {
    let expenses = config.store().load().await?;
    let count = expenses.len();
    let message = format!("Found {count} {}", plural(count, "expense", "expenses"));
    Ok(Out::new(message, expenses))
}
