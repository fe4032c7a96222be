//! Delete command handler.

use crate::commands::{plural, Out};
use crate::{Config, Result};
use tracing::debug;

/// Deletes every expense with `id`. The structure holds the number of removed records.
///
/// Deleting an id that does not exist succeeds and leaves the data unchanged.
pub async fn delete_expense(config: &Config, id: u64) -> Result<Out<usize>> {
    let removed = config.store().delete(id).await?;
    debug!(
        "Removed {removed} {} with id {id}",
        plural(removed, "expense", "expenses")
    );
    Ok(Out::new("Expense deleted successfully", removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_delete_expense_success() {
        let env = TestEnv::new().await;
        let coffee = env.insert("Coffee", "3.5", "food").await;
        let lunch = env.insert("Lunch", "10", "food").await;

        let out = delete_expense(&env.config(), coffee.id()).await.unwrap();
        assert_eq!(out.message(), "Expense deleted successfully");
        assert_eq!(out.structure(), Some(&1));

        let remaining = env.config().store().load().await.unwrap();
        assert_eq!(remaining, vec![lunch]);
    }

    #[tokio::test]
    async fn test_delete_expense_not_found() {
        let env = TestEnv::new().await;
        env.insert("Coffee", "3.5", "food").await;
        let before = env.config().store().load().await.unwrap();

        let out = delete_expense(&env.config(), 1234).await.unwrap();
        assert_eq!(out.message(), "Expense deleted successfully");
        assert_eq!(out.structure(), Some(&0));
        assert_eq!(env.config().store().load().await.unwrap(), before);
    }
}
