use crate::commands::{plural, Out};
use crate::model::Stats;
use crate::{Config, Result};

/// Computes the total spend, the number of expenses and the per-category totals.
pub async fn stats(config: &Config) -> Result<Out<Stats>> {
    let expenses = config.store().load().await?;
    let stats = Stats::compute(&expenses);
    let message = format!(
        "Total spend {} across {} {} in {} {}",
        stats.total,
        stats.count,
        plural(stats.count, "expense", "expenses"),
        stats.categories.len(),
        plural(stats.categories.len(), "category", "categories"),
    );
    Ok(Out::new(message, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Amount;
    use crate::test::TestEnv;
    use std::str::FromStr;

    #[tokio::test]
    async fn test_stats() {
        let env = TestEnv::new().await;
        env.insert("Coffee", "3.5", "food").await;
        env.insert("Lunch", "10", "food").await;
        env.insert("Train", "1200", "travel").await;

        let out = stats(&env.config()).await.unwrap();
        assert_eq!(
            out.message(),
            "Total spend 1,213.50 across 3 expenses in 2 categories"
        );
        let stats = out.structure().unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.total, Amount::from_str("1213.5").unwrap());
        assert_eq!(stats.categories["food"], Amount::from_str("13.5").unwrap());
    }
}
