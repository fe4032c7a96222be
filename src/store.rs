//! This module is responsible for reading and writing the expenses data file.
//!
//! The whole data set is the unit of persistence: every mutation loads the full list, changes it
//! in memory and writes the full list back. Mutations are serialized by a writer lock so that
//! concurrent requests cannot lose each other's updates.

use crate::backup::Backup;
use crate::model::{Expense, ExpenseFields};
use crate::{utils, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    backup: Backup,
    writer: Arc<Mutex<()>>,
}

impl Store {
    pub(crate) fn new(path: impl Into<PathBuf>, backup: Backup) -> Self {
        Self {
            path: path.into(),
            backup,
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Writes an empty list to the data file if it does not exist yet.
    pub(crate) async fn init(&self) -> Result<()> {
        if !self.exists().await? {
            debug!("Creating empty data file at {}", self.path.display());
            self.write(&[]).await?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all expenses. Returns an empty list if the data file does not exist.
    pub async fn load(&self) -> Result<Vec<Expense>> {
        if !self.exists().await? {
            return Ok(Vec::new());
        }
        utils::deserialize(&self.path).await
    }

    /// Replaces the persisted list with `expenses`.
    pub async fn save(&self, expenses: &[Expense]) -> Result<()> {
        let _guard = self.writer.lock().await;
        self.write(expenses).await
    }

    /// Appends a new expense built from `fields` and returns it.
    ///
    /// The new id is one more than the largest id present, so ids of deleted records may be
    /// reused only once every higher id is gone too. An empty store starts at 1.
    ///
    /// # Errors
    /// - Returns an `InputError` if `amount` is missing or `date` is malformed. Nothing is written.
    /// - Returns an error if the data file cannot be read or written.
    pub async fn insert(&self, fields: ExpenseFields) -> Result<Expense> {
        let _guard = self.writer.lock().await;
        let mut expenses = self.load().await?;
        let id = next_id(&expenses)?;
        let expense = Expense::create(id, fields)?;
        expenses.push(expense.clone());
        self.write(&expenses).await?;
        debug!("Inserted expense {id}");
        Ok(expense)
    }

    /// Removes every expense with `id` and returns how many were removed. Removing nothing is not
    /// an error.
    pub async fn delete(&self, id: u64) -> Result<usize> {
        let _guard = self.writer.lock().await;
        let mut expenses = self.load().await?;
        let before = expenses.len();
        expenses.retain(|e| e.id != id);
        let removed = before - expenses.len();
        if removed > 0 {
            self.write(&expenses).await?;
        }
        debug!("Deleted {removed} expense(s) with id {id}");
        Ok(removed)
    }

    /// Applies `fields` to the first expense with `id` and returns the updated record, or `None`
    /// if there is no such expense.
    pub async fn update(&self, id: u64, fields: ExpenseFields) -> Result<Option<Expense>> {
        let _guard = self.writer.lock().await;
        let mut expenses = self.load().await?;
        let Some(expense) = expenses.iter_mut().find(|e| e.id == id) else {
            debug!("No expense with id {id} to update");
            return Ok(None);
        };
        expense.apply(fields)?;
        let updated = expense.clone();
        self.write(&expenses).await?;
        debug!("Updated expense {id}");
        Ok(Some(updated))
    }

    /// Backs up the current file and replaces it. Callers must hold the writer lock.
    async fn write(&self, expenses: &[Expense]) -> Result<()> {
        let json = serde_json::to_string_pretty(expenses).context("Unable to serialize expenses")?;
        self.backup.save_copy(&self.path).await?;
        utils::write_atomic(&self.path, json).await
    }

    async fn exists(&self) -> Result<bool> {
        tokio::fs::try_exists(&self.path)
            .await
            .with_context(|| format!("Unable to check for {}", self.path.display()))
    }
}

fn next_id(expenses: &[Expense]) -> Result<u64> {
    expenses
        .iter()
        .map(|e| e.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .context("No ids left: the largest id in the data file is already the maximum")
}
