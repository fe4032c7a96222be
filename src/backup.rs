//! Rotating copies of the data file, taken before each overwrite.

use crate::model::today;
use crate::{utils, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Manages backup file creation and rotation.
///
/// A backup of `expenses.json` is named `expenses.json.YYYY-MM-DD-NNN` where NNN is a sequence
/// number within the day. Only the newest `backup_copies` files are kept.
#[derive(Debug, Clone)]
pub struct Backup {
    backups_dir: PathBuf,
    backup_copies: u32,
}

impl Backup {
    pub fn new(backups_dir: impl Into<PathBuf>, backup_copies: u32) -> Self {
        Self {
            backups_dir: backups_dir.into(),
            backup_copies,
        }
    }

    /// Copies `source` into the backups directory and rotates old copies.
    ///
    /// Returns `None` without doing anything when backups are disabled (`backup_copies == 0`) or
    /// when `source` does not exist yet.
    pub async fn save_copy(&self, source: &Path) -> Result<Option<PathBuf>> {
        if self.backup_copies == 0 || !source.is_file() {
            return Ok(None);
        }
        let prefix = source
            .file_name()
            .with_context(|| format!("No file name in path {}", source.display()))?
            .to_string_lossy()
            .to_string();

        let date = today();
        let seq = self.next_sequence_number(&prefix, &date).await?;
        let path = self.backups_dir.join(format!("{prefix}.{date}-{seq:03}"));
        utils::copy(source, &path).await?;
        debug!("Backed up {} to {}", source.display(), path.display());

        self.rotate(&prefix).await?;
        Ok(Some(path))
    }

    /// Scans the backups directory for existing files with the given prefix and date,
    /// and returns the next sequence number.
    async fn next_sequence_number(&self, prefix: &str, date: &str) -> Result<u32> {
        let mut max_seq: u32 = 0;

        let mut dir = utils::read_dir(&self.backups_dir).await?;
        while let Some(entry) = dir
            .next_entry()
            .await
            .context("Failed to read directory entry")?
        {
            let name = entry.file_name().to_string_lossy().to_string();
            if let Some(seq) = parse_sequence_number(&name, prefix, date) {
                max_seq = max_seq.max(seq);
            }
        }

        Ok(max_seq + 1)
    }

    /// Deletes the oldest backups of `prefix` until only `backup_copies` remain.
    async fn rotate(&self, prefix: &str) -> Result<()> {
        let mut files: Vec<(PathBuf, (String, u32))> = Vec::new();

        let mut dir = utils::read_dir(&self.backups_dir).await?;
        while let Some(entry) = dir
            .next_entry()
            .await
            .context("Failed to read directory entry")?
        {
            let name = entry.file_name().to_string_lossy().to_string();
            if let Some(key) = backup_key(&name, prefix) {
                files.push((entry.path(), key));
            }
        }

        // Oldest first. Sequence numbers are compared as numbers since they may outgrow 3 digits.
        files.sort_by(|a, b| a.1.cmp(&b.1));

        let to_delete = files.len().saturating_sub(self.backup_copies as usize);
        for (path, _) in files.into_iter().take(to_delete) {
            utils::remove(&path).await?;
        }

        Ok(())
    }
}

/// Parses the sequence number from a backup filename of the form `{prefix}.{date}-{NNN}`.
fn parse_sequence_number(filename: &str, prefix: &str, date: &str) -> Option<u32> {
    filename
        .strip_prefix(&format!("{prefix}.{date}-"))?
        .parse()
        .ok()
}

/// Returns the `(date, sequence number)` of a backup of `prefix`, i.e. `{prefix}.YYYY-MM-DD-NNN`,
/// or `None` if `filename` is not one.
fn backup_key(filename: &str, prefix: &str) -> Option<(String, u32)> {
    let rest = filename.strip_prefix(&format!("{prefix}."))?;
    let (date, seq) = rest.rsplit_once('-')?;
    if date.len() != 10 || seq.is_empty() || !seq.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some((date.to_string(), seq.parse().ok()?))
}
