//! Command handlers for the expenses CLI and the web server.
//!
//! Each command returns an `Out` so that the CLI and the HTTP handlers report outcomes the same
//! way.

mod delete;
mod init;
mod insert;
mod list;
mod serve;
mod stats;
mod update;

use serde::Serialize;
use std::fmt::Debug;
use tracing::info;

pub use delete::delete_expense;
pub use init::init;
pub use insert::insert_expense;
pub use list::list_expenses;
pub use serve::serve;
pub use stats::stats;
pub use update::update_expense;

/// The output type for a command. This allows the command to return a consistent message and,
/// optionally, structured data to both the command line and HTTP interfaces.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of the command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T, S> From<S> for Out<T>
where
    T: Debug + Clone + Serialize,
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Out::new_message(value)
    }
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Takes the structured data out of `self`.
    pub fn into_structure(self) -> Option<T> {
        self.structure
    }

    /// Logs the message with `info!` and prints the structured data (if it exists) to stdout as
    /// pretty JSON, keeping stdout clean for piping.
    pub fn print(&self) {
        info!("{}", self.message);
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                println!("{json}");
            }
        }
    }
}

/// Returns `singular` when `count` is one, otherwise `plural`.
fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 {
        singular
    } else {
        plural
    }
}
