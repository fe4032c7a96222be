//! These structs provide the CLI interface for the expenses CLI.

use crate::model::{Amount, ExpenseFields};
use crate::ConfigFile;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// expenses: A small personal expense tracker.
///
/// Expenses are kept in a JSON file in the expenses home directory. Run `expenses serve` to use
/// the web page at http://localhost:5000, or use the other subcommands to manage expenses from
/// the command line.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the home directory, the data file and the configuration file.
    ///
    /// This is optional: any other command creates the home directory with default settings the
    /// first time it runs. Use init to choose different settings up front.
    Init(InitArgs),
    /// Run the web server.
    Serve(ServeArgs),
    /// Add an expense.
    Add(AddArgs),
    /// Print all expenses as JSON.
    List,
    /// Change some fields of an expense.
    Update(UpdateArgs),
    /// Delete an expense.
    Delete(DeleteArgs),
    /// Print the total spend and the per-category totals as JSON.
    Stats,
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where the expenses data and configuration is held. Defaults to ~/expenses
    #[arg(long, env = "EXPENSES_HOME", default_value_t = default_home())]
    home: DisplayPath,
}

impl Common {
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn home(&self) -> &DisplayPath {
        &self.home
    }
}

/// Args for the `expenses init` command.
#[derive(Debug, Parser, Clone)]
pub struct InitArgs {
    /// The address the server binds to.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// The port the server listens on.
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// How many backups of the data file to keep. Zero disables backups.
    #[arg(long, default_value_t = 5)]
    backup_copies: u32,
}

impl InitArgs {
    pub fn config_file(&self) -> ConfigFile {
        ConfigFile::new(&self.host, self.port, self.backup_copies)
    }
}

/// Args for the `expenses serve` command.
#[derive(Debug, Parser, Clone)]
pub struct ServeArgs {
    /// Overrides the host from config.json.
    #[arg(long, env = "EXPENSES_HOST")]
    host: Option<String>,

    /// Overrides the port from config.json.
    #[arg(long, env = "EXPENSES_PORT")]
    port: Option<u16>,
}

impl ServeArgs {
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

/// Args for the `expenses add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// The amount spent, e.g. 12.50
    #[arg(long, allow_hyphen_values = true)]
    amount: Amount,

    /// What the money was spent on.
    #[arg(long)]
    description: Option<String>,

    /// A free-form category, e.g. food
    #[arg(long)]
    category: Option<String>,

    /// The date in YYYY-MM-DD format. Defaults to today.
    #[arg(long)]
    date: Option<String>,
}

impl AddArgs {
    pub fn fields(&self) -> ExpenseFields {
        ExpenseFields {
            description: self.description.clone(),
            amount: Some(self.amount),
            category: self.category.clone(),
            date: self.date.clone(),
        }
    }
}

/// Args for the `expenses update` command. Only the given fields are changed.
#[derive(Debug, Parser, Clone)]
pub struct UpdateArgs {
    /// The id of the expense to change.
    id: u64,

    #[arg(long, allow_hyphen_values = true)]
    amount: Option<Amount>,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    category: Option<String>,

    /// The date in YYYY-MM-DD format.
    #[arg(long)]
    date: Option<String>,
}

impl UpdateArgs {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn fields(&self) -> ExpenseFields {
        ExpenseFields {
            description: self.description.clone(),
            amount: self.amount,
            category: self.category.clone(),
            date: self.date.clone(),
        }
    }
}

/// Args for the `expenses delete` command.
#[derive(Debug, Parser, Clone)]
pub struct DeleteArgs {
    /// The id of the expense to delete.
    id: u64,
}

impl DeleteArgs {
    pub fn id(&self) -> u64 {
        self.id
    }
}

fn default_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("expenses"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --home or EXPENSES_HOME instead of relying on the default \
                expenses directory. If you continue using the program right now, you may have \
                problems!",
            );
            PathBuf::from("expenses")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}
