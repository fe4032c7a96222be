pub mod args;
mod backup;
pub mod commands;
mod config;
mod error;
pub mod model;
mod server;
mod store;
mod utils;

pub use backup::Backup;
pub use config::{Config, ConfigFile};
pub use error::{Error, InputError, Result};
pub use server::{router, ApiError, ErrorResponse, MessageResponse};
pub use store::Store;
