use clap::Parser;
use expense_tracker::args::{Args, Command};
use expense_tracker::{commands, Config, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let home = args.common().home().path();

    let _: () = match args.command() {
        Command::Init(init_args) => commands::init(home, init_args.config_file()).await?.print(),

        Command::Serve(serve_args) => {
            let config = Config::load(home).await?;
            commands::serve(config, serve_args.host(), serve_args.port())
                .await?
                .print()
        }

        Command::Add(add_args) => {
            let config = Config::load(home).await?;
            commands::insert_expense(&config, add_args.fields())
                .await?
                .print()
        }

        Command::List => {
            let config = Config::load(home).await?;
            commands::list_expenses(&config).await?.print()
        }

        Command::Update(update_args) => {
            let config = Config::load(home).await?;
            commands::update_expense(&config, update_args.id(), update_args.fields())
                .await?
                .print()
        }

        Command::Delete(delete_args) => {
            let config = Config::load(home).await?;
            commands::delete_expense(&config, delete_args.id())
                .await?
                .print()
        }

        Command::Stats => {
            let config = Config::load(home).await?;
            commands::stats(&config).await?.print()
        }
    };
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use the log level for this crate and the HTTP trace layer.
            EnvFilter::new(format!(
                "{}={level},expense_tracker={level},tower_http={level}",
                env!("CARGO_CRATE_NAME"),
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
