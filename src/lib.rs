//! rSchoolCal library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod calendar;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::{Backend, Config};
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::View { .. } => cli::commands::view::handle(&cli.command, cfg),
        Commands::Open { .. } => cli::commands::open::handle(&cli.command, cfg),
        Commands::Holidays { .. } => cli::commands::holidays::handle(&cli.command),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Info => cli::commands::info::handle(cfg),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

/// Apply the global command-line overrides to the loaded configuration.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(custom_store) = &cli.store {
        cfg.store = custom_store.clone();
        // an explicit store keeps the backend its extension suggests
        if cli.backend.is_none()
            && let Some(b) = Backend::from_extension(custom_store)
        {
            cfg.backend = b;
        }
    }
    if let Some(backend) = cli.backend {
        cfg.backend = backend;
    }
    if let Some(role) = cli.role {
        cfg.default_role = role;
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // 2️⃣ carica config UNA sola volta
    let mut cfg = Config::load()?;

    // 3️⃣ override da riga di comando (store, backend, ruolo)
    apply_overrides(&cli, &mut cfg);
    log::debug!(
        "store {} ({:?}), role {}",
        cfg.store_path().display(),
        cfg.backend,
        cfg.default_role.as_str()
    );

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
