use super::open_audit;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (not in test mode)
///  - an empty event store
///  - the audit log
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing rSchoolCal…");

    cfg.init_all(cli.test)?;

    let audit = open_audit(cfg);
    audit.record(
        "init",
        &cfg.store_path().to_string_lossy(),
        &format!("Event store initialized ({:?} backend)", cfg.backend),
    );

    println!("🎉 rSchoolCal initialization completed!");
    Ok(())
}
