use std::path::PathBuf;

use sales_report::{
    cli::{run_cli, CliError},
    config::ConfigManager,
    core::ReportSession,
    init,
};

fn run() -> Result<(), CliError> {
    let manager = ConfigManager::default_location();
    let mut config = manager.load()?;
    if let Some(dir) = std::env::args_os().nth(1) {
        config.data_dir = Some(PathBuf::from(dir));
    }

    let session = ReportSession::load(&config)?;
    run_cli(session, config)
}

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
