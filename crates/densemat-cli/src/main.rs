use anyhow::Result;
use log::LevelFilter;
use std::path::PathBuf;

use densemat_cli::cli::build_cli;
use densemat_cli::config::DemoConfig;
use densemat_cli::demo;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DENSEMAT_LOG", "error,densemat=info"))
        .init();

    let matches = build_cli().get_matches();

    if matches.get_flag("print_config") {
        println!("{}", serde_json::to_string_pretty(&DemoConfig::default())?);
        return Ok(());
    }

    let config_path = matches.get_one::<PathBuf>("config");
    let config = DemoConfig::from_arguments(config_path, &matches)?;
    log::info!(
        "[densemat] Running demo with operations: {:?}",
        config.operations
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match demo::run_demo(&config, &mut out) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Demo failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
