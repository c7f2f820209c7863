use log::error;
use std::env;
use std::path::PathBuf;

use rbook_export::{load_config, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = load_config()?;

    // Optional input path as the first command-line argument
    if let Some(input) = env::args().nth(1) {
        config.input = PathBuf::from(input);
    }

    if let Err(e) = run(&config) {
        error!("Export failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
