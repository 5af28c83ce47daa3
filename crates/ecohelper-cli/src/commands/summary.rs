//! One-shot dashboard for activities passed on the command line.

use ecohelper_core::Config;

use super::LogArgs;
use crate::render;

pub fn run(log: LogArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let session = log.into_session(config)?;
    let dashboard = session.dashboard();

    if log.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print!("{}", render::dashboard(&dashboard, &config.display));
    }
    Ok(())
}
