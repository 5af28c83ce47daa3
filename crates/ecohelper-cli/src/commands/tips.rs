use ecohelper_core::{Config, TipCard};

use super::LogArgs;
use crate::render;

pub fn run(log: LogArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let tips: Vec<TipCard> = log
        .into_session(config)?
        .tips()
        .into_iter()
        .map(TipCard::from)
        .collect();

    if log.json {
        println!("{}", serde_json::to_string_pretty(&tips)?);
    } else {
        print!("{}", render::tips(&tips));
    }
    Ok(())
}
