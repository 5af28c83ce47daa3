//! Interactive tracking session.
//!
//! Reads one command per line. Activities live only as long as the loop
//! runs.

use std::io::{self, BufRead, Write};

use ecohelper_core::activity::types_for;
use ecohelper_core::{Category, Config, Event, Session, ACTIVITY_TYPES};

use super::parse_entry;
use crate::render;

const HELP: &str = "\
Commands:
  log <water|energy> <type> <amount>   log an activity (liters or kWh)
  summary                              today's totals and savings
  recent                               most recent activities
  tips                                 personalized tips
  dashboard                            everything above
  types [water|energy]                 known activity types
  help                                 this message
  quit                                 end the session
";

pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(stdin.lock(), stdout.lock(), config)
}

/// Drive a session from any line source.
pub fn run_with<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::with_recent_limit(config.display.recent_limit);
    writeln!(out, "Eco Helper - track & reduce your environmental impact")?;
    writeln!(out, "Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };

        match command {
            "log" => {
                let entry = words.collect::<Vec<_>>().join(":");
                let (category, activity_type, amount) = parse_entry(&entry);
                match session.submit_fields(category, activity_type, amount) {
                    Ok(_) => writeln!(out, "Activity logged successfully!")?,
                    Err(e) => writeln!(out, "rejected: {e}")?,
                }
                for event in session.drain_events() {
                    if let Event::ActivityLogged { .. } = event {
                        write!(out, "{}", render::summary(&session.dashboard()))?;
                    }
                }
            }
            "summary" => write!(out, "{}", render::summary(&session.dashboard()))?,
            "recent" => write!(
                out,
                "{}",
                render::recent(&session.dashboard().recent, &config.display)
            )?,
            "tips" => write!(out, "{}", render::tips(&session.dashboard().tips))?,
            "dashboard" => write!(
                out,
                "{}",
                render::dashboard(&session.dashboard(), &config.display)
            )?,
            "types" => match words.next().map(str::parse::<Category>) {
                Some(Ok(category)) => write!(out, "{}", render::types(types_for(category)))?,
                Some(Err(e)) => writeln!(out, "rejected: {e}")?,
                None => write!(out, "{}", render::types(ACTIVITY_TYPES.iter()))?,
            },
            "help" => write!(out, "{HELP}")?,
            "quit" | "exit" => break,
            other => writeln!(out, "unknown command '{other}', type 'help'")?,
        }
        out.flush()?;
    }

    tracing::debug!(activities = session.activities().len(), "session ended");
    Ok(())
}
