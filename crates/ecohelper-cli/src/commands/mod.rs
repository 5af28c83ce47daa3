pub mod config;
pub mod session;
pub mod summary;
pub mod tips;
pub mod types;

use clap::Args;
use ecohelper_core::{Config, Session};

/// Activities passed on the command line for one-shot commands.
#[derive(Args)]
pub struct LogArgs {
    /// Activity as category:type:amount (e.g. water:shower:40); repeatable
    #[arg(long = "log", value_name = "CATEGORY:TYPE:AMOUNT")]
    pub entries: Vec<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl LogArgs {
    /// Submit every entry in order to a fresh session.
    pub fn into_session(&self, config: &Config) -> Result<Session, Box<dyn std::error::Error>> {
        let mut session = Session::with_recent_limit(config.display.recent_limit);
        for entry in &self.entries {
            let (category, activity_type, amount) = parse_entry(entry);
            session
                .submit_fields(category, activity_type, amount)
                .map_err(|e| format!("rejected '{entry}': {e}"))?;
        }
        Ok(session)
    }
}

/// Split `category:type:amount`. Missing parts become blank fields.
pub fn parse_entry(entry: &str) -> (&str, &str, &str) {
    let mut parts = entry.splitn(3, ':');
    let category = parts.next().unwrap_or_default();
    let activity_type = parts.next().unwrap_or_default();
    let amount = parts.next().unwrap_or_default();
    (category, activity_type, amount)
}
