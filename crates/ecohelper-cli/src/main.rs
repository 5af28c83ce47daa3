use clap::{Parser, Subcommand};
use ecohelper_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "ecohelper-cli", version, about = "Eco Helper CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive tracking session
    Session,
    /// Log activities and show today's dashboard
    Summary {
        #[command(flatten)]
        log: commands::LogArgs,
    },
    /// Log activities and show personalized tips
    Tips {
        #[command(flatten)]
        log: commands::LogArgs,
    },
    /// List known activity types
    Types {
        /// Only show this category (water or energy)
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    init_tracing(&config);
    if let Some(e) = load_error {
        tracing::warn!(error = %e, "falling back to default configuration");
    }

    let result = match cli.command {
        Commands::Session => commands::session::run(&config),
        Commands::Summary { log } => commands::summary::run(log, &config),
        Commands::Tips { log } => commands::tips::run(log, &config),
        Commands::Types { category, json } => commands::types::run(category.as_deref(), json),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
