use std::path::PathBuf;

use clap::Parser;

use fivehundred_app::config::{DEFAULT_CONFIG_PATH, GameConfig};
use fivehundred_app::console::ConsoleIo;
use fivehundred_app::logging::init_logging;
use fivehundred_core::game::session::Session;
use fivehundred_core::game::table::Table;

/// Four-player Five Hundred at the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "fivehundred",
    author,
    version,
    about = "Deal and play rounds of Five Hundred"
)]
struct Cli {
    /// Path to the YAML configuration file. When omitted, fivehundred.yaml
    /// is used if present, otherwise built-in defaults.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the RNG seed used for shuffling.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Override the logging level from the configuration.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Exit after validating the configuration (no game is run).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config.as_ref() {
        Some(path) => GameConfig::from_path(path)?,
        None => GameConfig::load_or_default(DEFAULT_CONFIG_PATH)?,
    };

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.validate()?;

    if cli.validate_only {
        println!(
            "Configuration OK: players {}, seed {}",
            config.players.join(", "),
            config
                .seed
                .map_or_else(|| "from entropy".to_string(), |s| s.to_string())
        );
        return Ok(());
    }

    let _logging_guard = init_logging(&config.logging)?;

    let names = config.seat_names()?;
    let table = match config.seed {
        Some(seed) => Table::with_seed(names, seed),
        None => Table::new(names),
    };

    let stdin = std::io::stdin();
    let mut io = ConsoleIo::new(table, stdin.lock(), std::io::stdout());
    let mut session = Session::new();
    session.run(&mut io)?;

    Ok(())
}
