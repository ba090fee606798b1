use std::io::Write;
use std::path::PathBuf;

use cardiorisk_cli::commands;
use cardiorisk_cli::config::{self, LogFormat};
use cardiorisk_scores::scoring::Locale;
use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

/// Cardiovascular risk scores for a patient snapshot.
#[derive(Debug, Parser)]
#[command(name = "cardiorisk", version)]
struct Cli {
    /// Label language (en or id). Overrides the config file.
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Config file to use instead of the platform default.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run every detector and calculator over a snapshot.
    Eval { snapshot: PathBuf },
    /// Apply a list of `{field, raw}` changes to a snapshot, one pass each.
    Replay { snapshot: PathBuf, changes: PathBuf },
    /// Print the diagnosis request body for a snapshot.
    Payload { snapshot: PathBuf },
    /// Print which rules each input field triggers.
    Graph,
    /// Show or edit the config file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    Show,
    SetLocale { locale: Locale },
    SetLogFormat { format: LogFormat },
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();
    let mut config = config::load_config(config_path)?;
    init_logging(config.log_format);

    let locale = cli.locale.unwrap_or(config.locale);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Eval { snapshot } => {
            commands::eval(commands::load_snapshot(&snapshot)?, locale, &mut out)?;
        }
        Command::Replay { snapshot, changes } => {
            let snapshot = commands::load_snapshot(&snapshot)?;
            let changes = commands::load_changes(&changes)?;
            commands::replay(snapshot, &changes, locale, &mut out)?;
        }
        Command::Payload { snapshot } => {
            commands::payload(commands::load_snapshot(&snapshot)?, &mut out)?;
        }
        Command::Graph => commands::graph(&mut out)?,
        Command::Config(ConfigCommand::Show) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
        }
        Command::Config(ConfigCommand::SetLocale { locale }) => {
            config.locale = locale;
            config::save_config(&config, config_path)?;
        }
        Command::Config(ConfigCommand::SetLogFormat { format }) => {
            config.log_format = format;
            config::save_config(&config, config_path)?;
        }
    }

    out.flush()?;
    Ok(())
}
