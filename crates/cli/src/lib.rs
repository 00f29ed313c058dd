pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use rewear_core::{AppConfig, LoadOptions, LogFormat};

#[derive(Debug, Parser)]
#[command(
    name = "rewear",
    about = "Rewear wardrobe rediscovery CLI",
    long_about = "Suggest outfits from a wardrobe snapshot, list neglected items, and inspect wear statistics.",
    after_help = "Examples:\n  rewear suggest --wardrobe wardrobe.json --temperature \"28°C\"\n  rewear neglected --wardrobe wardrobe.json\n  rewear stats --wardrobe wardrobe.json --days 30\n  rewear config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(long, global = true, help = "Path to a rewear.toml config file")]
    config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Suggest an outfit built around a neglected item")]
    Suggest {
        #[arg(long, help = "Path to the wardrobe snapshot (JSON)")]
        wardrobe: PathBuf,
        #[arg(long, help = "Current temperature, e.g. \"28°C\"; omit to skip weather filtering")]
        temperature: Option<String>,
        #[arg(long = "dismiss", help = "Item id to exclude from featuring; repeatable")]
        dismiss: Vec<String>,
        #[arg(long, default_value_t = 1, help = "Produce up to N suggestions, dismissing each featured item in turn")]
        tries: u32,
        #[arg(long, help = "Seed the random selection for reproducible output")]
        seed: Option<u64>,
    },
    #[command(about = "Show which items were worn over the last N days")]
    Stats {
        #[arg(long, help = "Path to the wardrobe snapshot (JSON)")]
        wardrobe: PathBuf,
        #[arg(long, default_value_t = 30, help = "Length of the reporting window in days")]
        days: i64,
    },
    #[command(about = "List items unworn for longer than the neglect threshold")]
    Neglected {
        #[arg(long, help = "Path to the wardrobe snapshot (JSON)")]
        wardrobe: PathBuf,
        #[arg(long, help = "Override the neglect threshold in days")]
        threshold: Option<i64>,
    },
    #[command(about = "Inspect effective configuration values with redaction")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let options =
        LoadOptions { config_path: cli.config.clone(), require_file: cli.config.is_some() };
    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => {
            let result = commands::CommandResult::failure(
                "config",
                "config_validation",
                error.to_string(),
                2,
            );
            println!("{}", result.output);
            return ExitCode::from(result.exit_code);
        }
    };

    init_logging(&config);

    let result = match cli.command {
        Command::Suggest { wardrobe, temperature, dismiss, tries, seed } => {
            commands::suggest::run(&config, &wardrobe, temperature.as_deref(), &dismiss, tries, seed)
        }
        Command::Stats { wardrobe, days } => commands::stats::run(&wardrobe, days),
        Command::Neglected { wardrobe, threshold } => {
            commands::neglected::run(&config, &wardrobe, threshold)
        }
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run(&config) }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

fn init_logging(config: &AppConfig) {
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(std::io::stderr);

    // try_init keeps repeated in-process invocations (tests) from panicking.
    let _ = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
