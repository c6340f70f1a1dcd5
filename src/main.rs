//! Home Energy Calculator - Main entry point
//!
//! Interactive terminal form by default, with non-interactive subcommands
//! for scripting.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use home_energy_calc_lib::cli::commands::{run_config, run_estimate, run_tips};
use home_energy_calc_lib::cli::{Cli, Commands};
use home_energy_calc_lib::core::{Config, Error};
use home_energy_calc_lib::i18n::I18n;
use home_energy_calc_lib::tui::run_tui;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    log::info!("Starting Home Energy Calculator v{}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging; the terminal form keeps quiet unless asked
fn init_logging(cli: &Cli) {
    let interactive = matches!(cli.command, None | Some(Commands::Form));
    let default_level = match (cli.verbose, interactive) {
        (0, true) => "warn",
        (0, false) => "info",
        (1, _) => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => Config::config_path().context("locating config file")?,
    };
    let mut config = load_config(&config_path);
    if let Some(lang) = &cli.lang {
        config.general.language = lang.clone();
    }
    let i18n = I18n::new(&config.general.language);

    let mut stdout = io::stdout();
    match cli.command.unwrap_or(Commands::Form) {
        Commands::Form => {
            run_tui(&config).context("running terminal form")?;
        }
        Commands::Estimate(args) => match run_estimate(&args, &config, &i18n, &mut stdout) {
            Ok(()) => {}
            Err(Error::Validation(e)) => {
                eprintln!("{}", i18n.validation_message(&e));
                return Ok(ExitCode::from(2));
            }
            Err(e) => return Err(e).context("estimating consumption"),
        },
        Commands::Tips => run_tips(&i18n, &mut stdout)?,
        Commands::Config(args) => run_config(args.action, &config, &config_path, &mut stdout)
            .with_context(|| format!("config file {}", config_path.display()))?,
    }

    Ok(ExitCode::SUCCESS)
}

/// Load configuration, falling back to defaults
fn load_config(path: &Path) -> Config {
    Config::load_from(path).unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    })
}
