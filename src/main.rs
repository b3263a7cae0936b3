//! pagehead - render page metadata fragments from the command line.

use anyhow::{Result, bail};
use clap::{ColorChoice, Parser};
use std::path::Path;

use pagehead::cli::{self, Cli, Commands};
use pagehead::config::{CONFIG_FILE, SiteConfig, find_config_file};
use pagehead::{debug, log, logger};

fn main() {
    if let Err(err) = run() {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = load_config(&cli.config)?;

    match &cli.command {
        Commands::Render { args } => cli::render::run_render(args, &config),
        Commands::Check => cli::check::run_check(&config),
    }
}

/// Find and load the config, falling back to defaults when the default
/// file name is not found anywhere upward.
fn load_config(config_name: &Path) -> Result<SiteConfig> {
    let cwd = std::env::current_dir()?;
    match find_config_file(&cwd, config_name) {
        Some(path) => {
            debug!("config"; "loading {}", path.display());
            SiteConfig::load(&path)
        }
        None if config_name == Path::new(CONFIG_FILE) => {
            debug!("config"; "no {} found, using defaults", CONFIG_FILE);
            Ok(SiteConfig::default())
        }
        None => bail!("config file `{}` not found", config_name.display()),
    }
}
