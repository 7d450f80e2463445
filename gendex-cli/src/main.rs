//! gendex CLI
//!
//! Command-line interface for browsing Pokémon generation rosters and
//! wild-encounter locations from the PokéAPI.

mod cli_types;
mod commands;
mod error;
mod logging;
mod spinner;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref());

    let settings = gendex_api::Settings::load().with_overrides(cli.api_url.clone());

    let result = match cli.command {
        Commands::Generations => commands::generations::run_generations(),
        Commands::Roster {
            generation,
            filter,
            sprites,
        } => commands::roster::run_roster(&settings, generation, filter, sprites, cli.quiet),
        Commands::Locations {
            generation,
            species,
        } => commands::locations::run_locations(&settings, generation, &species, cli.quiet),
        Commands::Browse { generation } => {
            commands::browse::run_browse(&settings, generation, cli.quiet)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show(&settings, cli.api_url.as_deref())
            }
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::Set { key, value } => commands::config::run_config_set(&key, &value),
        },
    };

    if let Err(e) = result {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

/// Log a blank line at info level (omitted in quiet mode).
pub(crate) fn log_blank() {
    log::info!("");
}
