//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gendex")]
#[command(about = "Browse Pokémon generations, rosters and wild locations", long_about = None)]
pub(crate) struct Cli {
    /// API root URL (defaults to the public PokéAPI)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the supported generations and their game versions
    Generations,

    /// Fetch and print a generation's Pokémon roster
    Roster {
        /// Generation number (1-9)
        generation: u8,

        /// Only show entries whose name or dex number contains this text
        #[arg(short, long)]
        filter: Option<String>,

        /// Include sprite URLs in the listing
        #[arg(long)]
        sprites: bool,
    },

    /// Show where a Pokémon can be caught in a generation
    Locations {
        /// Generation number (1-9)
        generation: u8,

        /// Species name (e.g. pikachu) or dex number
        species: String,
    },

    /// Interactively browse generations, rosters and encounter details
    Browse {
        /// Jump straight into this generation
        #[arg(short, long)]
        generation: Option<u8>,
    },

    /// Manage gendex settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and where they come from
    Show,

    /// Print the config file path
    Path,

    /// Change a setting and save it to the config file
    Set {
        /// Setting name: api_url or max_in_flight
        key: String,

        /// New value
        value: String,
    },
}
