//! CLI frontend for the "Genius or Mason?" quiz engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gom",
    about = "Genius or Mason? — a historical-figures quiz",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter catalog file with the classic roster
    Init {
        /// Directory to place characters.json in
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// List the characters in a catalog
    List {
        /// Path to the catalog file
        #[arg(short, long, default_value = "characters.json")]
        catalog: PathBuf,
    },

    /// Validate a catalog file and report its contents
    Check {
        /// Path to the catalog file
        #[arg(short, long, default_value = "characters.json")]
        catalog: PathBuf,
    },

    /// Play the quiz interactively
    Play {
        /// Path to the catalog file
        #[arg(short, long, default_value = "characters.json")]
        catalog: PathBuf,

        /// RNG seed for reproducible character picks
        #[arg(short, long)]
        seed: Option<u64>,

        /// Use the persisted day-by-day rotation instead of random picks
        #[arg(long)]
        daily: bool,

        /// State file for the daily rotation
        #[arg(long, default_value = "rotation.json")]
        state: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { dir } => commands::init::run(&dir),
        Commands::List { catalog } => commands::list::run(&catalog),
        Commands::Check { catalog } => commands::check::run(&catalog),
        Commands::Play {
            catalog,
            seed,
            daily,
            state,
        } => commands::play::run(&catalog, seed, daily, &state),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
