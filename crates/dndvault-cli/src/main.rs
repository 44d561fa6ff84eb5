//! D&D Vault CLI
//!
//! Local review of a pending character update against its approved record.

use clap::{Parser, Subcommand};
use dndvault_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "dndvault")]
#[command(about = "D&D Vault - character change review", long_about = None)]
struct Cli {
    /// Emit structured logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show what a pending update changes compared to the approved character
    Changes(commands::changes::ChangesArgs),
    /// Show a one-line summary of a character
    Show(commands::show::ShowArgs),
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if cli.verbose {
        init(Profile::Development);
    }

    let result = match cli.command {
        Commands::Changes(args) => commands::changes::execute(args),
        Commands::Show(args) => commands::show::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
