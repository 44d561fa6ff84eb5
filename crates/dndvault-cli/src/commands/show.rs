//! Show command
//!
//! Usage: dndvault show --character <FILE>

use super::load_character;
use clap::Args;
use dndvault_core::render::{character_line, stats_line};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Character JSON
    #[arg(long)]
    pub character: PathBuf,
}

/// Execute show command
pub fn execute(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let character = load_character(&args.character)?;

    println!("{}", character_line(&character));
    if let Some(approval) = &character.approval {
        println!("Status: {}", approval.label());
    }
    println!("Stats: {}", stats_line(&character));

    Ok(())
}
