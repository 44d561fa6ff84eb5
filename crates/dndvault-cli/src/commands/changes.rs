//! Changes command
//!
//! Usage: dndvault changes --approved <FILE> --pending <FILE> [--json] [--config <FILE>] [--output <FILE>]

use super::load_character;
use clap::Args;
use dndvault_core::diff::{render_human_summary, DiffEngine};
use dndvault_core::errors::ExError;
use dndvault_core::ReportSettings;
use dndvault_core_types::RequestContext;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ChangesArgs {
    /// Approved character JSON
    #[arg(long)]
    pub approved: PathBuf,

    /// Pending update JSON for the same character
    #[arg(long)]
    pub pending: PathBuf,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Report settings file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Guild the review is for, recorded in logs
    #[arg(long)]
    pub guild: Option<String>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute changes command
pub fn execute(args: ChangesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = RequestContext::new();
    if let Some(guild) = args.guild {
        ctx = ctx.with_guild_id(guild);
    }
    let correlate = |e: ExError| e.with_request_id(ctx.request_id.clone());

    let settings = ReportSettings::load(args.config.as_deref()).map_err(correlate)?;
    let approved = load_character(&args.approved).map_err(correlate)?;
    let pending = load_character(&args.pending).map_err(correlate)?;

    let report = DiffEngine::new(settings).compute_in(&ctx, &approved, &pending);

    let rendered = if args.json {
        let mut text = serde_json::to_string_pretty(&report)
            .map_err(|e| correlate(ExError::from(e).with_op("changes")))?;
        text.push('\n');
        text
    } else {
        render_human_summary(&report, &approved.name)
    };

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, rendered)?;
        println!("✓ Wrote changes to {}", output_path.display());
    } else {
        print!("{}", rendered);
    }

    Ok(())
}
