//! Command-line front end for `tierforge-core`.
//!
//! `tierforge 1,0,1 2 1,2` reads the unit counts held per tier (tier 1
//! first), plans the purchase for one unit at the next tier up, and prints
//! the report.

pub mod args;
pub mod error;
pub mod logging;
pub mod report;

use clap::{ArgAction, Parser};
use tierforge_core::{Inventory, Tier, compute};
use tracing::info;

pub use error::CliError;

/// Highest tier the command line will plan for. A tier-`n` plan does `n`
/// big-integer divisions on a number of about `1.6 * n` bits.
pub const MAX_TARGET_TIER: u32 = 10_000;

/// Work out how many tier-1 units to buy to reach the next tier.
#[derive(Debug, Parser)]
#[command(name = "tierforge", version, about)]
pub struct Cli {
    /// Units held at each tier, tier 1 first. Each value is an integer or a
    /// comma-separated list of integers; blank list items are skipped, but a
    /// value with no integers at all (such as a lone `,`) is an error.
    #[arg(required = true, value_name = "UNITS", allow_negative_numbers = true)]
    pub units: Vec<String>,

    /// Plan for this tier instead of the one above the last given
    /// (at most 10000).
    #[arg(long, value_name = "TIER")]
    pub target: Option<u32>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Run one invocation and return the text to print on stdout.
pub fn run(cli: &Cli) -> Result<String, CliError> {
    let counts = args::parse_units(&cli.units)?;
    let inventory = Inventory::from_signed(counts)?;
    let target = match cli.target {
        Some(level) => Tier::new(level)?,
        None => Tier::after(inventory.len()),
    };
    if target.level() > MAX_TARGET_TIER {
        return Err(CliError::Usage(format!(
            "target tier {target} is above the supported maximum of {MAX_TARGET_TIER}"
        )));
    }
    info!(tiers = inventory.len(), target = %target, "planning purchase");

    let result = compute(target, &inventory);
    if cli.json {
        report::render_json(target, &result)
    } else {
        Ok(report::render_text(target, &result))
    }
}
