//! Score preview command.

use clap::Args;
use rhythmflow_core::{ActivityCategory, EnergyLevel, ScoreBreakdown};

#[derive(Args)]
pub struct ScoreArgs {
    /// Activity category
    #[arg(long)]
    category: ActivityCategory,
    /// Start time (HH:MM)
    #[arg(long)]
    start: String,
    /// Energy level
    #[arg(long, default_value = "medium")]
    energy: EnergyLevel,
    /// Output the breakdown as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ScoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let breakdown = ScoreBreakdown::explain(args.category, &args.start, args.energy)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        println!(
            "{} pts = {} ({}) x {:.1} ({:?}, hour {}) x {:.1} ({} energy)",
            breakdown.points,
            breakdown.base_points,
            breakdown.category,
            breakdown.time_multiplier,
            breakdown.band,
            breakdown.hour,
            breakdown.energy_multiplier,
            breakdown.energy,
        );
    }
    Ok(())
}
