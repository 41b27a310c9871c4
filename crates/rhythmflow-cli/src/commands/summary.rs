//! Day summary command.

use rhythmflow_core::summary::percentage;
use rhythmflow_core::{Config, DaySummary, EnergyLevel};

use crate::common::open_store;

pub fn run(json: bool, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config)?;
    let summary = DaySummary::from_schedule(store.schedule());

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "Progress: {}/{} blocks ({}%)",
        summary.completed_blocks, summary.total_blocks, summary.completion_rate
    );
    println!("Points: {}", summary.total_points);

    if !summary.by_category.is_empty() {
        println!("\nBy category:");
        for stat in &summary.by_category {
            println!(
                "  {:<11} {}/{} done ({}%)",
                stat.category,
                stat.completed,
                stat.count,
                percentage(stat.completed, stat.count)
            );
        }
    }

    println!("\nEnergy distribution:");
    for energy in EnergyLevel::ALL {
        println!(
            "  {:<7} {} ({}%)",
            energy,
            summary.by_energy.get(energy),
            summary.energy_share(energy)
        );
    }
    Ok(())
}
