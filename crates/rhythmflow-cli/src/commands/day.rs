//! Day view commands.

use clap::Subcommand;
use rhythmflow_core::{slots as grid_slots, Config, DaySchedule, TimeBlock};

use crate::common::open_store;

#[derive(Subcommand)]
pub enum DayAction {
    /// Show today's blocks in order
    Show {
        /// Output the full schedule as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show every slot of the day, with its block if one fills it
    Timeline,
}

pub fn run(action: DayAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config)?;
    let schedule = store.schedule();

    match action {
        DayAction::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(schedule)?);
            } else {
                print_header(schedule);
                if schedule.is_empty() {
                    println!("No activities scheduled for today.");
                }
                for block in &schedule.blocks {
                    println!("{}", format_block(block));
                }
            }
        }
        DayAction::Timeline => {
            print_header(schedule);
            for slot in grid_slots() {
                match schedule.block_in_slot(&slot.start_time, &slot.end_time) {
                    Some(block) => println!("{}  {}", slot.start_time, format_block(block)),
                    None => println!("{}  + free", slot.start_time),
                }
            }
        }
    }
    Ok(())
}

/// List grid slots, optionally only those no block starts in.
pub fn slots(free_only: bool, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let taken: Vec<String> = if free_only {
        let store = open_store(config)?;
        store
            .schedule()
            .blocks
            .iter()
            .map(|b| b.start_time.clone())
            .collect()
    } else {
        Vec::new()
    };

    for slot in grid_slots() {
        if taken.contains(&slot.start_time) {
            continue;
        }
        println!("{}-{}", slot.start_time, slot.end_time);
    }
    Ok(())
}

fn print_header(schedule: &DaySchedule) {
    println!("{}", schedule.date.format("%A, %-d %B %Y"));
    println!(
        "Points: {}  Completed: {}/{}",
        schedule.total_points,
        schedule.completed_blocks,
        schedule.blocks.len()
    );
    println!();
}

pub fn format_block(block: &TimeBlock) -> String {
    let mark = if block.completed { "[x]" } else { "[ ]" };
    let mut line = format!(
        "{mark} {}-{} {} ({}, {} energy, {} pts) {}",
        block.start_time, block.end_time, block.title, block.category, block.energy, block.points, block.id
    );
    if let Some(description) = &block.description {
        line.push_str(&format!("\n      {description}"));
    }
    line
}
