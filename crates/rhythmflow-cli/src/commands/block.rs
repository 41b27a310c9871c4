//! Block management commands.

use clap::Subcommand;
use rhythmflow_core::{ActivityCategory, BlockInput, Config, CoreError, EnergyLevel};

use super::day::format_block;
use crate::common::open_store;

#[derive(Subcommand)]
pub enum BlockAction {
    /// Add a block to today's schedule
    Add {
        /// Start time (HH:MM, on the half hour)
        #[arg(long)]
        start: String,
        /// End time (HH:MM, on the half hour; 00:00 for midnight)
        #[arg(long)]
        end: String,
        /// Block title
        #[arg(long)]
        title: String,
        /// Optional description
        #[arg(long)]
        description: Option<String>,
        /// work, rest, exercise, leisure, learning, meditation, social, chores, nutrition
        #[arg(long, default_value = "work")]
        category: ActivityCategory,
        /// high, medium or low
        #[arg(long, default_value = "medium")]
        energy: EnergyLevel,
    },
    /// Edit a block; unspecified fields keep their current value
    Edit {
        /// Block ID
        id: String,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Remove the description
        #[arg(long, conflicts_with = "description")]
        clear_description: bool,
        #[arg(long)]
        category: Option<ActivityCategory>,
        #[arg(long)]
        energy: Option<EnergyLevel>,
    },
    /// Toggle a block between done and not done
    Toggle {
        /// Block ID
        id: String,
    },
    /// Show one block as JSON
    Get {
        /// Block ID
        id: String,
    },
}

pub fn run(action: BlockAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config)?;

    match action {
        BlockAction::Add {
            start,
            end,
            title,
            description,
            category,
            energy,
        } => {
            let input = BlockInput {
                start_time: start,
                end_time: end,
                title,
                description,
                category,
                energy,
            };
            let block = store.create_block(input)?;
            println!("Block created: {}", block.id);
            println!("{}", format_block(block));
        }
        BlockAction::Edit {
            id,
            start,
            end,
            title,
            description,
            clear_description,
            category,
            energy,
        } => {
            let current = store.block(&id).ok_or_else(|| CoreError::not_found(&id))?;
            let mut input = current.to_input();
            if let Some(start) = start {
                input.start_time = start;
            }
            if let Some(end) = end {
                input.end_time = end;
            }
            if let Some(title) = title {
                input.title = title;
            }
            if description.is_some() {
                input.description = description;
            } else if clear_description {
                input.description = None;
            }
            if let Some(category) = category {
                input.category = category;
            }
            if let Some(energy) = energy {
                input.energy = energy;
            }
            let block = store.update_block(&id, input)?;
            println!("Block updated: {}", block.id);
            println!("{}", format_block(block));
        }
        BlockAction::Toggle { id } => {
            let completed = store.toggle_complete(&id)?;
            let schedule = store.schedule();
            println!(
                "Block {id} marked {}",
                if completed { "done" } else { "not done" }
            );
            println!(
                "Completed: {}/{}",
                schedule.completed_blocks,
                schedule.blocks.len()
            );
        }
        BlockAction::Get { id } => {
            let block = store.block(&id).ok_or_else(|| CoreError::not_found(&id))?;
            println!("{}", serde_json::to_string_pretty(block)?);
        }
    }
    Ok(())
}
