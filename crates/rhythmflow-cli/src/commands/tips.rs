//! Advisory tip commands.

use chrono::{Local, Timelike};
use rhythmflow_core::tips::{tip_for_hour, top_tips};
use rhythmflow_core::Config;

pub fn tip(hour: Option<u32>) -> Result<(), Box<dyn std::error::Error>> {
    let hour = match hour {
        Some(h) if h < 24 => h,
        Some(h) => return Err(format!("invalid hour: {h} (expected 0-23)").into()),
        None => Local::now().hour(),
    };
    println!("{}", tip_for_hour(hour));
    Ok(())
}

pub fn list(limit: Option<usize>, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let limit = limit.unwrap_or(config.tips.list_limit as usize);
    for (i, tip) in top_tips(limit).iter().enumerate() {
        println!("{}. {tip}", i + 1);
    }
    Ok(())
}
