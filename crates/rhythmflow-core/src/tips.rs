//! Advisory productivity tips.

use crate::scoring::TimeBand;

/// General tips grounded in how attention and energy vary over a day.
pub const PRODUCTIVITY_TIPS: [&str; 9] = [
    "Tasks that need intense focus are best done in the morning (8h-11h).",
    "Schedule regular breaks: the brain needs rest to keep performing.",
    "Drink water often. Losing just 2% of hydration reduces cognition.",
    "Exercise raises BDNF, a protein that supports neuroplasticity.",
    "Good sleep consolidates memory and clears waste from the brain.",
    "The Pomodoro technique (25 min work + 5 min rest) follows natural attention cycles.",
    "Practice mindfulness to lose less mental energy to distraction.",
    "Administrative tasks fit best in the afternoon (14h-16h).",
    "Get natural light in the morning to anchor your circadian rhythm.",
];

/// Tip for the band containing `hour`.
pub fn tip_for_hour(hour: u32) -> &'static str {
    match TimeBand::from_hour(hour) {
        TimeBand::Morning => "Prime time for complex cognitive work and decision making.",
        TimeBand::Midday => "A good moment for administrative tasks and a nourishing meal.",
        TimeBand::Afternoon => "A favorable window for creative work and brainstorming.",
        TimeBand::Evening => "Great for physical exercise and social activities.",
        TimeBand::Night => "Cut down on blue light and get ready to rest.",
    }
}

/// First `limit` general tips.
pub fn top_tips(limit: usize) -> &'static [&'static str] {
    &PRODUCTIVITY_TIPS[..limit.min(PRODUCTIVITY_TIPS.len())]
}
