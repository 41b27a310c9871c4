pub mod block;
pub mod config;
pub mod day;
pub mod score;
pub mod summary;
pub mod tips;
