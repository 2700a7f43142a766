//! CLI module
//!
//! Command-line interface for the battle chronicle.
//!
//! # Commands
//!
//! - `signals` - Signal search history, newest first
//! - `gacha-info` - Gacha currencies and pity
//! - `gacha-calendar` - Running and upcoming banners
//! - `events` - Running and upcoming events
//! - `deadly-assault` - Deadly Assault of the current or previous season
//! - `shiyu-defense` - Shiyu Defense of the current or previous season
//! - `threshold-simulation` - Threshold Simulation run details or summary
//! - `notes` - Real-time notes
//! - `diary` - Monthly currency income

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
