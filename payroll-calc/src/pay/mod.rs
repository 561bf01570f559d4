//! Pay Aggregator
//!
//! Turns the shift log and the current rate configuration into per-category
//! hour and pay totals. Uses rust_decimal throughout and never rounds.

mod calculator;
mod hours;

pub use calculator::*;
pub use hours::parse_hours;
