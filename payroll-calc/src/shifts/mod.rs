//! Shift Log and its chronological projection

mod shift_log;
mod projection;

pub use shift_log::ShiftLog;
pub use projection::{chronological, chronological_order};
