//! Shared types for the physician payroll calculator
//!
//! Common types used by the calculator core and its front ends: shift and
//! rate models, the pay summary, the unified error system and id helpers.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::{
    CategoryLine, PaySummary, RateConfiguration, RateField, ShiftId, ShiftRecord, ShiftType,
};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
