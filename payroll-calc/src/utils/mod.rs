//! Utility module - shared helpers for the calculator
//!
//! # Contents
//!
//! - [`AppError`] / [`AppResult`] - error types (from shared::error)
//! - [`time`] - ISO date parsing and `MM-DD-YY` display formatting
//! - [`format`] - currency / hours rendering helpers
//! - [`logger`] - tracing subscriber setup

pub mod format;
pub mod logger;
pub mod time;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
