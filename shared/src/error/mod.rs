//! Unified error system for the payroll calculator
//!
//! This module provides a small structured error system with:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified response envelope for machine-readable output
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Console input errors
//! - 2xxx: Rate configuration errors
//! - 3xxx: Approval errors
//! - 9xxx: System errors
//!
//! Note that most bad input in this system is tolerated silently (blank
//! shift fields, unparseable hours, unknown shift types). Errors are only
//! raised where the input cannot be given any meaning at all.
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::invalid_format("Invalid date format: 2024/01/10")
//!     .with_detail("field", "date");
//! assert_eq!(err.code, ErrorCode::InvalidFormat);
//! assert_eq!(err.code.code(), 6);
//!
//! let response = ApiResponse::success("ok");
//! assert_eq!(response.code, Some(0));
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
