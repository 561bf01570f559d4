//! Data models
//!
//! Shared between the calculator core and its front ends.
//! All IDs are `i64` (creation-time snowflake values).

pub mod rate;
pub mod shift;
pub mod summary;

// Re-exports
pub use rate::*;
pub use shift::*;
pub use summary::*;
