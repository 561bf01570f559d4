//! Core module - configuration and session state
//!
//! # Contents
//!
//! - [`Config`] - environment-driven settings
//! - [`ShiftForm`] - the shift entry form draft
//! - [`PayrollSession`] - shift log, rates and their derived views

pub mod config;
pub mod form;
pub mod session;

pub use config::Config;
pub use form::ShiftForm;
pub use session::PayrollSession;
