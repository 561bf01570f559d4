//! Physician payroll calculator
//!
//! # Overview
//!
//! Takes the shifts worked in a pay period (date, hours, category), applies a
//! configurable rate structure (base hourly rate plus percentage premiums for
//! two night categories) and reports per-category and total hours and pay.
//!
//! # Module layout
//!
//! ```text
//! payroll-calc/src/
//! ├── core/       # config, entry form, session state
//! ├── rates/      # rate configuration manager
//! ├── shifts/     # shift log and chronological projection
//! ├── pay/        # pay aggregator
//! ├── approval.rs # submit-for-approval extension point
//! ├── console/    # line-oriented front end
//! └── utils/      # dates, formatting, logging
//! ```

pub mod approval;
pub mod console;
pub mod core;
pub mod pay;
pub mod rates;
pub mod shifts;
pub mod utils;

// Re-export public types
pub use approval::{ApprovalHook, ApprovalRequest, InertApproval};
pub use console::{Command, Console};
pub use core::{Config, PayrollSession, ShiftForm};
pub use pay::{calculate_pay, parse_hours};
pub use rates::{RateManager, parse_rate_input};
pub use shifts::{ShiftLog, chronological};
pub use utils::time::format_date;
pub use utils::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Start logging as configured
pub fn setup_environment(config: &Config) {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
}

pub fn print_banner() {
    eprintln!(
        r#"
   ___                       _ _
  / _ \__ _ _   _ _ __ ___ | | |
 / /_)/ _` | | | | '__/ _ \| | |
/ ___/ (_| | |_| | | | (_) | | |
\/    \__,_|\__, |_|  \___/|_|_|
            |___/   physician payroll calculator
    "#
    );
}
