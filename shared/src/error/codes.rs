//! Unified error codes for the payroll calculator
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Console input errors
//! - 2xxx: Rate configuration errors
//! - 3xxx: Approval errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Console input ====================
    /// Unknown console command
    UnknownCommand = 1002,

    // ==================== 2xxx: Rates ====================
    /// Rates can only be changed in editing mode
    RatesLocked = 2001,
    /// Unknown rate field name
    UnknownRateField = 2002,

    // ==================== 3xxx: Approval ====================
    /// Nothing to submit (shift log is empty)
    NothingToSubmit = 3001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// I/O error
    IoError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            Self::Success => "Operation completed successfully",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field is missing",
            Self::ValueOutOfRange => "Value is out of range",

            // Console input
            Self::UnknownCommand => "Unknown command",

            // Rates
            Self::RatesLocked => "Rates are locked, enter editing mode first",
            Self::UnknownRateField => "Unknown rate field",

            // Approval
            Self::NothingToSubmit => "There are no shifts to submit",

            // System
            Self::InternalError => "Internal error",
            Self::IoError => "I/O error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            6 => Ok(Self::InvalidFormat),
            7 => Ok(Self::RequiredField),
            8 => Ok(Self::ValueOutOfRange),

            1002 => Ok(Self::UnknownCommand),

            2001 => Ok(Self::RatesLocked),
            2002 => Ok(Self::UnknownRateField),

            3001 => Ok(Self::NothingToSubmit),

            9001 => Ok(Self::InternalError),
            9003 => Ok(Self::IoError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
