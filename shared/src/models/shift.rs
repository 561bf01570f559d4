//! Shift Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shift record identifier
pub type ShiftId = i64;

/// Shift category
///
/// Wire values are `day`, `nightA` and `nightB`. Parsing never fails: any
/// other value falls back to [`ShiftType::Day`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum ShiftType {
    #[default]
    Day,
    NightA,
    NightB,
}

impl ShiftType {
    /// All categories in display order
    pub const ALL: [ShiftType; 3] = [ShiftType::Day, ShiftType::NightA, ShiftType::NightB];

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::NightA => "nightA",
            Self::NightB => "nightB",
        }
    }

    /// Full label including the time window
    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "Day Shift",
            Self::NightA => "Night Shift A (7pm-3am)",
            Self::NightB => "Night Shift B (10pm-6am)",
        }
    }

    /// Label used in the pay summary
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Day => "Day Shift",
            Self::NightA => "Night Shift A",
            Self::NightB => "Night Shift B",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Day => "☀️",
            Self::NightA | Self::NightB => "🌙",
        }
    }
}

impl From<&str> for ShiftType {
    fn from(value: &str) -> Self {
        match value {
            "day" => Self::Day,
            "nightA" => Self::NightA,
            "nightB" => Self::NightB,
            other => {
                // Compatibility fallback: unrecognised categories are paid as day shifts.
                tracing::warn!(shift_type = %other, "Unknown shift type, treating as day");
                Self::Day
            }
        }
    }
}

impl From<String> for ShiftType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One worked shift
///
/// Records are immutable once logged: correcting a shift means removing it
/// and adding a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    pub id: ShiftId,
    /// Calendar date worked (no time component)
    pub date: NaiveDate,
    /// Hours exactly as entered; parsed only during aggregation
    pub hours: String,
    pub shift_type: ShiftType,
}
