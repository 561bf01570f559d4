//! Rate Configuration Model

use super::shift::ShiftType;
use crate::error::{AppError, AppResult, ErrorCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pay rate structure
///
/// Each field is `None` while it is blank in the editor. A blank field is
/// kept as-is (it is not the same as zero) but contributes 0 to any
/// arithmetic it takes part in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateConfiguration {
    /// Dollars per hour for day shifts
    pub base_rate: Option<Decimal>,
    /// Night A premium in percent (20 = +20%)
    pub night_a_increase: Option<Decimal>,
    /// Night B premium in percent (27.5 = +27.5%)
    pub night_b_increase: Option<Decimal>,
}

impl Default for RateConfiguration {
    /// 100 $/h, +20%, +27.5%
    fn default() -> Self {
        Self::new(
            Decimal::ONE_HUNDRED,
            Decimal::new(20, 0),
            Decimal::new(275, 1),
        )
    }
}

impl RateConfiguration {
    pub fn new(base_rate: Decimal, night_a_increase: Decimal, night_b_increase: Decimal) -> Self {
        Self {
            base_rate: Some(base_rate),
            night_a_increase: Some(night_a_increase),
            night_b_increase: Some(night_b_increase),
        }
    }

    /// Base rate as used in arithmetic (blank counts as 0)
    pub fn effective_base_rate(&self) -> Decimal {
        self.base_rate.unwrap_or_default()
    }

    /// `1 + nightAIncrease / 100`
    pub fn night_a_multiplier(&self) -> Decimal {
        premium_multiplier(self.night_a_increase)
    }

    /// `1 + nightBIncrease / 100`
    pub fn night_b_multiplier(&self) -> Decimal {
        premium_multiplier(self.night_b_increase)
    }

    /// Multiplier applied to the base rate for a category
    pub fn multiplier(&self, shift_type: ShiftType) -> Decimal {
        match shift_type {
            ShiftType::Day => Decimal::ONE,
            ShiftType::NightA => self.night_a_multiplier(),
            ShiftType::NightB => self.night_b_multiplier(),
        }
    }

    /// Effective dollars per hour for a category, saturating at `Decimal::MAX`
    pub fn hourly_rate(&self, shift_type: ShiftType) -> Decimal {
        self.effective_base_rate()
            .saturating_mul(self.multiplier(shift_type))
    }

    /// Raw value of a single field
    pub fn get(&self, field: RateField) -> Option<Decimal> {
        match field {
            RateField::BaseRate => self.base_rate,
            RateField::NightAIncrease => self.night_a_increase,
            RateField::NightBIncrease => self.night_b_increase,
        }
    }

    /// Copy of this configuration with one field replaced
    pub fn with_field(&self, field: RateField, value: Option<Decimal>) -> Self {
        let mut next = self.clone();
        match field {
            RateField::BaseRate => next.base_rate = value,
            RateField::NightAIncrease => next.night_a_increase = value,
            RateField::NightBIncrease => next.night_b_increase = value,
        }
        next
    }
}

fn premium_multiplier(increase: Option<Decimal>) -> Decimal {
    Decimal::ONE + increase.unwrap_or_default() / Decimal::ONE_HUNDRED
}

/// Editable rate fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RateField {
    BaseRate,
    NightAIncrease,
    NightBIncrease,
}

impl RateField {
    pub const ALL: [RateField; 3] = [
        RateField::BaseRate,
        RateField::NightAIncrease,
        RateField::NightBIncrease,
    ];

    /// Editor label
    pub fn label(&self) -> &'static str {
        match self {
            Self::BaseRate => "Base Rate ($/hour)",
            Self::NightAIncrease => "Night A % Increase (7pm-3am)",
            Self::NightBIncrease => "Night B % Increase (10pm-6am)",
        }
    }

    /// Category whose pay this field drives
    pub fn shift_type(&self) -> ShiftType {
        match self {
            Self::BaseRate => ShiftType::Day,
            Self::NightAIncrease => ShiftType::NightA,
            Self::NightBIncrease => ShiftType::NightB,
        }
    }
}

impl FromStr for RateField {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s {
            "base" | "baseRate" => Ok(Self::BaseRate),
            "nightA" | "nightAIncrease" => Ok(Self::NightAIncrease),
            "nightB" | "nightBIncrease" => Ok(Self::NightBIncrease),
            other => Err(AppError::with_message(
                ErrorCode::UnknownRateField,
                format!("Unknown rate field: {} (expected base, nightA or nightB)", other),
            )
            .with_detail("field", other)),
        }
    }
}

impl fmt::Display for RateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BaseRate => "baseRate",
            Self::NightAIncrease => "nightAIncrease",
            Self::NightBIncrease => "nightBIncrease",
        })
    }
}
