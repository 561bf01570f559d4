//! Pay Summary Model

use super::shift::ShiftType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-category and total hours/pay for the current pay period
///
/// Values are unrounded; rounding belongs to presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaySummary {
    pub day_hours: Decimal,
    pub night_a_hours: Decimal,
    pub night_b_hours: Decimal,
    pub total_hours: Decimal,
    pub day_pay: Decimal,
    pub night_a_pay: Decimal,
    pub night_b_pay: Decimal,
    pub total_pay: Decimal,
}

/// One subtotal row of the summary panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryLine {
    pub shift_type: ShiftType,
    pub hours: Decimal,
    pub pay: Decimal,
}

impl PaySummary {
    pub fn hours(&self, shift_type: ShiftType) -> Decimal {
        match shift_type {
            ShiftType::Day => self.day_hours,
            ShiftType::NightA => self.night_a_hours,
            ShiftType::NightB => self.night_b_hours,
        }
    }

    pub fn pay(&self, shift_type: ShiftType) -> Decimal {
        match shift_type {
            ShiftType::Day => self.day_pay,
            ShiftType::NightA => self.night_a_pay,
            ShiftType::NightB => self.night_b_pay,
        }
    }

    /// Subtotal rows for categories with worked hours (strictly positive)
    pub fn lines(&self) -> Vec<CategoryLine> {
        ShiftType::ALL
            .into_iter()
            .filter(|t| self.hours(*t) > Decimal::ZERO)
            .map(|t| CategoryLine {
                shift_type: t,
                hours: self.hours(t),
                pay: self.pay(t),
            })
            .collect()
    }
}
