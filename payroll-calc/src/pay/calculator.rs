//! Pay Calculator
//!
//! Sums parsed hours per category, then prices each bucket:
//! day at the base rate, night buckets at `base * (1 + premium / 100)`.
//!
//! Sums and products saturate at the `Decimal` bounds instead of panicking;
//! any hours or rate the parsers accept must still produce a summary.

use super::hours::parse_hours;
use rust_decimal::Decimal;
use shared::models::{PaySummary, RateConfiguration, ShiftRecord, ShiftType};

/// Hour totals per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryHours {
    pub day: Decimal,
    pub night_a: Decimal,
    pub night_b: Decimal,
}

impl CategoryHours {
    fn add(&mut self, shift_type: ShiftType, hours: Decimal) {
        match shift_type {
            ShiftType::NightA => self.night_a = self.night_a.saturating_add(hours),
            ShiftType::NightB => self.night_b = self.night_b.saturating_add(hours),
            ShiftType::Day => self.day = self.day.saturating_add(hours),
        }
    }

    pub fn total(&self) -> Decimal {
        self.day.saturating_add(self.night_a).saturating_add(self.night_b)
    }
}

/// Bucket parsed hours by category
pub fn accumulate_hours<'a, I>(shifts: I) -> CategoryHours
where
    I: IntoIterator<Item = &'a ShiftRecord>,
{
    shifts
        .into_iter()
        .fold(CategoryHours::default(), |mut acc, shift| {
            acc.add(shift.shift_type, parse_hours(&shift.hours));
            acc
        })
}

/// Price accumulated hours with the given rates
pub fn price_hours(hours: CategoryHours, rates: &RateConfiguration) -> PaySummary {
    let day_pay = hours.day.saturating_mul(rates.hourly_rate(ShiftType::Day));
    let night_a_pay = hours.night_a.saturating_mul(rates.hourly_rate(ShiftType::NightA));
    let night_b_pay = hours.night_b.saturating_mul(rates.hourly_rate(ShiftType::NightB));

    PaySummary {
        day_hours: hours.day,
        night_a_hours: hours.night_a,
        night_b_hours: hours.night_b,
        total_hours: hours.total(),
        day_pay,
        night_a_pay,
        night_b_pay,
        total_pay: day_pay.saturating_add(night_a_pay).saturating_add(night_b_pay),
    }
}

/// Calculate the pay period summary
///
/// Pure and deterministic: the result depends only on the shifts and rates
/// passed in.
pub fn calculate_pay<'a, I>(shifts: I, rates: &RateConfiguration) -> PaySummary
where
    I: IntoIterator<Item = &'a ShiftRecord>,
{
    price_hours(accumulate_hours(shifts), rates)
}
