//! Rate Configuration Manager
//!
//! Holds the current [`RateConfiguration`] and the editing toggle. Every
//! change produces a new configuration that replaces the old one wholesale;
//! no history is kept.

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{RateConfiguration, RateField};

/// Parse rate field text from the editor
///
/// Blank text is the transient "still typing" state and maps to `None`.
pub fn parse_rate_input(text: &str) -> AppResult<Option<Decimal>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| {
            AppError::invalid_format(format!("Not a number: {}", trimmed)).with_detail("input", trimmed)
        })?;
    validate_rate_value(value)?;
    Ok(Some(value))
}

/// Rates and premiums cannot be negative
fn validate_rate_value(value: Decimal) -> AppResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(AppError::out_of_range(format!(
            "rate values must be non-negative, got {}",
            value
        )));
    }
    Ok(())
}

fn validate_configuration(rates: &RateConfiguration) -> AppResult<()> {
    for field in RateField::ALL {
        if let Some(value) = rates.get(field) {
            validate_rate_value(value).map_err(|e| e.with_detail("field", field.to_string()))?;
        }
    }
    Ok(())
}

/// Current rates plus the read-only / editing toggle
#[derive(Debug, Clone, Default)]
pub struct RateManager {
    rates: RateConfiguration,
    editing: bool,
}

impl RateManager {
    pub fn new(rates: RateConfiguration) -> Self {
        Self {
            rates,
            editing: false,
        }
    }

    pub fn current(&self) -> &RateConfiguration {
        &self.rates
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Flip between summary and editor; values are untouched
    pub fn toggle_editing(&mut self) -> bool {
        self.editing = !self.editing;
        self.editing
    }

    pub fn begin_editing(&mut self) {
        self.editing = true;
    }

    pub fn finish_editing(&mut self) {
        self.editing = false;
    }

    /// Replace the whole configuration
    pub fn replace(&mut self, rates: RateConfiguration) -> AppResult<()> {
        validate_configuration(&rates)?;
        tracing::info!(
            base_rate = ?rates.base_rate,
            night_a_increase = ?rates.night_a_increase,
            night_b_increase = ?rates.night_b_increase,
            "Rate configuration replaced"
        );
        self.rates = rates;
        Ok(())
    }

    /// Change one field from the editor (editing mode only)
    pub fn set_field(&mut self, field: RateField, value: Option<Decimal>) -> AppResult<()> {
        if !self.editing {
            return Err(AppError::new(ErrorCode::RatesLocked).with_detail("field", field.to_string()));
        }
        let next = self.rates.with_field(field, value);
        self.replace(next)
    }

    /// Change one field from raw editor text (editing mode only)
    pub fn set_field_text(&mut self, field: RateField, text: &str) -> AppResult<()> {
        let value = parse_rate_input(text).map_err(|e| e.with_detail("field", field.to_string()))?;
        self.set_field(field, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_rate_input() {
        assert_eq!(parse_rate_input("").unwrap(), None);
        assert_eq!(parse_rate_input("  ").unwrap(), None);
        assert_eq!(parse_rate_input("27.5").unwrap(), Some(d("27.5")));
        assert_eq!(parse_rate_input("0").unwrap(), Some(Decimal::ZERO));
        assert_eq!(parse_rate_input("1e2").unwrap(), Some(d("100")));
    }

    #[test]
    fn test_parse_rate_input_rejects_bad_values() {
        let err = parse_rate_input("abc").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);

        let err = parse_rate_input("-5").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_toggle_does_not_change_values() {
        let mut manager = RateManager::default();
        let before = manager.current().clone();

        assert!(manager.toggle_editing());
        assert!(!manager.toggle_editing());
        assert_eq!(manager.current(), &before);
    }

    #[test]
    fn test_field_edits_require_editing_mode() {
        let mut manager = RateManager::default();
        let err = manager
            .set_field(RateField::BaseRate, Some(d("150")))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RatesLocked);
        assert_eq!(manager.current().base_rate, Some(d("100")));

        manager.begin_editing();
        manager.set_field(RateField::BaseRate, Some(d("150"))).unwrap();
        manager.finish_editing();
        assert_eq!(manager.current().base_rate, Some(d("150")));
    }

    #[test]
    fn test_blank_field_is_kept_blank() {
        let mut manager = RateManager::default();
        manager.begin_editing();
        manager.set_field_text(RateField::NightBIncrease, "").unwrap();

        assert_eq!(manager.current().night_b_increase, None);
        assert_eq!(manager.current().night_b_multiplier(), Decimal::ONE);
    }

    #[test]
    fn test_failed_edit_keeps_previous_rates() {
        let mut manager = RateManager::default();
        manager.begin_editing();
        let err = manager.set_field_text(RateField::NightAIncrease, "twenty").unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(err.details.unwrap().get("field").unwrap(), "nightAIncrease");
        assert_eq!(manager.current(), &RateConfiguration::default());
    }

    #[test]
    fn test_replace_validates_every_field() {
        let mut manager = RateManager::default();
        let bad = RateConfiguration::new(d("100"), d("-1"), d("0"));
        assert!(manager.replace(bad).is_err());

        let good = RateConfiguration::new(d("90"), d("15"), d("30"));
        manager.replace(good.clone()).unwrap();
        assert_eq!(manager.current(), &good);
    }
}
