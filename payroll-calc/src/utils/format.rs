//! Display formatting for money and hours
//!
//! Rounding happens here and only here.

use rust_decimal::prelude::*;

/// Currency places
const MONEY_PLACES: u32 = 2;
/// Places shown for total hours
const TOTAL_HOURS_PLACES: u32 = 1;

/// Round half away from zero, the way receipts and pay stubs do
#[inline]
fn round(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// `$1234.50`
pub fn format_money(amount: Decimal) -> String {
    format!("${:.2}", round(amount, MONEY_PLACES))
}

/// Total hours with one decimal place (`24.0`)
pub fn format_total_hours(hours: Decimal) -> String {
    format!("{:.1}", round(hours, TOTAL_HOURS_PLACES))
}

/// Plain number without trailing zeros (`8`, `8.5`, `27.5`)
pub fn format_number(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Rate field as shown to the user; blank stays blank
pub fn format_rate_value(value: Option<Decimal>) -> String {
    value.map(format_number).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(d("800")), "$800.00");
        assert_eq!(format_money(d("1274.999")), "$1275.00");
        assert_eq!(format_money(d("0.005")), "$0.01");
        assert_eq!(format_money(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_format_total_hours() {
        assert_eq!(format_total_hours(d("24")), "24.0");
        assert_eq!(format_total_hours(d("7.25")), "7.3");
        assert_eq!(format_total_hours(d("0.04")), "0.0");
    }

    #[test]
    fn test_format_number_strips_trailing_zeros() {
        assert_eq!(format_number(d("8.000")), "8");
        assert_eq!(format_number(d("27.50")), "27.5");
        assert_eq!(format_rate_value(None), "");
        assert_eq!(format_rate_value(Some(d("100"))), "100");
    }
}
