//! Text rendering of the calculator state
//!
//! Mirrors the panels of the calculator form: rate structure, shift entry,
//! the chronological shift list and the pay period summary.

use shared::models::{PaySummary, RateConfiguration, RateField, ShiftRecord, ShiftType};

use crate::core::ShiftForm;
use crate::utils::format::{format_money, format_number, format_rate_value, format_total_hours};
use crate::utils::time::display_date;

/// Width of the label column in the summary panel
const LABEL_WIDTH: usize = 40;

/// Rate structure panel, read-only or editor view
pub fn render_rates(rates: &RateConfiguration, editing: bool) -> String {
    if editing {
        let mut out = String::from("Your Rate Structure (editing, `done` to finish)\n");
        for field in RateField::ALL {
            out.push_str(&format!(
                "  {}: {}",
                field.label(),
                format_rate_value(rates.get(field))
            ));
            if let t @ (ShiftType::NightA | ShiftType::NightB) = field.shift_type() {
                out.push_str(&format!("  ({}/hour)", format_money(rates.hourly_rate(t))));
            }
            out.push('\n');
        }
        return out;
    }

    format!(
        "Your Rate Structure\n  {} Base Rate: ${}/hour\n  {} Night A (7pm-3am): +{}% ({}/hour)\n  {} Night B (10pm-6am): +{}% ({}/hour)\n",
        ShiftType::Day.icon(),
        format_rate_value(rates.base_rate),
        ShiftType::NightA.icon(),
        format_rate_value(rates.night_a_increase),
        format_money(rates.hourly_rate(ShiftType::NightA)),
        ShiftType::NightB.icon(),
        format_rate_value(rates.night_b_increase),
        format_money(rates.hourly_rate(ShiftType::NightB)),
    )
}

/// Shift entry form
pub fn render_form(form: &ShiftForm) -> String {
    format!(
        "Add Shift\n  Date: {}\n  Hours: {}\n  Shift Type: {}\n",
        if form.date.is_empty() { "-" } else { form.date.as_str() },
        form.hours,
        form.shift_type.label()
    )
}

/// One line of the shift list
pub fn render_shift(shift: &ShiftRecord) -> String {
    format!(
        "  [{}] {}  {} hours  {} {}",
        shift.id,
        display_date(shift.date),
        shift.hours,
        shift.shift_type.icon(),
        shift.shift_type.label()
    )
}

/// Shift list panel; empty when there are no shifts
pub fn render_shift_list(sorted: &[&ShiftRecord]) -> String {
    if sorted.is_empty() {
        return String::new();
    }
    let mut out = String::from("Your Shifts This Period\n");
    for shift in sorted {
        out.push_str(&render_shift(shift));
        out.push('\n');
    }
    out
}

/// Label column padded to [`LABEL_WIDTH`], value right-aligned after it
fn summary_row(label: &str, value: &str) -> String {
    format!("  {:<width$}{:>12}\n", label, value, width = LABEL_WIDTH)
}

/// Pay period summary panel
///
/// Only categories with worked hours get a subtotal row.
pub fn render_summary(summary: &PaySummary, rates: &RateConfiguration) -> String {
    let mut out = String::from("Pay Period Summary\n");

    for line in summary.lines() {
        let rate = match line.shift_type {
            ShiftType::Day => format!("${}", format_rate_value(rates.base_rate)),
            t => format_money(rates.hourly_rate(t)),
        };
        let label = format!(
            "{} ({}h × {})",
            line.shift_type.short_label(),
            format_number(line.hours),
            rate
        );
        out.push_str(&summary_row(&label, &format_money(line.pay)));
    }

    out.push_str(&format!("  {}\n", "-".repeat(LABEL_WIDTH + 12)));
    out.push_str(&summary_row(
        "Total Hours:",
        &format_total_hours(summary.total_hours),
    ));
    out.push_str(&summary_row("Total Pay:", &format_money(summary.total_pay)));
    out
}
