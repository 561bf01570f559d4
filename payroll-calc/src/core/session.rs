//! Payroll session
//!
//! Owns the two pieces of mutable state (shift log and rates) and keeps the
//! derived views in step with them. Every successful mutation recomputes the
//! affected derivation immediately, so readers never observe stale totals.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{PaySummary, RateConfiguration, RateField, ShiftId, ShiftRecord, ShiftType};

use super::config::Config;
use super::form::ShiftForm;
use crate::approval::{ApprovalHook, ApprovalRequest};
use crate::pay::calculate_pay;
use crate::rates::RateManager;
use crate::shifts::{ShiftLog, chronological_order};
use crate::utils::time::parse_date;

/// One user's pay-period workspace
#[derive(Debug, Clone, Default)]
pub struct PayrollSession {
    rates: RateManager,
    log: ShiftLog,
    form: ShiftForm,
    /// Chronological order of `log` (indices into its records)
    sorted: Vec<usize>,
    summary: PaySummary,
}

impl PayrollSession {
    pub fn new(rates: RateConfiguration) -> Self {
        let mut session = Self {
            rates: RateManager::new(rates),
            ..Default::default()
        };
        session.recompute_summary();
        session
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.rates.clone())
    }

    // ==================== Rates ====================

    pub fn rates(&self) -> &RateConfiguration {
        self.rates.current()
    }

    pub fn is_editing_rates(&self) -> bool {
        self.rates.is_editing()
    }

    pub fn toggle_rate_editing(&mut self) -> bool {
        self.rates.toggle_editing()
    }

    pub fn begin_rate_editing(&mut self) {
        self.rates.begin_editing();
    }

    pub fn finish_rate_editing(&mut self) {
        self.rates.finish_editing();
    }

    /// Replace the rate configuration wholesale
    pub fn update_rates(&mut self, rates: RateConfiguration) -> AppResult<()> {
        if &rates == self.rates.current() {
            return Ok(());
        }
        self.rates.replace(rates)?;
        self.recompute_summary();
        Ok(())
    }

    /// Editor change of a single rate field
    pub fn set_rate_field(&mut self, field: RateField, value: Option<Decimal>) -> AppResult<()> {
        self.rates.set_field(field, value)?;
        self.recompute_summary();
        Ok(())
    }

    /// Editor change of a single rate field from raw text
    pub fn set_rate_field_text(&mut self, field: RateField, text: &str) -> AppResult<()> {
        self.rates.set_field_text(field, text)?;
        self.recompute_summary();
        Ok(())
    }

    // ==================== Shift entry ====================

    pub fn form(&self) -> &ShiftForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ShiftForm {
        &mut self.form
    }

    /// Log a shift
    ///
    /// Returns `Ok(None)` without touching anything when `date` or `hours`
    /// is blank. Whitespace-only hours count as blank, so such an entry is
    /// dropped rather than logged as a zero-hour shift. A date that is not
    /// `YYYY-MM-DD` is an error.
    pub fn add_shift(
        &mut self,
        date: &str,
        hours: &str,
        shift_type: ShiftType,
    ) -> AppResult<Option<ShiftId>> {
        if date.trim().is_empty() || hours.trim().is_empty() {
            tracing::debug!(date, hours, "Incomplete shift ignored");
            return Ok(None);
        }

        let date = parse_date(date).map_err(|e| e.with_detail("field", "date"))?;
        let id = self.log.append(date, hours, shift_type).id;
        self.recompute();
        Ok(Some(id))
    }

    /// Log the shift currently in the form, then reset the form
    ///
    /// The form keeps its contents when nothing was logged.
    pub fn submit_form(&mut self) -> AppResult<Option<ShiftId>> {
        let ShiftForm {
            date,
            hours,
            shift_type,
        } = self.form.clone();

        let added = self.add_shift(&date, &hours, shift_type)?;
        if added.is_some() {
            self.form.reset();
        }
        Ok(added)
    }

    /// Remove a logged shift; unknown ids are ignored
    pub fn remove_shift(&mut self, id: ShiftId) -> Option<ShiftRecord> {
        let removed = self.log.remove(id)?;
        self.recompute();
        Some(removed)
    }

    // ==================== Derived views ====================

    pub fn shifts(&self) -> &ShiftLog {
        &self.log
    }

    /// Shifts ordered by date, same-day shifts in entry order
    pub fn sorted_shifts(&self) -> Vec<&ShiftRecord> {
        let records = self.log.records();
        self.sorted.iter().map(|&i| &records[i]).collect()
    }

    pub fn summary(&self) -> &PaySummary {
        &self.summary
    }

    // ==================== Approval ====================

    pub fn approval_request(&self) -> ApprovalRequest {
        ApprovalRequest {
            shifts: self.sorted_shifts().into_iter().cloned().collect(),
            rates: self.rates().clone(),
            summary: self.summary.clone(),
        }
    }

    /// Hand the current pay period to an approval collaborator
    pub fn submit_for_approval(&self, hook: &dyn ApprovalHook) -> AppResult<()> {
        if self.log.is_empty() {
            return Err(AppError::new(ErrorCode::NothingToSubmit));
        }
        hook.submit(&self.approval_request())
    }

    // ==================== Recomputation ====================

    fn recompute(&mut self) {
        self.sorted = chronological_order(self.log.records());
        self.recompute_summary();
    }

    fn recompute_summary(&mut self) {
        self.summary = calculate_pay(&self.log, self.rates.current());
        tracing::debug!(
            shifts = self.log.len(),
            total_hours = %self.summary.total_hours,
            total_pay = %self.summary.total_pay,
            "Pay summary recomputed"
        );
    }
}
