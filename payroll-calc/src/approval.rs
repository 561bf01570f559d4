//! Submit-for-approval extension point
//!
//! No approval workflow is defined for the calculator. Front ends hand the
//! current pay period to an [`ApprovalHook`]; the default [`InertApproval`]
//! sends nothing anywhere.

use serde::Serialize;
use shared::error::AppResult;
use shared::models::{PaySummary, RateConfiguration, ShiftRecord};

/// Snapshot of the pay period handed to an approval collaborator
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    /// Shifts in chronological order
    pub shifts: Vec<ShiftRecord>,
    pub rates: RateConfiguration,
    pub summary: PaySummary,
}

/// Collaborator that receives pay periods submitted for approval
pub trait ApprovalHook {
    fn submit(&self, request: &ApprovalRequest) -> AppResult<()>;
}

/// Accepts every submission and does nothing with it
#[derive(Debug, Clone, Copy, Default)]
pub struct InertApproval;

impl ApprovalHook for InertApproval {
    fn submit(&self, request: &ApprovalRequest) -> AppResult<()> {
        tracing::info!(
            shifts = request.shifts.len(),
            total_pay = %request.summary.total_pay,
            "Approval requested; no approval service is configured"
        );
        Ok(())
    }
}

impl<F> ApprovalHook for F
where
    F: Fn(&ApprovalRequest) -> AppResult<()>,
{
    fn submit(&self, request: &ApprovalRequest) -> AppResult<()> {
        self(request)
    }
}
