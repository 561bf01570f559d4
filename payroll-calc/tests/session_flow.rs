//! End-to-end pay period flows through the public API

use std::cell::RefCell;
use std::io::Cursor;

use payroll_calc::{
    ApprovalRequest, AppResult, Console, ErrorCode, InertApproval, PayrollSession, format_date,
};
use rust_decimal::Decimal;
use shared::models::{RateConfiguration, ShiftType};

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn default_session() -> PayrollSession {
    PayrollSession::new(RateConfiguration::default())
}

#[test]
fn day_shift_at_default_rates() {
    let mut session = default_session();
    session.add_shift("2024-01-10", "8", ShiftType::Day).unwrap();

    assert_eq!(session.summary().day_pay, d("800.00"));
    assert_eq!(session.summary().total_pay, d("800.00"));
}

#[test]
fn night_a_shift_uses_twenty_percent_premium() {
    let mut session = default_session();
    session.add_shift("2024-01-11", "6", ShiftType::NightA).unwrap();

    assert_eq!(session.rates().night_a_multiplier(), d("1.20"));
    assert_eq!(session.summary().night_a_pay, d("720.00"));
}

#[test]
fn night_b_shift_uses_twenty_seven_and_a_half_percent_premium() {
    let mut session = default_session();
    session.add_shift("2024-01-12", "10", ShiftType::NightB).unwrap();

    assert_eq!(session.rates().night_b_multiplier(), d("1.275"));
    assert_eq!(session.summary().night_b_pay, d("1275.00"));
}

#[test]
fn all_three_categories_together() {
    let mut session = default_session();
    session.add_shift("2024-01-10", "8", ShiftType::Day).unwrap();
    session.add_shift("2024-01-11", "6", ShiftType::NightA).unwrap();
    session.add_shift("2024-01-12", "10", ShiftType::NightB).unwrap();

    let summary = session.summary();
    assert_eq!(summary.total_hours, d("24"));
    assert_eq!(summary.total_pay, d("2795.00"));
    assert_eq!(summary.lines().len(), 3);
}

#[test]
fn blank_hours_are_rejected_without_error() {
    let mut session = default_session();
    session.add_shift("2024-01-10", "8", ShiftType::Day).unwrap();

    let added = session.add_shift("2024-01-13", "", ShiftType::NightA).unwrap();
    assert!(added.is_none());
    assert_eq!(session.shifts().len(), 1);
}

#[test]
fn date_formats_as_month_day_year() {
    assert_eq!(format_date("2024-03-05").unwrap(), "03-05-24");
}

#[test]
fn removing_unknown_id_leaves_log_unchanged() {
    let mut session = default_session();
    let id = session
        .add_shift("2024-01-10", "8", ShiftType::Day)
        .unwrap()
        .unwrap();

    assert!(session.remove_shift(id + 1).is_none());
    assert_eq!(session.shifts().len(), 1);
    assert_eq!(session.summary().total_pay, d("800"));
}

#[test]
fn sorted_view_is_stable_for_same_date() {
    let mut session = default_session();
    let first = session
        .add_shift("2024-01-15", "4", ShiftType::NightA)
        .unwrap()
        .unwrap();
    session.add_shift("2024-01-14", "8", ShiftType::Day).unwrap();
    let third = session
        .add_shift("2024-01-15", "4", ShiftType::NightB)
        .unwrap()
        .unwrap();

    let ids: Vec<i64> = session.sorted_shifts().iter().map(|s| s.id).collect();
    assert_eq!(ids[1..], [first, third]);
}

#[test]
fn approval_hook_receives_chronological_snapshot() {
    let mut session = default_session();
    session.add_shift("2024-01-12", "10", ShiftType::NightB).unwrap();
    session.add_shift("2024-01-10", "8", ShiftType::Day).unwrap();

    let captured: RefCell<Option<ApprovalRequest>> = RefCell::new(None);
    let hook = |req: &ApprovalRequest| -> AppResult<()> {
        *captured.borrow_mut() = Some(req.clone());
        Ok(())
    };
    session.submit_for_approval(&hook).unwrap();

    let request = captured.into_inner().unwrap();
    assert_eq!(request.shifts.len(), 2);
    assert_eq!(request.shifts[0].hours, "8");
    assert_eq!(request.summary.total_pay, d("2075"));

    // The default collaborator accepts and does nothing
    session.submit_for_approval(&InertApproval).unwrap();
}

#[test]
fn empty_period_cannot_be_submitted() {
    let session = default_session();
    let err = session.submit_for_approval(&InertApproval).unwrap_err();
    assert_eq!(err.code, ErrorCode::NothingToSubmit);
}

fn run_console(script: &str) -> (String, PayrollSession) {
    let mut console = Console::new(default_session(), InertApproval);
    let mut out = Vec::new();
    console.run(Cursor::new(script), &mut out).unwrap();
    (String::from_utf8(out).unwrap(), console.session().clone())
}

#[test]
fn console_form_flow() {
    let (out, session) = run_console(
        "date 2024-01-10\n\
         add\n\
         date 2024-01-11\n\
         hours 6\n\
         type nightA\n\
         add\n\
         add 2024-01-12 10 nightB\n\
         summary\n\
         quit\n\
         add 2024-01-13 8 day\n",
    );

    // Commands after quit are not executed
    assert_eq!(session.shifts().len(), 3);
    assert_eq!(session.summary().total_pay, d("2795"));
    assert!(out.contains("01-10-24  8 hours"));
    assert!(out.contains("Total Pay:"));
    assert!(out.contains("$2795.00"));
    assert!(out.contains("24.0"));
}

#[test]
fn console_reports_errors_and_keeps_going() {
    let (out, session) = run_console(
        "bogus\n\
         rate base 150\n\
         edit\n\
         rate base abc\n\
         rate base 150\n\
         done\n\
         add 2024-01-10 8\n\
         add 2024-01-11\n",
    );

    assert!(out.contains("error: Unknown command: bogus"));
    assert!(out.contains("error: Rates are locked"));
    assert!(out.contains("error: Not a number: abc"));
    assert_eq!(session.rates().base_rate, Some(d("150")));
    assert!(!session.is_editing_rates());
    // The hour-less add is silently dropped
    assert_eq!(session.shifts().len(), 1);
    assert_eq!(session.summary().day_pay, d("1200"));
}

#[test]
fn console_json_output() {
    let (out, _) = run_console("add 2024-01-11 6 nightA\njson\n");

    let start = out.find("{\n").unwrap();
    let value: serde_json::Value = serde_json::from_str(&out[start..]).unwrap();
    assert_eq!(value["code"], 0);
    assert_eq!(value["data"]["shifts"][0]["shiftType"], "nightA");
    assert_eq!(value["data"]["summary"]["nightAPay"], 720.0);
}

#[test]
fn console_survives_huge_numbers() {
    let (out, session) = run_console(
        "add 2024-01-10 1e27\n\
         add 2024-01-11 50000000000000000000000000000 nightA\n\
         edit\n\
         rate base 1e28\n\
         done\n\
         summary\n\
         add 2024-01-12 8\n",
    );

    assert_eq!(session.shifts().len(), 3);
    assert_eq!(session.summary().total_pay, Decimal::MAX);
    assert!(out.contains("$79228162514264337593543950335.00"));
}
