//! Line-oriented console front end
//!
//! Reads one [`Command`] per line, applies it to a [`PayrollSession`] and
//! writes the re-rendered panels. Bad input is reported and the loop goes on;
//! only I/O failures end it.

mod command;
pub mod render;

pub use command::{Command, HELP};

use std::io::{BufRead, Write};

use shared::error::{ApiResponse, AppResult};

use crate::approval::ApprovalHook;
use crate::core::PayrollSession;
use render::{render_form, render_rates, render_shift, render_shift_list, render_summary};

/// Whether the loop keeps reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Console<H: ApprovalHook> {
    session: PayrollSession,
    hook: H,
}

impl<H: ApprovalHook> Console<H> {
    pub fn new(session: PayrollSession, hook: H) -> Self {
        Self { session, hook }
    }

    pub fn session(&self) -> &PayrollSession {
        &self.session
    }

    /// Process commands until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> AppResult<()> {
        write!(out, "{}", render_rates(self.session.rates(), false))?;
        writeln!(out, "Type `help` for commands.")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(None) => continue,
                Ok(Some(command)) => match self.execute(command, &mut out) {
                    Ok(Flow::Quit) => break,
                    Ok(Flow::Continue) => {}
                    Err(e) if e.code == shared::ErrorCode::IoError => return Err(e),
                    Err(e) => writeln!(out, "error: {}", e)?,
                },
                Err(e) => writeln!(out, "error: {}", e)?,
            }
            out.flush()?;
        }
        Ok(())
    }

    /// Apply one command and write its output
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> AppResult<Flow> {
        let session = &mut self.session;
        match command {
            Command::Date(date) => {
                session.form_mut().date = date;
                write!(out, "{}", render_form(session.form()))?;
            }
            Command::Hours(hours) => {
                session.form_mut().hours = hours;
                write!(out, "{}", render_form(session.form()))?;
            }
            Command::Type(shift_type) => {
                session.form_mut().shift_type = shift_type;
                write!(out, "{}", render_form(session.form()))?;
            }
            Command::Add => {
                if let Some(id) = session.submit_form()? {
                    self.write_added(id, out)?;
                }
            }
            Command::AddShift {
                date,
                hours,
                shift_type,
            } => {
                if let Some(id) = session.add_shift(&date, &hours, shift_type)? {
                    self.write_added(id, out)?;
                }
            }
            Command::Remove(id) => {
                if session.remove_shift(id).is_some() {
                    writeln!(out, "Removed shift {}", id)?;
                    self.write_overview(out)?;
                }
            }
            Command::Edit => {
                session.begin_rate_editing();
                write!(out, "{}", render_rates(session.rates(), true))?;
            }
            Command::Done => {
                session.finish_rate_editing();
                write!(out, "{}", render_rates(session.rates(), false))?;
            }
            Command::Rate { field, value } => {
                session.set_rate_field_text(field, &value)?;
                write!(out, "{}", render_rates(session.rates(), true))?;
                write!(out, "{}", render_summary(session.summary(), session.rates()))?;
            }
            Command::List => {
                write!(out, "{}", render_shift_list(&session.sorted_shifts()))?;
            }
            Command::Summary => {
                write!(out, "{}", render_summary(session.summary(), session.rates()))?;
            }
            Command::Rates => {
                write!(
                    out,
                    "{}",
                    render_rates(session.rates(), session.is_editing_rates())
                )?;
            }
            Command::Json => {
                let response = ApiResponse::success(session.approval_request());
                writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            Command::Submit => {
                self.session.submit_for_approval(&self.hook)?;
                writeln!(out, "Submitted for approval")?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn write_added<W: Write>(&self, id: shared::ShiftId, out: &mut W) -> AppResult<()> {
        if let Some(shift) = self.session.shifts().get(id) {
            writeln!(out, "Added{}", render_shift(shift))?;
        }
        self.write_overview(out)
    }

    fn write_overview<W: Write>(&self, out: &mut W) -> AppResult<()> {
        write!(out, "{}", render_shift_list(&self.session.sorted_shifts()))?;
        write!(
            out,
            "{}",
            render_summary(self.session.summary(), self.session.rates())
        )?;
        Ok(())
    }
}
