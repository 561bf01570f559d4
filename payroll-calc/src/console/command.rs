//! Console command parsing

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{RateField, ShiftId, ShiftType};

/// One line of console input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the form date
    Date(String),
    /// Set the form hours
    Hours(String),
    /// Set the form shift type
    Type(ShiftType),
    /// Submit the form
    Add,
    /// Log a shift directly, bypassing the form
    AddShift {
        date: String,
        hours: String,
        shift_type: ShiftType,
    },
    Remove(ShiftId),
    /// Enter rate editing mode
    Edit,
    /// Leave rate editing mode
    Done,
    /// Set one rate field; blank value clears it
    Rate { field: RateField, value: String },
    List,
    Summary,
    Rates,
    Json,
    Submit,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  date <YYYY-MM-DD>             set the shift date
  hours <n>                     set the shift hours (default 8)
  type <day|nightA|nightB>      set the shift type
  add                           add the shift in the form
  add <date> <hours> [type]     add a shift directly
  rm <id>                       remove a shift
  edit | done                   start / finish editing rates
  rate <base|nightA|nightB> [v] set a rate field (blank clears it)
  list | summary | rates        show shifts, pay summary, rates
  json                          print the pay period as JSON
  submit                        submit for approval
  help | quit";

impl Command {
    /// Parse a line; blank lines and `#` comments yield `None`
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = parts.collect();

        let command = match verb {
            "date" => Self::Date(args.join(" ")),
            "hours" => Self::Hours(args.join(" ")),
            "type" => Self::Type(ShiftType::from(required(&args, 0, "shift type")?)),
            "add" if args.is_empty() => Self::Add,
            "add" => Self::AddShift {
                date: args[0].to_string(),
                hours: args.get(1).copied().unwrap_or_default().to_string(),
                shift_type: args.get(2).copied().map(ShiftType::from).unwrap_or_default(),
            },
            "rm" | "remove" => {
                let raw = required(&args, 0, "shift id")?;
                let id = raw.parse::<ShiftId>().map_err(|_| {
                    AppError::invalid_format(format!("Invalid shift id: {}", raw))
                        .with_detail("input", raw)
                })?;
                Self::Remove(id)
            }
            "edit" => Self::Edit,
            "done" => Self::Done,
            "rate" => Self::Rate {
                field: required(&args, 0, "rate field")?.parse()?,
                value: args[1..].join(" "),
            },
            "list" | "ls" => Self::List,
            "summary" => Self::Summary,
            "rates" => Self::Rates,
            "json" => Self::Json,
            "submit" => Self::Submit,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => {
                return Err(AppError::with_message(
                    ErrorCode::UnknownCommand,
                    format!("Unknown command: {} (try `help`)", other),
                ));
            }
        };
        Ok(Some(command))
    }
}

fn required<'a>(args: &[&'a str], index: usize, what: &str) -> AppResult<&'a str> {
    args.get(index).copied().ok_or_else(|| {
        AppError::with_message(ErrorCode::RequiredField, format!("Missing {}", what))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_and_comments() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("# a note").unwrap(), None);
    }

    #[test]
    fn test_form_commands() {
        assert_eq!(parse("date 2024-01-10"), Command::Date("2024-01-10".into()));
        assert_eq!(parse("hours"), Command::Hours(String::new()));
        assert_eq!(parse("hours 7.5"), Command::Hours("7.5".into()));
        assert_eq!(parse("type nightB"), Command::Type(ShiftType::NightB));
        assert_eq!(parse("type swing"), Command::Type(ShiftType::Day));
        assert_eq!(parse("add"), Command::Add);
    }

    #[test]
    fn test_direct_add() {
        assert_eq!(
            parse("add 2024-01-11 6 nightA"),
            Command::AddShift {
                date: "2024-01-11".into(),
                hours: "6".into(),
                shift_type: ShiftType::NightA,
            }
        );
        assert_eq!(
            parse("add 2024-01-11"),
            Command::AddShift {
                date: "2024-01-11".into(),
                hours: String::new(),
                shift_type: ShiftType::Day,
            }
        );
    }

    #[test]
    fn test_rate_commands() {
        assert_eq!(
            parse("rate nightB 30"),
            Command::Rate {
                field: RateField::NightBIncrease,
                value: "30".into()
            }
        );
        assert_eq!(
            parse("rate base"),
            Command::Rate {
                field: RateField::BaseRate,
                value: String::new()
            }
        );
        let err = Command::parse("rate overtime 5").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownRateField);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            Command::parse("rm abc").unwrap_err().code,
            ErrorCode::InvalidFormat
        );
        assert_eq!(Command::parse("rm").unwrap_err().code, ErrorCode::RequiredField);
        assert_eq!(Command::parse("type").unwrap_err().code, ErrorCode::RequiredField);
        assert_eq!(
            Command::parse("payday").unwrap_err().code,
            ErrorCode::UnknownCommand
        );
    }

    #[test]
    fn test_aliases() {
        assert_eq!(parse("rm 42"), Command::Remove(42));
        assert_eq!(parse("remove 42"), Command::Remove(42));
        assert_eq!(parse("q"), Command::Quit);
        assert_eq!(parse("ls"), Command::List);
    }
}
