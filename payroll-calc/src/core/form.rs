//! Shift entry form draft

use shared::models::ShiftType;

/// Hours pre-filled in a fresh form
pub const DEFAULT_HOURS: &str = "8";

/// Values currently typed into the "Add Shift" form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftForm {
    /// `YYYY-MM-DD`, blank until picked
    pub date: String,
    pub hours: String,
    pub shift_type: ShiftType,
}

impl Default for ShiftForm {
    fn default() -> Self {
        Self {
            date: String::new(),
            hours: DEFAULT_HOURS.to_string(),
            shift_type: ShiftType::Day,
        }
    }
}

impl ShiftForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Both required fields carry something
    pub fn is_complete(&self) -> bool {
        !self.date.trim().is_empty() && !self.hours.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_reset() {
        let mut form = ShiftForm::default();
        assert_eq!(form.date, "");
        assert_eq!(form.hours, "8");
        assert_eq!(form.shift_type, ShiftType::Day);
        assert!(!form.is_complete());

        form.date = "2024-01-10".into();
        form.hours = "12".into();
        form.shift_type = ShiftType::NightB;
        assert!(form.is_complete());

        form.reset();
        assert_eq!(form, ShiftForm::default());
    }
}
