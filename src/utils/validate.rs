//! "Present and truthy" checks for request payloads: an empty string or a
//! zero counts as missing, exactly like an absent key.

use crate::model::timesheet::TimesheetDate;

pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for i64 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for TimesheetDate {
    fn is_truthy(&self) -> bool {
        match self {
            TimesheetDate::Timestamp(n) => n.is_truthy(),
            TimesheetDate::Fractional(n) => n.is_truthy(),
            TimesheetDate::Text(s) => s.is_truthy(),
        }
    }
}

/// Returns the value only when it is present and truthy.
pub fn required<T: Truthy>(value: Option<T>) -> Option<T> {
    value.filter(Truthy::is_truthy)
}
