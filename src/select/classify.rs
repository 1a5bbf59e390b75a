use crate::data::LeaveType;
use crate::select::range::DateRange;
use chrono::NaiveDate;

/// Past-date window applied when a leave type allows past dates but does
/// not say how far back.
pub const DEFAULT_MAX_PAST_DAYS: i64 = 7;

/// How a single calendar cell should render. Exactly one class applies,
/// picked in declaration order: an endpoint outranks everything, today
/// outranks disabled, and an enabled past date gets its own emphasis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayClass {
    /// The date is a range endpoint.
    Selected,
    /// Strictly between the normalized endpoints.
    InRange,
    Today,
    Disabled,
    /// A past date the leave type still permits.
    PastOpen,
    Open,
}

/// Eligibility rule shared by both calendar widgets. Dates from today on
/// are always selectable. Past dates are selectable only when the leave
/// type allows them and the date is within its look-back window.
pub fn is_disabled(date: NaiveDate, today: NaiveDate, leave_type: &LeaveType) -> bool {
    if date >= today {
        return false;
    }
    if leave_type.allow_past_dates {
        let max_past = leave_type.max_past_days.unwrap_or(DEFAULT_MAX_PAST_DAYS);
        return (today - date).num_days() > max_past;
    }
    true
}

pub fn classify(
    date: NaiveDate,
    range: &DateRange,
    leave_type: &LeaveType,
    today: NaiveDate,
) -> DayClass {
    if range.start == Some(date) || range.end == Some(date) {
        return DayClass::Selected;
    }
    if let Some((start, end)) = range.normalized() {
        if date > start && date < end {
            return DayClass::InRange;
        }
    }
    if date == today {
        return DayClass::Today;
    }
    if is_disabled(date, today, leave_type) {
        return DayClass::Disabled;
    }
    if date < today {
        return DayClass::PastOpen;
    }
    DayClass::Open
}
