use crate::data::persistence::Persistable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A teammate's request awaiting approval, shown in the Pending card.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PendingRequest {
    pub name: String,
    pub initials: String,
    pub dates: String,
    pub kind: String,
    pub days: u32,
}

impl PendingRequest {
    pub fn new(name: &str, initials: &str, dates: &str, kind: &str, days: u32) -> Self {
        PendingRequest {
            name: name.to_string(),
            initials: initials.to_string(),
            dates: dates.to_string(),
            kind: kind.to_string(),
            days,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PendingRequestData {
    pub requests: Vec<PendingRequest>,
}

impl Default for PendingRequestData {
    fn default() -> Self {
        PendingRequestData {
            requests: vec![
                PendingRequest::new("Emma Wilson", "EW", "Jan 20-24", "Vacation", 5),
                PendingRequest::new("David Liu", "DL", "Jan 22", "Personal", 1),
            ],
        }
    }
}

impl Persistable for PendingRequestData {
    fn filename() -> &'static str {
        "pending.yaml"
    }
    fn is_json() -> bool {
        false
    }
}

/// The composed payload handed off when the wizard submits. Endpoints are
/// emitted in click order; a single-date selection repeats it as end.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LeaveRequest {
    pub leave_type_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub note: String,
    pub days: i64,
}
