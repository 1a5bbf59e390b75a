use crate::data::persistence::Persistable;
use serde::{Deserialize, Serialize};

/// One category of absence with its own balance and past-date rules.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LeaveType {
    pub id: String,
    pub label: String,
    pub max_days: u32,
    pub available: u32,
    pub note: String,
    #[serde(default)]
    pub allow_past_dates: bool,
    /// Look-back window in days. Only meaningful when past dates are
    /// allowed; None falls back to the 7-day default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_past_days: Option<i64>,
}

impl LeaveType {
    pub fn new(
        id: &str,
        label: &str,
        max_days: u32,
        available: u32,
        note: &str,
        allow_past_dates: bool,
        max_past_days: Option<i64>,
    ) -> Self {
        LeaveType {
            id: id.to_string(),
            label: label.to_string(),
            max_days,
            available,
            note: note.to_string(),
            allow_past_dates,
            max_past_days,
        }
    }

    /// Up to two initials from the label, e.g. "Sick Leave" -> "SL".
    pub fn initials(&self) -> String {
        self.label
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LeaveTypeData {
    pub types: Vec<LeaveType>,
}

impl Default for LeaveTypeData {
    fn default() -> Self {
        LeaveTypeData {
            types: vec![
                LeaveType::new(
                    "sick",
                    "Sick Leave",
                    14,
                    10,
                    "Doctor cert required for 3+ days",
                    true,
                    Some(7),
                ),
                LeaveType::new("casual", "Casual Leave", 10, 7, "Max 3 days at a time", false, None),
                LeaveType::new(
                    "paternity",
                    "Paternity Leave",
                    14,
                    14,
                    "7 days before + 7 after delivery",
                    true,
                    Some(90),
                ),
                LeaveType::new(
                    "bereavement",
                    "Bereavement",
                    3,
                    3,
                    "Immediate family/relative",
                    true,
                    Some(7),
                ),
                LeaveType::new("marriage", "Marriage Leave", 5, 5, "Once in employment", false, None),
            ],
        }
    }
}

impl Persistable for LeaveTypeData {
    fn filename() -> &'static str {
        "leave_types.yaml"
    }
    fn is_json() -> bool {
        false
    }
}

impl LeaveTypeData {
    pub fn get(&self, id: &str) -> Option<&LeaveType> {
        self.types.iter().find(|t| t.id == id)
    }
}
