use crate::data::persistence::Persistable;
use serde::{Deserialize, Serialize};

/// Whether a member is in the office or out, with the leave detail kept
/// alongside the variant.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum MemberStatus {
    Available { days_left: u32 },
    OnLeave { kind: String, until: String },
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TeamMember {
    pub name: String,
    pub initials: String,
    pub role: String,
    #[serde(flatten)]
    pub status: MemberStatus,
}

impl TeamMember {
    pub fn available(name: &str, initials: &str, role: &str, days_left: u32) -> Self {
        TeamMember {
            name: name.to_string(),
            initials: initials.to_string(),
            role: role.to_string(),
            status: MemberStatus::Available { days_left },
        }
    }

    pub fn on_leave(name: &str, initials: &str, role: &str, kind: &str, until: &str) -> Self {
        TeamMember {
            name: name.to_string(),
            initials: initials.to_string(),
            role: role.to_string(),
            status: MemberStatus::OnLeave {
                kind: kind.to_string(),
                until: until.to_string(),
            },
        }
    }

    pub fn is_on_leave(&self) -> bool {
        matches!(self.status, MemberStatus::OnLeave { .. })
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TeamData {
    pub members: Vec<TeamMember>,
}

impl Default for TeamData {
    fn default() -> Self {
        TeamData {
            members: vec![
                TeamMember::on_leave("Sarah Chen", "SC", "Designer", "Vacation", "Jan 20"),
                TeamMember::on_leave("Mike Johnson", "MJ", "Developer", "Sick", "Jan 19"),
                TeamMember::available("Priya Patel", "PP", "Developer", 15),
                TeamMember::available("Alex Kim", "AK", "DevOps", 10),
                TeamMember::available("Emma Wilson", "EW", "QA", 14),
            ],
        }
    }
}

impl Persistable for TeamData {
    fn filename() -> &'static str {
        "team.yaml"
    }
    fn is_json() -> bool {
        false
    }
}

/// Headcounts for the availability card. Derived from the roster and the
/// pending list instead of being stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AvailabilitySummary {
    pub available: usize,
    pub on_leave: usize,
    pub pending: usize,
    pub this_week: usize,
}

impl TeamData {
    pub fn summary(&self, pending: usize) -> AvailabilitySummary {
        let on_leave = self.members.iter().filter(|m| m.is_on_leave()).count();
        let available = self.members.len() - on_leave;
        AvailabilitySummary {
            available,
            on_leave,
            pending,
            this_week: self.members.len(),
        }
    }
}
