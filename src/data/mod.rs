pub mod app_settings;
pub mod balance;
pub mod leave_type;
pub mod persistence;
pub mod request;
pub mod team;

pub use app_settings::AppSettings;
pub use balance::{BalanceData, BalanceEntry};
pub use leave_type::{LeaveType, LeaveTypeData};
pub use persistence::Persistable;
pub use request::{LeaveRequest, PendingRequest, PendingRequestData};
pub use team::{AvailabilitySummary, MemberStatus, TeamData, TeamMember};
