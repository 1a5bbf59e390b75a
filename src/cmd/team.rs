use crate::data::{MemberStatus, PendingRequestData, Persistable, TeamData};
use anyhow::Result;

pub fn run() -> Result<()> {
    let data = TeamData::load()?;
    let pending = PendingRequestData::load()?;
    write_team(&data, pending.requests.len(), &mut std::io::stdout())
}

pub(crate) fn write_team<W: std::io::Write>(
    data: &TeamData,
    pending: usize,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Team")?;
    writeln!(out, "---")?;
    writeln!(out, "  {:<4} {:<16} {:<12} {}", "", "Name", "Role", "Status")?;
    for m in &data.members {
        let status = match &m.status {
            MemberStatus::OnLeave { kind, until } => format!("{} until {}", kind, until),
            MemberStatus::Available { days_left } => format!("{} days left", days_left),
        };
        writeln!(
            out,
            "  {:<4} {:<16} {:<12} {}",
            m.initials, m.name, m.role, status
        )?;
    }
    writeln!(out, "---")?;
    let s = data.summary(pending);
    writeln!(
        out,
        "Available: {}  On leave: {}  Pending: {}  This week: {}",
        s.available, s.on_leave, s.pending, s.this_week
    )?;
    Ok(())
}
