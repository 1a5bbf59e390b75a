use crate::data::{PendingRequestData, Persistable};
use anyhow::Result;

pub fn run() -> Result<()> {
    let data = PendingRequestData::load()?;
    write_pending(&data, &mut std::io::stdout())
}

pub(crate) fn write_pending<W: std::io::Write>(
    data: &PendingRequestData,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Pending Requests")?;
    writeln!(out, "---")?;
    writeln!(
        out,
        "  {:<4} {:<16} {:<12} {:<10} {}",
        "", "Name", "Dates", "Type", "Days"
    )?;
    for r in &data.requests {
        writeln!(
            out,
            "  {:<4} {:<16} {:<12} {:<10} {}",
            r.initials, r.name, r.dates, r.kind, r.days
        )?;
    }
    writeln!(out, "---")?;
    writeln!(out, "Total: {} request(s)", data.requests.len())?;
    Ok(())
}
