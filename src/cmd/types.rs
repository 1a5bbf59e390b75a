use crate::data::{LeaveTypeData, Persistable};
use crate::select::classify::DEFAULT_MAX_PAST_DAYS;
use anyhow::Result;

pub fn run() -> Result<()> {
    let data = LeaveTypeData::load()?;
    write_types(&data, &mut std::io::stdout())
}

pub(crate) fn write_types<W: std::io::Write>(data: &LeaveTypeData, out: &mut W) -> Result<()> {
    writeln!(out, "Leave Types")?;
    writeln!(out, "---")?;
    writeln!(
        out,
        "  {:<18} {:>9} {:>4}  {:<14} {}",
        "Type", "Available", "Max", "Past window", "Note"
    )?;
    for t in &data.types {
        let past = if t.allow_past_dates {
            format!(
                "{} day(s) back",
                t.max_past_days.unwrap_or(DEFAULT_MAX_PAST_DAYS)
            )
        } else {
            "-".to_string()
        };
        writeln!(
            out,
            "  {:<18} {:>9} {:>4}  {:<14} {}",
            t.label, t.available, t.max_days, past, t.note
        )?;
    }
    writeln!(out, "---")?;
    writeln!(out, "Total: {} type(s)", data.types.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LeaveType;

    #[test]
    fn test_write_types_empty() {
        let data = LeaveTypeData { types: vec![] };
        let mut buf = Vec::new();
        write_types(&data, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Total: 0 type(s)"));
    }

    #[test]
    fn test_write_types_shows_past_window_and_note() {
        let data = LeaveTypeData {
            types: vec![
                LeaveType::new("sick", "Sick Leave", 14, 10, "Doctor cert", true, Some(7)),
                LeaveType::new("casual", "Casual Leave", 10, 7, "Max 3 at a time", false, None),
            ],
        };
        let mut buf = Vec::new();
        write_types(&data, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Sick Leave"));
        assert!(out.contains("7 day(s) back"));
        assert!(out.contains("Doctor cert"));
        assert!(out.contains("Max 3 at a time"));
        assert!(out.contains("Total: 2 type(s)"));
    }

    #[test]
    fn test_write_types_default_past_window() {
        // allow_past_dates with no explicit window falls back to 7.
        let data = LeaveTypeData {
            types: vec![LeaveType::new(
                "bereavement",
                "Bereavement",
                3,
                3,
                "",
                true,
                None,
            )],
        };
        let mut buf = Vec::new();
        write_types(&data, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("7 day(s) back"));
    }

    #[test]
    fn test_write_types_builtin_samples() {
        let data = LeaveTypeData::default();
        let mut buf = Vec::new();
        write_types(&data, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Total: 5 type(s)"));
        assert!(out.contains("Paternity Leave"));
        assert!(out.contains("90 day(s) back"));
        assert!(out.contains("Once in employment"));
    }
}
