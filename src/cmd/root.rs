use crate::data::{
    AppSettings, BalanceData, LeaveRequest, LeaveTypeData, PendingRequestData, Persistable,
    TeamData,
};
use crate::ui::dashboard_view::{run_app, App};
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;
use chrono::Local;

pub fn run() -> Result<()> {
    let leave_types = LeaveTypeData::load()?;
    let team = TeamData::load()?;
    let pending = PendingRequestData::load()?;
    let balances = BalanceData::load()?;
    let settings = AppSettings::load()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;

    let today = Local::now().date_naive();
    let mut app = App::new(&leave_types, &team, &pending, &balances, settings, today);

    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;

    // Hand the session's submissions to whatever approval system wraps
    // this tool, one JSON object per line on stdout.
    let submitted = std::mem::take(&mut app.submitted);
    drop(app);
    write_submitted(&submitted, &mut std::io::stdout())?;

    result
}

pub(crate) fn write_submitted<W: std::io::Write>(
    requests: &[LeaveRequest],
    out: &mut W,
) -> Result<()> {
    for req in requests {
        writeln!(out, "{}", serde_json::to_string(req)?)?;
    }
    Ok(())
}
