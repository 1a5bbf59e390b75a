use crate::data::{
    AppSettings, BalanceData, LeaveTypeData, PendingRequestData, Persistable, TeamData,
};
use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn run() -> Result<()> {
    let dir = crate::data::persistence::get_data_dir()?;
    fs::create_dir_all(&dir)?;
    run_in_dir(&dir)?;
    println!("Data files initialized successfully.");
    Ok(())
}

/// Materializes the built-in sample data as editable files in `dir`.
/// Exposed for unit testing.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    LeaveTypeData::default().save_to(dir)?;
    TeamData::default().save_to(dir)?;
    PendingRequestData::default().save_to(dir)?;
    BalanceData::default().save_to(dir)?;
    AppSettings::default().save_to(dir)?;
    Ok(())
}
