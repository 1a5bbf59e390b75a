use crate::data::persistence::Persistable;
use serde::{Deserialize, Serialize};

/// One row of the Your Balance card.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BalanceEntry {
    pub label: String,
    pub used: u32,
    pub total: u32,
}

impl BalanceEntry {
    pub fn new(label: &str, used: u32, total: u32) -> Self {
        BalanceEntry {
            label: label.to_string(),
            used,
            total,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.used)
    }

    /// Remaining share in percent, for the progress bar.
    pub fn remaining_pct(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.remaining() as f64 / self.total as f64
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BalanceData {
    pub balances: Vec<BalanceEntry>,
}

impl Default for BalanceData {
    fn default() -> Self {
        BalanceData {
            balances: vec![
                BalanceEntry::new("Sick Leave", 4, 14),
                BalanceEntry::new("Casual", 3, 10),
                BalanceEntry::new("Paternity", 0, 14),
                BalanceEntry::new("Marriage", 0, 5),
            ],
        }
    }
}

impl Persistable for BalanceData {
    fn filename() -> &'static str {
        "balances.yaml"
    }
    fn is_json() -> bool {
        false
    }
}
