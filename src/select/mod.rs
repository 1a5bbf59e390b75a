pub mod classify;
pub mod range;
pub mod window;

pub use classify::{classify, is_disabled, DayClass};
pub use range::DateRange;
pub use window::{month_grid, week_window, window_label, MonthGrid};
