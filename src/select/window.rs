use chrono::{Datelike, Duration, NaiveDate};

/// Rolling window used by the compact dot calendar: four whole weeks,
/// aligned to the Sunday of today's week, shifted by `week_offset` weeks.
pub fn week_window(today: NaiveDate, week_offset: i32) -> Vec<NaiveDate> {
    let back = today.weekday().num_days_from_sunday() as i64;
    let start = today - Duration::days(back) + Duration::weeks(week_offset as i64);
    (0..28).map(|i| start + Duration::days(i)).collect()
}

/// Header label for a week window: "jan 2026", or "jan – feb 2026" when
/// the window spans a month boundary.
pub fn window_label(days: &[NaiveDate]) -> String {
    let (first, last) = match (days.first(), days.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return String::new(),
    };
    if first.month() == last.month() {
        format!("{} {}", short_month_name(first.month()), first.year())
    } else {
        format!(
            "{} – {} {}",
            short_month_name(first.month()),
            short_month_name(last.month()),
            last.year()
        )
    }
}

/// One calendar month laid out on a Sunday-first grid. Leading `None`
/// cells pad the first week up to the weekday of the 1st.
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<Option<NaiveDate>>,
}

impl MonthGrid {
    pub fn label(&self) -> String {
        format!("{} {}", short_month_name(self.month), self.year)
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[Option<NaiveDate>]> {
        self.cells.chunks(7)
    }
}

/// Month shown by the full-grid calendar: today's month shifted by
/// `month_offset` months.
pub fn month_grid(today: NaiveDate, month_offset: i32) -> MonthGrid {
    let anchor = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    let target = add_months(anchor, month_offset);
    let year = target.year();
    let month = target.month();

    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(target);
    let padding = first.weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<Option<NaiveDate>> = vec![None; padding];
    for day in 1..=days_in_month(year, month) {
        cells.push(NaiveDate::from_ymd_opt(year, month, day));
    }
    MonthGrid { year, month, cells }
}

pub(crate) fn short_month_name(month: u32) -> &'static str {
    match month {
        1 => "jan",
        2 => "feb",
        3 => "mar",
        4 => "apr",
        5 => "may",
        6 => "jun",
        7 => "jul",
        8 => "aug",
        9 => "sep",
        10 => "oct",
        11 => "nov",
        12 => "dec",
        _ => "???",
    }
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (next, NaiveDate::from_ymd_opt(year, month, 1)) {
        (Some(n), Some(f)) => (n - f).num_days() as u32,
        _ => 30,
    }
}

pub(crate) fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let year = date.year();
    let month = date.month() as i32;
    let new_total = month - 1 + months;
    let new_month = ((new_total % 12 + 12) % 12 + 1) as u32;
    let year_delta = new_total.div_euclid(12);
    let new_year = year + year_delta;
    let max_day = days_in_month(new_year, new_month);
    let new_day = date.day().min(max_day);
    NaiveDate::from_ymd_opt(new_year, new_month, new_day).unwrap_or(date)
}
