use chrono::NaiveDate;

/// A two-click date span. `start` is set by the first click, `end` by the
/// second. The stored order is whatever the user clicked — `end` may be
/// chronologically before `start`. Only `normalized` and `day_count` put
/// the endpoints in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Applies one click. Callers must reject disabled dates before this.
    /// No start yet, or a completed range: the date becomes the new start
    /// and any end is dropped. Start without end: the date becomes end,
    /// even when it lies before start.
    pub fn toggle(&mut self, date: NaiveDate) {
        if self.start.is_none() || self.end.is_some() {
            self.start = Some(date);
            self.end = None;
        } else {
            self.end = Some(date);
        }
    }

    /// Endpoints in chronological order, when both are set.
    pub fn normalized(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(s), Some(e)) => Some((s.min(e), s.max(e))),
            _ => None,
        }
    }

    /// Inclusive span length: 0 with no start, 1 with start only,
    /// abs(end - start) + 1 with both.
    pub fn day_count(&self) -> i64 {
        match (self.start, self.end) {
            (Some(s), Some(e)) => (e - s).num_days().abs() + 1,
            (Some(_), None) => 1,
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }
}
