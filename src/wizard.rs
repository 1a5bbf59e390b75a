use crate::data::{LeaveRequest, LeaveType, LeaveTypeData};
use crate::select::{is_disabled, DateRange};
use chrono::NaiveDate;

/// Leave type preselected when the modal opens.
pub const INITIAL_LEAVE_TYPE: &str = "casual";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    ChoosingType,
    ChoosingDates,
    AddingNote,
}

/// State behind the request-time-off modal. One instance per modal open;
/// `close` and a successful `submit` both return it to the initial state.
/// The balance gate is the only invalid condition and it is expressed as
/// a disabled transition, not an error.
#[derive(Clone, Debug, Default)]
pub struct Wizard {
    pub step: WizardStep,
    pub leave_type_id: String,
    pub range: DateRange,
    pub note: String,
}

impl Wizard {
    pub fn new() -> Self {
        let mut w = Wizard::default();
        w.reset();
        w
    }

    pub fn reset(&mut self) {
        self.step = WizardStep::ChoosingType;
        self.leave_type_id = INITIAL_LEAVE_TYPE.to_string();
        self.range.clear();
        self.note.clear();
    }

    pub fn current_type<'a>(&self, types: &'a LeaveTypeData) -> Option<&'a LeaveType> {
        types.get(&self.leave_type_id)
    }

    pub fn selected_days(&self) -> i64 {
        self.range.day_count()
    }

    pub fn exceeds_balance(&self, types: &LeaveTypeData) -> bool {
        match self.current_type(types) {
            Some(t) => self.selected_days() > t.available as i64,
            None => false,
        }
    }

    /// Picking a type always moves forward to date selection.
    pub fn choose_type(&mut self, id: &str) {
        self.leave_type_id = id.to_string();
        self.step = WizardStep::ChoosingDates;
    }

    /// A calendar click, routed through the shared eligibility rule.
    /// Ignored outside the date step and on disabled dates.
    pub fn click_date(&mut self, date: NaiveDate, today: NaiveDate, types: &LeaveTypeData) {
        if self.step != WizardStep::ChoosingDates {
            return;
        }
        let Some(leave_type) = self.current_type(types) else {
            return;
        };
        if is_disabled(date, today, leave_type) {
            return;
        }
        self.range.toggle(date);
    }

    /// The continue affordance on the date step: some days selected and
    /// the count within the type's balance.
    pub fn can_continue(&self, types: &LeaveTypeData) -> bool {
        self.selected_days() > 0 && !self.exceeds_balance(types)
    }

    /// Returns false (and stays put) when the gate is closed.
    pub fn continue_to_note(&mut self, types: &LeaveTypeData) -> bool {
        if self.step != WizardStep::ChoosingDates || !self.can_continue(types) {
            return false;
        }
        self.step = WizardStep::AddingNote;
        true
    }

    /// Backward transitions are always available and keep the selection.
    pub fn back(&mut self) {
        self.step = match self.step {
            WizardStep::ChoosingType | WizardStep::ChoosingDates => WizardStep::ChoosingType,
            WizardStep::AddingNote => WizardStep::ChoosingDates,
        };
    }

    /// Composes the payload and resets, or rejects when the balance gate
    /// is closed or no date was chosen. Endpoints go out in click order;
    /// a reversed range is not swapped.
    pub fn submit(&mut self, types: &LeaveTypeData) -> Option<LeaveRequest> {
        if self.exceeds_balance(types) {
            return None;
        }
        let start = self.range.start?;
        let request = LeaveRequest {
            leave_type_id: self.leave_type_id.clone(),
            start,
            end: self.range.end.unwrap_or(start),
            note: self.note.clone(),
            days: self.selected_days(),
        };
        self.reset();
        Some(request)
    }

    /// Cancel from any step: back to initial state, nothing emitted.
    pub fn close(&mut self) {
        self.reset();
    }
}
