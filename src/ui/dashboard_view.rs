use crate::data::{
    AppSettings, BalanceData, LeaveRequest, LeaveTypeData, MemberStatus, PendingRequestData,
    TeamData,
};
use crate::select::{classify, month_grid, week_window, window_label, DayClass};
use crate::ui::layout::{layout_mode, LayoutMode};
use crate::wizard::{Wizard, WizardStep};
use anyhow::Result;
use chrono::{Datelike, Duration, Local, NaiveDate, Timelike};
use crossterm::event::{self, Event as CEvent, KeyCode, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame, Terminal,
};
use std::io::Stdout;
use std::time::Duration as StdDuration;

// Soft calendar palette
const SELECTED_BG: Color = Color::Indexed(110); // muted blue
const RANGE_BG: Color = Color::Indexed(152); // pale blue
const ACCENT: Color = Color::Indexed(110);

pub struct App<'a> {
    leave_types: &'a LeaveTypeData,
    team: &'a TeamData,
    pending: &'a PendingRequestData,
    balances: &'a BalanceData,
    settings: AppSettings,
    today: NaiveDate,
    /// Day highlighted in the dashboard week strip.
    selected_day: NaiveDate,
    /// Some while the request modal is open. Dropped on close, so each
    /// open starts from a fresh wizard.
    wizard: Option<Wizard>,
    /// Keyboard cursor inside the modal calendar; Enter "clicks" it.
    cursor_date: NaiveDate,
    /// Paging for the two calendar windows.
    week_offset: i32,
    month_offset: i32,
    /// Highlighted row on the choose-type step.
    type_cursor: usize,
    /// Recomputed from the frame width on every draw.
    layout: LayoutMode,
    /// Payloads emitted by submit; drained by the caller after the
    /// session ends.
    pub submitted: Vec<LeaveRequest>,
}

impl<'a> App<'a> {
    pub fn new(
        leave_types: &'a LeaveTypeData,
        team: &'a TeamData,
        pending: &'a PendingRequestData,
        balances: &'a BalanceData,
        settings: AppSettings,
        today: NaiveDate,
    ) -> Self {
        App {
            leave_types,
            team,
            pending,
            balances,
            settings,
            today,
            selected_day: today,
            wizard: None,
            cursor_date: today,
            week_offset: 0,
            month_offset: 0,
            type_cursor: 0,
            layout: LayoutMode::default(),
            submitted: Vec::new(),
        }
    }

    fn open_modal(&mut self) {
        self.wizard = Some(Wizard::new());
        self.cursor_date = self.today;
        self.week_offset = 0;
        self.month_offset = 0;
        self.type_cursor = self
            .leave_types
            .types
            .iter()
            .position(|t| t.id == crate::wizard::INITIAL_LEAVE_TYPE)
            .unwrap_or(0);
    }

    fn close_modal(&mut self) {
        self.wizard = None;
    }

    /// Keeps the cursor inside the visible window after a move. Cursor
    /// steps are at most one week, so a single page always suffices for
    /// the dot calendar.
    fn ensure_cursor_visible(&mut self) {
        if self.layout.is_mobile() {
            let days = week_window(self.today, self.week_offset);
            if let (Some(first), Some(last)) = (days.first(), days.last()) {
                if self.cursor_date < *first {
                    self.week_offset -= 1;
                } else if self.cursor_date > *last {
                    self.week_offset += 1;
                }
            }
        } else {
            let grid = month_grid(self.today, self.month_offset);
            let cursor_months = self.cursor_date.year() * 12 + self.cursor_date.month() as i32;
            let grid_months = grid.year * 12 + grid.month as i32;
            self.month_offset += cursor_months - grid_months;
        }
    }

    fn move_cursor(&mut self, days: i64) {
        if let Some(d) = self.cursor_date.checked_add_signed(Duration::days(days)) {
            self.cursor_date = d;
            self.ensure_cursor_visible();
        }
    }

    fn page_window(&mut self, delta: i32) {
        if self.layout.is_mobile() {
            self.week_offset += delta;
        } else {
            self.month_offset += delta;
        }
    }

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.wizard.is_some() {
            self.handle_modal_key(code);
            return false;
        }

        match code {
            KeyCode::Char('n') => self.open_modal(),
            KeyCode::Left => {
                if let Some(d) = self.selected_day.checked_sub_signed(Duration::days(1)) {
                    self.selected_day = d;
                }
            }
            KeyCode::Right => {
                if let Some(d) = self.selected_day.checked_add_signed(Duration::days(1)) {
                    self.selected_day = d;
                }
            }
            KeyCode::Up => {
                if let Some(d) = self.selected_day.checked_sub_signed(Duration::days(7)) {
                    self.selected_day = d;
                }
            }
            KeyCode::Down => {
                if let Some(d) = self.selected_day.checked_add_signed(Duration::days(7)) {
                    self.selected_day = d;
                }
            }
            KeyCode::Char('q') => return true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            _ => {}
        }
        false
    }

    fn handle_modal_key(&mut self, code: KeyCode) {
        let step = match &self.wizard {
            Some(w) => w.step,
            None => return,
        };
        match step {
            WizardStep::ChoosingType => match code {
                KeyCode::Up => {
                    if self.type_cursor > 0 {
                        self.type_cursor -= 1;
                    }
                }
                KeyCode::Down => {
                    if self.type_cursor + 1 < self.leave_types.types.len() {
                        self.type_cursor += 1;
                    }
                }
                KeyCode::Enter => {
                    if let Some(t) = self.leave_types.types.get(self.type_cursor) {
                        let id = t.id.clone();
                        if let Some(w) = self.wizard.as_mut() {
                            w.choose_type(&id);
                        }
                        self.cursor_date = self.today;
                        self.week_offset = 0;
                        self.month_offset = 0;
                    }
                }
                KeyCode::Esc => self.close_modal(),
                _ => {}
            },
            WizardStep::ChoosingDates => match code {
                KeyCode::Left => self.move_cursor(-1),
                KeyCode::Right => self.move_cursor(1),
                KeyCode::Up => self.move_cursor(-7),
                KeyCode::Down => self.move_cursor(7),
                KeyCode::Char('[') => self.page_window(-1),
                KeyCode::Char(']') => self.page_window(1),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let (cursor, today) = (self.cursor_date, self.today);
                    if let Some(w) = self.wizard.as_mut() {
                        w.click_date(cursor, today, self.leave_types);
                    }
                }
                KeyCode::Char('c') => {
                    if let Some(w) = self.wizard.as_mut() {
                        w.continue_to_note(self.leave_types);
                    }
                }
                KeyCode::Char('b') => {
                    if let Some(w) = self.wizard.as_mut() {
                        w.back();
                    }
                }
                KeyCode::Esc => self.close_modal(),
                _ => {}
            },
            WizardStep::AddingNote => match code {
                KeyCode::Enter => {
                    let request = self
                        .wizard
                        .as_mut()
                        .and_then(|w| w.submit(self.leave_types));
                    if let Some(req) = request {
                        self.submitted.push(req);
                        self.close_modal();
                    }
                }
                KeyCode::Left => {
                    if let Some(w) = self.wizard.as_mut() {
                        w.back();
                    }
                }
                KeyCode::Backspace => {
                    if let Some(w) = self.wizard.as_mut() {
                        w.note.pop();
                    }
                }
                KeyCode::Esc => self.close_modal(),
                KeyCode::Char(c) => {
                    if let Some(w) = self.wizard.as_mut() {
                        w.note.push(c);
                    }
                }
                _ => {}
            },
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let size = f.area();
        self.layout = layout_mode(size.width);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(size);
        self.render_header(f, chunks[0]);

        if self.layout.is_mobile() {
            self.render_main_column(f, chunks[1], true);
        } else {
            let panel_width = if self.layout == LayoutMode::Desktop { 44 } else { 36 };
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(40), Constraint::Length(panel_width)])
                .split(chunks[1]);
            self.render_main_column(f, cols[0], false);
            self.render_right_panel(f, cols[1]);
        }

        if self.wizard.is_some() {
            self.render_modal(f, size);
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let hour = Local::now().hour();
        let mut spans = vec![
            Span::styled(
                "teamflow.",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" leave management", Style::default().fg(Color::DarkGray)),
            Span::raw("   "),
            Span::styled(greeting(hour), Style::default().fg(ACCENT)),
        ];
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("{} · {}", self.settings.user_name, self.settings.user_role),
            Style::default().fg(Color::DarkGray),
        ));
        let header = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::BOTTOM))
            .alignment(Alignment::Left);
        f.render_widget(header, area);
    }

    fn render_main_column(&self, f: &mut Frame, area: Rect, include_pending: bool) {
        let mut constraints = vec![
            Constraint::Length(5),                                   // week strip
            Constraint::Length(6),                                   // availability
            Constraint::Length(self.team.members.len() as u16 + 4),  // roster
        ];
        if include_pending {
            constraints.push(Constraint::Length(
                self.pending.requests.len() as u16 * 2 + 3,
            ));
        }
        constraints.push(Constraint::Min(0));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        self.render_week_strip(f, chunks[0]);
        self.render_availability(f, chunks[1]);
        self.render_team(f, chunks[2]);
        if include_pending {
            self.render_pending(f, chunks[3]);
        }
    }

    fn render_right_panel(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.balances.balances.len() as u16 * 2 + 3),
                Constraint::Length(self.pending.requests.len() as u16 * 2 + 3),
                Constraint::Length(5),
                Constraint::Min(0),
            ])
            .split(area);
        self.render_balances(f, chunks[0]);
        self.render_pending(f, chunks[1]);
        self.render_quote(f, chunks[2]);
    }

    fn render_week_strip(&self, f: &mut Frame, area: Rect) {
        let back = self.selected_day.weekday().num_days_from_sunday() as i64;
        let week_start = self.selected_day - Duration::days(back);
        let letters = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

        let mut top: Vec<Span> = vec![Span::raw(" ")];
        let mut bottom: Vec<Span> = vec![Span::raw(" ")];
        for i in 0..7 {
            let date = week_start + Duration::days(i);
            let selected = date == self.selected_day;
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Gray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            top.push(Span::styled(format!(" {:^4}", letters[i as usize]), style));
            bottom.push(Span::styled(format!(" {:^4}", date.day()), style));
        }

        let label = format!(
            "{} {}",
            crate::select::window::short_month_name(self.selected_day.month()),
            self.selected_day.year()
        );
        let lines = vec![
            Line::from(top),
            Line::from(bottom),
            Line::from(Span::styled(label, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Center),
        ];
        let p = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }

    fn render_availability(&self, f: &mut Frame, area: Rect) {
        let summary = self.team.summary(self.pending.requests.len());
        let stats = [
            (summary.available, "available"),
            (summary.on_leave, "on leave"),
            (summary.pending, "pending"),
            (summary.this_week, "this week"),
        ];
        let mut values: Vec<Span> = Vec::new();
        let mut labels: Vec<Span> = Vec::new();
        for (value, label) in stats {
            values.push(Span::styled(
                format!("{:^12}", value),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            labels.push(Span::styled(
                format!("{:^12}", label),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let p = Paragraph::new(vec![
            Line::from(""),
            Line::from(values),
            Line::from(labels),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" team availability "),
        );
        f.render_widget(p, area);
    }

    fn render_team(&self, f: &mut Frame, area: Rect) {
        let header_style = Style::default().add_modifier(Modifier::BOLD);
        let header = Row::new(vec![
            Cell::from("").style(header_style),
            Cell::from("Name").style(header_style),
            Cell::from("Role").style(header_style),
            Cell::from("Status").style(header_style),
        ]);

        let rows: Vec<Row> = self
            .team
            .members
            .iter()
            .map(|m| {
                let status = match &m.status {
                    MemberStatus::OnLeave { kind, until } => Cell::from(format!(
                        "{} · until {}",
                        kind, until
                    ))
                    .style(Style::default().fg(Color::Yellow)),
                    MemberStatus::Available { days_left } => {
                        Cell::from(format!("{} days left", days_left))
                            .style(Style::default().fg(Color::DarkGray))
                    }
                };
                Row::new(vec![
                    Cell::from(m.initials.clone()).style(Style::default().fg(Color::DarkGray)),
                    Cell::from(m.name.clone()),
                    Cell::from(m.role.clone()).style(Style::default().fg(Color::DarkGray)),
                    status,
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Length(16),
                Constraint::Length(12),
                Constraint::Min(18),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" team overview "));
        f.render_widget(table, area);
    }

    fn render_balances(&self, f: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        for b in &self.balances.balances {
            lines.push(Line::from(vec![
                Span::raw(format!("{:<14}", b.label)),
                Span::styled(
                    format!("{:>3}", b.remaining()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" / {}", b.total), Style::default().fg(Color::DarkGray)),
            ]));
            lines.push(Line::from(Span::styled(
                balance_bar(b.remaining_pct(), 20),
                Style::default().fg(Color::DarkGray),
            )));
        }
        let p = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" your balance "));
        f.render_widget(p, area);
    }

    fn render_pending(&self, f: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        for r in &self.pending.requests {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", r.initials),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(r.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {} · {} · {} day(s)", r.dates, r.kind, r.days),
                Style::default().fg(Color::DarkGray),
            )));
        }
        let title = format!(" pending ({}) ", self.pending.requests.len());
        let p = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(p, area);
    }

    fn render_quote(&self, f: &mut Frame, area: Rect) {
        let q = &self.settings.quote;
        let lines = vec![
            Line::from(Span::styled(
                format!("\"{}\"", q.text),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(
                format!("— {}", q.author),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let p = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }

    // ── Request modal ─────────────────────────────────────────────────────

    fn render_modal(&self, f: &mut Frame, area: Rect) {
        let w = match &self.wizard {
            Some(w) => w,
            None => return,
        };
        let height = match w.step {
            WizardStep::ChoosingType => (self.leave_types.types.len() as u16) * 3 + 4,
            WizardStep::ChoosingDates => 16,
            WizardStep::AddingNote => 12,
        };
        let rect = centered_rect(50, height, area);
        f.render_widget(Clear, rect);

        match w.step {
            WizardStep::ChoosingType => self.render_type_step(f, rect, w),
            WizardStep::ChoosingDates => self.render_dates_step(f, rect, w),
            WizardStep::AddingNote => self.render_note_step(f, rect, w),
        }
    }

    fn render_type_step(&self, f: &mut Frame, area: Rect, w: &Wizard) {
        let mut lines: Vec<Line> = Vec::new();
        for (i, t) in self.leave_types.types.iter().enumerate() {
            let cursor = i == self.type_cursor;
            let marker = if cursor { "> " } else { "  " };
            let chosen = t.id == w.leave_type_id;
            let name_style = if cursor {
                Style::default().add_modifier(Modifier::BOLD).fg(ACCENT)
            } else if chosen {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("[{:<2}] ", t.initials()), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{:<18}", t.label), name_style),
                Span::styled(
                    format!("{} of {} days available", t.available, t.max_days),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("       {}", t.note),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "↑↓ move   Enter choose   Esc close",
            Style::default().fg(Color::DarkGray),
        )));
        let p = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" select leave type. "),
        );
        f.render_widget(p, area);
    }

    fn render_dates_step(&self, f: &mut Frame, area: Rect, w: &Wizard) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" select dates. ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(7),    // calendar
                Constraint::Length(3), // summary + warning
                Constraint::Length(1), // keys
            ])
            .split(inner);

        if self.layout.is_mobile() {
            self.render_dot_calendar(f, chunks[0], w);
        } else {
            self.render_month_calendar(f, chunks[0], w);
        }
        self.render_range_summary(f, chunks[1], w);

        let keys = Paragraph::new(Line::from(Span::styled(
            "arrows move   Enter select   [ ] page   c continue   b back   Esc close",
            Style::default().fg(Color::DarkGray),
        )));
        f.render_widget(keys, chunks[2]);
    }

    fn render_dot_calendar(&self, f: &mut Frame, area: Rect, w: &Wizard) {
        let Some(leave_type) = w.current_type(self.leave_types) else {
            return;
        };
        let days = week_window(self.today, self.week_offset);

        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                window_label(&days),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(
                " S  M  T  W  T  F  S",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        for week in days.chunks(7) {
            let mut spans: Vec<Span> = Vec::new();
            for date in week {
                let class = classify(*date, &w.range, leave_type, self.today);
                let style = day_style(class, *date == self.cursor_date);
                spans.push(Span::styled(format!("{:2}", date.day()), style));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_month_calendar(&self, f: &mut Frame, area: Rect, w: &Wizard) {
        let Some(leave_type) = w.current_type(self.leave_types) else {
            return;
        };
        let grid = month_grid(self.today, self.month_offset);

        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                grid.label(),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(
                "SU MO TU WE TH FR SA",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        for week in grid.weeks() {
            let mut spans: Vec<Span> = Vec::new();
            for cell in week {
                match cell {
                    None => spans.push(Span::raw("  ")),
                    Some(date) => {
                        let class = classify(*date, &w.range, leave_type, self.today);
                        let style = day_style(class, *date == self.cursor_date);
                        spans.push(Span::styled(format!("{:2}", date.day()), style));
                    }
                }
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_range_summary(&self, f: &mut Frame, area: Rect, w: &Wizard) {
        let Some(leave_type) = w.current_type(self.leave_types) else {
            return;
        };
        let days = w.selected_days();
        let range_text = match (w.range.start, w.range.end) {
            (Some(s), Some(e)) => format!("{} → {}", format_date_short(s), format_date_short(e)),
            (Some(s), None) => format_date_short(s),
            _ => "move to a date and press Enter".to_string(),
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("{}  ", leave_type.label.to_uppercase()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(range_text),
            if days > 0 {
                Span::styled(
                    format!("  {} day(s)", days),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw("")
            },
        ])];
        if w.exceeds_balance(self.leave_types) {
            lines.push(Line::from(Span::styled(
                format!(
                    "exceeds {} days available for {}",
                    leave_type.available, leave_type.label
                ),
                Style::default().fg(Color::Yellow),
            )));
        } else if days > 0 {
            lines.push(Line::from(Span::styled(
                "press c to continue",
                Style::default().fg(Color::DarkGray),
            )));
        }
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_note_step(&self, f: &mut Frame, area: Rect, w: &Wizard) {
        let Some(leave_type) = w.current_type(self.leave_types) else {
            return;
        };
        let start = w.range.start.map(format_date_short).unwrap_or_default();
        let end = w
            .range
            .end
            .or(w.range.start)
            .map(format_date_short)
            .unwrap_or_default();
        let summary = format!(
            "{} · {} → {} · {} day(s)",
            leave_type.label,
            start,
            end,
            w.selected_days()
        );

        let note_line = if w.note.is_empty() {
            Line::from(Span::styled(
                "I'll be attending a family event..._",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(format!("{}_", w.note))
        };

        let lines = vec![
            Line::from(Span::styled(
                "Let your team know any details — this is optional.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(summary, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Center),
            Line::from(""),
            note_line,
            Line::from(""),
            Line::from(Span::styled(
                "type to edit   Enter submit   ← back   Esc close",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let p = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" add a note. "),
        );
        f.render_widget(p, area);
    }
}

/// Style for one calendar cell. Mirrors the classification priority; the
/// keyboard cursor is layered on top as reverse video.
pub(crate) fn day_style(class: DayClass, is_cursor: bool) -> Style {
    let style = match class {
        DayClass::Selected => Style::default()
            .fg(Color::Black)
            .bg(SELECTED_BG)
            .add_modifier(Modifier::BOLD),
        DayClass::InRange => Style::default().fg(Color::Black).bg(RANGE_BG),
        DayClass::Today => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        DayClass::Disabled => Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        DayClass::PastOpen => Style::default().fg(Color::Gray),
        DayClass::Open => Style::default(),
    };
    if is_cursor {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

pub(crate) fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "good morning."
    } else if hour < 18 {
        "good afternoon."
    } else {
        "good evening."
    }
}

pub(crate) fn format_date_short(date: NaiveDate) -> String {
    format!(
        "{} {}",
        crate::select::window::short_month_name(date.month()),
        date.day()
    )
}

/// Thin remaining-balance bar, `width` cells wide.
pub(crate) fn balance_bar(pct: f64, width: usize) -> String {
    let filled = ((pct / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "▰".repeat(filled), "▱".repeat(width - filled))
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            if let CEvent::Key(key) = event::read()? {
                if app.handle_key(key.code, key.modifiers) {
                    break;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AppSettings, BalanceData, LeaveTypeData, PendingRequestData, TeamData};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    struct Fixtures {
        leave_types: LeaveTypeData,
        team: TeamData,
        pending: PendingRequestData,
        balances: BalanceData,
    }

    impl Fixtures {
        fn new() -> Self {
            Fixtures {
                leave_types: LeaveTypeData::default(),
                team: TeamData::default(),
                pending: PendingRequestData::default(),
                balances: BalanceData::default(),
            }
        }

        fn app(&self) -> App<'_> {
            App::new(
                &self.leave_types,
                &self.team,
                &self.pending,
                &self.balances,
                AppSettings::default(),
                d(2026, 1, 17),
            )
        }
    }

    fn key(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(code, KeyModifiers::NONE)
    }

    // ── day_style tests ───────────────────────────────────────────────────

    #[test]
    fn test_style_selected() {
        let s = day_style(DayClass::Selected, false);
        assert_eq!(
            s,
            Style::default()
                .fg(Color::Black)
                .bg(SELECTED_BG)
                .add_modifier(Modifier::BOLD)
        );
    }

    #[test]
    fn test_style_in_range() {
        let s = day_style(DayClass::InRange, false);
        assert_eq!(s, Style::default().fg(Color::Black).bg(RANGE_BG));
    }

    #[test]
    fn test_style_today() {
        let s = day_style(DayClass::Today, false);
        assert_eq!(s, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    }

    #[test]
    fn test_style_disabled() {
        let s = day_style(DayClass::Disabled, false);
        assert_eq!(
            s,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        );
    }

    #[test]
    fn test_style_cursor_adds_reversed() {
        let s = day_style(DayClass::Open, true);
        assert_eq!(s, Style::default().add_modifier(Modifier::REVERSED));
    }

    // ── helper tests ──────────────────────────────────────────────────────

    #[test]
    fn test_greeting_by_hour() {
        assert_eq!(greeting(8), "good morning.");
        assert_eq!(greeting(11), "good morning.");
        assert_eq!(greeting(12), "good afternoon.");
        assert_eq!(greeting(17), "good afternoon.");
        assert_eq!(greeting(18), "good evening.");
        assert_eq!(greeting(23), "good evening.");
    }

    #[test]
    fn test_format_date_short() {
        assert_eq!(format_date_short(d(2026, 1, 20)), "jan 20");
        assert_eq!(format_date_short(d(2026, 12, 3)), "dec 3");
    }

    #[test]
    fn test_balance_bar_bounds() {
        assert_eq!(balance_bar(0.0, 4), "▱▱▱▱");
        assert_eq!(balance_bar(100.0, 4), "▰▰▰▰");
        assert_eq!(balance_bar(50.0, 4), "▰▰▱▱");
        assert_eq!(balance_bar(250.0, 4), "▰▰▰▰");
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let r = centered_rect(100, 100, area);
        assert!(r.width <= 40);
        assert!(r.height <= 10);
        let r = centered_rect(20, 6, area);
        assert_eq!(r.x, 10);
        assert_eq!(r.y, 2);
    }

    // ── key-handling tests ────────────────────────────────────────────────

    #[test]
    fn test_quit_keys() {
        let fx = Fixtures::new();
        let mut app = fx.app();
        assert!(key(&mut app, KeyCode::Char('q')));
        let mut app = fx.app();
        assert!(app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_week_strip_navigation() {
        let fx = Fixtures::new();
        let mut app = fx.app();
        key(&mut app, KeyCode::Right);
        assert_eq!(app.selected_day, d(2026, 1, 18));
        key(&mut app, KeyCode::Up);
        assert_eq!(app.selected_day, d(2026, 1, 11));
        key(&mut app, KeyCode::Down);
        key(&mut app, KeyCode::Left);
        assert_eq!(app.selected_day, d(2026, 1, 17));
    }

    #[test]
    fn test_open_modal_starts_fresh_wizard() {
        let fx = Fixtures::new();
        let mut app = fx.app();
        key(&mut app, KeyCode::Char('n'));
        let w = app.wizard.as_ref().unwrap();
        assert_eq!(w.step, WizardStep::ChoosingType);
        assert_eq!(w.leave_type_id, "casual");
        // Cursor starts on the preselected type.
        assert_eq!(app.leave_types.types[app.type_cursor].id, "casual");
    }

    #[test]
    fn test_choose_type_via_keys() {
        let fx = Fixtures::new();
        let mut app = fx.app();
        key(&mut app, KeyCode::Char('n'));
        key(&mut app, KeyCode::Up); // casual -> sick
        key(&mut app, KeyCode::Enter);
        let w = app.wizard.as_ref().unwrap();
        assert_eq!(w.leave_type_id, "sick");
        assert_eq!(w.step, WizardStep::ChoosingDates);
    }

    #[test]
    fn test_type_cursor_stays_in_bounds() {
        let fx = Fixtures::new();
        let mut app = fx.app();
        key(&mut app, KeyCode::Char('n'));
        for _ in 0..10 {
            key(&mut app, KeyCode::Down);
        }
        assert_eq!(app.type_cursor, fx.leave_types.types.len() - 1);
        for _ in 0..10 {
            key(&mut app, KeyCode::Up);
        }
        assert_eq!(app.type_cursor, 0);
    }

    #[test]
    fn test_select_range_and_submit() {
        let fx = Fixtures::new();
        let mut app = fx.app();
        key(&mut app, KeyCode::Char('n'));
        key(&mut app, KeyCode::Enter); // choose casual
        // Cursor sits on today; pick Mon 19 – Fri 23.
        key(&mut app, KeyCode::Right);
        key(&mut app, KeyCode::Right);
        key(&mut app, KeyCode::Enter); // start = jan 19
        for _ in 0..4 {
            key(&mut app, KeyCode::Right);
        }
        key(&mut app, KeyCode::Enter); // end = jan 23
        {
            let w = app.wizard.as_ref().unwrap();
            assert_eq!(w.range.start, Some(d(2026, 1, 19)));
            assert_eq!(w.range.end, Some(d(2026, 1, 23)));
        }
        key(&mut app, KeyCode::Char('c')); // continue
        assert_eq!(app.wizard.as_ref().unwrap().step, WizardStep::AddingNote);
        for ch in "offsite".chars() {
            key(&mut app, KeyCode::Char(ch));
        }
        key(&mut app, KeyCode::Enter); // submit

        assert!(app.wizard.is_none());
        assert_eq!(app.submitted.len(), 1);
        let req = &app.submitted[0];
        assert_eq!(req.leave_type_id, "casual");
        assert_eq!(req.start, d(2026, 1, 19));
        assert_eq!(req.end, d(2026, 1, 23));
        assert_eq!(req.note, "offsite");
        assert_eq!(req.days, 5);
    }

    #[test]
    fn test_click_on_disabled_date_ignored() {
        let fx = Fixtures::new();
        let mut app = fx.app();
        key(&mut app, KeyCode::Char('n'));
        key(&mut app, KeyCode::Enter); // casual, no past dates
        key(&mut app, KeyCode::Left); // jan 16, in the past
        key(&mut app, KeyCode::Enter);
        assert!(app.wizard.as_ref().unwrap().range.is_empty());
    }

    #[test]
    fn test_continue_blocked_over_balance() {
        let fx = Fixtures::new();
        let mut app = fx.app();
        key(&mut app, KeyCode::Char('n'));
        key(&mut app, KeyCode::Enter); // casual: 7 available
        key(&mut app, KeyCode::Enter); // start = today
        key(&mut app, KeyCode::Down); // +7
        key(&mut app, KeyCode::Right);
        key(&mut app, KeyCode::Right); // +9 total
        key(&mut app, KeyCode::Enter); // 10-day range
        assert_eq!(app.wizard.as_ref().unwrap().selected_days(), 10);
        key(&mut app, KeyCode::Char('c'));
        assert_eq!(
            app.wizard.as_ref().unwrap().step,
            WizardStep::ChoosingDates
        );
    }

    #[test]
    fn test_esc_closes_from_any_step() {
        let fx = Fixtures::new();
        let mut app = fx.app();
        key(&mut app, KeyCode::Char('n'));
        key(&mut app, KeyCode::Enter);
        key(&mut app, KeyCode::Enter); // one date picked
        key(&mut app, KeyCode::Esc);
        assert!(app.wizard.is_none());
        assert!(app.submitted.is_empty());

        // Reopening starts clean.
        key(&mut app, KeyCode::Char('n'));
        let w = app.wizard.as_ref().unwrap();
        assert_eq!(w.step, WizardStep::ChoosingType);
        assert!(w.range.is_empty());
    }

    #[test]
    fn test_back_key_from_note_step() {
        let fx = Fixtures::new();
        let mut app = fx.app();
        key(&mut app, KeyCode::Char('n'));
        key(&mut app, KeyCode::Enter);
        key(&mut app, KeyCode::Enter); // 1-day range
        key(&mut app, KeyCode::Char('c'));
        key(&mut app, KeyCode::Left); // back to dates
        assert_eq!(
            app.wizard.as_ref().unwrap().step,
            WizardStep::ChoosingDates
        );
        key(&mut app, KeyCode::Char('b')); // back to type
        assert_eq!(app.wizard.as_ref().unwrap().step, WizardStep::ChoosingType);
        // Selection survives going back.
        assert_eq!(app.wizard.as_ref().unwrap().range.day_count(), 1);
    }

    #[test]
    fn test_note_editing_keys() {
        let fx = Fixtures::new();
        let mut app = fx.app();
        key(&mut app, KeyCode::Char('n'));
        key(&mut app, KeyCode::Enter);
        key(&mut app, KeyCode::Enter);
        key(&mut app, KeyCode::Char('c'));
        key(&mut app, KeyCode::Char('h'));
        key(&mut app, KeyCode::Char('i'));
        key(&mut app, KeyCode::Backspace);
        assert_eq!(app.wizard.as_ref().unwrap().note, "h");
    }

    #[test]
    fn test_month_paging_keys() {
        let fx = Fixtures::new();
        let mut app = fx.app();
        app.layout = LayoutMode::Desktop;
        key(&mut app, KeyCode::Char('n'));
        key(&mut app, KeyCode::Enter);
        key(&mut app, KeyCode::Char(']'));
        assert_eq!(app.month_offset, 1);
        key(&mut app, KeyCode::Char('['));
        key(&mut app, KeyCode::Char('['));
        assert_eq!(app.month_offset, -1);
    }

    #[test]
    fn test_week_paging_keys_in_mobile_layout() {
        let fx = Fixtures::new();
        let mut app = fx.app();
        app.layout = LayoutMode::Mobile;
        key(&mut app, KeyCode::Char('n'));
        key(&mut app, KeyCode::Enter);
        key(&mut app, KeyCode::Char(']'));
        assert_eq!(app.week_offset, 1);
        assert_eq!(app.month_offset, 0);
    }

    #[test]
    fn test_cursor_move_pages_month_window() {
        let fx = Fixtures::new();
        let mut app = fx.app();
        app.layout = LayoutMode::Desktop;
        key(&mut app, KeyCode::Char('n'));
        key(&mut app, KeyCode::Enter);
        // Jan 17 + 3 weeks = Feb 7 — the grid must follow the cursor.
        for _ in 0..3 {
            key(&mut app, KeyCode::Down);
        }
        assert_eq!(app.cursor_date, d(2026, 2, 7));
        assert_eq!(app.month_offset, 1);
    }

    #[test]
    fn test_cursor_move_pages_week_window() {
        let fx = Fixtures::new();
        let mut app = fx.app();
        app.layout = LayoutMode::Mobile;
        key(&mut app, KeyCode::Char('n'));
        key(&mut app, KeyCode::Enter);
        // The 28-day window starts jan 11; moving left past it pages back.
        for _ in 0..7 {
            key(&mut app, KeyCode::Left);
        }
        assert_eq!(app.cursor_date, d(2026, 1, 10));
        assert_eq!(app.week_offset, -1);
    }
}
