use chrono::{Datelike, Months, NaiveDate};

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn days_in_month(month: NaiveDate) -> u32 {
    let first = first_of_month(month);
    let next = first + Months::new(1);
    next.signed_duration_since(first).num_days() as u32
}

/// Cells for a month laid out in whole weeks starting Sunday: one leading
/// `None` per weekday index of the first day, then `Some(1..=days_in_month)`.
pub fn month_grid(month: NaiveDate) -> Vec<Option<u32>> {
    let first = first_of_month(month);
    let leading_blanks = first.weekday().num_days_from_sunday() as usize;
    let mut cells = vec![None; leading_blanks];
    cells.extend((1..=days_in_month(first)).map(Some));
    cells
}

/// A day is past when it falls strictly before today at local midnight.
pub fn is_past_day(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

pub fn month_label(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}

/// "Monday, January 5, 2026" — used on the confirmation page.
pub fn format_date_long(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "Monday, January 5" — used in booking lists and the time picker heading.
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

/// Transient calendar picks in the booking form. A time is only meaningful
/// paired with the date it was chosen under, so any date change resets it.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarSelection {
    displayed_month: NaiveDate,
    pub selected_date: Option<NaiveDate>,
    pub selected_time: Option<String>,
}

impl CalendarSelection {
    pub fn starting_at(today: NaiveDate) -> Self {
        Self {
            displayed_month: first_of_month(today),
            selected_date: None,
            selected_time: None,
        }
    }

    pub fn displayed_month(&self) -> NaiveDate {
        self.displayed_month
    }

    /// Month navigation never touches the selection, even when the selected
    /// day is no longer in view.
    pub fn prev_month(&mut self) {
        self.displayed_month = self.displayed_month - Months::new(1);
    }

    pub fn next_month(&mut self) {
        self.displayed_month = self.displayed_month + Months::new(1);
    }

    /// Picks a day of the displayed month. Past days are a no-op. A new date
    /// always resets a previously chosen time.
    pub fn select_day(&mut self, day: u32, today: NaiveDate) {
        let Some(date) = self.displayed_month.with_day(day) else {
            return;
        };
        if is_past_day(date, today) {
            return;
        }
        self.selected_date = Some(date);
        self.selected_time = None;
    }

    /// Only meaningful once a date has been picked.
    pub fn select_time(&mut self, time: impl Into<String>) {
        if self.selected_date.is_some() {
            self.selected_time = Some(time.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_length_is_blanks_plus_days() {
        for year in [2024, 2025, 2026] {
            for month in 1..=12 {
                let first = date(year, month, 1);
                let grid = month_grid(first);
                let blanks = grid.iter().take_while(|cell| cell.is_none()).count();
                assert!(blanks <= 6, "{year}-{month} has {blanks} leading blanks");
                assert_eq!(grid.len(), blanks + days_in_month(first) as usize);
                assert_eq!(grid[blanks], Some(1));
                assert_eq!(*grid.last().unwrap(), Some(days_in_month(first)));
            }
        }
    }

    #[test]
    fn grid_aligns_first_day_to_weekday() {
        // 2026-03-01 is a Sunday, 2026-05-01 is a Friday
        assert_eq!(month_grid(date(2026, 3, 1))[0], Some(1));
        let may = month_grid(date(2026, 5, 1));
        assert_eq!(&may[..5], &[None, None, None, None, None]);
        assert_eq!(may[5], Some(1));
    }

    #[test]
    fn february_leap_year() {
        assert_eq!(days_in_month(date(2024, 2, 1)), 29);
        assert_eq!(days_in_month(date(2025, 2, 1)), 28);
    }

    #[test]
    fn month_navigation_rolls_over_year_boundaries() {
        let mut sel = CalendarSelection::starting_at(date(2025, 12, 15));
        assert_eq!(sel.displayed_month(), date(2025, 12, 1));
        sel.next_month();
        assert_eq!(sel.displayed_month(), date(2026, 1, 1));
        sel.prev_month();
        sel.prev_month();
        assert_eq!(sel.displayed_month(), date(2025, 11, 1));
    }

    #[test]
    fn past_day_selection_is_a_noop() {
        let today = date(2026, 8, 25);
        let mut sel = CalendarSelection::starting_at(today);
        sel.select_day(10, today);
        assert_eq!(sel.selected_date, None);
        assert_eq!(sel.selected_time, None);
    }

    #[test]
    fn today_is_selectable() {
        let today = date(2026, 8, 25);
        let mut sel = CalendarSelection::starting_at(today);
        sel.select_day(25, today);
        assert_eq!(sel.selected_date, Some(today));
    }

    #[test]
    fn new_date_resets_chosen_time() {
        let today = date(2026, 8, 25);
        let mut sel = CalendarSelection::starting_at(today);
        sel.select_day(26, today);
        sel.select_time("10:30 AM");
        assert_eq!(sel.selected_time.as_deref(), Some("10:30 AM"));
        sel.select_day(27, today);
        assert_eq!(sel.selected_date, Some(date(2026, 8, 27)));
        assert_eq!(sel.selected_time, None);
    }

    #[test]
    fn time_without_date_is_ignored() {
        let mut sel = CalendarSelection::starting_at(date(2026, 8, 25));
        sel.select_time("09:00 AM");
        assert_eq!(sel.selected_time, None);
    }

    #[test]
    fn month_navigation_preserves_selection() {
        let today = date(2026, 8, 25);
        let mut sel = CalendarSelection::starting_at(today);
        sel.select_day(31, today);
        sel.select_time("03:00 PM");
        sel.next_month();
        sel.next_month();
        assert_eq!(sel.selected_date, Some(date(2026, 8, 31)));
        assert_eq!(sel.selected_time.as_deref(), Some("03:00 PM"));
    }

    #[test]
    fn day_outside_displayed_month_is_a_noop() {
        let today = date(2026, 2, 1);
        let mut sel = CalendarSelection::starting_at(today);
        sel.select_day(30, today);
        assert_eq!(sel.selected_date, None);
    }

    #[test]
    fn date_formats() {
        let d = date(2026, 1, 5);
        assert_eq!(format_date_long(d), "Monday, January 5, 2026");
        assert_eq!(format_date_short(d), "Monday, January 5");
        assert_eq!(month_label(d), "January 2026");
    }
}
