use super::window::TimeWindow;
use chrono::{DateTime, NaiveDate, TimeZone};

/// `01 Mar 2024`.
pub const PERIOD_DATE_FORMAT: &str = "%d %b %Y";

pub fn format_period_date(day: NaiveDate) -> String {
    day.format(PERIOD_DATE_FORMAT).to_string()
}

/// Human readable label for the recap heading.
pub fn describe_period<Tz: TimeZone>(window: TimeWindow, now: &DateTime<Tz>) -> String {
    let today = now.date_naive();
    let first_day = window.first_day(today);

    match (window, first_day) {
        (TimeWindow::Daily, _) => format!("Today: {}", format_period_date(today)),
        (TimeWindow::Weekly, Some(monday)) => format!(
            "This Week: {} - {}",
            format_period_date(monday),
            format_period_date(today)
        ),
        (TimeWindow::Monthly, Some(first)) => format!(
            "This Month: {} - {}",
            format_period_date(first),
            format_period_date(today)
        ),
        _ => "All Time".to_string(),
    }
}
