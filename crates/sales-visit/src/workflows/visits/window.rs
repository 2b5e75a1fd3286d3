use super::domain::{SalesSelection, Visibility, VisitReport};
use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Reporting period relative to "now". Every window is open-ended: reports
/// dated after `now` still pass once they clear the lower bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    #[default]
    All,
    Daily,
    Weekly,
    Monthly,
}

impl TimeWindow {
    pub const fn ordered() -> [Self; 4] {
        [Self::All, Self::Daily, Self::Weekly, Self::Monthly]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// First calendar day covered by the window, in `today`'s calendar.
    pub fn first_day(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::All => None,
            Self::Daily => Some(today),
            Self::Weekly => Some(week_start(today)),
            Self::Monthly => Some(month_start(today)),
        }
    }

    /// Inclusive lower bound: midnight of [`TimeWindow::first_day`] in `now`'s zone.
    pub fn lower_bound<Tz: TimeZone>(self, now: &DateTime<Tz>) -> Option<DateTime<Utc>> {
        self.first_day(now.date_naive())
            .map(|day| local_midnight(&now.timezone(), day).with_timezone(&Utc))
    }
}

impl FromStr for TimeWindow {
    type Err = WindowParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|window| window.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| WindowParseError(raw.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown time window '{0}' (expected all, daily, weekly or monthly)")]
pub struct WindowParseError(pub String);

/// Monday of the week containing `day`. Sunday closes the week, so it maps
/// six days back rather than one day forward.
pub fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
}

pub fn month_start(day: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(day.year(), day.month(), 1).unwrap_or(day)
}

fn local_midnight<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> DateTime<Tz> {
    let midnight = day.and_time(NaiveTime::default());
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // Midnight skipped by a DST jump; read the wall clock as UTC.
        LocalResult::None => tz.from_utc_datetime(&midnight),
    }
}

/// Reports whose timestamp falls inside `window` relative to `now`.
pub fn within_window<Tz: TimeZone>(
    reports: &[VisitReport],
    window: TimeWindow,
    now: &DateTime<Tz>,
) -> Vec<VisitReport> {
    match window.lower_bound(now) {
        None => reports.to_vec(),
        Some(start) => reports
            .iter()
            .filter(|report| report.timestamp >= start)
            .cloned()
            .collect(),
    }
}

/// Salesperson narrowing. Only team visibility may narrow; a sales viewer's
/// selection is ignored.
pub fn for_salesperson(
    reports: Vec<VisitReport>,
    visibility: Visibility,
    selection: &SalesSelection,
) -> Vec<VisitReport> {
    match (visibility, selection) {
        (Visibility::Team, SalesSelection::Only(id)) => reports
            .into_iter()
            .filter(|report| &report.sales_person.id == id)
            .collect(),
        _ => reports,
    }
}

/// Time window first, then salesperson.
pub fn filter_reports<Tz: TimeZone>(
    reports: &[VisitReport],
    window: TimeWindow,
    now: &DateTime<Tz>,
    visibility: Visibility,
    selection: &SalesSelection,
) -> Vec<VisitReport> {
    for_salesperson(within_window(reports, window, now), visibility, selection)
}
