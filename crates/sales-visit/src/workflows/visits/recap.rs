use super::domain::{SalesSelection, Visibility, VisitReport};
use super::period::describe_period;
use super::summary::{summarize, VisitSummary};
use super::views::{report_rows, ReportRow};
use super::window::{filter_reports, TimeWindow};
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecapQuery {
    pub window: TimeWindow,
    pub selection: SalesSelection,
}

/// Everything the recap page (and its printout) shows.
#[derive(Debug, Clone, Serialize)]
pub struct Recap {
    pub window: TimeWindow,
    pub period_label: String,
    pub summary: VisitSummary,
    pub show_sales_column: bool,
    pub rows: Vec<ReportRow>,
}

impl Recap {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Filters, summarizes and projects `reports`. Timestamps in the rows are
/// rendered in `now`'s zone.
pub fn build_recap<Tz>(
    reports: &[VisitReport],
    query: &RecapQuery,
    visibility: Visibility,
    now: &DateTime<Tz>,
) -> Recap
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let filtered = filter_reports(reports, query.window, now, visibility, &query.selection);
    let show_sales_column = visibility.is_team();

    Recap {
        window: query.window,
        period_label: describe_period(query.window, now),
        summary: summarize(&filtered, show_sales_column),
        show_sales_column,
        rows: report_rows(&filtered, show_sales_column, &now.timezone()),
    }
}
