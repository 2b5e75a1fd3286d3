use super::common::*;
use crate::workflows::visits::domain::{SalesSelection, UserId, Visibility};
use crate::workflows::visits::window::{filter_reports, within_window, TimeWindow};

fn now() -> chrono::DateTime<chrono::FixedOffset> {
    at(2024, 3, 15, 14, 0)
}

#[test]
fn all_window_is_identity() {
    let reports = march_reports();
    assert_eq!(within_window(&reports, TimeWindow::All, &now()), reports);
}

#[test]
fn every_window_returns_a_subset_in_input_order() {
    let reports = march_reports();
    for window in TimeWindow::ordered() {
        let filtered = within_window(&reports, window, &now());
        assert!(filtered.iter().all(|report| reports.contains(report)));

        let positions: Vec<_> = filtered
            .iter()
            .map(|report| {
                reports
                    .iter()
                    .position(|candidate| candidate == report)
                    .expect("present")
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn daily_window_starts_at_local_midnight() {
    let filtered = within_window(&march_reports(), TimeWindow::Daily, &now());
    assert_eq!(ids(&filtered), ["r-fri", "r-future"]);
}

#[test]
fn weekly_window_starts_on_monday() {
    let filtered = within_window(&march_reports(), TimeWindow::Weekly, &now());
    assert_eq!(ids(&filtered), ["r-mon", "r-thu", "r-fri", "r-future"]);
}

#[test]
fn weekly_window_on_sunday_covers_the_preceding_monday() {
    let sunday_night = at(2024, 3, 10, 23, 59);
    let filtered = within_window(&march_reports(), TimeWindow::Weekly, &sunday_night);
    assert_eq!(
        ids(&filtered),
        ["r-sun", "r-mon", "r-thu", "r-fri", "r-future"]
    );
}

#[test]
fn monthly_window_starts_on_the_first() {
    let filtered = within_window(&march_reports(), TimeWindow::Monthly, &now());
    assert_eq!(
        ids(&filtered),
        ["r-mar-1", "r-sun", "r-mon", "r-thu", "r-fri", "r-future"]
    );
}

#[test]
fn future_reports_are_not_cut_off() {
    let filtered = within_window(&march_reports(), TimeWindow::Daily, &now());
    assert!(ids(&filtered).contains(&"r-future"));
}

#[test]
fn team_visibility_narrows_to_the_selected_salesperson_after_the_window() {
    let selection = SalesSelection::Only(UserId("u-budi".to_string()));
    let filtered = filter_reports(
        &march_reports(),
        TimeWindow::Weekly,
        &now(),
        Visibility::Team,
        &selection,
    );
    assert_eq!(ids(&filtered), ["r-thu", "r-future"]);
}

#[test]
fn own_visibility_ignores_the_salesperson_selection() {
    let selection = SalesSelection::Only(UserId("u-budi".to_string()));
    let filtered = filter_reports(
        &march_reports(),
        TimeWindow::Weekly,
        &now(),
        Visibility::Own,
        &selection,
    );
    assert_eq!(filtered.len(), 4);
}

#[test]
fn filtering_leaves_the_input_untouched() {
    let reports = march_reports();
    let snapshot = reports.clone();
    let _ = filter_reports(
        &reports,
        TimeWindow::Daily,
        &now(),
        Visibility::Team,
        &SalesSelection::All,
    );
    assert_eq!(reports, snapshot);
}
