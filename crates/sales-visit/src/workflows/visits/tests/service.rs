use super::common::*;
use std::sync::Arc;

use crate::workflows::visits::contact::{CopyOutcome, COPY_FAILED_ALERT};
use crate::workflows::visits::domain::{CustomerId, SalesSelection, UserId};
use crate::workflows::visits::recap::RecapQuery;
use crate::workflows::visits::service::{ReportingError, VisitReportingService};
use crate::workflows::visits::source::VisitDataSource;
use crate::workflows::visits::summary::NOT_AVAILABLE;
use crate::workflows::visits::window::TimeWindow;

#[test]
fn load_failures_fall_back_to_an_empty_recap() {
    let service = VisitReportingService::new(Arc::new(FlakySource {
        users: vec![admin()],
    }));

    let recap = service
        .recap(
            &UserId("u-admin".to_string()),
            &RecapQuery::default(),
            &at(2024, 3, 15, 14, 0),
        )
        .expect("viewer exists");

    assert!(recap.is_empty());
    assert_eq!(recap.summary.count, 0);
    assert_eq!(recap.summary.top_interest_level, NOT_AVAILABLE);
    assert_eq!(recap.period_label, "All Time");
}

#[test]
fn load_failures_surface_as_not_found_leads() {
    let service = VisitReportingService::new(Arc::new(FlakySource { users: Vec::new() }));
    let lead = service.lead_history(&CustomerId("c-abc".to_string()));
    assert!(!lead.is_found());
}

#[test]
fn unknown_viewer_is_an_error() {
    let service = build_service();
    let error = service
        .recap(
            &UserId("u-ghost".to_string()),
            &RecapQuery::default(),
            &at(2024, 3, 15, 14, 0),
        )
        .expect_err("unknown viewer");
    assert!(matches!(error, ReportingError::UnknownViewer(ref id) if id.0 == "u-ghost"));
}

#[test]
fn recap_rows_render_in_the_zone_of_now() {
    let service = build_service();
    let query = RecapQuery {
        window: TimeWindow::Daily,
        selection: SalesSelection::All,
    };
    let recap = service
        .recap(&UserId("u-admin".to_string()), &query, &at(2024, 3, 15, 14, 0))
        .expect("recap");

    assert_eq!(recap.rows.len(), 2);
    let first = &recap.rows[0];
    assert_eq!(first.visited_at, "15/03/2024 00:00:00");
    assert_eq!(first.location, "-6.20000, 106.81667");
    assert_eq!(first.phone_number, "-");
    assert_eq!(first.notes, "-");
}

#[test]
fn sales_users_exclude_admins() {
    let service = build_service();
    let names: Vec<_> = service
        .sales_users(&UserId("u-admin".to_string()))
        .expect("admin may list the team")
        .into_iter()
        .map(|user| user.name)
        .collect();
    assert_eq!(names, ["Sari", "Budi"]);
}

#[test]
fn sales_viewers_cannot_list_the_team() {
    let service = build_service();
    let error = service
        .sales_users(&UserId("u-sari".to_string()))
        .expect_err("sales viewer");
    assert!(matches!(error, ReportingError::TeamOnly(ref id) if id.0 == "u-sari"));
}

#[test]
fn users_load_failure_is_not_an_unknown_viewer() {
    let service = VisitReportingService::new(Arc::new(OfflineSource));
    let error = service
        .recap(
            &UserId("u-admin".to_string()),
            &RecapQuery::default(),
            &at(2024, 3, 15, 14, 0),
        )
        .expect_err("users unavailable");
    assert!(matches!(error, ReportingError::Source(_)));
}

#[test]
fn reports_for_scopes_sales_viewers() {
    let source = memory_source();
    let own = source.reports_for(&budi()).expect("reports");
    assert_eq!(ids(&own), ["r-mar-1", "r-thu", "r-future"]);
    assert_eq!(source.reports_for(&admin()).expect("reports").len(), 7);
}

#[test]
fn copy_contact_info_reports_missing_customers_and_failures() {
    let service = build_service();
    let clipboard = MemoryClipboard::default();

    assert!(service
        .copy_contact_info(&clipboard, &CustomerId("c-missing".to_string()))
        .is_none());
    assert_eq!(
        service.copy_contact_info(&clipboard, &CustomerId("c-abc".to_string())),
        Some(CopyOutcome::Copied {
            customer_id: CustomerId("c-abc".to_string())
        })
    );
    assert_eq!(
        service.copy_contact_info(&DeniedClipboard, &CustomerId("c-abc".to_string())),
        Some(CopyOutcome::Failed {
            alert: COPY_FAILED_ALERT
        })
    );
}
