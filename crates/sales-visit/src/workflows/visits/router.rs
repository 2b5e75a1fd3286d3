use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, FixedOffset, Local};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CustomerId, SalesSelection, UserId};
use super::recap::RecapQuery;
use super::service::{ReportingError, VisitReportingService};
use super::source::VisitDataSource;
use super::views::CUSTOMER_NOT_FOUND_MESSAGE;
use super::window::TimeWindow;

#[derive(Debug, Deserialize)]
pub struct RecapRequest {
    pub viewer_id: UserId,
    #[serde(default)]
    pub window: Option<String>,
    #[serde(default)]
    pub sales_person_id: Option<String>,
    #[serde(default)]
    pub now: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Deserialize)]
pub struct ViewerParams {
    pub viewer_id: UserId,
}

/// Router builder exposing the recap and lead endpoints.
pub fn visit_router<S>(service: Arc<VisitReportingService<S>>) -> Router
where
    S: VisitDataSource + 'static,
{
    Router::new()
        .route("/api/v1/visits/recap", post(recap_handler::<S>))
        .route("/api/v1/visits/sales-users", get(sales_users_handler::<S>))
        .route("/api/v1/leads", get(leads_handler::<S>))
        .route("/api/v1/leads/:customer_id", get(lead_detail_handler::<S>))
        .route(
            "/api/v1/leads/:customer_id/contact-card",
            get(contact_card_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn recap_handler<S>(
    State(service): State<Arc<VisitReportingService<S>>>,
    payload: Result<axum::Json<RecapRequest>, JsonRejection>,
) -> Response
where
    S: VisitDataSource + 'static,
{
    let axum::Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => return error_response(rejection.status(), rejection.body_text()),
    };

    let window = match request.window.as_deref() {
        None => TimeWindow::All,
        Some(raw) => match raw.parse::<TimeWindow>() {
            Ok(window) => window,
            Err(error) => return error_response(StatusCode::BAD_REQUEST, error.to_string()),
        },
    };

    let query = RecapQuery {
        window,
        selection: SalesSelection::from_param(request.sales_person_id.as_deref()),
    };
    let now = request
        .now
        .unwrap_or_else(|| Local::now().fixed_offset());

    match service.recap(&request.viewer_id, &query, &now) {
        Ok(recap) => (StatusCode::OK, axum::Json(recap)).into_response(),
        Err(error) => reporting_error_response(error),
    }
}

pub(crate) async fn sales_users_handler<S>(
    State(service): State<Arc<VisitReportingService<S>>>,
    Query(params): Query<ViewerParams>,
) -> Response
where
    S: VisitDataSource + 'static,
{
    match service.sales_users(&params.viewer_id) {
        Ok(users) => (StatusCode::OK, axum::Json(users)).into_response(),
        Err(error) => reporting_error_response(error),
    }
}

pub(crate) async fn leads_handler<S>(
    State(service): State<Arc<VisitReportingService<S>>>,
    Query(params): Query<ViewerParams>,
) -> Response
where
    S: VisitDataSource + 'static,
{
    match service.customer_cards(&params.viewer_id) {
        Ok(cards) => (StatusCode::OK, axum::Json(cards)).into_response(),
        Err(error) => reporting_error_response(error),
    }
}

pub(crate) async fn lead_detail_handler<S>(
    State(service): State<Arc<VisitReportingService<S>>>,
    Path(customer_id): Path<String>,
) -> Response
where
    S: VisitDataSource + 'static,
{
    let id = CustomerId(customer_id);
    match service.lead_detail(&id, &Local) {
        Some(detail) => (StatusCode::OK, axum::Json(detail)).into_response(),
        None => customer_not_found(&id),
    }
}

pub(crate) async fn contact_card_handler<S>(
    State(service): State<Arc<VisitReportingService<S>>>,
    Path(customer_id): Path<String>,
) -> Response
where
    S: VisitDataSource + 'static,
{
    let id = CustomerId(customer_id);
    match service.contact_card(&id) {
        Some(card) => (StatusCode::OK, axum::Json(card)).into_response(),
        None => customer_not_found(&id),
    }
}

fn reporting_error_response(error: ReportingError) -> Response {
    let status = match error {
        ReportingError::UnknownViewer(_) => StatusCode::NOT_FOUND,
        ReportingError::TeamOnly(_) => StatusCode::FORBIDDEN,
        ReportingError::Source(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, error.to_string())
}

fn customer_not_found(id: &CustomerId) -> Response {
    let payload = json!({
        "customer_id": id.0,
        "error": CUSTOMER_NOT_FOUND_MESSAGE.to_lowercase(),
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn error_response(status: StatusCode, message: String) -> Response {
    let payload = json!({ "error": message });
    (status, axum::Json(payload)).into_response()
}
