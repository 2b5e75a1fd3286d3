use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::visits::contact::{Clipboard, ClipboardError};
use crate::workflows::visits::domain::{
    Customer, CustomerId, GeoPoint, InterestLevel, ReportId, User, UserId, UserRef, UserRole,
    VisitReport,
};
use crate::workflows::visits::service::VisitReportingService;
use crate::workflows::visits::source::{SourceError, VisitDataSource};
use crate::workflows::visits::visit_router;

pub(super) fn jakarta() -> FixedOffset {
    FixedOffset::east_opt(7 * 3600).expect("valid offset")
}

/// Local wall-clock instant in UTC+7.
pub(super) fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
    jakarta()
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("valid local time")
}

pub(super) fn utc(local: DateTime<FixedOffset>) -> DateTime<Utc> {
    local.with_timezone(&Utc)
}

pub(super) fn user(id: &str, name: &str, role: UserRole) -> User {
    User {
        id: UserId(id.to_string()),
        name: name.to_string(),
        role,
    }
}

pub(super) fn sari() -> User {
    user("u-sari", "Sari", UserRole::Sales)
}

pub(super) fn budi() -> User {
    user("u-budi", "Budi", UserRole::Sales)
}

pub(super) fn admin() -> User {
    user("u-admin", "Dewi", UserRole::Admin)
}

pub(super) fn report(
    id: &str,
    when: DateTime<FixedOffset>,
    customer_name: &str,
    level: InterestLevel,
    sales: &User,
) -> VisitReport {
    VisitReport {
        id: ReportId(id.to_string()),
        timestamp: utc(when),
        customer_name: customer_name.to_string(),
        phone_number: None,
        interest_level: level,
        location: GeoPoint {
            latitude: -6.2,
            longitude: 106.816666,
        },
        notes: String::new(),
        sales_person: UserRef {
            id: sales.id.clone(),
            name: sales.name.clone(),
        },
    }
}

pub(super) fn customer(id: &str, name: &str, registered_by: Option<&User>) -> Customer {
    Customer {
        id: CustomerId(id.to_string()),
        customer_name: name.to_string(),
        business_name: None,
        phone_number: "0812-3456-7890".to_string(),
        address: "Jl. Merdeka 1, Bandung".to_string(),
        notes: None,
        email: None,
        registered_by: registered_by.map(|user| UserRef {
            id: user.id.clone(),
            name: user.name.clone(),
        }),
        registration_date: utc(at(2024, 1, 5, 10, 0)),
    }
}

/// Reports around "now" = Friday 2024-03-15 14:00 (UTC+7).
pub(super) fn march_reports() -> Vec<VisitReport> {
    vec![
        report("r-feb", at(2024, 2, 28, 9, 0), "Toko ABC", InterestLevel::Low, &sari()),
        report("r-mar-1", at(2024, 3, 1, 0, 0), "Toko ABC", InterestLevel::High, &budi()),
        report("r-sun", at(2024, 3, 10, 23, 59), "Warung Budi", InterestLevel::Medium, &sari()),
        report("r-mon", at(2024, 3, 11, 0, 0), "toko abc", InterestLevel::High, &sari()),
        report("r-thu", at(2024, 3, 14, 23, 59), "Warung Budi", InterestLevel::Medium, &budi()),
        report("r-fri", at(2024, 3, 15, 0, 0), "TOKO ABC", InterestLevel::Medium, &sari()),
        report("r-future", at(2024, 3, 20, 8, 0), "Toko ABC", InterestLevel::High, &budi()),
    ]
}

pub(super) fn ids(reports: &[VisitReport]) -> Vec<&str> {
    reports.iter().map(|report| report.id.0.as_str()).collect()
}

#[derive(Default)]
pub(super) struct MemorySource {
    pub(super) customers: Vec<Customer>,
    pub(super) reports: Vec<VisitReport>,
    pub(super) users: Vec<User>,
}

impl VisitDataSource for MemorySource {
    fn customers(&self) -> Result<Vec<Customer>, SourceError> {
        Ok(self.customers.clone())
    }

    fn all_reports(&self) -> Result<Vec<VisitReport>, SourceError> {
        Ok(self.reports.clone())
    }

    fn users(&self) -> Result<Vec<User>, SourceError> {
        Ok(self.users.clone())
    }
}

/// Users load, everything else fails.
pub(super) struct FlakySource {
    pub(super) users: Vec<User>,
}

impl VisitDataSource for FlakySource {
    fn customers(&self) -> Result<Vec<Customer>, SourceError> {
        Err(SourceError::Unavailable("customer store offline".to_string()))
    }

    fn all_reports(&self) -> Result<Vec<VisitReport>, SourceError> {
        Err(SourceError::Unavailable("report store offline".to_string()))
    }

    fn users(&self) -> Result<Vec<User>, SourceError> {
        Ok(self.users.clone())
    }
}

/// Nothing loads, not even users.
pub(super) struct OfflineSource;

impl VisitDataSource for OfflineSource {
    fn customers(&self) -> Result<Vec<Customer>, SourceError> {
        Err(SourceError::Unavailable("customer store offline".to_string()))
    }

    fn all_reports(&self) -> Result<Vec<VisitReport>, SourceError> {
        Err(SourceError::Unavailable("report store offline".to_string()))
    }

    fn users(&self) -> Result<Vec<User>, SourceError> {
        Err(SourceError::Unavailable("user store offline".to_string()))
    }
}

pub(super) fn memory_source() -> MemorySource {
    MemorySource {
        customers: vec![
            customer("c-abc", "Toko ABC", Some(&sari())),
            customer("c-budi", "Warung Budi", Some(&budi())),
            customer("c-new", "Apotek Sehat", None),
        ],
        reports: march_reports(),
        users: vec![sari(), budi(), admin()],
    }
}

pub(super) fn build_service() -> Arc<VisitReportingService<MemorySource>> {
    Arc::new(VisitReportingService::new(Arc::new(memory_source())))
}

pub(super) fn router() -> axum::Router {
    visit_router(build_service())
}

#[derive(Default)]
pub(super) struct MemoryClipboard {
    pub(super) contents: Mutex<Vec<String>>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.contents
            .lock()
            .expect("clipboard mutex poisoned")
            .push(text.to_string());
        Ok(())
    }
}

pub(super) struct DeniedClipboard;

impl Clipboard for DeniedClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::PermissionDenied)
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
