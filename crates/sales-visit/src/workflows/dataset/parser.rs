use super::normalizer::{parse_interest_level, parse_role};
use crate::workflows::visits::domain::{
    Customer, CustomerId, GeoPoint, ReportId, User, UserId, UserRef, VisitReport,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::warn;

pub(crate) fn parse_users<R: Read>(reader: R) -> Result<Vec<User>, csv::Error> {
    parse_rows(reader, "users", |row: UserRow| {
        let role = parse_role(&row.role).ok_or_else(|| format!("unknown role '{}'", row.role))?;
        Ok(User {
            id: UserId(row.id),
            name: row.name,
            role,
        })
    })
}

pub(crate) fn parse_customers<R: Read>(reader: R) -> Result<Vec<Customer>, csv::Error> {
    parse_rows(reader, "customers", |row: CustomerRow| {
        let registration_date = parse_timestamp(&row.registration_date).ok_or_else(|| {
            format!("unreadable registration date '{}'", row.registration_date)
        })?;
        let registered_by = row.registered_by_id.map(|id| UserRef {
            id: UserId(id),
            name: row.registered_by_name.unwrap_or_default(),
        });

        Ok(Customer {
            id: CustomerId(row.id),
            customer_name: row.customer_name,
            business_name: row.business_name,
            phone_number: row.phone_number,
            address: row.address,
            notes: row.notes,
            email: row.email,
            registered_by,
            registration_date,
        })
    })
}

pub(crate) fn parse_reports<R: Read>(reader: R) -> Result<Vec<VisitReport>, csv::Error> {
    parse_rows(reader, "reports", |row: ReportRow| {
        let timestamp = parse_timestamp(&row.timestamp)
            .ok_or_else(|| format!("unreadable timestamp '{}'", row.timestamp))?;
        let interest_level = parse_interest_level(&row.interest_level)
            .ok_or_else(|| format!("unknown interest level '{}'", row.interest_level))?;

        Ok(VisitReport {
            id: ReportId(row.id),
            timestamp,
            customer_name: row.customer_name,
            phone_number: row.phone_number,
            interest_level,
            location: GeoPoint {
                latitude: row.latitude,
                longitude: row.longitude,
            },
            notes: row.notes,
            sales_person: UserRef {
                id: UserId(row.sales_person_id),
                name: row.sales_person_name,
            },
        })
    })
}

/// Deserializes every row and converts it. Rows that fail to deserialize or
/// convert are logged and skipped; reader-level failures abort.
fn parse_rows<R, Row, T, F>(reader: R, dataset: &'static str, convert: F) -> Result<Vec<T>, csv::Error>
where
    R: Read,
    Row: DeserializeOwned,
    F: Fn(Row) -> Result<T, String>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, result) in csv_reader.deserialize::<Row>().enumerate() {
        // Header is line 1.
        let line = index + 2;
        let row = match result {
            Ok(row) => row,
            Err(err) if is_row_error(&err) => {
                warn!(dataset, line, error = %err, "skipping malformed row");
                continue;
            }
            Err(err) => return Err(err),
        };

        match convert(row) {
            Ok(record) => records.push(record),
            Err(reason) => warn!(dataset, line, %reason, "skipping row"),
        }
    }

    Ok(records)
}

fn is_row_error(err: &csv::Error) -> bool {
    matches!(
        err.kind(),
        csv::ErrorKind::Deserialize { .. }
            | csv::ErrorKind::UnequalLengths { .. }
            | csv::ErrorKind::Utf8 { .. }
    )
}

#[derive(Debug, Deserialize)]
struct UserRow {
    id: String,
    name: String,
    role: String,
}

#[derive(Debug, Deserialize)]
struct CustomerRow {
    id: String,
    customer_name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    business_name: Option<String>,
    phone_number: String,
    address: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    notes: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    email: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    registered_by_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    registered_by_name: Option<String>,
    registration_date: String,
}

#[derive(Debug, Deserialize)]
struct ReportRow {
    id: String,
    timestamp: String,
    customer_name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    phone_number: Option<String>,
    interest_level: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    notes: String,
    sales_person_id: String,
    sales_person_name: String,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// RFC 3339, `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS` (read as UTC) or
/// a bare date (UTC midnight).
pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
