use super::contact::map_link;
use super::domain::{Customer, CustomerId, GeoPoint, ReportId, UserRef, VisitReport};
use super::history::LeadHistory;
use super::summary::NOT_AVAILABLE;
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use std::fmt::Display;

pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
pub const DATE_FORMAT: &str = "%d/%m/%Y";
/// Placeholder for empty optional cells in tables.
pub const EMPTY_CELL: &str = "-";

pub const NO_REPORTS_MESSAGE: &str = "No visit reports match this filter.";
pub const NO_CUSTOMERS_MESSAGE: &str = "No customers to display.";
pub const NO_HISTORY_MESSAGE: &str = "No visit history for this customer yet.";
pub const CUSTOMER_NOT_FOUND_MESSAGE: &str = "Customer not found";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub report_id: ReportId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_person: Option<String>,
    pub visited_at: String,
    pub customer_name: String,
    pub interest_level: &'static str,
    pub phone_number: String,
    pub location: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerCard {
    pub customer_id: CustomerId,
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    pub phone_number: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntryView {
    pub report_id: ReportId,
    pub visited_by: String,
    pub visited_at: String,
    pub interest_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadDetailView {
    pub customer_id: CustomerId,
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_link: Option<String>,
    pub registration_note: String,
    pub history: Vec<HistoryEntryView>,
}

pub fn format_timestamp<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp
        .with_timezone(tz)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

pub fn format_location(location: &GeoPoint) -> String {
    format!("{:.5}, {:.5}", location.latitude, location.longitude)
}

pub fn report_rows<Tz>(reports: &[VisitReport], show_sales_column: bool, tz: &Tz) -> Vec<ReportRow>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    reports
        .iter()
        .map(|report| ReportRow {
            report_id: report.id.clone(),
            sales_person: show_sales_column.then(|| report.sales_person.name.clone()),
            visited_at: format_timestamp(&report.timestamp, tz),
            customer_name: report.customer_name.clone(),
            interest_level: report.interest_level.label(),
            phone_number: cell(report.phone_number.as_deref()),
            location: format_location(&report.location),
            notes: cell(Some(report.notes.as_str())),
        })
        .collect()
}

pub fn customer_cards(customers: &[Customer], show_sales_column: bool) -> Vec<CustomerCard> {
    customers
        .iter()
        .map(|customer| CustomerCard {
            customer_id: customer.id.clone(),
            customer_name: customer.customer_name.clone(),
            business_name: non_blank(customer.business_name.as_deref()),
            phone_number: customer.phone_number.clone(),
            address: customer.address.clone(),
            map_link: map_link(customer).map(str::to_string),
            registered_by: show_sales_column.then(|| registrar_name(customer.registered_by.as_ref())),
        })
        .collect()
}

/// `None` when the history lookup missed.
pub fn lead_detail<Tz>(lead: &LeadHistory, tz: &Tz) -> Option<LeadDetailView>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let customer = lead.customer.as_ref()?;

    let registration_note = format!(
        "Registered by {} on {}",
        registrar_name(customer.registered_by.as_ref()),
        customer
            .registration_date
            .with_timezone(tz)
            .format(DATE_FORMAT)
    );

    let history = lead
        .history
        .iter()
        .map(|visit| HistoryEntryView {
            report_id: visit.id.clone(),
            visited_by: visit.sales_person.name.clone(),
            visited_at: format_timestamp(&visit.timestamp, tz),
            interest_level: visit.interest_level.label(),
            notes: non_blank(Some(visit.notes.as_str())),
        })
        .collect();

    Some(LeadDetailView {
        customer_id: customer.id.clone(),
        customer_name: customer.customer_name.clone(),
        business_name: non_blank(customer.business_name.as_deref()),
        phone_number: customer.phone_number.clone(),
        email: non_blank(customer.email.as_deref()),
        address: customer.address.clone(),
        map_link: map_link(customer).map(str::to_string),
        registration_note,
        history,
    })
}

fn registrar_name(registered_by: Option<&UserRef>) -> String {
    registered_by
        .map(|user| user.name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn cell(value: Option<&str>) -> String {
    non_blank(value).unwrap_or_else(|| EMPTY_CELL.to_string())
}
