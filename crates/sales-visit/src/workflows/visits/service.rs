use std::fmt::Display;
use std::sync::Arc;

use chrono::{DateTime, TimeZone};
use tracing::{debug, error};

use super::contact::{copy_contact_info, Clipboard, ContactCardView, CopyOutcome};
use super::domain::{CustomerId, User, UserId};
use super::history::{find_history, LeadHistory};
use super::recap::{build_recap, Recap, RecapQuery};
use super::source::{
    load_customers_or_empty, load_or_empty, load_reports_or_empty, SourceError, VisitDataSource,
};
use super::views::{customer_cards, lead_detail, CustomerCard, LeadDetailView};

/// Wires the pure reporting functions to a data source. Every call takes a
/// fresh snapshot; nothing is cached between calls.
pub struct VisitReportingService<S> {
    source: Arc<S>,
}

impl<S> VisitReportingService<S>
where
    S: VisitDataSource + 'static,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// A users load failure is an error of its own, not an unknown viewer.
    pub fn viewer(&self, viewer_id: &UserId) -> Result<User, ReportingError> {
        let users = self.source.users().map_err(|err| {
            error!(error = %err, "failed to load users");
            err
        })?;
        users
            .into_iter()
            .find(|user| &user.id == viewer_id)
            .ok_or_else(|| ReportingError::UnknownViewer(viewer_id.clone()))
    }

    /// Sales users for the admin's salesperson picker. Only team viewers may
    /// list them.
    pub fn sales_users(&self, viewer_id: &UserId) -> Result<Vec<User>, ReportingError> {
        let viewer = self.viewer(viewer_id)?;
        if !viewer.visibility().is_team() {
            return Err(ReportingError::TeamOnly(viewer.id));
        }
        Ok(load_or_empty("sales users", self.source.sales_users()))
    }

    pub fn recap<Tz>(
        &self,
        viewer_id: &UserId,
        query: &RecapQuery,
        now: &DateTime<Tz>,
    ) -> Result<Recap, ReportingError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let viewer = self.viewer(viewer_id)?;
        let reports = load_reports_or_empty(self.source.as_ref(), &viewer);
        debug!(
            viewer = %viewer.id,
            window = query.window.as_str(),
            loaded = reports.len(),
            "building visit recap"
        );
        Ok(build_recap(&reports, query, viewer.visibility(), now))
    }

    pub fn customer_cards(&self, viewer_id: &UserId) -> Result<Vec<CustomerCard>, ReportingError> {
        let viewer = self.viewer(viewer_id)?;
        let customers = load_customers_or_empty(self.source.as_ref(), &viewer);
        Ok(customer_cards(&customers, viewer.visibility().is_team()))
    }

    /// Customer plus visit history, over every customer and every report.
    pub fn lead_history(&self, customer_id: &CustomerId) -> LeadHistory {
        let customers = load_or_empty("customers", self.source.customers());
        if !customers.iter().any(|customer| &customer.id == customer_id) {
            return LeadHistory::default();
        }
        let reports = load_or_empty("visit reports", self.source.all_reports());
        find_history(&customers, &reports, customer_id)
    }

    pub fn lead_detail<Tz>(&self, customer_id: &CustomerId, tz: &Tz) -> Option<LeadDetailView>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        lead_detail(&self.lead_history(customer_id), tz)
    }

    pub fn contact_card(&self, customer_id: &CustomerId) -> Option<ContactCardView> {
        load_or_empty("customers", self.source.customers())
            .iter()
            .find(|customer| &customer.id == customer_id)
            .map(ContactCardView::for_customer)
    }

    /// `None` when the customer does not exist.
    pub fn copy_contact_info<C>(&self, clipboard: &C, customer_id: &CustomerId) -> Option<CopyOutcome>
    where
        C: Clipboard + ?Sized,
    {
        load_or_empty("customers", self.source.customers())
            .iter()
            .find(|customer| &customer.id == customer_id)
            .map(|customer| copy_contact_info(clipboard, customer))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportingError {
    #[error("viewer {0} not found")]
    UnknownViewer(UserId),
    #[error("viewer {0} cannot list the sales team")]
    TeamOnly(UserId),
    #[error(transparent)]
    Source(#[from] SourceError),
}
