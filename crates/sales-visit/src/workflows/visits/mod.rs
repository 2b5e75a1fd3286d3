//! Visit report filtering, aggregation and lead history.

pub mod contact;
pub mod domain;
pub mod history;
pub mod period;
pub mod recap;
pub mod router;
pub mod service;
pub mod source;
pub mod summary;
pub mod views;
pub mod window;

#[cfg(test)]
mod tests;

pub use contact::{
    contact_card, copy_contact_info, map_link, Clipboard, ClipboardError, ContactCardView,
    CopyOutcome, COPY_FAILED_ALERT,
};
pub use domain::{
    Customer, CustomerId, GeoPoint, InterestLevel, ReportId, SalesSelection, User, UserId,
    UserRef, UserRole, Visibility, VisitReport,
};
pub use history::{find_history, LeadHistory};
pub use period::describe_period;
pub use recap::{build_recap, Recap, RecapQuery};
pub use router::visit_router;
pub use service::{ReportingError, VisitReportingService};
pub use source::{load_customers_or_empty, load_reports_or_empty, SourceError, VisitDataSource};
pub use summary::{summarize, VisitSummary, NOT_AVAILABLE};
pub use views::{CustomerCard, HistoryEntryView, LeadDetailView, ReportRow};
pub use window::{filter_reports, within_window, TimeWindow, WindowParseError};
