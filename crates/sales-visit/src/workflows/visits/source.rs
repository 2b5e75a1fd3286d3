use super::domain::{Customer, User, UserRole, Visibility, VisitReport};
use crate::workflows::dataset::DatasetImportError;
use tracing::error;

/// Read-only boundary the reporting core pulls its snapshots from.
pub trait VisitDataSource: Send + Sync {
    fn customers(&self) -> Result<Vec<Customer>, SourceError>;
    fn all_reports(&self) -> Result<Vec<VisitReport>, SourceError>;
    fn users(&self) -> Result<Vec<User>, SourceError>;

    fn sales_users(&self) -> Result<Vec<User>, SourceError> {
        Ok(self
            .users()?
            .into_iter()
            .filter(|user| user.role == UserRole::Sales)
            .collect())
    }

    /// Role-scoped reports: sales staff only get what they filed.
    fn reports_for(&self, user: &User) -> Result<Vec<VisitReport>, SourceError> {
        let reports = self.all_reports()?;
        Ok(match user.visibility() {
            Visibility::Team => reports,
            Visibility::Own => reports
                .into_iter()
                .filter(|report| report.sales_person.id == user.id)
                .collect(),
        })
    }

    /// Role-scoped leads: sales staff only get customers they registered.
    fn customers_for(&self, user: &User) -> Result<Vec<Customer>, SourceError> {
        let customers = self.customers()?;
        Ok(match user.visibility() {
            Visibility::Team => customers,
            Visibility::Own => customers
                .into_iter()
                .filter(|customer| {
                    customer
                        .registered_by
                        .as_ref()
                        .is_some_and(|registrar| registrar.id == user.id)
                })
                .collect(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("data source unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Dataset(#[from] DatasetImportError),
}

/// Falls back to an empty list when loading fails; the failure is logged.
pub fn load_or_empty<T>(what: &'static str, loaded: Result<Vec<T>, SourceError>) -> Vec<T> {
    loaded.unwrap_or_else(|err| {
        error!(error = %err, "failed to load {what}");
        Vec::new()
    })
}

pub fn load_reports_or_empty<S>(source: &S, user: &User) -> Vec<VisitReport>
where
    S: VisitDataSource + ?Sized,
{
    load_or_empty("visit reports", source.reports_for(user))
}

pub fn load_customers_or_empty<S>(source: &S, user: &User) -> Vec<Customer>
where
    S: VisitDataSource + ?Sized,
{
    load_or_empty("customers", source.customers_for(user))
}
