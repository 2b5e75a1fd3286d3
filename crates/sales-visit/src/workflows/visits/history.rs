use super::domain::{Customer, CustomerId, VisitReport};
use serde::Serialize;

/// A customer joined to the visit reports filed under their name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeadHistory {
    pub customer: Option<Customer>,
    pub history: Vec<VisitReport>,
}

impl LeadHistory {
    pub fn is_found(&self) -> bool {
        self.customer.is_some()
    }
}

/// Looks up the first customer with `customer_id` and collects every report
/// whose customer name matches theirs, ignoring case, in input order.
///
/// The join is by name, not id: two customers sharing a name share a
/// history, and a misspelled report name never shows up here.
pub fn find_history(
    customers: &[Customer],
    reports: &[VisitReport],
    customer_id: &CustomerId,
) -> LeadHistory {
    let Some(customer) = customers.iter().find(|customer| &customer.id == customer_id) else {
        return LeadHistory::default();
    };

    let key = customer.customer_name.to_lowercase();
    let history = reports
        .iter()
        .filter(|report| report.customer_name.to_lowercase() == key)
        .cloned()
        .collect();

    LeadHistory {
        customer: Some(customer.clone()),
        history,
    }
}
