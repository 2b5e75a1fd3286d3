use super::domain::{Customer, CustomerId};
use serde::Serialize;
use tracing::warn;

/// Alert shown to the user when the contact card could not be copied.
pub const COPY_FAILED_ALERT: &str =
    "Failed to copy contact info. Clipboard permission may be required.";

/// Destination for the "copy contact info" quick action.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard permission denied")]
    PermissionDenied,
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { customer_id: CustomerId },
    Failed { alert: &'static str },
}

/// Plain-text contact block for sharing a lead. Lines for absent or blank
/// optional fields are left out.
pub fn contact_card(customer: &Customer) -> String {
    let lines = [
        Some(format!("Customer Name: {}", customer.customer_name)),
        present(customer.business_name.as_deref()).map(|name| format!("Business Name: {name}")),
        Some(format!("Phone: {}", customer.phone_number)),
        Some(format!("Address: {}", customer.address)),
        present(customer.notes.as_deref()).map(|notes| format!("Map Location: {notes}")),
    ];

    lines
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Target of the "open map" action: the customer's notes, when set.
pub fn map_link(customer: &Customer) -> Option<&str> {
    present(customer.notes.as_deref())
}

/// Writes the contact card to `clipboard`. Failures are logged and turned
/// into an alert for the user; they never abort the caller.
pub fn copy_contact_info<C>(clipboard: &C, customer: &Customer) -> CopyOutcome
where
    C: Clipboard + ?Sized,
{
    match clipboard.write_text(&contact_card(customer)) {
        Ok(()) => CopyOutcome::Copied {
            customer_id: customer.id.clone(),
        },
        Err(err) => {
            warn!(customer_id = %customer.id, error = %err, "failed to copy contact info");
            CopyOutcome::Failed {
                alert: COPY_FAILED_ALERT,
            }
        }
    }
}

/// Serializable pair returned by the contact-card endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ContactCardView {
    pub customer_id: CustomerId,
    pub contact_card: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_link: Option<String>,
}

impl ContactCardView {
    pub fn for_customer(customer: &Customer) -> Self {
        Self {
            customer_id: customer.id.clone(),
            contact_card: contact_card(customer),
            map_link: map_link(customer).map(str::to_string),
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
