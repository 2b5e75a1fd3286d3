use sales_visit::workflows::visits::views::{
    NO_CUSTOMERS_MESSAGE, NO_HISTORY_MESSAGE, NO_REPORTS_MESSAGE,
};
use sales_visit::workflows::visits::{CustomerCard, LeadDetailView, Recap, User};

pub(crate) const NO_SALES_USERS_MESSAGE: &str = "No salespeople registered.";

/// Printable recap. The "print report" action is this text sent to the
/// host's printer.
pub(crate) fn render_recap(recap: &Recap) -> String {
    let mut lines = vec![
        "Visit Recap".to_string(),
        format!("Period: {}", recap.period_label),
        String::new(),
        format!("Total visits: {}", recap.summary.count),
    ];

    if recap.show_sales_column {
        lines.push(format!("Most active salesperson: {}", recap.summary.top_salesperson));
    }
    lines.push(format!(
        "Top interest level: {}",
        recap.summary.top_interest_level
    ));
    lines.push(String::new());

    if recap.is_empty() {
        lines.push(NO_REPORTS_MESSAGE.to_string());
    } else {
        for row in &recap.rows {
            let sales = row
                .sales_person
                .as_deref()
                .map(|name| format!("{name} | "))
                .unwrap_or_default();
            lines.push(format!(
                "- {}{} | {} | {} | {} | {} | {}",
                sales,
                row.visited_at,
                row.customer_name,
                row.interest_level,
                row.phone_number,
                row.location,
                row.notes
            ));
        }
    }

    finish(lines)
}

pub(crate) fn render_customer_cards(cards: &[CustomerCard]) -> String {
    if cards.is_empty() {
        return finish(vec![NO_CUSTOMERS_MESSAGE.to_string()]);
    }

    let mut lines = Vec::new();
    for card in cards {
        let business = card
            .business_name
            .as_deref()
            .map(|name| format!(" ({name})"))
            .unwrap_or_default();
        lines.push(format!("[{}] {}{}", card.customer_id, card.customer_name, business));
        if let Some(registrar) = &card.registered_by {
            lines.push(format!("  By: {registrar}"));
        }
        lines.push(format!("  Phone: {}", card.phone_number));
        lines.push(format!("  Address: {}", card.address));
        if let Some(link) = &card.map_link {
            lines.push(format!("  Map: {link}"));
        }
    }

    finish(lines)
}

pub(crate) fn render_lead_detail(detail: &LeadDetailView) -> String {
    let mut lines = vec![detail.customer_name.clone()];
    if let Some(business) = &detail.business_name {
        lines.push(business.clone());
    }
    lines.push(format!("Phone: {}", detail.phone_number));
    if let Some(email) = &detail.email {
        lines.push(format!("Email: {email}"));
    }
    lines.push(format!("Address: {}", detail.address));
    if let Some(link) = &detail.map_link {
        lines.push(format!("Map: {link}"));
    }
    lines.push(detail.registration_note.clone());

    lines.push(String::new());
    lines.push("Visit history".to_string());
    if detail.history.is_empty() {
        lines.push(NO_HISTORY_MESSAGE.to_string());
    }
    for visit in &detail.history {
        lines.push(format!(
            "- {} | visited by {} | interest {}",
            visit.visited_at, visit.visited_by, visit.interest_level
        ));
        if let Some(notes) = &visit.notes {
            lines.push(format!("  {notes}"));
        }
    }

    finish(lines)
}

pub(crate) fn render_sales_users(users: &[User]) -> String {
    if users.is_empty() {
        return finish(vec![NO_SALES_USERS_MESSAGE.to_string()]);
    }

    let lines = users
        .iter()
        .map(|user| format!("{}\t{}", user.id, user.name))
        .collect();
    finish(lines)
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
