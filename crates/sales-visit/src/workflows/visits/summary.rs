use super::domain::VisitReport;
use serde::Serialize;
use std::collections::HashMap;

/// Placeholder shown when a statistic has nothing to report.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitSummary {
    pub count: usize,
    pub top_salesperson: String,
    pub top_interest_level: String,
}

impl VisitSummary {
    fn empty() -> Self {
        Self {
            count: 0,
            top_salesperson: NOT_AVAILABLE.to_string(),
            top_interest_level: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Count plus the most frequent salesperson and interest level.
///
/// The salesperson tally is only kept when `include_sales_breakdown` is set
/// (team visibility); otherwise it reports [`NOT_AVAILABLE`].
pub fn summarize(reports: &[VisitReport], include_sales_breakdown: bool) -> VisitSummary {
    if reports.is_empty() {
        return VisitSummary::empty();
    }

    let mut sales = FrequencyTally::default();
    let mut interest = FrequencyTally::default();

    for report in reports {
        if include_sales_breakdown {
            sales.record(&report.sales_person.name);
        }
        interest.record(report.interest_level.label());
    }

    VisitSummary {
        count: reports.len(),
        top_salesperson: sales.top_or_placeholder(),
        top_interest_level: interest.top_or_placeholder(),
    }
}

/// Occurrence counts that remember first-seen order.
#[derive(Debug, Default)]
pub(crate) struct FrequencyTally {
    slots: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyTally {
    pub(crate) fn record(&mut self, key: &str) {
        match self.slots.get(key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.slots.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    /// Key with the strictly greatest count; ties keep the earliest key.
    pub(crate) fn top(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.entries {
            match best {
                Some(current) if entry.1 <= current.1 => {}
                _ => best = Some(entry),
            }
        }
        best.map(|(key, _)| key.as_str())
    }

    fn top_or_placeholder(&self) -> String {
        self.top().unwrap_or(NOT_AVAILABLE).to_string()
    }
}
