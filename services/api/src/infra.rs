use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime, TimeZone};
use metrics_exporter_prometheus::PrometheusHandle;
use sales_visit::workflows::visits::{Clipboard, ClipboardError, TimeWindow};
use std::io::Write;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Clipboard stand-in for the CLI: the card goes to stdout so it can be
/// piped into `pbcopy`, `xclip` or `wl-copy`.
pub(crate) struct StdoutClipboard {
    out: Mutex<std::io::Stdout>,
}

impl Default for StdoutClipboard {
    fn default() -> Self {
        Self {
            out: Mutex::new(std::io::stdout()),
        }
    }
}

impl Clipboard for StdoutClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| ClipboardError::Unavailable("stdout lock poisoned".to_string()))?;
        writeln!(out, "{text}")
            .and_then(|()| out.flush())
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))
    }
}

pub(crate) fn parse_window(raw: &str) -> Result<TimeWindow, String> {
    raw.parse::<TimeWindow>().map_err(|err| err.to_string())
}

/// RFC 3339 instant, or a bare `YYYY-MM-DD` read as local midnight.
pub(crate) fn parse_now(raw: &str) -> Result<DateTime<FixedOffset>, String> {
    let trimmed = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant);
    }

    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|err| {
        format!("failed to parse '{raw}' as RFC 3339 or YYYY-MM-DD ({err})")
    })?;
    Local
        .from_local_datetime(&date.and_time(NaiveTime::default()))
        .earliest()
        .map(|instant| instant.fixed_offset())
        .ok_or_else(|| format!("'{raw}' has no local midnight"))
}

pub(crate) fn local_now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_now_accepts_rfc3339() {
        let now = parse_now("2024-03-15T14:00:00+07:00").expect("parse");
        assert_eq!(now.offset().local_minus_utc(), 7 * 3600);
        assert_eq!(now.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn parse_now_accepts_plain_dates() {
        let now = parse_now("2024-03-15").expect("parse");
        assert_eq!(now.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn parse_now_rejects_garbage() {
        assert!(parse_now("next tuesday").is_err());
    }

    #[test]
    fn parse_window_reports_allowed_values() {
        assert_eq!(parse_window("daily"), Ok(TimeWindow::Daily));
        let error = parse_window("hourly").expect_err("unknown window");
        assert!(error.contains("expected all, daily, weekly or monthly"));
    }
}
