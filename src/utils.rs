use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::time::Duration;

/// Waits without blocking the UI thread
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Joins the non-empty class names
pub fn classes(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a backend timestamp as `M/D/YYYY`.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.fff]` or a bare date.
/// Anything else is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&chrono::Local).date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => {
            log::debug!("Unrecognised timestamp '{}'", raw);
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_naive_and_bare_dates() {
        assert_eq!(format_date("2024-03-05T10:00:00.123"), "3/5/2024");
        assert_eq!(format_date("2024-12-31T23:59:59"), "12/31/2024");
        assert_eq!(format_date("2024-01-09"), "1/9/2024");
    }

    #[test]
    fn test_format_rfc3339_keeps_calendar_year() {
        // local timezone may shift the day, never the format
        let formatted = format_date("2024-06-15T12:00:00Z");
        assert!(formatted.ends_with("/2024"), "{}", formatted);
        assert!(formatted.starts_with("6/"), "{}", formatted);
    }

    #[test]
    fn test_format_unknown_is_passthrough() {
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_classes_skips_empty() {
        assert_eq!(classes(&["nav-item", "", "active"]), "nav-item active");
        assert_eq!(classes(&["", ""]), "");
    }
}
