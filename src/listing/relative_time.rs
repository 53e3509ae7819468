//! "N hours ago" / "N days ago" labels for list timestamps.

#[cfg(test)]
#[path = "relative_time_test.rs"]
mod relative_time_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::OffsetDateTime;

/// Relative label for an RFC 3339 `timestamp` as seen at `now`, optionally
/// prefixed ("Saved 3 days ago"). Unparseable input is shown verbatim.
pub fn time_ago(timestamp: &str, now: OffsetDateTime, prefix: Option<&str>) -> String {
    let Ok(at) = OffsetDateTime::parse(timestamp, &Rfc3339) else {
        return timestamp.to_owned();
    };
    let hours = (now - at).whole_hours().max(0);
    let label = if hours < 24 {
        format!("{hours} hours ago")
    } else {
        format!("{} days ago", hours / 24)
    };
    match prefix {
        Some(prefix) => format!("{prefix} {label}"),
        None => label,
    }
}

/// "Jan 15, 2024" for an RFC 3339 timestamp; unparseable input is shown verbatim.
pub fn short_date(timestamp: &str) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year]");
    match OffsetDateTime::parse(timestamp, &Rfc3339) {
        Ok(at) => at.date().format(&format).unwrap_or_else(|_| timestamp.to_owned()),
        Err(_) => timestamp.to_owned(),
    }
}
