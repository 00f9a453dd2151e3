// ABOUTME: Relative-time formatting for issue timestamps
// ABOUTME: Parses Jira timestamps and renders fuzzy "about 3 days ago" strings

use chrono::{DateTime, FixedOffset, Utc};

/// Jira serializes timestamps like "2024-01-16T14:45:00.000+0000".
const JIRA_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Parse a Jira timestamp, falling back to RFC 3339.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw, JIRA_TIMESTAMP_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok())
}

/// Render the age of `raw` relative to `now` as a fuzzy string, or None
/// if the timestamp does not parse.
pub fn fuzzy_since(raw: &str, now: DateTime<Utc>) -> Option<String> {
    let then = parse_timestamp(raw)?;
    let elapsed = now.signed_duration_since(then.with_timezone(&Utc));
    Some(fuzzy_ago(elapsed))
}

/// Render an elapsed duration as a fuzzy age ("about 3 days ago").
///
/// Durations under a minute (including clock-skewed negatives) collapse
/// to "less than a minute ago".
pub fn fuzzy_ago(elapsed: chrono::Duration) -> String {
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "less than a minute ago".to_string();
    }
    if minutes < 60 {
        return about(minutes, "minute");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return about(hours, "hour");
    }

    let days = elapsed.num_days();
    if days < 30 {
        return about(days, "day");
    }
    if days < 365 {
        return about(days / 30, "month");
    }
    about(days / 365, "year")
}

fn about(amount: i64, unit: &str) -> String {
    if amount == 1 {
        format!("about 1 {} ago", unit)
    } else {
        format!("about {} {}s ago", amount, unit)
    }
}
