use crate::models::NOT_AVAILABLE;
use chrono::{DateTime, Utc};

// Abbreviates each x1000 step with one decimal, e.g. "1234567" -> "1.2M"
pub fn format_count(count: &str) -> String {
    if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
        return NOT_AVAILABLE.to_string();
    }
    let number = match count.parse::<f64>() {
        Ok(number) if number.is_finite() => number,
        _ => return NOT_AVAILABLE.to_string(),
    };

    if number >= 1e9 {
        format!("{:.1}B", number / 1e9)
    } else if number >= 1e6 {
        format!("{:.1}M", number / 1e6)
    } else if number >= 1e3 {
        format!("{:.1}K", number / 1e3)
    } else {
        count.to_string()
    }
}

pub fn format_iso8601_time_since(iso_date: &str) -> String {
    format_iso8601_time_since_at(iso_date, Utc::now())
}

/// Relative age of `iso_date` as seen from `now`.
///
/// Months are fixed 30-day buckets and years 365 days, not calendar aware.
/// Timestamps in the future count as "Just now".
pub fn format_iso8601_time_since_at(iso_date: &str, now: DateTime<Utc>) -> String {
    let Ok(date) = DateTime::parse_from_rfc3339(iso_date) else {
        return NOT_AVAILABLE.to_string();
    };

    let seconds = now
        .signed_duration_since(date.with_timezone(&Utc))
        .num_seconds();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let months = days / 30;
    let years = days / 365;

    if years > 0 {
        format!("{years}y ago")
    } else if months > 0 {
        format!("{months}mo ago")
    } else if days > 0 {
        format!("{days}d ago")
    } else if hours > 0 {
        format!("{hours}h ago")
    } else if minutes > 0 {
        format!("{minutes}m ago")
    } else {
        "Just now".to_string()
    }
}

/// Renders a `PT#H#M#S` duration as "H:MM:SS", or "M:SS" without an hour part.
pub fn format_iso8601_duration(duration: &str) -> String {
    let Some(start) = duration.find("PT") else {
        return NOT_AVAILABLE.to_string();
    };

    let rest = &duration[start + 2..];
    let (hours, rest) = take_duration_component(rest, 'H');
    let (minutes, rest) = take_duration_component(rest, 'M');
    let (seconds, _) = take_duration_component(rest, 'S');

    let minutes = minutes.unwrap_or("0");
    let seconds = seconds.unwrap_or("");
    match hours {
        Some(hours) => format!("{hours}:{minutes:0>2}:{seconds:0>2}"),
        None => format!("{minutes}:{seconds:0>2}"),
    }
}

// Splits a leading "<digits><unit>" off the input, if present.
fn take_duration_component(input: &str, unit: char) -> (Option<&str>, &str) {
    let digits = input.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 && input[digits..].starts_with(unit) {
        (Some(&input[..digits]), &input[digits + unit.len_utf8()..])
    } else {
        (None, input)
    }
}
