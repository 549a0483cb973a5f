use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::models::Timestamp;

/// Layouts tried, in order, after weekday, commas and time zone are stripped.
/// Two-digit years must come before four-digit ones: `%Y` happily reads "14".
const NAIVE_FORMATS: &[&str] = &[
    "%d %B %y %H:%M:%S",
    "%d %B %Y %H:%M:%S",
    "%B %d %Y %I:%M:%S %p",
    "%B %d %Y %H:%M:%S",
    "%d %B %Y %I:%M:%S %p",
    "%Y-%m-%d %H:%M:%S",
];

const WEEKDAYS: &[&str] =
    &["monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday"];
const ZONE_PREFIXES: &[&str] = &["GMT", "UTC"];

/// Parse the free text after "Added on"
///
/// Understands the English layouts Kindle firmware has used over the years,
/// plus RFC 3339 and RFC 2822. Text without a zone is read as UTC. Anything
/// else becomes [`Timestamp::Invalid`] carrying the original text.
pub fn parse_added_on(text: &str) -> Timestamp {
    let raw = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Timestamp::Valid(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Timestamp::Valid(dt);
    }

    let normalized = normalize(raw);
    let Some((body, offset)) = split_zone(&normalized) else {
        return Timestamp::Invalid(raw.to_string());
    };

    NAIVE_FORMATS
        .iter()
        .filter_map(|format| NaiveDateTime::parse_from_str(body, format).ok())
        .find_map(|naive| naive.and_local_timezone(offset).single())
        .map(Timestamp::Valid)
        .unwrap_or_else(|| Timestamp::Invalid(raw.to_string()))
}

/// Drop commas and a leading weekday, collapse whitespace
fn normalize(raw: &str) -> String {
    let without_commas = raw.replace(',', " ");
    let mut words = without_commas.split_whitespace().peekable();

    if let Some(first) = words.peek()
        && is_weekday(first)
    {
        words.next();
    }

    words.collect::<Vec<_>>().join(" ")
}

fn is_weekday(word: &str) -> bool {
    let word = word.to_lowercase();
    word.len() >= 3 && WEEKDAYS.iter().any(|day| day.starts_with(&word))
}

/// Split a trailing `GMT+02:00` style zone off the text
///
/// Returns `None` only when a zone is present but malformed.
fn split_zone(normalized: &str) -> Option<(&str, FixedOffset)> {
    let utc = FixedOffset::east_opt(0)?;
    let Some((body, last)) = normalized.rsplit_once(' ') else {
        return Some((normalized, utc));
    };

    match ZONE_PREFIXES.iter().find_map(|prefix| last.strip_prefix(prefix)) {
        Some(offset) => Some((body, parse_offset(offset)?)),
        None => Some((normalized, utc)),
    }
}

/// `""`, `+2`, `+0200`, `+02:00`, `-05:30`
fn parse_offset(text: &str) -> Option<FixedOffset> {
    if text.is_empty() {
        return FixedOffset::east_opt(0);
    }

    let (sign, digits) = if let Some(rest) = text.strip_prefix('+') {
        (1, rest)
    } else {
        (-1, text.strip_prefix('-')?)
    };
    if !digits.chars().all(|c| c.is_ascii_digit() || c == ':') {
        return None;
    }

    let (hours, minutes) = match digits.split_once(':') {
        Some((h, m)) => (h, m),
        None if digits.len() > 2 => digits.split_at(digits.len() - 2),
        None => (digits, "0"),
    };

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
