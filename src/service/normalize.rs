use chrono::NaiveDate;

use crate::models::{FilterCriteria, RawFilterInput, StatusFilter};

const STATUS_ALL: &str = "all";

/// Parse a `YYYY-MM-DD` prefix into a calendar day
///
/// Anything after the first ten characters (time of day, zone) is ignored.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let prefix = input.trim().get(..10)?;
    let well_formed = prefix.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

fn parse_id(input: Option<&str>) -> Option<i64> {
    input?.trim().parse().ok()
}

fn normalize_text(input: Option<&str>) -> Option<String> {
    let trimmed = input?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Turn raw form input into criteria
pub fn normalize(raw: &RawFilterInput) -> FilterCriteria {
    let end_date = raw.end_date.as_deref().and_then(parse_calendar_date);

    FilterCriteria {
        client_id: parse_id(raw.client_id.as_deref()),
        company_name: normalize_text(raw.company_name.as_deref()),
        client_email: normalize_text(raw.client_email.as_deref()),
        start_date: raw.start_date.as_deref().and_then(parse_calendar_date),
        end_before: end_date.and_then(|d| d.succ_opt()),
    }
}

pub fn normalize_status(raw: Option<&str>) -> StatusFilter {
    match raw.map(str::trim) {
        None | Some("") => StatusFilter::All,
        Some(s) if s.eq_ignore_ascii_case(STATUS_ALL) => StatusFilter::All,
        Some(s) => StatusFilter::Only(s.to_string()),
    }
}
