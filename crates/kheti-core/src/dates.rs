//! Calendar helpers for plan generation and display.
//!
//! All arithmetic works on [`jiff::civil::Date`], which is an immutable
//! proleptic Gregorian value; there is no time zone involved anywhere in the
//! plan engine.

use jiff::{
    Span,
    civil::{Date, DateTime, Time},
};

use crate::error::{KhetiError, Result};

/// Same civil day with the time set to midnight.
pub fn start_of_day(datetime: DateTime) -> DateTime {
    datetime.date().to_datetime(Time::midnight())
}

/// The date `days` calendar days after `date` (before, when negative).
///
/// # Errors
///
/// Returns `KhetiError::InvalidInput` when the result falls outside the
/// supported date range.
pub fn add_days(date: Date, days: i64) -> Result<Date> {
    Span::new()
        .try_days(days)
        .and_then(|span| date.checked_add(span))
        .map_err(|e| {
            KhetiError::invalid_input("date")
                .with_reason(format!("{date} {days:+} days is out of range: {e}"))
        })
}

/// `YYYY-MM-DD`, zero padded.
pub fn format_iso_date(date: Date) -> String {
    date.strftime("%Y-%m-%d").to_string()
}

/// Parse a sowing or transaction date.
///
/// Accepts `YYYY-MM-DD`, or an ISO civil datetime which is truncated to its
/// day. UTC timestamps (a trailing `Z`) are rejected since their local day
/// is unknown.
///
/// ```rust
/// use jiff::civil::date;
/// use kheti_core::dates::parse_iso_date;
///
/// assert_eq!(parse_iso_date("2025-06-01", "sowing").unwrap(), date(2025, 6, 1));
/// assert_eq!(parse_iso_date("2025-06-01T18:45", "sowing").unwrap(), date(2025, 6, 1));
/// assert!(parse_iso_date("not-a-date", "sowing").is_err());
/// ```
pub fn parse_iso_date(value: &str, field: &str) -> Result<Date> {
    let value = value.trim();
    if let Ok(date) = value.parse::<Date>() {
        return Ok(date);
    }
    value
        .parse::<DateTime>()
        .map(|datetime| start_of_day(datetime).date())
        .map_err(|_| {
            KhetiError::invalid_input(field)
                .with_reason(format!("'{value}' is not a valid date (expected YYYY-MM-DD)"))
        })
}

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_HI: [&str; 12] = [
    "जन॰", "फ़र॰", "मार्च", "अप्रैल", "मई", "जून", "जुल॰", "अग॰", "सित॰", "अक्तू॰", "नव॰",
    "दिस॰",
];

const MONTHS_MR: [&str; 12] = [
    "जाने", "फेब्रु", "मार्च", "एप्रि", "मे", "जून", "जुलै", "ऑग", "सप्टें", "ऑक्टो", "नोव्हें",
    "डिसें",
];

const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Human readable `DD Mon YYYY` for a BCP-47 style locale tag.
///
/// Only the primary language subtag is looked at; `en`, `hi` and `mr` are
/// supported and anything else renders in English. Marathi output uses
/// Devanagari digits.
///
/// ```rust
/// use jiff::civil::date;
/// use kheti_core::dates::format_display;
///
/// assert_eq!(format_display(date(2025, 6, 1), "en-IN"), "01 Jun 2025");
/// assert_eq!(format_display(date(2025, 6, 1), "mr-IN"), "०१ जून २०२५");
/// ```
pub fn format_display(date: Date, locale_tag: &str) -> String {
    let language = locale_tag
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    let month = usize::try_from(date.month() - 1).unwrap_or_default();

    match language.as_str() {
        "hi" => format!("{:02} {} {}", date.day(), MONTHS_HI[month], date.year()),
        "mr" => devanagari_digits(&format!(
            "{:02} {} {}",
            date.day(),
            MONTHS_MR[month],
            date.year()
        )),
        _ => format!("{:02} {} {}", date.day(), MONTHS_EN[month], date.year()),
    }
}

fn devanagari_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => DEVANAGARI_DIGITS[d as usize],
            None => c,
        })
        .collect()
}
