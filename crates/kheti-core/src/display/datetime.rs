//! Date and time display utilities.
//!
//! Wrapper types for formatting timestamps in the system timezone and
//! calendar dates in a farmer's locale.

use std::fmt;

use jiff::{Timestamp, civil::Date, tz::TimeZone};

use crate::{dates::format_display, i18n::Locale};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A calendar date written as `DD Mon YYYY` in the given locale.
///
/// ```rust
/// use jiff::civil::date;
/// use kheti_core::{display::DisplayDate, i18n::Locale};
///
/// let day = date(2025, 6, 1);
/// assert_eq!(DisplayDate(day, Locale::En).to_string(), "01 Jun 2025");
/// assert_eq!(DisplayDate(day, Locale::Hi).to_string(), "01 जून 2025");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DisplayDate(pub Date, pub Locale);

impl fmt::Display for DisplayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_display(self.0, self.1.display_tag()))
    }
}
