//! Row decoding helpers shared by the query modules.

use std::{fmt::Display, str::FromStr};

use jiff::civil::Date;
use rusqlite::{Row, types::Type};

/// Read a TEXT column and parse it, reporting bad values as a conversion
/// failure on that column.
pub(super) fn parse_text<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let text: String = row.get(idx)?;
    text.parse::<T>().map_err(|e| conversion_error(idx, &text, e))
}

/// Nullable variant of [`parse_text`] for date columns.
pub(super) fn parse_optional_date(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<Date>> {
    let text: Option<String> = row.get(idx)?;
    text.map(|t| t.parse::<Date>().map_err(|e| conversion_error(idx, &t, e)))
        .transpose()
}

/// Read an INTEGER primary key as an unsigned id.
pub(super) fn read_id(row: &Row<'_>, idx: usize) -> rusqlite::Result<u64> {
    let id: i64 = row.get(idx)?;
    u64::try_from(id)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(e)))
}

fn conversion_error(idx: usize, text: &str, err: impl Display) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        idx,
        Type::Text,
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Invalid value '{text}': {err}"),
        )),
    )
}
