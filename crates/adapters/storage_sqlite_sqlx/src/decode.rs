//! Column decoding helpers shared by the row wrappers.

use std::str::FromStr;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use hbnb_domain::time::Timestamp;

/// Read a TEXT column holding a typed identifier.
pub(crate) fn id<T>(row: &SqliteRow, column: &str) -> Result<T, sqlx::Error>
where
    T: FromStr<Err = uuid::Error>,
{
    let raw: String = row.try_get(column)?;
    T::from_str(&raw).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

/// Read a TEXT column holding an RFC 3339 timestamp.
pub(crate) fn timestamp(row: &SqliteRow, column: &str) -> Result<Timestamp, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    Ok(chrono::DateTime::parse_from_rfc3339(&raw)
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
        .to_utc())
}

/// Read an INTEGER column holding a non-negative count.
pub(crate) fn count(row: &SqliteRow, column: &str) -> Result<u32, sqlx::Error> {
    let raw: i64 = row.try_get(column)?;
    u32::try_from(raw).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}
