//! Reference content seeded at start-up.

pub mod contacts;
pub mod objects;
pub mod versions;

use chrono::NaiveDate;

use docsystem_core::error::AppError;
use docsystem_core::result::AppResult;

/// Parse an ISO `YYYY-MM-DD` seed date.
pub(crate) fn date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| AppError::internal(format!("Invalid seed date '{raw}': {e}")))
}
