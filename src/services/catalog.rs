use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::api::middleware::error::{ApiError, ApiResult};
use crate::models::{Holiday, HolidayCategory};
use crate::services::index::HolidayIndex;

/// The contract both catalog variants satisfy: the in-memory
/// [`MemoryCatalog`] with synthetic ids, and the store-backed [`DbCatalog`]
/// with store-assigned ids. The REST layer only sees this trait.
///
/// The one surface difference is duplicate handling on `add_holiday`: the
/// in-memory variant reports a duplicate by returning `false`, the
/// store-backed variant by failing with `AlreadyExists`.
///
/// [`MemoryCatalog`]: crate::services::memory_catalog::MemoryCatalog
/// [`DbCatalog`]: crate::services::db_catalog::DbCatalog
#[async_trait::async_trait]
pub trait HolidayCatalog: Send + Sync {
    /// Snapshot of the current holidays as a date-ascending index.
    async fn holidays(&self) -> ApiResult<HolidayIndex>;

    /// Mark a single date as a CUSTOM holiday named after itself.
    async fn add_date(&self, date: NaiveDate) -> ApiResult<bool>;

    /// Add one holiday record.
    async fn add_holiday(&self, holiday: Holiday) -> ApiResult<bool>;

    /// Mark every day from `start` to `end` inclusive as a CUSTOM holiday.
    /// A duplicate anywhere in the range aborts the whole batch.
    async fn add_holidays_between(&self, start: NaiveDate, end: NaiveDate) -> ApiResult<()>;

    /// Parse a JSON array of holiday records and add them all.
    async fn import_from_json(&self, path: &Path) -> ApiResult<()>;

    /// Write the full collection as a JSON array, date-ascending then in
    /// per-date policy order.
    async fn export_to_json(&self, path: &Path) -> ApiResult<()>;

    /// Working days from `start` to `end` inclusive against this catalog's
    /// holidays.
    async fn count_working_days_between(&self, start: NaiveDate, end: NaiveDate) -> ApiResult<i64>;

    /// Apply the provided fields to the record with `id`.
    async fn update_holiday(
        &self,
        id: i64,
        date: Option<NaiveDate>,
        name: Option<String>,
        category: Option<HolidayCategory>,
    ) -> ApiResult<Holiday>;

    /// Remove the record with `id`.
    async fn delete_holiday(&self, id: i64) -> ApiResult<()>;

    /// Empty the whole catalog.
    async fn clear(&self) -> ApiResult<()>;
}

/// Every day of the inclusive range as the CUSTOM convenience record.
/// Empty when `end < start`.
pub(crate) fn range_records(start: NaiveDate, end: NaiveDate) -> Vec<Holiday> {
    let span = (end - start).num_days() + 1;
    if span <= 0 {
        return Vec::new();
    }
    start
        .iter_days()
        .take(span as usize)
        .map(Holiday::for_date)
        .collect()
}

/// Read and parse a holiday array from `path`. An unreadable file maps to
/// `NotFound`, malformed content to `Parse`.
pub(crate) fn read_holiday_file(path: &Path) -> ApiResult<Vec<Holiday>> {
    let content = fs::read_to_string(path)
        .map_err(|e| ApiError::NotFound(format!("cannot read {}: {}", path.display(), e)))?;
    let holidays: Vec<Holiday> = serde_json::from_str(&content)
        .map_err(|e| ApiError::Parse(format!("malformed holiday file {}: {}", path.display(), e)))?;
    Ok(holidays)
}

/// Serialize `holidays` to `path` as a pretty-printed JSON array.
pub(crate) fn write_holiday_file(path: &Path, holidays: &[Holiday]) -> ApiResult<()> {
    let content = serde_json::to_string_pretty(holidays)?;
    fs::write(path, content).map_err(|e| {
        ApiError::Io(format!("cannot write {}: {}", path.display(), e))
    })?;
    Ok(())
}
