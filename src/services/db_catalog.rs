use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::api::middleware::error::{ApiError, ApiResult};
use crate::database::Database;
use crate::models::{Holiday, HolidayCategory};
use crate::services::catalog::{
    range_records, read_holiday_file, write_holiday_file, HolidayCatalog,
};
use crate::services::index::HolidayIndex;
use crate::services::workdays::count_working_days_between;

/// Catalog variant backed by the durable store. The store is the source of
/// truth and assigns the ids; the in-memory index is rebuilt per operation
/// that needs ordered scans.
///
/// Unlike [`MemoryCatalog`], a duplicate insert fails with `AlreadyExists`
/// instead of returning `false`, and batch operations check every record
/// before the transaction writes anything.
///
/// [`MemoryCatalog`]: crate::services::memory_catalog::MemoryCatalog
#[derive(Clone)]
pub struct DbCatalog {
    db: Arc<Database>,
}

impl DbCatalog {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Fail with `AlreadyExists` when an equal record is already stored.
    async fn reject_existing(&self, holiday: &Holiday) -> ApiResult<()> {
        let existing = self
            .db
            .find_holiday(holiday.date, &holiday.name, holiday.category)
            .await?;
        if existing.is_some() {
            return Err(ApiError::AlreadyExists(format!(
                "holiday ({}, {}, {}) already exists",
                holiday.date, holiday.name, holiday.category
            )));
        }
        Ok(())
    }

    /// Validate every record of a batch against the store, then insert them
    /// all in one transaction. A duplicate aborts before anything is written.
    async fn insert_batch(&self, holidays: Vec<Holiday>) -> ApiResult<()> {
        for holiday in &holidays {
            self.reject_existing(holiday).await?;
        }
        self.db.create_holidays(&holidays).await?;
        info!("Inserted batch of {} holidays", holidays.len());
        Ok(())
    }
}

#[async_trait::async_trait]
impl HolidayCatalog for DbCatalog {
    async fn holidays(&self) -> ApiResult<HolidayIndex> {
        let records = self.db.list_holidays().await?;
        Ok(HolidayIndex::from_records(records))
    }

    async fn add_date(&self, date: NaiveDate) -> ApiResult<bool> {
        self.add_holiday(Holiday::for_date(date)).await
    }

    async fn add_holiday(&self, holiday: Holiday) -> ApiResult<bool> {
        self.reject_existing(&holiday).await?;
        let saved = self.db.create_holiday(&holiday).await?;
        info!(
            "Holiday saved: id={:?}, date={}, name={}",
            saved.id, saved.date, saved.name
        );
        Ok(true)
    }

    async fn add_holidays_between(&self, start: NaiveDate, end: NaiveDate) -> ApiResult<()> {
        self.insert_batch(range_records(start, end)).await
    }

    async fn import_from_json(&self, path: &Path) -> ApiResult<()> {
        let mut holidays = read_holiday_file(path)?;
        for holiday in &mut holidays {
            // The store assigns its own ids.
            holiday.id = None;
        }
        self.insert_batch(holidays).await?;
        info!("Imported holidays from {}", path.display());
        Ok(())
    }

    async fn export_to_json(&self, path: &Path) -> ApiResult<()> {
        let records = self.holidays().await?.all_records();
        write_holiday_file(path, &records)?;
        info!("Exported {} holidays to {}", records.len(), path.display());
        Ok(())
    }

    async fn count_working_days_between(&self, start: NaiveDate, end: NaiveDate) -> ApiResult<i64> {
        let index = self.holidays().await?;
        Ok(count_working_days_between(start, end, &index))
    }

    async fn update_holiday(
        &self,
        id: i64,
        date: Option<NaiveDate>,
        name: Option<String>,
        category: Option<HolidayCategory>,
    ) -> ApiResult<Holiday> {
        let updated = self
            .db
            .update_holiday(id, date, name.as_deref(), category)
            .await?;
        info!("Holiday updated: id={}", id);
        Ok(updated)
    }

    async fn delete_holiday(&self, id: i64) -> ApiResult<()> {
        let removed = self.db.delete_holiday(id).await?;
        if removed == 0 {
            return Err(ApiError::NotFound(format!(
                "holiday with id={} does not exist",
                id
            )));
        }
        info!("Holiday deleted: id={}", id);
        Ok(())
    }

    async fn clear(&self) -> ApiResult<()> {
        self.db.delete_all_holidays().await?;
        Ok(())
    }
}
