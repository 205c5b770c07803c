use std::path::Path;

use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::api::middleware::error::{ApiError, ApiResult};
use crate::models::{Holiday, HolidayCategory};
use crate::services::catalog::{
    range_records, read_holiday_file, write_holiday_file, HolidayCatalog,
};
use crate::services::index::HolidayIndex;
use crate::services::workdays::count_working_days_between;

/// Catalog variant whose sole store is a [`HolidayIndex`].
///
/// Ids are the index's synthetic ones. The `RwLock` is the service-layer
/// serialization of writes; the index itself carries no locking.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    index: RwLock<HolidayIndex>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl HolidayCatalog for MemoryCatalog {
    async fn holidays(&self) -> ApiResult<HolidayIndex> {
        Ok(self.index.read().await.clone())
    }

    async fn add_date(&self, date: NaiveDate) -> ApiResult<bool> {
        self.add_holiday(Holiday::for_date(date)).await
    }

    async fn add_holiday(&self, holiday: Holiday) -> ApiResult<bool> {
        let mut index = self.index.write().await;
        let added = index.add(holiday.clone());
        if added {
            info!("Holiday added: date={}, name={}", holiday.date, holiday.name);
        } else {
            debug!(
                "Duplicate holiday ignored: date={}, name={}",
                holiday.date, holiday.name
            );
        }
        Ok(added)
    }

    async fn add_holidays_between(&self, start: NaiveDate, end: NaiveDate) -> ApiResult<()> {
        let mut index = self.index.write().await;
        for record in range_records(start, end) {
            index.add(record);
        }
        Ok(())
    }

    async fn import_from_json(&self, path: &Path) -> ApiResult<()> {
        let holidays = read_holiday_file(path)?;
        let mut index = self.index.write().await;
        for mut holiday in holidays {
            // Store ids from another catalog mean nothing here.
            holiday.id = None;
            index.add(holiday);
        }
        info!("Imported holidays from {}", path.display());
        Ok(())
    }

    async fn export_to_json(&self, path: &Path) -> ApiResult<()> {
        let records = self.index.read().await.all_records();
        write_holiday_file(path, &records)?;
        info!("Exported {} holidays to {}", records.len(), path.display());
        Ok(())
    }

    async fn count_working_days_between(&self, start: NaiveDate, end: NaiveDate) -> ApiResult<i64> {
        let index = self.index.read().await;
        Ok(count_working_days_between(start, end, &index))
    }

    async fn update_holiday(
        &self,
        id: i64,
        date: Option<NaiveDate>,
        name: Option<String>,
        category: Option<HolidayCategory>,
    ) -> ApiResult<Holiday> {
        let mut index = self.index.write().await;

        let current = index
            .iter()
            .flat_map(|(_, records)| records.iter())
            .find(|record| record.id == Some(id))
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("holiday with id={} does not exist", id)))?;

        let mut updated = current.clone();
        if let Some(date) = date {
            updated.date = date;
        }
        if let Some(name) = name {
            updated.name = name;
        }
        if let Some(category) = category {
            updated.category = category;
        }

        index.remove(current.date, &current);
        if !index.add(updated.clone()) {
            // The new shape collides with another record; put the old one back.
            index.add(current);
            return Err(ApiError::AlreadyExists(format!(
                "holiday ({}, {}, {}) already exists",
                updated.date, updated.name, updated.category
            )));
        }

        info!("Holiday updated: id={}", id);
        Ok(updated)
    }

    async fn delete_holiday(&self, id: i64) -> ApiResult<()> {
        let mut index = self.index.write().await;

        let target = index
            .iter()
            .flat_map(|(_, records)| records.iter())
            .find(|record| record.id == Some(id))
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("holiday with id={} does not exist", id)))?;

        index.remove(target.date, &target);
        info!("Holiday deleted: id={}", id);
        Ok(())
    }

    async fn clear(&self) -> ApiResult<()> {
        self.index.write().await.clear();
        Ok(())
    }
}
