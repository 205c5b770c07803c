use chrono::NaiveDate;
use sqlx::{any::AnyRow, Row};

use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    models::{Holiday, HolidayCategory},
};

fn holiday_from_row(row: &AnyRow) -> ApiResult<Holiday> {
    let date_str: String = row.try_get("date")?;
    let date: NaiveDate = date_str
        .parse()
        .map_err(|e| ApiError::Internal(format!("invalid date '{}' in store: {}", date_str, e)))?;

    let category_str: String = row.try_get("category")?;
    let category: HolidayCategory = category_str.parse().map_err(ApiError::Internal)?;

    Ok(Holiday {
        id: Some(row.try_get("id")?),
        date,
        name: row.try_get("name")?,
        category,
    })
}

impl Database {
    /// Insert a holiday and return it with its store-assigned id.
    pub async fn create_holiday(&self, holiday: &Holiday) -> ApiResult<Holiday> {
        let result = sqlx::query(
            "INSERT INTO holidays (date, name, category)
             VALUES (?, ?, ?)",
        )
        .bind(holiday.date.to_string())
        .bind(&holiday.name)
        .bind(holiday.category.as_str())
        .execute(self.pool())
        .await?;

        let row = sqlx::query("SELECT id, date, name, category FROM holidays WHERE rowid = ?")
            .bind(result.last_insert_id())
            .fetch_one(self.pool())
            .await?;

        holiday_from_row(&row)
    }

    /// Insert a batch of holidays inside one transaction; any failure rolls
    /// back every insert from this call.
    pub async fn create_holidays(&self, holidays: &[Holiday]) -> ApiResult<()> {
        let mut tx = self.pool().begin().await?;

        for holiday in holidays {
            sqlx::query(
                "INSERT INTO holidays (date, name, category)
                 VALUES (?, ?, ?)",
            )
            .bind(holiday.date.to_string())
            .bind(&holiday.name)
            .bind(holiday.category.as_str())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// All holidays, date-ascending then by store id.
    pub async fn list_holidays(&self) -> ApiResult<Vec<Holiday>> {
        let rows =
            sqlx::query("SELECT id, date, name, category FROM holidays ORDER BY date ASC, id ASC")
                .fetch_all(self.pool())
                .await?;

        let mut holidays = Vec::with_capacity(rows.len());
        for row in &rows {
            holidays.push(holiday_from_row(row)?);
        }

        Ok(holidays)
    }

    pub async fn get_holiday(&self, id: i64) -> ApiResult<Option<Holiday>> {
        let row = sqlx::query("SELECT id, date, name, category FROM holidays WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        row.as_ref().map(holiday_from_row).transpose()
    }

    /// Equality lookup used for pre-insert existence checks.
    pub async fn find_holiday(
        &self,
        date: NaiveDate,
        name: &str,
        category: HolidayCategory,
    ) -> ApiResult<Option<Holiday>> {
        let row = sqlx::query(
            "SELECT id, date, name, category FROM holidays
             WHERE date = ? AND name = ? AND category = ?",
        )
        .bind(date.to_string())
        .bind(name)
        .bind(category.as_str())
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(holiday_from_row).transpose()
    }

    /// Apply the provided fields to the stored record and persist the change.
    pub async fn update_holiday(
        &self,
        id: i64,
        date: Option<NaiveDate>,
        name: Option<&str>,
        category: Option<HolidayCategory>,
    ) -> ApiResult<Holiday> {
        // Get current holiday to preserve unchanged fields
        let current = self
            .get_holiday(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("holiday with id={} does not exist", id)))?;

        let updated_date = date.unwrap_or(current.date);
        let updated_name = name.unwrap_or(&current.name);
        let updated_category = category.unwrap_or(current.category);

        sqlx::query("UPDATE holidays SET date = ?, name = ?, category = ? WHERE id = ?")
            .bind(updated_date.to_string())
            .bind(updated_name)
            .bind(updated_category.as_str())
            .bind(id)
            .execute(self.pool())
            .await?;

        self.get_holiday(id).await?.ok_or_else(|| {
            ApiError::Internal(format!("holiday with id={} disappeared after update", id))
        })
    }

    /// Delete by id; returns how many rows were removed.
    pub async fn delete_holiday(&self, id: i64) -> ApiResult<u64> {
        let result = sqlx::query("DELETE FROM holidays WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_all_holidays(&self) -> ApiResult<()> {
        sqlx::query("DELETE FROM holidays")
            .execute(self.pool())
            .await?;

        Ok(())
    }
}
