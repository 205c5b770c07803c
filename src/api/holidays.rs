use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    api::{middleware::ApiResult, AppState},
    models::*,
    services::validation::{require_date, require_range},
};

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// GET /api/v1/holidays - List all holidays, date-ascending
pub async fn get_holidays(State(state): State<AppState>) -> ApiResult<Json<HolidayListResponse>> {
    let index = state.catalog.holidays().await?;
    let holidays = index.all_records();
    let count = holidays.len() as i64;

    Ok(Json(HolidayListResponse { holidays, count }))
}

/// POST /api/v1/holidays - Add one holiday
pub async fn add_holiday(
    State(state): State<AppState>,
    Json(req): Json<CreateHolidayRequest>,
) -> ApiResult<(StatusCode, Json<AddHolidayResponse>)> {
    let date = require_date(req.date)?;
    let holiday = Holiday::new(
        date,
        req.name.unwrap_or_else(|| date.to_string()),
        req.category.unwrap_or(HolidayCategory::Custom),
    );

    let added = state.catalog.add_holiday(holiday).await?;

    Ok((StatusCode::CREATED, Json(AddHolidayResponse { added })))
}

/// POST /api/v1/holidays/range?start&end - Mark every day of the range
pub async fn add_holidays_between(
    State(state): State<AppState>,
    Query(params): Query<RangeQuery>,
) -> ApiResult<StatusCode> {
    let (start, end) = require_range(params.start, params.end)?;

    state.catalog.add_holidays_between(start, end).await?;

    Ok(StatusCode::CREATED)
}

/// GET /api/v1/holidays/workdays?start&end - Count working days in the range
pub async fn count_working_days(
    State(state): State<AppState>,
    Query(params): Query<RangeQuery>,
) -> ApiResult<Json<WorkdayCountResponse>> {
    let (start, end) = require_range(params.start, params.end)?;

    let working_days = state.catalog.count_working_days_between(start, end).await?;

    Ok(Json(WorkdayCountResponse {
        start,
        end,
        working_days,
    }))
}

/// PATCH /api/v1/holidays/:id - Partially update a holiday
pub async fn update_holiday(
    State(state): State<AppState>,
    Path(holiday_id): Path<i64>,
    Json(req): Json<UpdateHolidayRequest>,
) -> ApiResult<Json<Holiday>> {
    let holiday = state
        .catalog
        .update_holiday(holiday_id, req.date, req.name, req.category)
        .await?;

    Ok(Json(holiday))
}

/// DELETE /api/v1/holidays/:id - Delete a holiday by id
pub async fn delete_holiday(
    State(state): State<AppState>,
    Path(holiday_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.catalog.delete_holiday(holiday_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
