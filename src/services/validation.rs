use chrono::NaiveDate;

use crate::api::middleware::error::{ApiError, ApiResult};

/// Reject an absent date before any state is touched.
pub fn require_date(date: Option<NaiveDate>) -> ApiResult<NaiveDate> {
    date.ok_or_else(|| ApiError::InvalidArgument("date is required".to_string()))
}

/// Reject a range with a missing bound before any state is touched.
pub fn require_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> ApiResult<(NaiveDate, NaiveDate)> {
    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(ApiError::InvalidRange(format!(
            "both start and end are required (start={:?}, end={:?})",
            start, end
        ))),
    }
}
