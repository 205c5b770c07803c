use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Classification tag carried on every holiday record. It participates in
/// record identity but has no effect on working-day computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HolidayCategory {
    Government,
    Custom,
    Other,
}

impl HolidayCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayCategory::Government => "GOVERNMENT",
            HolidayCategory::Custom => "CUSTOM",
            HolidayCategory::Other => "OTHER",
        }
    }
}

impl fmt::Display for HolidayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HolidayCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GOVERNMENT" => Ok(HolidayCategory::Government),
            "CUSTOM" => Ok(HolidayCategory::Custom),
            "OTHER" => Ok(HolidayCategory::Other),
            other => Err(format!("unknown holiday category '{}'", other)),
        }
    }
}

/// One holiday record.
///
/// `id` is `None` until the record is assigned one, either synthetically by
/// the in-memory index or by the backing store on insert. Two records are
/// equal iff `date`, `name` and `category` all match; `id` is deliberately
/// excluded so the same logical holiday inserted twice is a duplicate no
/// matter which id it carries.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Holiday {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub name: String,
    pub category: HolidayCategory,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: String, category: HolidayCategory) -> Self {
        Self {
            id: None,
            date,
            name,
            category,
        }
    }

    /// Single-date convenience: a CUSTOM holiday named after its own date.
    pub fn for_date(date: NaiveDate) -> Self {
        Self::new(date, date.to_string(), HolidayCategory::Custom)
    }
}

impl PartialEq for Holiday {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.name == other.name && self.category == other.category
    }
}

/// DTO for creating a holiday. `name` and `category` fall back to the
/// single-date convenience defaults when omitted.
#[derive(Debug, Deserialize)]
pub struct CreateHolidayRequest {
    pub date: Option<NaiveDate>,
    pub name: Option<String>,
    pub category: Option<HolidayCategory>,
}

/// DTO for partially updating a holiday; only the present fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateHolidayRequest {
    pub date: Option<NaiveDate>,
    pub name: Option<String>,
    pub category: Option<HolidayCategory>,
}

/// DTO for holiday list response
#[derive(Debug, Serialize)]
pub struct HolidayListResponse {
    pub holidays: Vec<Holiday>,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct AddHolidayResponse {
    pub added: bool,
}

#[derive(Debug, Serialize)]
pub struct WorkdayCountResponse {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub working_days: i64,
}
