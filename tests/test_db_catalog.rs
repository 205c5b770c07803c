mod helpers;

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use helpers::*;
use workaday::api::middleware::ApiError;
use workaday::models::{Holiday, HolidayCategory};
use workaday::services::{DbCatalog, HolidayCatalog};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn temp_json_path(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!("workaday_{}_{}.json", label, uuid::Uuid::new_v4()))
}

async fn setup_catalog() -> DbCatalog {
    DbCatalog::new(Arc::new(setup_test_db().await))
}

#[tokio::test]
async fn add_assigns_a_store_id() {
    let catalog = setup_catalog().await;

    assert!(catalog.add_date(date(2000, 1, 4)).await.unwrap());

    let index = catalog.holidays().await.unwrap();
    let records = index.records_for(date(2000, 1, 4));
    assert_eq!(records.len(), 1);
    assert!(records[0].id.is_some());
    assert_eq!(records[0].name, "2000-01-04");
    assert_eq!(records[0].category, HolidayCategory::Custom);
}

#[tokio::test]
async fn duplicate_insert_fails_with_already_exists() {
    let catalog = setup_catalog().await;

    assert!(catalog.add_date(date(2000, 1, 4)).await.unwrap());
    let second = catalog.add_date(date(2000, 1, 4)).await;
    assert!(matches!(second, Err(ApiError::AlreadyExists(_))));

    // The store is unchanged by the rejected insert.
    let index = catalog.holidays().await.unwrap();
    assert_eq!(index.records_for(date(2000, 1, 4)).len(), 1);
}

#[tokio::test]
async fn same_date_different_identity_is_not_a_duplicate() {
    let catalog = setup_catalog().await;
    let d = date(2020, 1, 1);

    catalog
        .add_holiday(Holiday::new(d, "New Year".into(), HolidayCategory::Government))
        .await
        .unwrap();
    catalog
        .add_holiday(Holiday::new(d, "New Year".into(), HolidayCategory::Custom))
        .await
        .unwrap();

    let index = catalog.holidays().await.unwrap();
    assert_eq!(index.records_for(d).len(), 2);
}

#[tokio::test]
async fn range_insert_creates_one_record_per_day() {
    let catalog = setup_catalog().await;

    catalog
        .add_holidays_between(date(2000, 1, 1), date(2000, 1, 3))
        .await
        .unwrap();

    let index = catalog.holidays().await.unwrap();
    assert_eq!(index.len(), 3);
}

#[tokio::test]
async fn a_duplicate_anywhere_aborts_the_whole_range() {
    let catalog = setup_catalog().await;

    // The middle day of the range already exists.
    catalog.add_date(date(2000, 1, 2)).await.unwrap();

    let result = catalog
        .add_holidays_between(date(2000, 1, 1), date(2000, 1, 3))
        .await;
    assert!(matches!(result, Err(ApiError::AlreadyExists(_))));

    // Nothing from the batch was written.
    let index = catalog.holidays().await.unwrap();
    assert_eq!(index.len(), 1);
    assert!(index.contains(date(2000, 1, 2)));
}

#[tokio::test]
async fn counting_uses_the_stored_holidays() {
    let catalog = setup_catalog().await;
    catalog.add_date(date(2022, 7, 1)).await.unwrap();

    assert_eq!(
        catalog
            .count_working_days_between(date(2022, 6, 27), date(2022, 7, 4))
            .await
            .unwrap(),
        5
    );
}

#[tokio::test]
async fn weekend_singles_count_zero() {
    let catalog = setup_catalog().await;

    let saturday = date(2000, 1, 1);
    let sunday = date(2000, 1, 2);
    assert_eq!(
        catalog
            .count_working_days_between(saturday, saturday)
            .await
            .unwrap(),
        0
    );
    assert_eq!(
        catalog
            .count_working_days_between(sunday, sunday)
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn update_persists_to_the_store() {
    let catalog = setup_catalog().await;
    catalog.add_date(date(2000, 1, 4)).await.unwrap();

    let id = catalog.holidays().await.unwrap().records_for(date(2000, 1, 4))[0]
        .id
        .unwrap();

    let updated = catalog
        .update_holiday(id, None, Some("Company Day".into()), None)
        .await
        .unwrap();
    assert_eq!(updated.name, "Company Day");
    assert_eq!(updated.date, date(2000, 1, 4));

    // A fresh read sees the change, so the update really was committed.
    let index = catalog.holidays().await.unwrap();
    assert_eq!(index.records_for(date(2000, 1, 4))[0].name, "Company Day");
}

#[tokio::test]
async fn update_and_delete_reject_unknown_ids() {
    let catalog = setup_catalog().await;

    let update = catalog.update_holiday(404, None, Some("x".into()), None).await;
    assert!(matches!(update, Err(ApiError::NotFound(_))));

    let delete = catalog.delete_holiday(404).await;
    assert!(matches!(delete, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn delete_removes_the_stored_record() {
    let catalog = setup_catalog().await;
    catalog.add_date(date(2000, 1, 4)).await.unwrap();

    let id = catalog.holidays().await.unwrap().records_for(date(2000, 1, 4))[0]
        .id
        .unwrap();
    catalog.delete_holiday(id).await.unwrap();

    assert!(catalog.holidays().await.unwrap().is_empty());
}

#[tokio::test]
async fn export_is_date_ascending() {
    let catalog = setup_catalog().await;
    let path = temp_json_path("db_export");

    catalog.add_date(date(2021, 6, 1)).await.unwrap();
    catalog.add_date(date(2019, 6, 1)).await.unwrap();
    catalog.add_date(date(2020, 6, 1)).await.unwrap();

    catalog.export_to_json(&path).await.unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let exported: Vec<Holiday> = serde_json::from_str(&content).unwrap();
    let dates: Vec<NaiveDate> = exported.iter().map(|h| h.date).collect();
    assert_eq!(
        dates,
        [date(2019, 6, 1), date(2020, 6, 1), date(2021, 6, 1)]
    );

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn import_checks_the_store_before_writing() {
    let catalog = setup_catalog().await;
    let path = temp_json_path("db_import");

    let file_holidays = vec![
        Holiday::new(date(2020, 1, 1), "CUSTOM0".into(), HolidayCategory::Custom),
        Holiday::new(date(2020, 1, 4), "2020-01-04".into(), HolidayCategory::Custom),
    ];
    std::fs::write(&path, serde_json::to_string_pretty(&file_holidays).unwrap()).unwrap();

    catalog.import_from_json(&path).await.unwrap();
    assert_eq!(catalog.holidays().await.unwrap().len(), 2);

    // A second import of the same file is a whole-batch duplicate.
    let again = catalog.import_from_json(&path).await;
    assert!(matches!(again, Err(ApiError::AlreadyExists(_))));
    assert_eq!(catalog.holidays().await.unwrap().len(), 2);

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn clear_empties_the_store() {
    let catalog = setup_catalog().await;
    catalog
        .add_holidays_between(date(2000, 1, 1), date(2000, 1, 3))
        .await
        .unwrap();

    catalog.clear().await.unwrap();

    assert!(catalog.holidays().await.unwrap().is_empty());
}
