use workaday::database::Database;

pub async fn setup_test_db() -> Database {
    // Install drivers for AnyPool (required for tests)
    sqlx::any::install_default_drivers();

    // Use file-based SQLite for tests (unique UUID per test for parallel execution)
    use uuid::Uuid;
    let temp_file = format!("test_{}.db", Uuid::new_v4());
    let db_url = format!("sqlite://{}?mode=rwc", temp_file);

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    setup_schema(&db).await;

    db
}

async fn setup_schema(db: &Database) {
    let pool = db.pool();

    sqlx::query(
        "CREATE TABLE holidays (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            name TEXT NOT NULL,
            category TEXT NOT NULL CHECK(category IN ('GOVERNMENT', 'CUSTOM', 'OTHER'))
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create holidays table");

    sqlx::query("CREATE INDEX idx_holidays_date ON holidays(date)")
        .execute(pool)
        .await
        .ok();

    sqlx::query(
        "CREATE UNIQUE INDEX idx_holidays_identity ON holidays(date, name, category)",
    )
    .execute(pool)
    .await
    .expect("Failed to create holiday identity index");
}

pub async fn teardown_test_db(db: Database) {
    // Close the connection
    drop(db);
    // Note: Test database files will be cleaned up manually or by .gitignore
}
