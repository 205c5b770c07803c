use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workaday::api::{build_router, AppState};
use workaday::bootstrap;
use workaday::config::Config;
use workaday::database::Database;
use workaday::services::DbCatalog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workaday=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Initialize database connection
    sqlx::any::install_default_drivers();
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connection established");

    // Run migrations
    db.run_migrations().await?;
    tracing::info!("Database migrations applied");

    // The store-backed catalog is the production variant
    let catalog = Arc::new(DbCatalog::new(Arc::new(db)));

    // Install configured holidays
    if let Err(e) = bootstrap::seed_holidays(catalog.as_ref(), &config).await {
        tracing::error!("Failed to seed holidays: {}", e);
        return Err(Box::new(e) as Box<dyn std::error::Error>);
    }

    // Build router
    let state = AppState { catalog };
    let app = build_router(state);

    // Start server
    let addr: SocketAddr = config.server_address().parse()?;
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
