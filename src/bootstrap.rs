use tracing::{info, warn};

use crate::api::middleware::error::{ApiError, ApiResult};
use crate::config::Config;
use crate::models::Holiday;
use crate::services::HolidayCatalog;

/// Install the configured holidays at startup.
///
/// Seed entries and the optional seed file go through the ordinary catalog
/// operations; duplicates from a previous run are logged and skipped so a
/// restart is idempotent.
pub async fn seed_holidays(catalog: &dyn HolidayCatalog, config: &Config) -> ApiResult<()> {
    for seed in &config.seed_holidays {
        let holiday = Holiday::new(seed.date, seed.name.clone(), seed.category);
        match catalog.add_holiday(holiday).await {
            Ok(true) => info!("Seeded holiday: {} ({})", seed.name, seed.date),
            Ok(false) => warn!("Seed holiday already present: {} ({})", seed.name, seed.date),
            Err(ApiError::AlreadyExists(_)) => {
                warn!("Seed holiday already present: {} ({})", seed.name, seed.date)
            }
            Err(e) => return Err(e),
        }
    }

    if let Some(path) = &config.seed_file {
        match catalog.import_from_json(path).await {
            Ok(()) => info!("Seeded holidays from {}", path.display()),
            Err(ApiError::AlreadyExists(_)) => {
                warn!("Seed file {} already imported, skipping", path.display())
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
