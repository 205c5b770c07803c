use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::models::HolidayCategory;

/// One holiday to install at startup, parsed from the `HOLIDAY_SEED`
/// environment variable.
#[derive(Clone, Debug)]
pub struct SeedHoliday {
    pub name: String,
    pub category: HolidayCategory,
    pub date: NaiveDate,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub seed_holidays: Vec<SeedHoliday>,
    pub seed_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://workaday.db?mode=rwc".to_string());

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let seed_holidays = match env::var("HOLIDAY_SEED") {
            Ok(raw) => parse_seed_entries(&raw)?,
            Err(_) => Vec::new(),
        };

        let seed_file = env::var("HOLIDAY_SEED_FILE").ok().map(PathBuf::from);

        Ok(Config {
            database_url,
            server_host,
            server_port,
            seed_holidays,
            seed_file,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Parse `name,CATEGORY,yyyy-mm-dd` triples separated by semicolons.
fn parse_seed_entries(raw: &str) -> Result<Vec<SeedHoliday>, ConfigError> {
    let mut entries = Vec::new();

    for entry in raw.split(';').filter(|e| !e.trim().is_empty()) {
        let parts: Vec<&str> = entry.splitn(3, ',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ConfigError::InvalidSeedEntry(entry.to_string()));
        }

        let category = parts[1]
            .parse::<HolidayCategory>()
            .map_err(|_| ConfigError::InvalidSeedEntry(entry.to_string()))?;
        let date = parts[2]
            .parse::<NaiveDate>()
            .map_err(|_| ConfigError::InvalidSeedEntry(entry.to_string()))?;

        entries.push(SeedHoliday {
            name: parts[0].to_string(),
            category,
            date,
        });
    }

    Ok(entries)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid HOLIDAY_SEED entry '{0}', expected name,CATEGORY,yyyy-mm-dd")]
    InvalidSeedEntry(String),
}
