use std::path::PathBuf;
use std::str::FromStr;

use shared::AppError;

/// Geocoding providers the store can talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeocoderProvider {
    MapQuest,
}

impl FromStr for GeocoderProvider {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mapquest" => Ok(Self::MapQuest),
            other => Err(AppError::config(format!(
                "Unsupported geocoder provider: {other}"
            ))),
        }
    }
}

/// Geocoding client configuration
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub provider: GeocoderProvider,
    pub api_key: String,
    /// Provider endpoint root, without trailing path
    pub base_url: String,
    /// HTTP request timeout (milliseconds)
    pub timeout_ms: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            provider: GeocoderProvider::MapQuest,
            api_key: String::new(),
            base_url: "https://www.mapquestapi.com".into(),
            timeout_ms: 10_000,
        }
    }
}

/// Store configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | database and log root |
/// | DB_NAMESPACE | directory | database namespace |
/// | DB_NAME | restaurants | database name |
/// | GEOCODER_PROVIDER | mapquest | geocoder provider |
/// | GEOCODER_API_KEY | (empty) | provider API key |
/// | GEOCODER_BASE_URL | https://www.mapquestapi.com | provider endpoint root |
/// | GEOCODER_TIMEOUT_MS | 10000 | HTTP timeout |
/// | LOG_LEVEL | info | tracing level |
/// | ENVIRONMENT | development | runtime environment |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/var/lib/directory GEOCODER_API_KEY=xxx cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Root for the database files and logs
    pub work_dir: String,
    pub db_namespace: String,
    pub db_name: String,
    pub geocoder: GeocoderConfig,
    pub log_level: String,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load `.env` (if present) and then read the environment
    pub fn load() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Read configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = GeocoderConfig::default();
        let provider = match std::env::var("GEOCODER_PROVIDER") {
            Ok(value) => value.parse()?,
            Err(_) => defaults.provider,
        };

        Ok(Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "directory".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "restaurants".into()),
            geocoder: GeocoderConfig {
                provider,
                api_key: std::env::var("GEOCODER_API_KEY").unwrap_or_default(),
                base_url: std::env::var("GEOCODER_BASE_URL").unwrap_or(defaults.base_url),
                timeout_ms: std::env::var("GEOCODER_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.timeout_ms),
            },
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        })
    }

    /// Override the work directory, keeping everything else
    ///
    /// Used by tests
    pub fn with_work_dir(mut self, work_dir: impl Into<String>) -> Self {
        self.work_dir = work_dir.into();
        self
    }

    /// On-disk database location
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("db")
    }

    /// Log directory
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: "./data".into(),
            db_namespace: "directory".into(),
            db_name: "restaurants".into(),
            geocoder: GeocoderConfig::default(),
            log_level: "info".into(),
            environment: "development".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_provider_parse() {
        assert_eq!(
            "MapQuest".parse::<GeocoderProvider>().unwrap(),
            GeocoderProvider::MapQuest
        );
        let err = "google".parse::<GeocoderProvider>().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_paths_follow_work_dir() {
        let config = Config::default().with_work_dir("/tmp/directory");
        assert_eq!(config.database_path(), PathBuf::from("/tmp/directory/db"));
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/directory/logs"));
        assert!(config.is_development());
    }
}
