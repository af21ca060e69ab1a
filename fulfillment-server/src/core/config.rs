use std::path::PathBuf;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | WORK_DIR | ./work_dir | Database and log files |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | CARRIER_API_URL | https://api.dpd.lt/v1 | Carrier shipment API base URL |
/// | CARRIER_API_USER | (unset) | Carrier account user |
/// | CARRIER_API_PASS | (unset) | Carrier account password |
/// | LABEL_TIMEOUT_MS | 15000 | Timeout for one label registration call |
/// | REQUEST_TIMEOUT_MS | 30000 | HTTP request timeout |
///
/// Without carrier credentials the server falls back to the offline label
/// stub, which keeps local development working end to end.
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the order database and logs
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Running environment: development | staging | production
    pub environment: String,
    /// Carrier shipment API base URL
    pub carrier_api_url: String,
    /// Carrier account user (stub generator when unset)
    pub carrier_api_user: Option<String>,
    /// Carrier account password
    pub carrier_api_pass: Option<String>,
    /// Timeout for a single label registration call (milliseconds)
    pub label_timeout_ms: u64,
    /// HTTP request timeout (milliseconds)
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, using defaults for
    /// anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./work_dir".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            carrier_api_url: std::env::var("CARRIER_API_URL")
                .unwrap_or_else(|_| "https://api.dpd.lt/v1".into()),
            carrier_api_user: std::env::var("CARRIER_API_USER").ok(),
            carrier_api_pass: std::env::var("CARRIER_API_PASS").ok(),
            label_timeout_ms: std::env::var("LABEL_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(15_000),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30_000),
        }
    }

    /// Path of the order database file
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("orders.redb")
    }

    /// Directory for rotating log files
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
