use shared::pricing::QuantityMode;

/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment; unset or unparsable
/// values fall back to the defaults below.
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./data | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP port |
/// | DATABASE_URL | sqlite:{WORK_DIR}/catering.db | SQLite URL |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Default log filter |
/// | LOG_DIR | {WORK_DIR}/logs | Rolling log file directory |
/// | REQUEST_TIMEOUT_MS | 30000 | Per-request timeout |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | Graceful shutdown timeout |
/// | DEFAULT_QUANTITY_MODE | per_guest | Quantity convention when a request omits it |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/catering HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database and log files
    pub work_dir: String,
    pub http_port: u16,
    pub database_url: String,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: String,
    pub request_timeout_ms: u64,
    pub shutdown_timeout_ms: u64,
    pub default_quantity_mode: QuantityMode,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| format!("sqlite:{work_dir}/catering.db")),
            log_dir: std::env::var("LOG_DIR").unwrap_or_else(|_| format!("{work_dir}/logs")),
            http_port: parse_env("HTTP_PORT").unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            request_timeout_ms: parse_env("REQUEST_TIMEOUT_MS").unwrap_or(30000),
            shutdown_timeout_ms: parse_env("SHUTDOWN_TIMEOUT_MS").unwrap_or(10000),
            default_quantity_mode: parse_env("DEFAULT_QUANTITY_MODE").unwrap_or_default(),
            work_dir,
        }
    }

    /// In-memory database configuration, for tests
    pub fn in_memory() -> Self {
        Self {
            work_dir: std::env::temp_dir().to_string_lossy().into_owned(),
            http_port: 0,
            database_url: "sqlite::memory:".into(),
            environment: "test".into(),
            log_level: "debug".into(),
            log_dir: String::new(),
            request_timeout_ms: 30000,
            shutdown_timeout_ms: 1000,
            default_quantity_mode: QuantityMode::default(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
