//! Server configuration
//!
//! All values can be overridden through environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | HTTP_PORT | 3000 | HTTP listen port |
//! | DATABASE_PATH | casina.db | SQLite database file |
//! | CATALOG_PATH | (bundled) | Optional JSON product catalog |
//! | MAIL_API_URL | https://api.resend.com | Email provider base URL |
//! | MAIL_API_KEY | (empty) | Email provider API key |
//! | MAIL_FROM | Casina Farms <orders@casinafarms.com> | Invoice sender |
//! | MAIL_TIMEOUT_MS | 30000 | Outbound email request timeout |
//! | ENVIRONMENT | development | development \| staging \| production |

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listen port
    pub http_port: u16,
    /// SQLite database file path
    pub database_path: String,
    /// Optional JSON file overriding the bundled product catalog
    pub catalog_path: Option<String>,
    /// Email provider base URL (Resend-compatible)
    pub mail_api_url: String,
    /// Email provider API key; invoice dispatch fails cleanly when blank
    pub mail_api_key: String,
    /// From address on outgoing invoices
    pub mail_from: String,
    /// Timeout for the invoice email request (milliseconds)
    pub mail_timeout_ms: u64,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "casina.db".into()),
            catalog_path: std::env::var("CATALOG_PATH").ok(),
            mail_api_url: std::env::var("MAIL_API_URL")
                .unwrap_or_else(|_| "https://api.resend.com".into()),
            mail_api_key: std::env::var("MAIL_API_KEY").unwrap_or_default(),
            mail_from: std::env::var("MAIL_FROM")
                .unwrap_or_else(|_| "Casina Farms <orders@casinafarms.com>".into()),
            mail_timeout_ms: std::env::var("MAIL_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30_000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
