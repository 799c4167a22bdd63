/// Fallback store used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";

/// Blog service configuration loaded from environment variables.
#[derive(Debug)]
pub struct BlogConfig {
    /// Store connection URL (PostgreSQL or SQLite). Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3000). Env var: `PORT`.
    pub port: u16,
}

impl BlogConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("PORT").ok(),
        )
    }

    fn from_vars(database_url: Option<String>, port: Option<String>) -> Self {
        Self {
            database_url: database_url
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()),
            port: port.and_then(|v| v.parse().ok()).unwrap_or(3000),
        }
    }

    pub fn http_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
