/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. Without
/// `DATABASE_URL` the server still starts, but answers every request with
/// `500 Database not configured`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Largest accepted request body in bytes (default: `104857600`, 100 MiB).
    pub max_body_bytes: usize,
    /// PostgreSQL connection string. `None` when unset or empty.
    pub database_url: Option<String>,
    /// Maximum pool size (default: `20`).
    pub db_max_connections: u32,
    /// Apply embedded migrations on startup (default: `true`).
    pub run_migrations: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MAX_BODY_BYTES`       | `104857600`                |
    /// | `DATABASE_URL`         | unset                      |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    /// | `RUN_MIGRATIONS`       | `true`                     |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Panics on unparseable values so misconfiguration fails at startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let host = var("HOST", "0.0.0.0");

        let port: u16 = var("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_body_bytes: usize = var("MAX_BODY_BYTES", "104857600")
            .parse()
            .expect("MAX_BODY_BYTES must be a valid usize");

        let database_url = lookup("DATABASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let db_max_connections: u32 = var("DB_MAX_CONNECTIONS", "20")
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let run_migrations = match var("RUN_MIGRATIONS", "true").to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            other => panic!("RUN_MIGRATIONS must be a boolean, got '{other}'"),
        };

        Self {
            host,
            port,
            request_timeout_secs,
            max_body_bytes,
            database_url,
            db_max_connections,
            run_migrations,
        }
    }
}
