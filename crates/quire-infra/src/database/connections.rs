#[cfg(feature = "database")]
use std::time::Duration;

#[cfg(feature = "database")]
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr};

/// Configuration for the posts database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Whether the URL points at a private in-memory SQLite database.
    ///
    /// Every pooled connection to such a URL opens its own empty database,
    /// so the pool has to be pinned to a single connection.
    pub fn is_sqlite_memory(&self) -> bool {
        self.url.starts_with("sqlite:") && self.url.contains(":memory:")
    }
}

/// Open the connection pool described by `config`.
#[cfg(feature = "database")]
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!("Initializing database connection...");

    let (max, min) = if config.is_sqlite_memory() {
        (1, 1)
    } else {
        (config.max_connections, config.min_connections)
    };

    let opts = ConnectOptions::new(&config.url)
        .max_connections(max)
        .min_connections(min)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .to_owned();

    let conn = Database::connect(opts).await?;
    tracing::info!(
        backend = ?conn.get_database_backend(),
        "Database connected (pool: {})",
        max
    );

    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            max_connections: 100,
            min_connections: 10,
        }
    }

    #[test]
    fn detects_in_memory_sqlite() {
        assert!(config("sqlite::memory:").is_sqlite_memory());
        assert!(!config("sqlite://posts.db").is_sqlite_memory());
        assert!(!config("postgres://localhost/posts").is_sqlite_memory());
    }
}
