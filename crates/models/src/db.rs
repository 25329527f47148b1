use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::errors::ModelError;

/// Open a pooled connection to `url` with the pool settings of `cfg`.
pub async fn connect_url(url: &str, cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let mut opts = ConnectOptions::new(url.to_string());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    // each in-memory SQLite connection is its own database
    if is_sqlite_memory(url) {
        opts.max_connections(1).min_connections(1);
    }
    let db = Database::connect(opts).await.map_err(|e| ModelError::Db(e.to_string()))?;
    info!(event = "db_connected", backend = ?db.get_database_backend(), "database connection established");
    Ok(db)
}

fn is_sqlite_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}

/// Database name for display: last path segment of the URL, or the SQLite file stem.
pub fn database_name_from_url(url: &str) -> Option<String> {
    if let Some(rest) = url.strip_prefix("sqlite:") {
        if rest.contains(":memory:") {
            return Some("memory".into());
        }
        let path = rest.trim_start_matches("//").split('?').next().unwrap_or_default();
        return std::path::Path::new(path)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty());
    }
    let parsed = url::Url::parse(url).ok()?;
    let seg = parsed.path().trim_start_matches('/');
    if seg.is_empty() {
        parsed.host_str().map(str::to_string)
    } else {
        Some(seg.to_string())
    }
}
