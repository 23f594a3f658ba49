//! Database connection setup for the server binary.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use runtime::DatabaseConfig;
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, SqlxSqliteConnector};
use url::Url;

pub const MEMORY_DSN: &str = "sqlite::memory:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

#[derive(Debug, Clone)]
pub struct ConnectOpts {
    pub max_conns: u32,
    pub acquire_timeout: Duration,
    pub sqlite_busy_timeout: Duration,
}

impl Default for ConnectOpts {
    fn default() -> Self {
        Self {
            max_conns: 10,
            acquire_timeout: Duration::from_secs(5),
            sqlite_busy_timeout: Duration::from_millis(5000),
        }
    }
}

impl From<&DatabaseConfig> for ConnectOpts {
    fn from(cfg: &DatabaseConfig) -> Self {
        let defaults = Self::default();
        Self {
            max_conns: cfg.max_conns.unwrap_or(defaults.max_conns),
            sqlite_busy_timeout: cfg
                .busy_timeout_ms
                .map(|ms| Duration::from_millis(u64::from(ms)))
                .unwrap_or(defaults.sqlite_busy_timeout),
            ..defaults
        }
    }
}

/// Detect DB backend from URL scheme.
pub fn detect_from_dsn(dsn: &str) -> Result<Backend> {
    let raw = dsn.trim();
    if raw.is_empty() {
        return Err(anyhow!("Database URL not configured"));
    }

    let url = Url::parse(raw).map_err(|e| anyhow!("Invalid database DSN '{}': {}", raw, e))?;

    match url.scheme() {
        "sqlite" | "sqlite3" => Ok(Backend::Sqlite),
        "postgres" | "postgresql" => Ok(Backend::Postgres),
        other => Err(anyhow!("Unsupported database type: {}", other)),
    }
}

/// DSN safe for logs: any password in the URL is removed.
pub fn redact_dsn(dsn: &str) -> String {
    match Url::parse(dsn.trim()) {
        Ok(mut url) if url.password().is_some() => match url.set_password(None) {
            Ok(()) => url.to_string(),
            Err(()) => "<redacted>".to_string(),
        },
        _ => dsn.to_string(),
    }
}

fn is_memory_dsn(dsn: &str) -> bool {
    dsn.eq_ignore_ascii_case("sqlite::memory:") || dsn.eq_ignore_ascii_case("sqlite://:memory:")
}

/// Expand a sqlite DSN into an absolute-path DSN using a base directory.
/// - Keeps "sqlite::memory:" as-is.
/// - Normalizes backslashes into forward slashes (important on Windows).
pub fn absolutize_sqlite_dsn(dsn: &str, base_dir: &Path, create_dirs: bool) -> Result<String> {
    if is_memory_dsn(dsn) {
        return Ok(MEMORY_DSN.to_string());
    }
    let db_path = dsn
        .strip_prefix("sqlite://")
        .ok_or_else(|| anyhow!("DSN must start with sqlite:// (got: {})", dsn))?;

    let (path_str, query) = match db_path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (db_path, None),
    };

    let mut p = PathBuf::from(path_str);
    if p.as_os_str().is_empty() {
        return Err(anyhow!("Empty SQLite path in DSN"));
    }
    if p.is_relative() {
        p = base_dir.join(p);
    }

    if let Some(dir) = p.parent() {
        if create_dirs {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
    }

    let mut out = String::from("sqlite://");
    out.push_str(&p.to_string_lossy().replace('\\', "/"));
    if let Some(q) = query {
        out.push('?');
        out.push_str(q);
    }
    Ok(out)
}

/// Open a connection pool for `dsn`. SQLite files are created when missing.
pub async fn connect(dsn: &str, opts: &ConnectOpts) -> Result<DatabaseConnection> {
    match detect_from_dsn(dsn)? {
        Backend::Sqlite => connect_sqlite(dsn, opts).await,
        Backend::Postgres => {
            let mut options = ConnectOptions::new(dsn.to_owned());
            options
                .max_connections(opts.max_conns)
                .acquire_timeout(opts.acquire_timeout)
                .sqlx_logging(false);
            Database::connect(options)
                .await
                .context("Failed to connect to PostgreSQL")
        }
    }
}

async fn connect_sqlite(dsn: &str, opts: &ConnectOpts) -> Result<DatabaseConnection> {
    let memory = is_memory_dsn(dsn);
    let dsn = if memory { MEMORY_DSN } else { dsn };

    let connect_options = SqliteConnectOptions::from_str(dsn)
        .with_context(|| format!("Invalid SQLite DSN '{dsn}'"))?
        .create_if_missing(true)
        .busy_timeout(opts.sqlite_busy_timeout);

    // An in-memory database lives only as long as its single connection
    let pool_options = if memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(opts.max_conns)
    };

    let pool = pool_options
        .acquire_timeout(opts.acquire_timeout)
        .connect_with(connect_options)
        .await
        .context("Failed to open SQLite database")?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}
