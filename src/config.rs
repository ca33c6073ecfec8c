use anyhow::{bail, Context, Result};
use std::str::FromStr;

use crate::modules::gallery::adapter::outgoing::GcsBlobStoreConfig;
use crate::modules::gallery::application::ports::outgoing::MediaNamespaces;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";

/// Process configuration, read once at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub blob_store: GcsBlobStoreConfig,
    pub namespaces: MediaNamespaces,
    /// Per-file limit for multipart uploads.
    pub max_upload_bytes: usize,
    pub allowed_origins: Vec<String>,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Blank values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| get(key).with_context(|| format!("{key} is not set"));

        let database_url = required("DATABASE_URL")?;
        let bucket = required("GCS_BUCKET")?;

        let mut blob_store = GcsBlobStoreConfig::new(bucket);
        if let Some(base) = get("MEDIA_PUBLIC_BASE_URL") {
            blob_store.public_base_url = base;
        }

        let defaults = MediaNamespaces::default();
        let namespaces = MediaNamespaces {
            image: get("GALLERY_IMAGE_NAMESPACE").unwrap_or(defaults.image),
            video: get("GALLERY_VIDEO_NAMESPACE").unwrap_or(defaults.video),
        };
        if namespaces.image == namespaces.video {
            bail!("GALLERY_IMAGE_NAMESPACE and GALLERY_VIDEO_NAMESPACE must differ");
        }

        let db_max_connections = parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", 50)?;
        let db_min_connections = parse_or(get("DB_MIN_CONNECTIONS"), "DB_MIN_CONNECTIONS", 10)?;
        if db_min_connections > db_max_connections {
            bail!("DB_MIN_CONNECTIONS must not exceed DB_MAX_CONNECTIONS");
        }

        let max_upload_bytes = parse_or(
            get("MAX_UPLOAD_BYTES"),
            "MAX_UPLOAD_BYTES",
            DEFAULT_MAX_UPLOAD_BYTES,
        )?;
        if max_upload_bytes == 0 {
            bail!("MAX_UPLOAD_BYTES must be positive");
        }

        let allowed_origins = get("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(get("PORT"), "PORT", DEFAULT_PORT)?,
            database_url,
            db_max_connections,
            db_min_connections,
            blob_store,
            namespaces,
            max_upload_bytes,
            allowed_origins,
            run_migrations: parse_flag(get("RUN_MIGRATIONS"), "RUN_MIGRATIONS")?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {value}")),
        None => Ok(default),
    }
}

fn parse_flag(raw: Option<String>, key: &str) -> Result<bool> {
    match raw.as_deref().map(str::trim) {
        None => Ok(false),
        Some("1") | Some("true") | Some("yes") => Ok(true),
        Some("0") | Some("false") | Some("no") => Ok(false),
        Some(other) => bail!("{key} has an invalid value: {other}"),
    }
}
